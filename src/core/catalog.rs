//! Seed data. Every call builds a fresh catalog with fresh ids; pages take
//! their own copy when they are opened.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::activity::{Activity, ActivityKind};
use super::analytics::{StatCard, Trend};
use super::appointment::{Appointment, AppointmentKind};
use super::calendar::TimeOfDay;
use super::mail::{InboxMessage, Sender};
use super::patient::{Gender, Patient, PatientStatus};
use super::task::{Priority, Task, TaskStatus};
use super::trash::{ItemKind, TrashedItem};

/// People a new task can be assigned to.
pub const ASSIGNEES: &[&str] = &["Dr. Ali", "Dr. Neha", "Head Nurse"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn inbox_messages() -> Vec<InboxMessage> {
    let ali = || Sender::new("Dr. Ali", "Cardiologist");
    let neha = || Sender::new("Dr. Neha", "Neurologist");
    vec![
        InboxMessage::new(
            ali(),
            "Patient Rounds",
            "Please look into vital signs of patient 'Thomas'...",
            TimeOfDay::at(16, 0),
        )
        .high_priority(),
        InboxMessage::new(
            neha(),
            "Medication Administration",
            "Please look into prescription for patient 'Sarah'...",
            TimeOfDay::at(14, 0),
        ),
        InboxMessage::new(
            Sender::new("Head Nurse", "Nursing Staff"),
            "Follow-up Appointments",
            "This is the follow-up log for the...",
            TimeOfDay::at(15, 0),
        )
        .mark_read(),
        InboxMessage::new(
            Sender::new("Ward Boy", "Support Staff"),
            "Laboratory test results review",
            "Please look into the latest results...",
            TimeOfDay::at(16, 21),
        )
        .high_priority(),
        InboxMessage::new(
            ali(),
            "Patient Rounds",
            "Please look into vital signs of patient 'John'...",
            TimeOfDay::at(13, 0),
        )
        .mark_read(),
        InboxMessage::new(
            neha(),
            "Medication Administration",
            "Please look into prescription dosage...",
            TimeOfDay::at(10, 0),
        ),
    ]
}

pub fn important_tasks() -> Vec<Task> {
    vec![
        Task::new("Critical Patient Review")
            .with_description("Review urgent case for patient with complications")
            .with_priority(Priority::High)
            .with_due(date(2024, 8, 24))
            .starred(),
        Task::new("Surgery Preparation")
            .with_description("Prepare documents and schedule for upcoming surgery")
            .with_priority(Priority::High)
            .with_due(date(2024, 8, 25))
            .with_status(TaskStatus::InProgress)
            .starred(),
        Task::new("Research Paper Deadline")
            .with_description("Submit medical research paper to journal")
            .with_priority(Priority::Medium)
            .with_due(date(2024, 8, 26))
            .with_status(TaskStatus::Completed)
            .starred(),
        Task::new("Review New Protocol")
            .with_description("Read and understand the new hospital protocol")
            .with_priority(Priority::Low)
            .with_due(date(2024, 8, 27))
            .starred(),
        Task::new("Follow Up with Dr. Jones")
            .with_description("Discuss patient case with Dr. Jones")
            .with_priority(Priority::High)
            .with_due(date(2024, 8, 28))
            .starred(),
    ]
}

/// "Recently Assigned Tasks" on the dashboard, due around `today`.
pub fn dashboard_tasks(today: NaiveDate) -> Vec<Task> {
    vec![
        Task::new("Patient Rounds")
            .with_status(TaskStatus::InProgress)
            .with_priority(Priority::High)
            .with_assignee("Dr. Ali")
            .with_due(today),
        Task::new("Laboratory test results review")
            .with_priority(Priority::Medium)
            .with_assignee("Dr. Sarah")
            .with_due(today + Duration::days(1)),
        Task::new("Surgical procedures")
            .with_status(TaskStatus::Completed)
            .with_priority(Priority::High)
            .with_assignee("Dr. Ahmed")
            .with_due(today - Duration::days(1)),
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Dr. Ali",
            "Patient Rounds - Please look into vital signs of patient 'Thomas'",
            "2 min ago",
            ActivityKind::Message,
        )
        .with_role("Cardiologist"),
        Activity::new(
            "Dr. Neha",
            "Medication Administration - New prescription added",
            "10 min ago",
            ActivityKind::Task,
        )
        .with_role("Neurologist"),
        Activity::new(
            "Head Nurse",
            "Follow-up Appointments - Schedule for next week",
            "15 min ago",
            ActivityKind::Appointment,
        )
        .with_role("Nursing Staff"),
        Activity::new(
            "Ward Boy",
            "Laboratory test results review - Report updated",
            "1 hour ago",
            ActivityKind::Update,
        )
        .with_role("Support Staff"),
    ]
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("New Patients", "40", "+5% from last month", Trend::Positive, "contact-new-symbolic"),
        StatCard::new("Repeat Patients", "32", "+2% from last month", Trend::Positive, "system-users-symbolic"),
        StatCard::new("Appointments", "24", "6 today", Trend::Neutral, "x-office-calendar-symbolic"),
        StatCard::new("Performance", "95%", "+12% from last week", Trend::Positive, "utilities-system-monitor-symbolic"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn patient(
    name: &str,
    age: u8,
    gender: Gender,
    email: &str,
    phone: &str,
    address: &str,
    condition: &str,
    status: PatientStatus,
    visits: (NaiveDate, NaiveDate),
) -> Patient {
    Patient {
        id: Uuid::new_v4(),
        name: name.into(),
        age,
        gender,
        email: email.into(),
        phone: phone.into(),
        address: address.into(),
        condition: condition.into(),
        status,
        last_visit: Some(visits.0),
        next_appointment: Some(visits.1),
    }
}

pub fn patients() -> Vec<Patient> {
    vec![
        patient(
            "Amit Sharma",
            45,
            Gender::Male,
            "amit.sharma@gmail.com",
            "+91 98765 43210",
            "12 MG Road, Bengaluru, Karnataka",
            "Hypertension",
            PatientStatus::Active,
            (date(2024, 8, 20), date(2024, 8, 25)),
        ),
        patient(
            "Prachi Jain",
            22,
            Gender::Female,
            "prachi.jain@yahoo.com",
            "+91 91234 56789",
            "22 Nehru Nagar, Mumbai, Maharashtra",
            "Post-Surgery Recovery",
            PatientStatus::Critical,
            (date(2024, 8, 22), date(2024, 8, 24)),
        ),
        patient(
            "Rakesh Kumar",
            58,
            Gender::Male,
            "rakesh.kumar@gmail.com",
            "+91 99887 76655",
            "5 Park Street, Kolkata, West Bengal",
            "Diabetes Management",
            PatientStatus::Stable,
            (date(2024, 8, 18), date(2024, 8, 28)),
        ),
        patient(
            "Sneha Patel",
            28,
            Gender::Female,
            "sneha.patel@hotmail.com",
            "+91 90011 22334",
            "8 CG Road, Ahmedabad, Gujarat",
            "Routine Checkup",
            PatientStatus::Active,
            (date(2024, 8, 19), date(2024, 8, 30)),
        ),
    ]
}

/// Trash contents, with deletion times counted back from `now`.
pub fn trashed_items(now: NaiveDateTime) -> Vec<TrashedItem> {
    let item = |kind, title: &str, description: &str, days_ago, by: &str| TrashedItem {
        id: Uuid::new_v4(),
        kind,
        title: title.into(),
        description: description.into(),
        deleted_at: now - Duration::days(days_ago),
        deleted_by: by.into(),
    };
    vec![
        item(
            ItemKind::Task,
            "Follow up with Patient Martinez",
            "Schedule follow-up appointment after surgery",
            2,
            "Dr. Azmat",
        ),
        item(
            ItemKind::Patient,
            "Robert Wilson",
            "Patient record - moved to archive",
            5,
            "Admin",
        ),
        item(
            ItemKind::Appointment,
            "Consultation - Emma Thompson",
            "Cancelled appointment - patient rescheduled",
            1,
            "Reception",
        ),
        item(
            ItemKind::Document,
            "Lab Results - Test #4567",
            "Duplicate lab results file",
            7,
            "Dr. Smith",
        ),
        item(
            ItemKind::Task,
            "Update Patient Database",
            "System maintenance task - completed",
            3,
            "IT Admin",
        ),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    let appt = |title: &str, time, duration: &str, patient: &str, kind, location: &str, day, starred| Appointment {
        id: Uuid::new_v4(),
        title: title.into(),
        date: date(2025, 8, day),
        time,
        duration: duration.into(),
        patient: patient.into(),
        kind,
        location: location.into(),
        starred,
    };
    vec![
        appt(
            "Patient Consultation",
            TimeOfDay::at(9, 0),
            "30 min",
            "John Smith",
            AppointmentKind::Consultation,
            "Room 201",
            25,
            true,
        ),
        appt(
            "Surgery - Appendectomy",
            TimeOfDay::at(11, 30),
            "2 hours",
            "Sarah Johnson",
            AppointmentKind::Surgery,
            "OR 3",
            25,
            false,
        ),
        appt(
            "Team Meeting",
            TimeOfDay::at(14, 0),
            "1 hour",
            "Medical Team",
            AppointmentKind::Meeting,
            "Conference Room A",
            26,
            true,
        ),
        appt(
            "Lab Results Review",
            TimeOfDay::at(16, 0),
            "45 min",
            "Patient X",
            AppointmentKind::Consultation,
            "Online",
            26,
            false,
        ),
        appt(
            "Follow-up Appointment",
            TimeOfDay::at(10, 0),
            "30 min",
            "Jane Doe",
            AppointmentKind::Consultation,
            "Room 205",
            27,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list_view::ListRecord;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes() {
        assert_eq!(inbox_messages().len(), 6);
        assert_eq!(important_tasks().len(), 5);
        assert_eq!(patients().len(), 4);
        assert_eq!(appointments().len(), 5);
        assert_eq!(recent_activities().len(), 4);
        assert_eq!(dashboard_stats().len(), 4);
    }

    #[test]
    fn ids_are_unique_and_fresh_per_load() {
        let first: HashSet<Uuid> = inbox_messages().iter().map(|m| m.id()).collect();
        assert_eq!(first.len(), 6);
        let second: HashSet<Uuid> = inbox_messages().iter().map(|m| m.id()).collect();
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn important_tasks_are_starred() {
        assert!(important_tasks().iter().all(|t| t.starred));
        assert!(dashboard_tasks(date(2025, 8, 25)).iter().all(|t| !t.starred));
    }

    #[test]
    fn dashboard_tasks_are_due_around_today() {
        let today = date(2025, 8, 25);
        let dues: Vec<Option<NaiveDate>> = dashboard_tasks(today).iter().map(|t| t.due).collect();
        assert_eq!(
            dues,
            vec![Some(today), Some(date(2025, 8, 26)), Some(date(2025, 8, 24))]
        );
    }
}
