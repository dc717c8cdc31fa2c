//! Editable form state and the validation that turns it into records.
//! A failed validation leaves the form untouched so it stays editable.

use chrono::NaiveDate;
use uuid::Uuid;

use super::patient::{Gender, Patient, PatientStatus};
use super::task::{Priority, Task};
use crate::error::ValidationError;
use crate::session::Account;

/// Date format of every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidField(field))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

impl RegistrationForm {
    /// Only empty fields are rejected. Values are stored as typed.
    pub fn validate(&self) -> Result<Account, ValidationError> {
        for (value, field) in [(&self.name, "name"), (&self.email, "email"), (&self.password, "password")] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(Account {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            avatar: self.avatar.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub assignee: Option<String>,
    pub priority: Priority,
    /// `YYYY-MM-DD`
    pub due_date: String,
}

impl TaskForm {
    pub fn validate(&self) -> Result<Task, ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::MissingRequiredSelection("title"));
        }
        let Some(assignee) = self.assignee.as_deref().filter(|a| !is_blank(a)) else {
            return Err(ValidationError::MissingRequiredSelection("assignee"));
        };
        if is_blank(&self.due_date) {
            return Err(ValidationError::MissingRequiredSelection("due_date"));
        }
        let due = parse_date(&self.due_date, "due_date")?;

        Ok(Task::new(self.title.trim())
            .with_description(self.description.trim())
            .with_assignee(assignee)
            .with_priority(self.priority)
            .with_due(due))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub condition: String,
    pub status: PatientStatus,
    pub last_visit: String,
    pub next_appointment: String,
}

impl PatientForm {
    /// Empty form with both visit dates preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        let today = today.format(DATE_FORMAT).to_string();
        Self {
            name: String::new(),
            age: String::new(),
            gender: Gender::Male,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            condition: String::new(),
            status: PatientStatus::Active,
            last_visit: today.clone(),
            next_appointment: today,
        }
    }

    pub fn validate(&self) -> Result<Patient, ValidationError> {
        let required = [
            (&self.name, "name"),
            (&self.age, "age"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.address, "address"),
            (&self.condition, "condition"),
        ];
        for (value, field) in required {
            if is_blank(value) {
                return Err(ValidationError::MissingField(field));
            }
        }
        let age: u8 = self.age.trim().parse().map_err(|_| ValidationError::InvalidField("age"))?;
        let optional_date = |value: &str, field| -> Result<Option<NaiveDate>, ValidationError> {
            if is_blank(value) {
                Ok(None)
            } else {
                parse_date(value, field).map(Some)
            }
        };

        Ok(Patient {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            age,
            gender: self.gender,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            condition: self.condition.trim().to_string(),
            status: self.status,
            last_visit: optional_date(self.last_visit.as_str(), "last_visit")?,
            next_appointment: optional_date(self.next_appointment.as_str(), "next_appointment")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn filled_task() -> TaskForm {
        TaskForm {
            title: "Patient Rounds".into(),
            description: "Ward 3".into(),
            assignee: Some("Dr. Neha".into()),
            priority: Priority::High,
            due_date: "2025-08-30".into(),
        }
    }

    #[test]
    fn registration_empty_is_missing() {
        let form = RegistrationForm {
            name: String::new(),
            email: "a@b.c".into(),
            password: "pw".into(),
            avatar: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn registration_keeps_values_as_typed() {
        let form = RegistrationForm {
            name: " Dr. Prachi ".into(),
            email: "p@hp.com ".into(),
            password: " pw".into(),
            avatar: String::new(),
        };
        let account = form.validate().unwrap();
        assert_eq!(account.name, " Dr. Prachi ");
        assert_eq!(account.email, "p@hp.com ");
        assert_eq!(account.password, " pw");

        let spaces = RegistrationForm { name: "  ".into(), ..form };
        assert_eq!(spaces.validate().unwrap().name, "  ");
    }

    #[test]
    fn task_form_builds_pending_task() {
        let task = filled_task().validate().unwrap();
        assert_eq!(task.title, "Patient Rounds");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assignee.as_deref(), Some("Dr. Neha"));
        assert_eq!(task.due, Some(d(2025, 8, 30)));
    }

    #[test]
    fn task_form_requires_title_assignee_and_due_date() {
        let mut form = filled_task();
        form.title.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert_eq!(err.field(), "title");

        let mut form = filled_task();
        form.assignee = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredSelection("assignee")));

        let mut form = filled_task();
        form.due_date = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredSelection("due_date")));

        let mut form = filled_task();
        form.due_date = "30/08/2025".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidField("due_date")));
    }

    #[test]
    fn task_form_reset_restores_medium_priority() {
        let mut form = filled_task();
        form.reset();
        assert_eq!(form, TaskForm::default());
        assert_eq!(form.priority, Priority::Medium);
        assert!(form.assignee.is_none());
    }

    #[test]
    fn patient_form_defaults_to_today() {
        let form = PatientForm::new(d(2025, 8, 25));
        assert_eq!(form.last_visit, "2025-08-25");
        assert_eq!(form.next_appointment, "2025-08-25");
        assert_eq!(form.status, PatientStatus::Active);
    }

    #[test]
    fn patient_form_validation() {
        let mut form = PatientForm::new(d(2025, 8, 25));
        assert_eq!(form.validate(), Err(ValidationError::MissingField("name")));

        form.name = "Meera Rao".into();
        form.age = "thirty".into();
        form.email = "meera@example.com".into();
        form.phone = "+91 90000 00000".into();
        form.address = "1 Lake Road, Pune".into();
        form.condition = "Asthma".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidField("age")));

        form.age = "31".into();
        form.next_appointment = String::new();
        let patient = form.validate().unwrap();
        assert_eq!(patient.age, 31);
        assert_eq!(patient.last_visit, Some(d(2025, 8, 25)));
        assert_eq!(patient.next_appointment, None);
    }
}
