//! Fixed reporting tables for the analytics page and the derived totals.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

/// A headline number with its comparison line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub trend: Trend,
    pub icon_name: &'static str,
}

impl StatCard {
    pub fn new(
        title: &'static str,
        value: impl Into<String>,
        change: &'static str,
        trend: Trend,
        icon_name: &'static str,
    ) -> Self {
        Self {
            title,
            value: value.into(),
            change,
            trend,
            icon_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRow {
    pub month: &'static str,
    pub patients: u32,
    pub appointments: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusShare {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentTypeShare {
    pub kind: &'static str,
    pub count: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayActivity {
    pub day: &'static str,
    pub consultations: u32,
    pub surgeries: u32,
    pub followups: u32,
}

impl WeekdayActivity {
    pub fn total(&self) -> u32 {
        self.consultations + self.surgeries + self.followups
    }
}

pub const MONTHLY: &[MonthlyRow] = &[
    MonthlyRow { month: "Jan", patients: 45, appointments: 68, revenue: 15400 },
    MonthlyRow { month: "Feb", patients: 52, appointments: 78, revenue: 18200 },
    MonthlyRow { month: "Mar", patients: 48, appointments: 72, revenue: 16800 },
    MonthlyRow { month: "Apr", patients: 61, appointments: 89, revenue: 21300 },
    MonthlyRow { month: "May", patients: 55, appointments: 82, revenue: 19600 },
    MonthlyRow { month: "Jun", patients: 67, appointments: 95, revenue: 23800 },
];

pub const PATIENT_STATUS: &[StatusShare] = &[
    StatusShare { name: "Active", value: 45 },
    StatusShare { name: "Critical", value: 8 },
    StatusShare { name: "Stable", value: 23 },
    StatusShare { name: "Recovery", value: 12 },
];

pub const APPOINTMENT_TYPES: &[AppointmentTypeShare] = &[
    AppointmentTypeShare { kind: "Consultation", count: 156, percentage: 45 },
    AppointmentTypeShare { kind: "Surgery", count: 78, percentage: 22 },
    AppointmentTypeShare { kind: "Follow-up", count: 89, percentage: 26 },
    AppointmentTypeShare { kind: "Emergency", count: 23, percentage: 7 },
];

pub const WEEKLY: &[WeekdayActivity] = &[
    WeekdayActivity { day: "Mon", consultations: 12, surgeries: 3, followups: 8 },
    WeekdayActivity { day: "Tue", consultations: 15, surgeries: 2, followups: 6 },
    WeekdayActivity { day: "Wed", consultations: 18, surgeries: 4, followups: 10 },
    WeekdayActivity { day: "Thu", consultations: 14, surgeries: 1, followups: 7 },
    WeekdayActivity { day: "Fri", consultations: 16, surgeries: 3, followups: 9 },
    WeekdayActivity { day: "Sat", consultations: 8, surgeries: 1, followups: 4 },
    WeekdayActivity { day: "Sun", consultations: 5, surgeries: 0, followups: 2 },
];

/// Column sums of the monthly table, `month` set to "Total".
pub fn monthly_totals(rows: &[MonthlyRow]) -> MonthlyRow {
    rows.iter().fold(
        MonthlyRow { month: "Total", patients: 0, appointments: 0, revenue: 0 },
        |acc, r| MonthlyRow {
            month: acc.month,
            patients: acc.patients + r.patients,
            appointments: acc.appointments + r.appointments,
            revenue: acc.revenue + r.revenue,
        },
    )
}

/// The weekday with the most activity; the earliest one wins a tie.
pub fn busiest_day(rows: &[WeekdayActivity]) -> Option<&WeekdayActivity> {
    rows.iter().fold(None, |best: Option<&WeekdayActivity>, row| match best {
        Some(b) if b.total() >= row.total() => Some(b),
        _ => Some(row),
    })
}

/// Share of `value` in the sum of all statuses, rounded to a whole percent.
pub fn status_percentage(rows: &[StatusShare], value: u32) -> u32 {
    let total: u32 = rows.iter().map(|r| r.value).sum();
    if total == 0 {
        return 0;
    }
    (value * 100 + total / 2) / total
}

/// "$15,400" style currency.
pub fn format_revenue(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

pub fn key_metrics() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Patients", "1,234", "+12% from last month", Trend::Positive, "system-users-symbolic"),
        StatCard::new("Appointments", "346", "+8% from last month", Trend::Positive, "x-office-calendar-symbolic"),
        StatCard::new("Success Rate", "94.2%", "+2.1% improvement", Trend::Positive, "emblem-favorite-symbolic"),
        StatCard::new("Avg. Wait Time", "18m", "+3m from last month", Trend::Negative, "alarm-symbolic"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_totals_sum_columns() {
        let total = monthly_totals(MONTHLY);
        assert_eq!(total.month, "Total");
        assert_eq!(total.patients, 328);
        assert_eq!(total.appointments, 484);
        assert_eq!(total.revenue, 115_100);
        assert_eq!(monthly_totals(&[]).revenue, 0);
    }

    #[test]
    fn busiest_weekday() {
        assert_eq!(busiest_day(WEEKLY).map(|d| d.day), Some("Wed"));
        assert_eq!(busiest_day(&[]), None);
    }

    #[test]
    fn appointment_type_percentages_add_up() {
        let sum: u32 = APPOINTMENT_TYPES.iter().map(|t| t.percentage as u32).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn status_shares() {
        assert_eq!(status_percentage(PATIENT_STATUS, 45), 51);
        assert_eq!(status_percentage(&[], 3), 0);
    }

    #[test]
    fn revenue_formatting() {
        assert_eq!(format_revenue(15400), "$15,400");
        assert_eq!(format_revenue(115_100), "$115,100");
        assert_eq!(format_revenue(999), "$999");
        assert_eq!(format_revenue(1_000_000), "$1,000,000");
    }
}
