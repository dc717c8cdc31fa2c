//! Day matching, appointment ordering and the month grid cursor.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Duration, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::appointment::{Appointment, AppointmentKind};

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*([AaPp][Mm])\s*$").unwrap());

#[derive(Debug, thiserror::Error)]
#[error("Invalid time of day: {0:?}")]
pub struct ParseTimeError(String);

/// A wall-clock time stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// For seed data; the caller keeps `hour < 24` and `minute < 60`.
    pub const fn at(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Parses "hh:mm AM" / "hh:mm PM". 12 AM is midnight, 12 PM is noon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let caps = TIME_RE.captures(s).ok_or_else(err)?;
        let hour: u16 = caps[1].parse().map_err(|_| err())?;
        let minute: u16 = caps[2].parse().map_err(|_| err())?;
        if !(1..=12).contains(&hour) {
            return Err(err());
        }
        let pm = caps[3].eq_ignore_ascii_case("pm");
        let hour24 = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::new(hour24, minute).ok_or_else(err)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{:02}:{:02} {}", hour, self.minute(), suffix)
    }
}

/// Calendar-day equality, ignoring any time component.
pub fn same_day(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Appointments on `date`, earliest first. Equal times keep catalog order.
pub fn appointments_on(catalog: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    let mut day: Vec<&Appointment> = catalog.iter().filter(|a| same_day(&a.date, &date)).collect();
    day.sort_by_key(|a| a.time);
    day
}

/// Heading for the appointment list of the selected day.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today's Appointments".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow's Appointments".to_string()
    } else {
        date.format("%A, %B %-d").to_string()
    }
}

/// Short due-date label used on task cards.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

/// Days that get a marker dot in the month grid.
pub fn marked_dates(catalog: &[Appointment]) -> BTreeSet<NaiveDate> {
    catalog.iter().map(|a| a.date).collect()
}

/// Sunday through Saturday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickStats {
    pub today: usize,
    pub this_week: usize,
    pub surgeries: usize,
}

pub fn quick_stats(catalog: &[Appointment], today: NaiveDate) -> QuickStats {
    let (start, end) = week_bounds(today);
    QuickStats {
        today: catalog.iter().filter(|a| a.date == today).count(),
        this_week: catalog.iter().filter(|a| a.date >= start && a.date <= end).count(),
        surgeries: catalog.iter().filter(|a| a.kind == AppointmentKind::Surgery).count(),
    }
}

/// Displayed month and selected day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCursor {
    /// First day of the displayed month.
    pub displayed_month: NaiveDate,
    pub selected_day: Option<NaiveDate>,
}

impl MonthCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed_month: today.with_day(1).unwrap_or(today),
            selected_day: Some(today),
        }
    }

    pub fn prev_month(&mut self) {
        self.displayed_month = self
            .displayed_month
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.displayed_month);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = self
            .displayed_month
            .checked_add_months(Months::new(1))
            .unwrap_or(self.displayed_month);
    }

    /// Clicking the selected day again clears the selection.
    pub fn select_day(&mut self, date: NaiveDate) {
        if self.selected_day == Some(date) {
            self.selected_day = None;
        } else {
            self.selected_day = Some(date);
            self.displayed_month = date.with_day(1).unwrap_or(date);
        }
    }

    /// The Sunday on or before the first of the displayed month.
    pub fn grid_start(&self) -> NaiveDate {
        week_bounds(self.displayed_month).0
    }

    pub fn in_displayed_month(&self, date: NaiveDate) -> bool {
        date.year() == self.displayed_month.year() && date.month() == self.displayed_month.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use chrono::NaiveDateTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_times() {
        assert_eq!("09:00 AM".parse::<TimeOfDay>().unwrap().minutes(), 540);
        assert_eq!("11:30 AM".parse::<TimeOfDay>().unwrap().minutes(), 690);
        assert_eq!("02:00 PM".parse::<TimeOfDay>().unwrap().minutes(), 840);
        assert_eq!("12:00 AM".parse::<TimeOfDay>().unwrap().minutes(), 0);
        assert_eq!("12:15 PM".parse::<TimeOfDay>().unwrap().minutes(), 735);
        assert_eq!("4:21 pm".parse::<TimeOfDay>().unwrap().to_string(), "04:21 PM");
    }

    #[test]
    fn reject_malformed_times() {
        assert!("13:00 PM".parse::<TimeOfDay>().is_err());
        assert!("00:30 AM".parse::<TimeOfDay>().is_err());
        assert!("09:75 AM".parse::<TimeOfDay>().is_err());
        assert!("0900".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn same_day_ignores_time() {
        let morning: NaiveDateTime = d(2025, 8, 25).and_hms_opt(0, 1, 0).unwrap();
        let night: NaiveDateTime = d(2025, 8, 25).and_hms_opt(23, 59, 0).unwrap();
        assert!(same_day(&morning, &night));
        assert!(same_day(&morning, &d(2025, 8, 25)));
        assert!(!same_day(&morning, &d(2025, 8, 26)));
        assert!(!same_day(&d(2024, 8, 25), &d(2025, 8, 25)));
    }

    #[test]
    fn same_day_is_symmetric() {
        let evening: NaiveDateTime = d(2025, 8, 25).and_hms_opt(18, 30, 0).unwrap();
        let next_morning: NaiveDateTime = d(2025, 8, 26).and_hms_opt(7, 0, 0).unwrap();

        // Equal and unequal dates.
        for (a, b) in [(d(2025, 8, 25), d(2025, 8, 25)), (d(2025, 8, 25), d(2025, 9, 25))] {
            assert_eq!(same_day(&a, &b), same_day(&b, &a));
        }
        // Mixed date-time and date, same day and different day.
        for date in [d(2025, 8, 25), d(2025, 8, 26)] {
            assert_eq!(same_day(&evening, &date), same_day(&date, &evening));
        }
        assert!(same_day(&d(2025, 8, 25), &evening));
        assert!(!same_day(&d(2025, 8, 25), &next_morning));
        assert_eq!(same_day(&evening, &next_morning), same_day(&next_morning, &evening));
    }

    #[test]
    fn appointments_sorted_by_time() {
        let appointments = catalog::appointments();
        let day = appointments_on(&appointments, d(2025, 8, 25));
        let times: Vec<String> = day.iter().map(|a| a.time.to_string()).collect();
        assert_eq!(times, vec!["09:00 AM", "11:30 AM"]);

        let mut reversed = appointments.clone();
        reversed.reverse();
        let day = appointments_on(&reversed, d(2025, 8, 25));
        assert_eq!(day[0].title, "Patient Consultation");
    }

    #[test]
    fn appointments_on_is_idempotent() {
        let appointments = catalog::appointments();
        let once: Vec<Appointment> = appointments_on(&appointments, d(2025, 8, 26))
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Appointment> = appointments_on(&once, d(2025, 8, 26))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
        assert!(appointments_on(&appointments, d(2025, 9, 1)).is_empty());
    }

    #[test]
    fn labels() {
        let today = d(2025, 8, 25);
        assert_eq!(date_label(today, today), "Today's Appointments");
        assert_eq!(date_label(d(2025, 8, 26), today), "Tomorrow's Appointments");
        assert_eq!(date_label(d(2025, 8, 27), today), "Wednesday, August 27");
        assert_eq!(date_label(d(2025, 8, 24), today), "Sunday, August 24");

        assert_eq!(relative_day_label(today, today), "Today");
        assert_eq!(relative_day_label(d(2025, 8, 26), today), "Tomorrow");
        assert_eq!(relative_day_label(d(2025, 8, 24), today), "Yesterday");
        assert_eq!(relative_day_label(d(2025, 9, 3), today), "Sep 3");
    }

    #[test]
    fn marked_dates_cover_every_appointment_day() {
        let marked = marked_dates(&catalog::appointments());
        let days: Vec<NaiveDate> = marked.into_iter().collect();
        assert_eq!(days, vec![d(2025, 8, 25), d(2025, 8, 26), d(2025, 8, 27)]);
    }

    #[test]
    fn quick_stats_for_week() {
        let stats = quick_stats(&catalog::appointments(), d(2025, 8, 25));
        assert_eq!(
            stats,
            QuickStats {
                today: 2,
                this_week: 5,
                surgeries: 1,
            }
        );
        // Saturday Aug 23 belongs to the previous week.
        let stats = quick_stats(&catalog::appointments(), d(2025, 8, 23));
        assert_eq!(stats.this_week, 0);
    }

    #[test]
    fn week_starts_on_sunday() {
        assert_eq!(week_bounds(d(2025, 8, 27)), (d(2025, 8, 24), d(2025, 8, 30)));
        assert_eq!(week_bounds(d(2025, 8, 24)), (d(2025, 8, 24), d(2025, 8, 30)));
    }

    #[test]
    fn cursor_navigation_and_toggle() {
        let mut cursor = MonthCursor::new(d(2025, 8, 25));
        assert_eq!(cursor.displayed_month, d(2025, 8, 1));
        assert_eq!(cursor.grid_start(), d(2025, 7, 27));

        cursor.select_day(d(2025, 8, 25));
        assert_eq!(cursor.selected_day, None);
        cursor.select_day(d(2025, 8, 26));
        assert_eq!(cursor.selected_day, Some(d(2025, 8, 26)));

        cursor.next_month();
        assert_eq!(cursor.displayed_month, d(2025, 9, 1));
        assert!(cursor.in_displayed_month(d(2025, 9, 30)));
        cursor.prev_month();
        cursor.prev_month();
        assert_eq!(cursor.displayed_month, d(2025, 7, 1));
        assert_eq!(cursor.selected_day, Some(d(2025, 8, 26)));
    }
}
