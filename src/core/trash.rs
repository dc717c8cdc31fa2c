use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_view::ListRecord;

/// Days a trashed item is kept before it would be purged.
pub const RETENTION_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Task,
    Patient,
    Appointment,
    Document,
}

impl ItemKind {
    pub const ALL: &'static [ItemKind] = &[Self::Task, Self::Patient, Self::Appointment, Self::Document];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Patient => "Patient Record",
            Self::Appointment => "Appointment",
            Self::Document => "Document",
        }
    }

    pub fn chip_label(&self) -> &'static str {
        match self {
            Self::Task => "Tasks",
            Self::Patient => "Patients",
            Self::Appointment => "Appointments",
            Self::Document => "Documents",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Task => "x-office-calendar-symbolic",
            Self::Patient => "avatar-default-symbolic",
            Self::Appointment => "alarm-symbolic",
            Self::Document => "text-x-generic-symbolic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashedItem {
    pub id: Uuid,
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub deleted_at: NaiveDateTime,
    pub deleted_by: String,
}

impl TrashedItem {
    /// "today", "1 day ago" or "n days ago", counted from `now`.
    pub fn deleted_ago(&self, now: NaiveDateTime) -> String {
        match (now - self.deleted_at).num_days() {
            d if d <= 0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            d => format!("{} days ago", d),
        }
    }

    /// Whole days left before automatic removal, never negative.
    pub fn days_until_purge(&self, now: NaiveDateTime) -> i64 {
        (RETENTION_DAYS - (now - self.deleted_at).num_days()).max(0)
    }
}

impl ListRecord for TrashedItem {
    type Category = ItemKind;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> ItemKind {
        self.kind
    }
}

/// "n item(s) selected" summary shown above the bulk actions.
pub fn selection_summary(count: usize) -> String {
    if count == 1 {
        "1 item selected".to_string()
    } else {
        format!("{} items selected", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::list_view::{CategoryFilter, ListViewController};
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 25)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn kind_chip_filters_tasks() {
        let mut view = ListViewController::new(catalog::trashed_items(now()));
        view.set_category(CategoryFilter::Only(ItemKind::Task));
        assert_eq!(view.filtered().len(), 2);
        view.set_query("database");
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn restore_and_delete_only_clear_selection() {
        let mut view = ListViewController::new(catalog::trashed_items(now()));
        view.toggle_select_all();
        view.clear_selection();
        assert!(view.selection().is_empty());
        assert_eq!(view.catalog().len(), 5);
    }

    #[test]
    fn deleted_ago_counts_days() {
        let items = catalog::trashed_items(now());
        assert_eq!(items[0].deleted_ago(now()), "2 days ago");
        assert_eq!(items[2].deleted_ago(now()), "1 day ago");
        assert_eq!(items[3].days_until_purge(now()), 23);

        let mut fresh = items[0].clone();
        fresh.deleted_at = now() - Duration::hours(3);
        assert_eq!(fresh.deleted_ago(now()), "today");
    }

    #[test]
    fn summary_pluralises() {
        assert_eq!(selection_summary(1), "1 item selected");
        assert_eq!(selection_summary(3), "3 items selected");
    }
}
