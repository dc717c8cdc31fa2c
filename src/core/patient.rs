use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_view::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Critical,
    Stable,
}

impl PatientStatus {
    pub const ALL: &'static [PatientStatus] = &[Self::Active, Self::Critical, Self::Stable];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Critical => "Critical",
            Self::Stable => "Stable",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Active => "emblem-ok-symbolic",
            Self::Critical => "dialog-warning-symbolic",
            Self::Stable => "emblem-default-symbolic",
        }
    }
}

impl Default for PatientStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Self::Male, Self::Female, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub condition: String,
    pub status: PatientStatus,
    pub last_visit: Option<NaiveDate>,
    pub next_appointment: Option<NaiveDate>,
}

impl Patient {
    /// Uppercase first letters of each word of the name.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

impl ListRecord for Patient {
    type Category = PatientStatus;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.condition.as_str(), self.email.as_str()]
    }

    fn category(&self) -> PatientStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::list_view::{CategoryFilter, ListViewController};

    #[test]
    fn diabetes_search_matches_condition_only() {
        let mut view = ListViewController::new(catalog::patients());
        view.set_query("diabetes");
        let names: Vec<&str> = view.filtered().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rakesh Kumar"]);

        view.set_query("DIABETES");
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn search_by_email_fragment() {
        let mut view = ListViewController::new(catalog::patients());
        view.set_query("gmail");
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn status_chip_and_query_combine() {
        let mut view = ListViewController::new(catalog::patients());
        view.set_category(CategoryFilter::Only(PatientStatus::Active));
        assert_eq!(view.filtered().len(), 2);
        view.set_query("sneha");
        assert_eq!(view.filtered().len(), 1);
        view.set_category(CategoryFilter::Only(PatientStatus::Critical));
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn initials_of_names() {
        assert_eq!(initials("Amit Sharma"), "AS");
        assert_eq!(initials("dr. neha"), "DN");
        assert_eq!(initials(""), "");
    }
}
