use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::TimeOfDay;
use super::list_view::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentKind {
    Consultation,
    Surgery,
    Meeting,
}

impl AppointmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Consultation => "consultation",
            Self::Surgery => "surgery",
            Self::Meeting => "meeting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    /// Free-form, e.g. "30 min" or "2 hours".
    pub duration: String,
    pub patient: String,
    pub kind: AppointmentKind,
    pub location: String,
    pub starred: bool,
}

impl ListRecord for Appointment {
    type Category = AppointmentKind;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.patient.as_str(), self.location.as_str()]
    }

    fn category(&self) -> AppointmentKind {
        self.kind
    }
}
