use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Message,
    Task,
    Appointment,
    Update,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Task => "task",
            Self::Appointment => "appointment",
            Self::Update => "update",
        }
    }
}

/// One line of the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub who: String,
    pub role: Option<String>,
    pub action: String,
    /// Already relative, e.g. "10 min ago".
    pub when: String,
    pub kind: ActivityKind,
}

impl Activity {
    pub fn new(who: impl Into<String>, action: impl Into<String>, when: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            who: who.into(),
            role: None,
            action: action.into(),
            when: when.into(),
            kind,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
