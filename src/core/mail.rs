use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::TimeOfDay;
use super::list_view::{ListRecord, ListViewController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessagePriority {
    Normal,
    High,
}

impl MessagePriority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::High => "High Priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub role: String,
}

impl Sender {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub subject: String,
    pub preview: String,
    pub received: TimeOfDay,
    pub read: bool,
    pub priority: MessagePriority,
    pub starred: bool,
}

impl InboxMessage {
    pub fn new(sender: Sender, subject: impl Into<String>, preview: impl Into<String>, received: TimeOfDay) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            subject: subject.into(),
            preview: preview.into(),
            received,
            read: false,
            priority: MessagePriority::Normal,
            starred: false,
        }
    }

    pub fn high_priority(mut self) -> Self {
        self.priority = MessagePriority::High;
        self
    }

    pub fn mark_read(mut self) -> Self {
        self.read = true;
        self
    }
}

impl ListRecord for InboxMessage {
    type Category = MessagePriority;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.sender.name.as_str(), self.preview.as_str()]
    }

    fn category(&self) -> MessagePriority {
        self.priority
    }
}

/// Star every selected message, then clear the selection. Returns how many
/// messages were newly starred.
pub fn star_selected(view: &mut ListViewController<InboxMessage>) -> usize {
    let ids: Vec<Uuid> = view.selection().iter().copied().collect();
    let mut starred = 0;
    for id in ids {
        view.update(id, |m| {
            if !m.starred {
                m.starred = true;
                starred += 1;
            }
        });
    }
    view.clear_selection();
    starred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::list_view::{CategoryFilter, ListViewController};

    #[test]
    fn search_covers_sender_subject_and_preview() {
        let mut view = ListViewController::new(catalog::inbox_messages());
        view.set_query("ward boy");
        assert_eq!(view.filtered().len(), 1);
        view.set_query("PRESCRIPTION");
        assert_eq!(view.filtered().len(), 2);
        view.set_query("patient rounds");
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn select_all_then_narrow_keeps_only_visible() {
        let mut view = ListViewController::new(catalog::inbox_messages());
        view.toggle_select_all();
        assert_eq!(view.selection().len(), 6);
        assert!(view.is_all_selected());

        view.set_query("medication");
        assert_eq!(view.filtered().len(), 2);
        assert_eq!(view.selection().len(), 2);
        assert!(view.is_all_selected());

        view.toggle_select_all();
        assert!(view.selection().is_empty());
    }

    #[test]
    fn starring_marks_selected_messages_only() {
        let mut view = ListViewController::new(catalog::inbox_messages());
        assert!(view.catalog().iter().all(|m| !m.starred));

        view.set_query("medication");
        view.toggle_select_all();
        assert_eq!(star_selected(&mut view), 2);
        assert!(view.selection().is_empty());

        let starred: Vec<&str> = view
            .catalog()
            .iter()
            .filter(|m| m.starred)
            .map(|m| m.subject.as_str())
            .collect();
        assert_eq!(starred, vec!["Medication Administration", "Medication Administration"]);

        view.toggle_select_all();
        assert_eq!(star_selected(&mut view), 0);
    }

    #[test]
    fn high_priority_tab() {
        let mut view = ListViewController::new(catalog::inbox_messages());
        view.set_category(CategoryFilter::Only(MessagePriority::High));
        let subjects: Vec<&str> = view.filtered().iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Patient Rounds", "Laboratory test results review"]);
    }
}
