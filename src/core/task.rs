use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_view::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: &'static [TaskStatus] = &[Self::Pending, Self::InProgress, Self::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Pending => "radio-symbolic",
            Self::InProgress => "content-loading-symbolic",
            Self::Completed => "object-select-symbolic",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: &'static [Priority] = &[Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub due: Option<NaiveDate>,
    pub starred: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: Priority::default(),
            assignee: None,
            due: None,
            starred: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    /// Completed tasks go back to pending; anything else becomes completed.
    /// In-progress is only ever set when the task is created.
    pub fn toggle_status(&mut self) {
        self.status = if self.status.is_completed() {
            TaskStatus::Pending
        } else {
            TaskStatus::Completed
        };
    }
}

impl ListRecord for Task {
    type Category = TaskStatus;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> TaskStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::list_view::{CategoryFilter, ListViewController};

    #[test]
    fn in_progress_toggles_to_completed() {
        let mut task = Task::new("Surgery Preparation").with_status(TaskStatus::InProgress);
        task.toggle_status();
        assert_eq!(task.status, TaskStatus::Completed);
        task.toggle_status();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn toggle_never_reaches_in_progress() {
        let mut task = Task::new("Rounds");
        for _ in 0..5 {
            task.toggle_status();
            assert_ne!(task.status, TaskStatus::InProgress);
        }
    }

    #[test]
    fn new_task_defaults() {
        let task = Task::new("Check vitals");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.assignee.is_none());
        assert_ne!(Task::new("a").id, Task::new("a").id);
    }

    #[test]
    fn important_tasks_filter_by_status_and_text() {
        let mut view = ListViewController::new(catalog::important_tasks());
        view.set_category(CategoryFilter::Only(TaskStatus::Pending));
        assert_eq!(view.filtered().len(), 3);

        view.set_query("dr. jones");
        let titles: Vec<&str> = view.filtered().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Follow Up with Dr. Jones"]);

        view.set_category(CategoryFilter::Only(TaskStatus::Completed));
        assert!(view.filtered().is_empty());
    }
}
