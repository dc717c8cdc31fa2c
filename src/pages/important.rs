use chrono::NaiveDate;
use cosmic::widget::column;
use cosmic::Element;

use healthplus::core::list_view::ListViewController;
use healthplus::core::task::{Task, TaskStatus};

use super::{empty_state, page, page_header, search_box};
use crate::components::chip::category_chips;
use crate::components::task_card::task_card;
use crate::fl;
use crate::message::Message;

pub type ImportantPage = ListViewController<Task>;

fn status_chips() -> Vec<(TaskStatus, String)> {
    vec![
        (TaskStatus::Pending, fl!("status-pending")),
        (TaskStatus::InProgress, fl!("status-in-progress")),
        (TaskStatus::Completed, fl!("status-completed")),
    ]
}

pub fn important_view(view: &ImportantPage, today: NaiveDate) -> Element<'static, Message> {
    let tasks = view.filtered();
    let subtitle = fl!("important-subtitle", count = tasks.len());

    let mut content = column()
        .spacing(12)
        .push(page_header("starred-symbolic", &fl!("important-title"), &subtitle))
        .push(search_box(fl!("important-search"), view.query()))
        .push(category_chips(&status_chips(), view.category(), Message::ImportantFilter));

    if tasks.is_empty() {
        content = content.push(empty_state(fl!("important-empty")));
    } else {
        for task in tasks {
            content = content.push(task_card(task, today));
        }
    }

    page(content)
}
