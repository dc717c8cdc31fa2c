use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::calendar::relative_day_label;
use healthplus::core::task::Task;

use super::chip::{badge, star};
use crate::message::Message;

/// A task with its status button. Pressing the button toggles the status.
pub fn task_card(task: &Task, today: NaiveDate) -> Element<'static, Message> {
    let id = task.id;
    let status_btn = button::icon(icon::from_name(task.status.icon_name()))
        .class(theme::Button::Text)
        .on_press(Message::ToggleTaskStatus(id));

    let title = if task.status.is_completed() {
        text::body(format!("\u{2713} {}", task.title))
    } else {
        text::body(task.title.clone())
    };

    let mut detail = column().spacing(4).width(Length::Fill).push(title);
    if !task.description.is_empty() {
        detail = detail.push(text::caption(task.description.clone()));
    }

    let mut meta = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(star(task.starred))
        .push(badge(task.priority.label()))
        .push(text::caption(task.status.label()));
    if let Some(due) = task.due {
        meta = meta.push(text::caption(relative_day_label(due, today)));
    }
    detail = detail.push(meta);

    let mut line = row().spacing(12).align_y(Alignment::Center).push(status_btn).push(detail);
    if let Some(assignee) = &task.assignee {
        line = line.push(text::caption(assignee.clone()));
    }

    container(line)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
