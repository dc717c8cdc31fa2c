use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, row, text, text_input};
use cosmic::{Element, theme};

use healthplus::core::catalog;
use healthplus::core::form::TaskForm;
use healthplus::core::task::Priority;
use healthplus::core::timer::ScopedTimer;

use super::{Notice, page, page_header};
use crate::fl;
use crate::message::{Message, TaskField};

#[derive(Debug, Default)]
pub struct CreateTaskPage {
    pub form: TaskForm,
    pub notice: Option<Notice>,
    /// Pending simulated submit. Dropping the page aborts it.
    pub timer: ScopedTimer,
}

impl CreateTaskPage {
    pub fn submitting(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn set(&mut self, field: TaskField, value: String) {
        let slot = match field {
            TaskField::Title => &mut self.form.title,
            TaskField::Description => &mut self.form.description,
            TaskField::DueDate => &mut self.form.due_date,
        };
        *slot = value;
    }

    pub fn set_assignee(&mut self, idx: usize) {
        self.form.assignee = catalog::ASSIGNEES.get(idx).map(|a| a.to_string());
    }
}

pub fn create_task_view(state: &CreateTaskPage) -> Element<'static, Message> {
    let form = &state.form;
    let submitting = state.submitting();

    let field = |label: String, placeholder: String, value: &str, which: TaskField| {
        let mut input = text_input::text_input(placeholder, value.to_string()).width(Length::Fill);
        if !submitting {
            input = input.on_input(move |v| Message::TaskInput(which, v));
        }
        column().spacing(4).push(text::caption(label)).push(input)
    };

    let assignees: Vec<String> = catalog::ASSIGNEES.iter().map(|a| a.to_string()).collect();
    let assignee_idx = form
        .assignee
        .as_deref()
        .and_then(|current| catalog::ASSIGNEES.iter().position(|a| *a == current));

    let mut priorities = row().spacing(4);
    for priority in [Priority::Low, Priority::Medium, Priority::High] {
        let label = match priority {
            Priority::Low => fl!("priority-low"),
            Priority::Medium => fl!("priority-medium"),
            Priority::High => fl!("priority-high"),
        };
        let class = if form.priority == priority {
            theme::Button::Suggested
        } else {
            theme::Button::Standard
        };
        priorities = priorities.push(
            button::text(label)
                .class(class)
                .on_press(Message::TaskPriority(priority)),
        );
    }

    let submit = if submitting {
        button::suggested(fl!("create-task-submitting"))
    } else {
        button::suggested(fl!("route-create-task")).on_press(Message::SubmitTask)
    };

    let mut card = column()
        .spacing(12)
        .push(field(fl!("create-task-title"), fl!("create-task-title-placeholder"), &form.title, TaskField::Title))
        .push(field(
            fl!("create-task-description"),
            fl!("create-task-description-placeholder"),
            &form.description,
            TaskField::Description,
        ))
        .push(
            column()
                .spacing(4)
                .push(text::caption(fl!("create-task-assignee")))
                .push(dropdown(assignees, assignee_idx, Message::TaskAssignee)),
        )
        .push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::caption(fl!("create-task-priority")))
                .push(priorities),
        )
        .push(field(fl!("create-task-due"), fl!("date-placeholder"), &form.due_date, TaskField::DueDate));

    if let Some(notice) = &state.notice {
        card = card.push(notice.view());
    }
    card = card.push(submit);

    let content = column()
        .spacing(12)
        .push(page_header(
            "list-add-symbolic",
            &fl!("create-task-header"),
            &fl!("create-task-subtitle"),
        ))
        .push(
            container(card)
                .padding(16)
                .width(Length::Fill)
                .class(theme::Container::Card),
        );

    page(content)
}
