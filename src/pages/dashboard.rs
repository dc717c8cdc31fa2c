use std::collections::BTreeSet;

use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, text};
use cosmic::{Element, theme};
use uuid::Uuid;

use healthplus::core::activity::Activity;
use healthplus::core::analytics::StatCard;
use healthplus::core::calendar::{self, MonthCursor};
use healthplus::core::catalog;
use healthplus::core::task::Task;

use crate::components::month_calendar::month_calendar;
use crate::components::recent_activity::recent_activity;
use crate::components::stats_card::stats_grid;
use crate::components::task_card::task_card;
use crate::fl;
use crate::message::Message;

pub struct DashboardPage {
    pub stats: Vec<StatCard>,
    pub tasks: Vec<Task>,
    pub activities: Vec<Activity>,
    pub marked: BTreeSet<NaiveDate>,
    pub cursor: MonthCursor,
}

impl DashboardPage {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            stats: catalog::dashboard_stats(),
            tasks: catalog::dashboard_tasks(today),
            activities: catalog::recent_activities(),
            marked: calendar::marked_dates(&catalog::appointments()),
            cursor: MonthCursor::new(today),
        }
    }

    pub fn toggle_task(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle_status();
        }
    }
}

pub fn dashboard_view(page: &DashboardPage, doctor_name: &str, today: NaiveDate) -> Element<'static, Message> {
    let mut tasks_col = column().spacing(8).push(text::title4(fl!("dashboard-recent-tasks")));
    for task in &page.tasks {
        tasks_col = tasks_col.push(task_card(task, today));
    }

    let calendar_card = container(
        column()
            .spacing(8)
            .push(text::title4(fl!("route-calendar")))
            .push(month_calendar(&page.cursor, &page.marked, today)),
    )
    .padding(16)
    .width(Length::Fill)
    .class(theme::Container::Card);

    let side = column()
        .spacing(16)
        .width(Length::FillPortion(1))
        .push(calendar_card)
        .push(recent_activity(fl!("dashboard-recent-conversations"), &page.activities));

    let content = column()
        .spacing(16)
        .push(text::title3(fl!("dashboard-greeting", name = doctor_name.to_string())))
        .push(text::caption(today.format("%A, %B %-d, %Y").to_string()))
        .push(stats_grid(&page.stats, 4))
        .push(
            row()
                .spacing(16)
                .align_y(Alignment::Start)
                .push(tasks_col.width(Length::FillPortion(2)))
                .push(side),
        );

    super::page(content)
}
