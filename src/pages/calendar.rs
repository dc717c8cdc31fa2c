use std::collections::BTreeSet;

use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::appointment::Appointment;
use healthplus::core::calendar::{self, MonthCursor};
use healthplus::core::catalog;

use super::{empty_state, page, page_header};
use crate::components::chip::badge;
use crate::components::month_calendar::month_calendar;
use crate::fl;
use crate::message::Message;

pub struct CalendarPage {
    pub appointments: Vec<Appointment>,
    pub marked: BTreeSet<NaiveDate>,
    pub cursor: MonthCursor,
}

impl CalendarPage {
    pub fn new(today: NaiveDate) -> Self {
        let appointments = catalog::appointments();
        Self {
            marked: calendar::marked_dates(&appointments),
            appointments,
            cursor: MonthCursor::new(today),
        }
    }
}

pub fn calendar_view(page_state: &CalendarPage, today: NaiveDate) -> Element<'static, Message> {
    let stats = calendar::quick_stats(&page_state.appointments, today);
    let quick_stats = container(
        column()
            .spacing(6)
            .push(text::title4(fl!("calendar-quick-stats")))
            .push(stat_line(fl!("calendar-today"), stats.today))
            .push(stat_line(fl!("calendar-this-week"), stats.this_week))
            .push(stat_line(fl!("calendar-surgeries"), stats.surgeries)),
    )
    .padding(16)
    .width(Length::Fill)
    .class(theme::Container::Card);

    let left = column()
        .spacing(16)
        .width(Length::FillPortion(1))
        .push(
            container(month_calendar(&page_state.cursor, &page_state.marked, today))
                .padding(8)
                .class(theme::Container::Card),
        )
        .push(quick_stats);

    let mut right = column().spacing(8).width(Length::FillPortion(2));
    match page_state.cursor.selected_day {
        None => right = right.push(empty_state(fl!("calendar-pick-date"))),
        Some(day) => {
            right = right.push(text::title4(calendar::date_label(day, today)));
            let appointments = calendar::appointments_on(&page_state.appointments, day);
            if appointments.is_empty() {
                right = right.push(empty_state(fl!("calendar-no-appointments")));
            }
            for appointment in appointments {
                right = right.push(appointment_card(appointment));
            }
        }
    }

    let content = column()
        .spacing(16)
        .push(page_header("x-office-calendar-symbolic", &fl!("route-calendar"), &fl!("calendar-subtitle")))
        .push(row().spacing(16).align_y(Alignment::Start).push(left).push(right));

    page(content)
}

fn stat_line(label: String, count: usize) -> Element<'static, Message> {
    row()
        .push(text::body(label).width(Length::Fill))
        .push(text::body(count.to_string()))
        .into()
}

fn appointment_card(appointment: &Appointment) -> Element<'static, Message> {
    let mut title_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::body(appointment.title.clone()).width(Length::Fill));
    if appointment.starred {
        title_row = title_row.push(icon::from_name("starred-symbolic").size(16).icon());
    }
    title_row = title_row.push(badge(appointment.kind.label()));

    let details = row()
        .spacing(16)
        .push(text::caption(format!("{} ({})", appointment.time, appointment.duration)))
        .push(text::caption(appointment.patient.clone()))
        .push(text::caption(appointment.location.clone()));

    container(column().spacing(4).push(title_row).push(details))
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
