use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, text};
use cosmic::{Element, theme};

use healthplus::core::analytics::{self, APPOINTMENT_TYPES, MONTHLY, PATIENT_STATUS, WEEKLY};

use super::{page, page_header};
use crate::components::stats_card::stats_grid;
use crate::fl;
use crate::message::Message;

pub fn analytics_view() -> Element<'static, Message> {
    let content = column()
        .spacing(16)
        .push(page_header(
            "utilities-system-monitor-symbolic",
            &fl!("route-analytics"),
            &fl!("analytics-subtitle"),
        ))
        .push(stats_grid(&analytics::key_metrics(), 4))
        .push(card(fl!("analytics-monthly"), monthly_table()))
        .push(
            row()
                .spacing(16)
                .push(card(fl!("analytics-patient-status"), status_distribution()))
                .push(card(fl!("analytics-appointment-types"), appointment_types())),
        )
        .push(card(fl!("analytics-weekly"), weekly_activity()));

    page(content)
}

fn card(title: String, body: Element<'static, Message>) -> Element<'static, Message> {
    container(column().spacing(8).push(text::title4(title)).push(body))
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

/// Twenty-cell glyph bar for a percentage.
fn bar(pct: u32) -> Element<'static, Message> {
    let filled = (pct.min(100) as usize + 2) / 5;
    let cells: String = (0..20).map(|i| if i < filled { '\u{2588}' } else { '\u{2591}' }).collect();
    text::caption(cells).width(Length::Fill).into()
}

fn table_row(cells: [String; 4]) -> Element<'static, Message> {
    let mut line = row().spacing(8);
    for cell in cells {
        line = line.push(text::body(cell).width(Length::FillPortion(1)));
    }
    line.into()
}

fn monthly_table() -> Element<'static, Message> {
    let mut table = column().spacing(4).push(table_row([
        fl!("analytics-month"),
        fl!("route-patients"),
        fl!("analytics-appointments"),
        fl!("analytics-revenue"),
    ]));

    let totals = analytics::monthly_totals(MONTHLY);
    for r in MONTHLY.iter().chain(std::iter::once(&totals)) {
        table = table.push(table_row([
            r.month.to_string(),
            r.patients.to_string(),
            r.appointments.to_string(),
            analytics::format_revenue(r.revenue),
        ]));
    }
    table.into()
}

fn status_distribution() -> Element<'static, Message> {
    let mut list = column().spacing(6);
    for share in PATIENT_STATUS {
        let pct = analytics::status_percentage(PATIENT_STATUS, share.value);
        list = list.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(share.name).width(Length::Fixed(80.0)))
                .push(bar(pct))
                .push(text::caption(format!("{} ({}%)", share.value, pct))),
        );
    }
    list.into()
}

fn appointment_types() -> Element<'static, Message> {
    let mut list = column().spacing(6);
    for share in APPOINTMENT_TYPES {
        list = list.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(share.kind).width(Length::Fixed(100.0)))
                .push(bar(share.percentage.into()))
                .push(text::caption(format!("{} ({}%)", share.count, share.percentage))),
        );
    }
    list.into()
}

fn weekly_activity() -> Element<'static, Message> {
    let mut list = column().spacing(4).push(table_row([
        fl!("analytics-day"),
        fl!("analytics-consultations"),
        fl!("calendar-surgeries"),
        fl!("analytics-followups"),
    ]));
    for day in WEEKLY {
        list = list.push(table_row([
            day.day.to_string(),
            day.consultations.to_string(),
            day.surgeries.to_string(),
            day.followups.to_string(),
        ]));
    }
    if let Some(busiest) = analytics::busiest_day(WEEKLY) {
        list = list.push(text::caption(fl!(
            "analytics-busiest-day",
            day = busiest.day,
            visits = busiest.total()
        )));
    }
    list.into()
}
