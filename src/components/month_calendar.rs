use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::calendar::MonthCursor;

use crate::fl;
use crate::message::Message;

/// Month grid, Sunday first. Days in `marked` get a dot under the number.
pub fn month_calendar(
    cursor: &MonthCursor,
    marked: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> Element<'static, Message> {
    let month_label = cursor.displayed_month.format("%B %Y").to_string();

    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(button::icon(icon::from_name("go-previous-symbolic")).on_press(Message::CalendarPrevMonth))
        .push(text::body(month_label).width(Length::Fill).center())
        .push(button::icon(icon::from_name("go-next-symbolic")).on_press(Message::CalendarNextMonth));

    let mut day_labels = row().spacing(0);
    let labels = [
        fl!("weekday-su"),
        fl!("weekday-mo"),
        fl!("weekday-tu"),
        fl!("weekday-we"),
        fl!("weekday-th"),
        fl!("weekday-fr"),
        fl!("weekday-sa"),
    ];
    for label in labels {
        day_labels = day_labels.push(day_label(label));
    }

    let mut grid = column().spacing(2).push(header).push(day_labels);
    let grid_start = cursor.grid_start();

    for week in 0..6 {
        let mut week_row = row().spacing(0);
        let mut any_in_month = false;

        for day_of_week in 0..7 {
            let date = grid_start + Duration::days(week * 7 + day_of_week);
            let cell: Element<'static, Message> = if !cursor.in_displayed_month(date) {
                container(text::body(" "))
                    .width(Length::FillPortion(1))
                    .center_x(Length::FillPortion(1))
                    .into()
            } else {
                any_in_month = true;
                day_cell(date, marked.contains(&date), date == today, cursor.selected_day == Some(date))
            };
            week_row = week_row.push(cell);
        }

        if any_in_month {
            grid = grid.push(week_row);
        }
    }

    container(grid).width(Length::Fill).padding(8).into()
}

fn day_cell(date: NaiveDate, is_marked: bool, is_today: bool, is_selected: bool) -> Element<'static, Message> {
    let label = if is_marked {
        format!("{}\n·", date.day())
    } else {
        format!("{}\n ", date.day())
    };

    let txt = if is_today {
        text::body(label).font(cosmic::iced::Font {
            weight: cosmic::iced::font::Weight::Bold,
            ..Default::default()
        })
    } else {
        text::body(label)
    };

    let class = if is_selected {
        theme::Button::Suggested
    } else {
        theme::Button::Text
    };

    button::custom(container(txt.center()).center_x(Length::Fill))
        .class(class)
        .on_press(Message::CalendarSelectDay(date))
        .width(Length::FillPortion(1))
        .into()
}

fn day_label(label: String) -> Element<'static, Message> {
    container(text::caption(label).center())
        .width(Length::FillPortion(1))
        .center_x(Length::FillPortion(1))
        .into()
}
