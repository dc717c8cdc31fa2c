use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::analytics::{StatCard, Trend};

use crate::message::Message;

pub fn stats_card(card: &StatCard) -> Element<'static, Message> {
    let arrow = match card.trend {
        Trend::Positive => "\u{2197} ",
        Trend::Negative => "\u{2198} ",
        Trend::Neutral => "",
    };

    let body = column()
        .spacing(4)
        .width(Length::Fill)
        .push(text::caption(card.title))
        .push(text::title3(card.value.clone()))
        .push(text::caption(format!("{}{}", arrow, card.change)));

    container(
        row()
            .spacing(12)
            .align_y(Alignment::Center)
            .push(body)
            .push(icon::from_name(card.icon_name).size(24).icon()),
    )
    .padding(16)
    .width(Length::Fill)
    .class(theme::Container::Card)
    .into()
}

/// Lay cards out in rows of `per_row`.
pub fn stats_grid(cards: &[StatCard], per_row: usize) -> Element<'static, Message> {
    let mut grid = column().spacing(12);
    for chunk in cards.chunks(per_row.max(1)) {
        let mut line = row().spacing(12);
        for card in chunk {
            line = line.push(stats_card(card));
        }
        grid = grid.push(line);
    }
    grid.into()
}
