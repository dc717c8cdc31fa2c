use cosmic::widget::{button, flex_row, icon, text};
use cosmic::{Element, theme};

use healthplus::core::list_view::CategoryFilter;

use crate::fl;
use crate::message::Message;

/// Small read-only label, e.g. a priority or status badge.
pub fn badge(label: impl Into<String>) -> Element<'static, Message> {
    button::custom(text::caption(label.into()).size(11.0))
        .padding([2, 8])
        .class(theme::Button::Standard)
        .into()
}

/// Star marker; filled when `on`.
pub fn star(on: bool) -> Element<'static, Message> {
    let name = if on { "starred-symbolic" } else { "non-starred-symbolic" };
    icon::from_name(name).size(16).icon().into()
}

/// A row of category chips with "All" first. The active chip is highlighted.
pub fn category_chips<C: Copy + Eq + 'static>(
    options: &[(C, String)],
    current: CategoryFilter<C>,
    on_select: fn(CategoryFilter<C>) -> Message,
) -> Element<'static, Message> {
    let mut chips: Vec<Element<'static, Message>> = Vec::with_capacity(options.len() + 1);
    chips.push(chip(fl!("filter-all"), current == CategoryFilter::All, on_select(CategoryFilter::All)));
    for (category, label) in options {
        let filter = CategoryFilter::Only(*category);
        chips.push(chip(label.clone(), current == filter, on_select(filter)));
    }
    flex_row(chips).row_spacing(4).column_spacing(4).into()
}

fn chip(label: String, active: bool, message: Message) -> Element<'static, Message> {
    let class = if active {
        theme::Button::Suggested
    } else {
        theme::Button::Text
    };
    button::custom(text::caption(label).size(12.0))
        .padding([2, 10])
        .class(class)
        .on_press(message)
        .into()
}
