use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, text};
use cosmic::{Element, theme};

use healthplus::core::activity::Activity;
use healthplus::core::patient::initials;

use super::chip::badge;
use crate::message::Message;

/// Feed of who-did-what entries, newest first as given.
pub fn recent_activity(title: String, activities: &[Activity]) -> Element<'static, Message> {
    let mut content = column().spacing(12).push(text::title4(title));

    for activity in activities {
        let mut detail = column()
            .spacing(2)
            .width(Length::Fill)
            .push(
                row()
                    .spacing(8)
                    .push(text::body(activity.who.clone()).width(Length::Fill))
                    .push(text::caption(activity.when.clone())),
            );
        if let Some(role) = &activity.role {
            detail = detail.push(text::caption(role.clone()));
        }
        detail = detail
            .push(text::body(activity.action.clone()))
            .push(badge(activity.kind.label()));

        content = content.push(
            row()
                .spacing(12)
                .align_y(Alignment::Start)
                .push(avatar(&activity.who))
                .push(detail),
        );
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

/// Initials in a round-ish badge, standing in for a profile picture.
pub fn avatar(name: &str) -> Element<'static, Message> {
    container(text::body(initials(name)))
        .padding([8, 10])
        .class(theme::Container::Card)
        .into()
}
