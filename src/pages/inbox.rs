use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::list_view::ListViewController;
use healthplus::core::mail::{InboxMessage, MessagePriority};

use super::{empty_state, page, page_header, search_box};
use crate::components::chip::{badge, category_chips, star};
use crate::components::recent_activity::avatar;
use crate::fl;
use crate::message::Message;

pub type InboxPage = ListViewController<InboxMessage>;

pub fn inbox_view(view: &InboxPage) -> Element<'static, Message> {
    let messages = view.filtered();

    let mut content = column()
        .spacing(12)
        .push(page_header(
            "mail-folder-inbox-symbolic",
            &fl!("route-inbox"),
            &fl!("inbox-total", count = messages.len()),
        ))
        .push(search_box(fl!("inbox-search"), view.query()))
        .push(category_chips(
            &[(MessagePriority::High, fl!("inbox-high-priority"))],
            view.category(),
            Message::InboxFilter,
        ));

    let mut toolbar = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(checkbox("", view.is_all_selected()).on_toggle(|_| Message::ToggleSelectAll));
    if !view.selection().is_empty() {
        toolbar = toolbar
            .push(text::caption(fl!("inbox-selected", count = view.selection().len())))
            .push(button::icon(icon::from_name("starred-symbolic")).on_press(Message::StarSelected))
            .push(button::icon(icon::from_name("mail-archive-symbolic")).on_press(Message::ClearSelection))
            .push(button::icon(icon::from_name("user-trash-symbolic")).on_press(Message::ClearSelection));
    }
    content = content.push(toolbar);

    if messages.is_empty() {
        return page(content.push(empty_state(fl!("inbox-empty"))));
    }

    for message in messages {
        content = content.push(message_row(message, view.is_selected(message.id)));
    }

    page(content)
}

fn message_row(message: &InboxMessage, selected: bool) -> Element<'static, Message> {
    let id = message.id;

    let subject = if message.read {
        text::body(message.subject.clone())
    } else {
        text::body(message.subject.clone()).font(cosmic::iced::Font {
            weight: cosmic::iced::font::Weight::Bold,
            ..Default::default()
        })
    };

    let mut heading = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::body(message.sender.name.clone()))
        .push(text::caption(message.sender.role.clone()));
    if message.priority == MessagePriority::High {
        heading = heading.push(badge(fl!("inbox-high-priority")));
    }

    let detail = column()
        .spacing(2)
        .width(Length::Fill)
        .push(heading)
        .push(subject)
        .push(text::caption(message.preview.clone()));

    let line = row()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(checkbox("", selected).on_toggle(move |_| Message::ToggleSelect(id)))
        .push(avatar(&message.sender.name))
        .push(detail)
        .push(star(message.starred))
        .push(text::caption(message.received.to_string()));

    let card = container(line).padding(12).width(Length::Fill);
    if selected {
        card.class(theme::Container::Card).into()
    } else {
        card.into()
    }
}
