use cosmic::iced::Length;
use cosmic::widget::{button, column, container, text};
use cosmic::Element;

use healthplus::route::Route;

use crate::fl;
use crate::message::Message;

pub fn not_found_view(path: &str) -> Element<'static, Message> {
    let content = column()
        .spacing(12)
        .push(text::title3("404"))
        .push(text::body(fl!("not-found-message", path = path.to_string())))
        .push(button::standard(fl!("not-found-home")).on_press(Message::Navigate(Route::Dashboard)));

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
