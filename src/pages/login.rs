use cosmic::iced::Length;
use cosmic::widget::{button, column, container, text, text_input};
use cosmic::{Element, theme};

use healthplus::core::form::LoginForm;
use healthplus::route::Route;

use crate::fl;
use crate::message::Message;

#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginForm,
    pub error: Option<String>,
}

pub fn login_view(page: &LoginPage) -> Element<'static, Message> {
    let mut content = column()
        .spacing(12)
        .width(Length::Fixed(360.0))
        .push(text::title3(fl!("login-title")))
        .push(
            text_input::text_input(fl!("field-email"), page.form.email.clone())
                .on_input(Message::LoginEmail)
                .on_submit(|_| Message::LoginSubmit)
                .width(Length::Fill),
        )
        .push(
            text_input::secure_input(fl!("field-password"), page.form.password.clone(), None::<Message>, true)
                .on_input(Message::LoginPassword)
                .on_submit(|_| Message::LoginSubmit)
                .width(Length::Fill),
        );

    if let Some(error) = &page.error {
        content = content.push(text::body(error.clone()));
    }

    content = content
        .push(
            button::suggested(fl!("login-submit"))
                .on_press(Message::LoginSubmit)
                .width(Length::Fill),
        )
        .push(
            button::custom(text::caption(fl!("login-to-register")))
                .class(theme::Button::Link)
                .on_press(Message::Navigate(Route::Register)),
        );

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
