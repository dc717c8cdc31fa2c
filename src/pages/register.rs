use cosmic::iced::Length;
use cosmic::widget::{button, column, container, text, text_input};
use cosmic::{Element, theme};

use healthplus::core::form::RegistrationForm;
use healthplus::route::Route;

use crate::fl;
use crate::message::{Message, RegisterField};

#[derive(Debug, Default)]
pub struct RegisterPage {
    pub form: RegistrationForm,
    pub error: Option<String>,
}

impl RegisterPage {
    pub fn set(&mut self, field: RegisterField, value: String) {
        let slot = match field {
            RegisterField::Name => &mut self.form.name,
            RegisterField::Email => &mut self.form.email,
            RegisterField::Password => &mut self.form.password,
            RegisterField::Avatar => &mut self.form.avatar,
        };
        *slot = value;
    }
}

pub fn register_view(page: &RegisterPage) -> Element<'static, Message> {
    let form = &page.form;
    let input = |placeholder: String, value: &str, field: RegisterField| {
        text_input::text_input(placeholder, value.to_string())
            .on_input(move |v| Message::RegisterInput(field, v))
            .on_submit(|_| Message::RegisterSubmit)
            .width(Length::Fill)
    };

    let mut content = column()
        .spacing(12)
        .width(Length::Fixed(360.0))
        .push(text::title3(fl!("register-title")))
        .push(input(fl!("field-name"), &form.name, RegisterField::Name))
        .push(input(fl!("field-email"), &form.email, RegisterField::Email))
        .push(
            text_input::secure_input(fl!("field-password"), form.password.clone(), None::<Message>, true)
                .on_input(|v| Message::RegisterInput(RegisterField::Password, v))
                .on_submit(|_| Message::RegisterSubmit)
                .width(Length::Fill),
        )
        .push(input(fl!("register-avatar"), &form.avatar, RegisterField::Avatar));

    if let Some(error) = &page.error {
        content = content.push(text::body(error.clone()));
    }

    content = content
        .push(
            button::suggested(fl!("register-submit"))
                .on_press(Message::RegisterSubmit)
                .width(Length::Fill),
        )
        .push(
            button::custom(text::caption(fl!("register-to-login")))
                .class(theme::Button::Link)
                .on_press(Message::Navigate(Route::Login)),
        );

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
