pub mod analytics;
pub mod calendar;
pub mod create_task;
pub mod dashboard;
pub mod important;
pub mod inbox;
pub mod login;
pub mod not_found;
pub mod patients;
pub mod register;
pub mod settings;
pub mod trash;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, icon, row, scrollable, text, text_input};
use cosmic::Element;

use healthplus::route::Route;

use crate::fl;
use crate::message::Message;

/// Inline outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn view(&self) -> Element<'static, Message> {
        match self {
            Self::Success(msg) => text::body(format!("\u{2713} {}", msg)).into(),
            Self::Error(msg) => text::body(format!("\u{2717} {}", msg)).into(),
        }
    }
}

/// Page heading with icon, title and subtitle.
pub fn page_header(icon_name: &'static str, title: &str, subtitle: &str) -> Element<'static, Message> {
    row()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(icon::from_name(icon_name).size(32).icon())
        .push(
            column()
                .spacing(2)
                .push(text::title3(title.to_string()))
                .push(text::caption(subtitle.to_string())),
        )
        .into()
}

pub fn search_box(placeholder: String, query: &str) -> Element<'static, Message> {
    text_input::text_input(placeholder, query.to_string())
        .on_input(Message::SearchChanged)
        .width(Length::Fill)
        .into()
}

pub fn empty_state(msg: String) -> Element<'static, Message> {
    container(text::body(msg))
        .padding(32)
        .center_x(Length::Fill)
        .width(Length::Fill)
        .into()
}

/// Scrollable page body with the usual padding.
pub fn page<'a>(content: column::Column<'a, Message>) -> Element<'a, Message> {
    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Localized name of a route, as shown in the sidebar and header.
pub fn route_title(route: &Route) -> String {
    match route {
        Route::Login => fl!("route-login"),
        Route::Register => fl!("route-register"),
        Route::Logout => fl!("route-logout"),
        Route::Dashboard => fl!("route-dashboard"),
        Route::CreateTask => fl!("route-create-task"),
        Route::Inbox => fl!("route-inbox"),
        Route::Important => fl!("route-important"),
        Route::Calendar => fl!("route-calendar"),
        Route::Patients => fl!("route-patients"),
        Route::Analytics => fl!("route-analytics"),
        Route::Trash => fl!("route-trash"),
        Route::Settings => fl!("route-settings"),
        Route::NotFound(_) => fl!("route-not-found"),
    }
}
