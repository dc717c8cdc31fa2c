use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, row, text, text_input};
use cosmic::{Element, theme};

use healthplus::config::HealthPlusConfig;
use healthplus::core::preferences::{Preferences, ProfileField, RETENTION_CHOICES, Section, Toggle};
use healthplus::core::timer::{BackupRun, ScopedTimer};

use super::{page, page_header};
use crate::fl;
use crate::message::Message;

#[derive(Debug, Default)]
pub struct SettingsPage {
    pub prefs: Preferences,
    pub backup: BackupRun,
    /// Next backup progress tick. Dropping the page aborts it.
    pub timer: ScopedTimer,
    pub toast: Option<String>,
}

pub fn settings_view(state: &SettingsPage, config: &HealthPlusConfig) -> Element<'static, Message> {
    let prefs = &state.prefs;
    let mut content = column()
        .spacing(12)
        .push(page_header(
            "preferences-system-symbolic",
            &fl!("route-settings"),
            &fl!("settings-subtitle"),
        ));

    if let Some(toast) = &state.toast {
        content = content.push(
            container(
                row()
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .push(text::body(format!("\u{2713} {}", toast)).width(Length::Fill))
                    .push(button::text(fl!("dismiss")).on_press(Message::DismissToast)),
            )
            .padding(8)
            .width(Length::Fill)
            .class(theme::Container::Card),
        );
    }

    // --- Profile ---
    let mut profile = column().spacing(8);
    for field in ProfileField::ALL {
        let field = *field;
        profile = profile.push(
            column()
                .spacing(2)
                .push(text::caption(field.label()))
                .push(
                    text_input::text_input(field.label(), prefs.profile(field).to_string())
                        .on_input(move |v| Message::ProfileInput(field, v))
                        .width(Length::Fill),
                ),
        );
    }
    content = content.push(section_card(fl!("settings-profile"), profile.into()));

    // --- Toggle sections ---
    for section in Section::ALL {
        let mut rows = column().spacing(8);
        for toggle in Toggle::in_section(*section) {
            rows = rows.push(toggle_row(toggle.label().to_string(), prefs.get(toggle), Message::TogglePreference(toggle)));
        }
        if *section == Section::Data {
            rows = rows.push(retention_row(prefs.data_retention_months));
            rows = rows.push(backup_row(state.backup));
        }
        content = content.push(section_card(section.title().to_string(), rows.into()));
    }

    // --- Debug logging ---
    content = content.push(section_card(
        fl!("settings-diagnostics"),
        toggle_row(fl!("settings-debug-logging"), config.debug_logging, Message::ToggleDebugLogging),
    ));

    content = content.push(
        row()
            .push(container(text::caption("")).width(Length::Fill))
            .push(button::suggested(fl!("settings-save")).on_press(Message::SaveSettings)),
    );

    page(content)
}

fn section_card(title: String, body: Element<'static, Message>) -> Element<'static, Message> {
    container(column().spacing(8).push(text::title4(title)).push(body))
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn toggle_row(label: String, on: bool, message: Message) -> Element<'static, Message> {
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::body(label).width(Length::Fill))
        .push(cosmic::widget::toggler(on).on_toggle(move |_| message.clone()))
        .into()
}

fn retention_row(months: u8) -> Element<'static, Message> {
    let labels: Vec<String> = RETENTION_CHOICES.iter().map(|m| fl!("settings-retention-months", months = *m)).collect();
    let selected = RETENTION_CHOICES.iter().position(|m| *m == months);
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::body(fl!("settings-retention")).width(Length::Fill))
        .push(
            dropdown(labels, selected, |idx| {
                Message::SetRetention(RETENTION_CHOICES.get(idx).copied().unwrap_or(12))
            })
            .width(Length::Fixed(140.0)),
        )
        .into()
}

fn backup_row(backup: BackupRun) -> Element<'static, Message> {
    let status = match backup {
        BackupRun::Idle => fl!("backup-idle"),
        BackupRun::Running(p) => fl!("backup-running", percent = p),
        BackupRun::Complete => fl!("backup-complete"),
    };
    let action = if backup.is_running() {
        button::standard(fl!("backup-in-progress"))
    } else {
        button::standard(fl!("backup-run")).on_press(Message::RunBackup)
    };
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::body(status).width(Length::Fill))
        .push(action)
        .into()
}
