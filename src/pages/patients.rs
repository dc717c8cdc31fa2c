use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, row, text, text_input};
use cosmic::{Element, theme};

use healthplus::core::catalog;
use healthplus::core::form::PatientForm;
use healthplus::core::list_view::ListViewController;
use healthplus::core::patient::{Gender, Patient, PatientStatus};

use super::{empty_state, page, page_header, search_box};
use crate::components::chip::{badge, category_chips};
use crate::components::recent_activity::avatar;
use crate::fl;
use crate::message::{Message, PatientField};

fn status_chips() -> Vec<(PatientStatus, String)> {
    vec![
        (PatientStatus::Active, fl!("patient-active")),
        (PatientStatus::Critical, fl!("patient-critical")),
        (PatientStatus::Stable, fl!("patient-stable")),
    ]
}

pub struct PatientsPage {
    pub list: ListViewController<Patient>,
    /// Open add-patient form, if any.
    pub form: Option<PatientForm>,
    pub error: Option<String>,
}

impl PatientsPage {
    pub fn new() -> Self {
        Self {
            list: ListViewController::new(catalog::patients()),
            form: None,
            error: None,
        }
    }

    pub fn set(&mut self, field: PatientField, value: String) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let slot = match field {
            PatientField::Name => &mut form.name,
            PatientField::Age => &mut form.age,
            PatientField::Email => &mut form.email,
            PatientField::Phone => &mut form.phone,
            PatientField::Address => &mut form.address,
            PatientField::Condition => &mut form.condition,
            PatientField::LastVisit => &mut form.last_visit,
            PatientField::NextAppointment => &mut form.next_appointment,
        };
        *slot = value;
    }
}

pub fn patients_view(state: &PatientsPage) -> Element<'static, Message> {
    let patients = state.list.filtered();
    let subtitle = fl!("patients-count", count = patients.len());

    let header = row()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(container(page_header("system-users-symbolic", &fl!("route-patients"), &subtitle)).width(Length::Fill))
        .push(button::suggested(fl!("patients-add")).on_press(Message::OpenPatientForm));

    let mut content = column()
        .spacing(12)
        .push(header)
        .push(search_box(fl!("patients-search"), state.list.query()))
        .push(category_chips(&status_chips(), state.list.category(), Message::PatientFilter));

    if let Some(form) = &state.form {
        content = content.push(patient_form(form, state.error.as_deref()));
    }

    if patients.is_empty() {
        content = content.push(empty_state(fl!("patients-empty")));
    } else {
        for patient in patients {
            content = content.push(patient_card(patient));
        }
    }

    page(content)
}

fn patient_card(patient: &Patient) -> Element<'static, Message> {
    let date = |d: Option<NaiveDate>| d.map(|d| d.format("%b %-d, %Y").to_string()).unwrap_or_else(|| "-".into());

    let heading = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(
            column()
                .width(Length::Fill)
                .push(text::body(patient.name.clone()))
                .push(text::caption(fl!("patients-age-gender", age = patient.age, gender = patient.gender.label()))),
        )
        .push(badge(patient.status.label()));

    let details = column()
        .spacing(2)
        .push(text::caption(patient.condition.clone()))
        .push(text::caption(patient.email.clone()))
        .push(text::caption(patient.phone.clone()))
        .push(text::caption(patient.address.clone()))
        .push(text::caption(fl!(
            "patients-visits",
            last = date(patient.last_visit),
            next = date(patient.next_appointment)
        )));

    container(
        row()
            .spacing(12)
            .align_y(Alignment::Start)
            .push(avatar(&patient.name))
            .push(column().spacing(4).width(Length::Fill).push(heading).push(details)),
    )
    .padding(12)
    .width(Length::Fill)
    .class(theme::Container::Card)
    .into()
}

fn patient_form(form: &PatientForm, error: Option<&str>) -> Element<'static, Message> {
    let input = |label: String, value: &str, field: PatientField| {
        column()
            .spacing(2)
            .width(Length::Fill)
            .push(text::caption(label.clone()))
            .push(
                text_input::text_input(label, value.to_string())
                    .on_input(move |v| Message::PatientInput(field, v))
                    .on_submit(|_| Message::SubmitPatient)
                    .width(Length::Fill),
            )
    };

    let genders: Vec<String> = Gender::ALL.iter().map(|g| g.label().to_string()).collect();
    let gender_idx = Gender::ALL.iter().position(|g| *g == form.gender);
    let statuses: Vec<String> = PatientStatus::ALL.iter().map(|s| s.label().to_string()).collect();
    let status_idx = PatientStatus::ALL.iter().position(|s| *s == form.status);

    let mut content = column()
        .spacing(8)
        .push(text::title4(fl!("patients-add")))
        .push(
            row()
                .spacing(8)
                .push(input(fl!("field-name"), &form.name, PatientField::Name))
                .push(input(fl!("patients-age"), &form.age, PatientField::Age)),
        )
        .push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::caption(fl!("patients-gender")))
                .push(dropdown(genders, gender_idx, |idx| {
                    Message::PatientGender(Gender::ALL.get(idx).copied().unwrap_or(Gender::Other))
                }))
                .push(text::caption(fl!("patients-status")))
                .push(dropdown(statuses, status_idx, |idx| {
                    Message::PatientStatusSelected(PatientStatus::ALL.get(idx).copied().unwrap_or_default())
                })),
        )
        .push(
            row()
                .spacing(8)
                .push(input(fl!("field-email"), &form.email, PatientField::Email))
                .push(input(fl!("field-phone"), &form.phone, PatientField::Phone)),
        )
        .push(input(fl!("patients-address"), &form.address, PatientField::Address))
        .push(input(fl!("patients-condition"), &form.condition, PatientField::Condition))
        .push(
            row()
                .spacing(8)
                .push(input(fl!("patients-last-visit"), &form.last_visit, PatientField::LastVisit))
                .push(input(
                    fl!("patients-next-appointment"),
                    &form.next_appointment,
                    PatientField::NextAppointment,
                )),
        );

    if let Some(error) = error {
        content = content.push(text::body(error.to_string()));
    }

    content = content.push(
        row()
            .spacing(8)
            .push(button::standard(fl!("cancel")).on_press(Message::ClosePatientForm))
            .push(button::suggested(fl!("patients-add")).on_press(Message::SubmitPatient)),
    );

    container(content)
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
