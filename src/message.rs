use chrono::NaiveDate;
use uuid::Uuid;

use healthplus::core::list_view::CategoryFilter;
use healthplus::core::mail::MessagePriority;
use healthplus::core::patient::{Gender, PatientStatus};
use healthplus::core::preferences::{ProfileField, Toggle};
use healthplus::core::task::{Priority, TaskStatus};
use healthplus::core::trash::ItemKind;
use healthplus::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    Avatar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    Name,
    Age,
    Email,
    Phone,
    Address,
    Condition,
    LastVisit,
    NextAppointment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    DueDate,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Route),

    // Login / registration
    LoginEmail(String),
    LoginPassword(String),
    LoginSubmit,
    RegisterInput(RegisterField, String),
    RegisterSubmit,

    // Shared by the list pages
    SearchChanged(String),
    ToggleSelect(Uuid),
    ToggleSelectAll,
    ClearSelection,
    StarSelected,

    // Category chips
    InboxFilter(CategoryFilter<MessagePriority>),
    ImportantFilter(CategoryFilter<TaskStatus>),
    PatientFilter(CategoryFilter<PatientStatus>),
    TrashFilter(CategoryFilter<ItemKind>),

    // Task status (dashboard and important)
    ToggleTaskStatus(Uuid),

    // Calendar grid
    CalendarPrevMonth,
    CalendarNextMonth,
    CalendarSelectDay(NaiveDate),

    // Patients
    OpenPatientForm,
    ClosePatientForm,
    PatientInput(PatientField, String),
    PatientGender(Gender),
    PatientStatusSelected(PatientStatus),
    SubmitPatient,

    // Create task
    TaskInput(TaskField, String),
    TaskAssignee(usize),
    TaskPriority(Priority),
    SubmitTask,
    TaskSubmitted(Option<u64>),

    // Settings
    ProfileInput(ProfileField, String),
    TogglePreference(Toggle),
    SetRetention(u8),
    SaveSettings,
    RunBackup,
    BackupTick(Option<u64>),
    ToggleDebugLogging,
    DismissToast,
}
