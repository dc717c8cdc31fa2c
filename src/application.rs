use chrono::{Local, NaiveDate};

use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::Alignment;
use cosmic::widget::{icon, nav_bar, row, text};
use cosmic::{Application, Element, executor};

use healthplus::config::HealthPlusConfig;
use healthplus::core::calendar::MonthCursor;
use healthplus::core::catalog;
use healthplus::core::mail;
use healthplus::core::form::PatientForm;
use healthplus::core::list_view::ListViewController;
use healthplus::core::timer::{self, BackupRun};
use healthplus::route::{self, Route};
use healthplus::session::{self, Account, SessionStore};

use crate::components::recent_activity::avatar;
use crate::fl;
use crate::message::Message;
use crate::pages::{self, Notice};
use crate::pages::calendar::CalendarPage;
use crate::pages::create_task::CreateTaskPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::inbox::InboxPage;
use crate::pages::important::ImportantPage;
use crate::pages::login::LoginPage;
use crate::pages::patients::PatientsPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::pages::trash::TrashPage;

pub const APP_ID: &str = "dev.healthplus.app";

/// State of the page on screen. Rebuilt from seed data on every navigation,
/// so leaving a page drops its selection, its forms and its pending timers.
pub enum PageState {
    Login(LoginPage),
    Register(RegisterPage),
    Dashboard(DashboardPage),
    CreateTask(CreateTaskPage),
    Inbox(InboxPage),
    Important(ImportantPage),
    Calendar(CalendarPage),
    Patients(PatientsPage),
    Analytics,
    Trash(TrashPage),
    Settings(SettingsPage),
    NotFound(String),
}

impl PageState {
    fn for_route(route: &Route, today: NaiveDate) -> Self {
        match route {
            // Logout never renders; navigation turns it into Login.
            Route::Login | Route::Logout => Self::Login(LoginPage::default()),
            Route::Register => Self::Register(RegisterPage::default()),
            Route::Dashboard => Self::Dashboard(DashboardPage::new(today)),
            Route::CreateTask => Self::CreateTask(CreateTaskPage::default()),
            Route::Inbox => Self::Inbox(ListViewController::new(catalog::inbox_messages())),
            Route::Important => Self::Important(ListViewController::new(catalog::important_tasks())),
            Route::Calendar => Self::Calendar(CalendarPage::new(today)),
            Route::Patients => Self::Patients(PatientsPage::new()),
            Route::Analytics => Self::Analytics,
            Route::Trash => Self::Trash(TrashPage::new(Local::now().naive_local())),
            Route::Settings => Self::Settings(SettingsPage::default()),
            Route::NotFound(path) => Self::NotFound(path.clone()),
        }
    }
}

/// Run `$body` against the list controller of whichever list page is shown.
macro_rules! with_list {
    ($page:expr, $list:ident => $body:expr) => {
        match $page {
            PageState::Inbox($list) => {
                $body;
            }
            PageState::Important($list) => {
                $body;
            }
            PageState::Patients(PatientsPage { list: $list, .. }) => {
                $body;
            }
            PageState::Trash(TrashPage { list: $list, .. }) => {
                $body;
            }
            _ => {}
        }
    };
}

pub struct HealthPlus {
    core: Core,
    nav_model: nav_bar::Model,
    config: HealthPlusConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    session: Box<dyn SessionStore>,
    doctor: Option<Account>,
    route: Route,
    page: PageState,
    today: NaiveDate,
}

pub struct Flags {
    pub config: HealthPlusConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
    pub session: Box<dyn SessionStore>,
    pub start_path: String,
}

impl Application for HealthPlus {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        // Build sidebar navigation model with section dividers
        let mut nav_model = nav_bar::Model::default();
        for route in Route::SIDEBAR {
            let item = nav_model
                .insert()
                .text(pages::route_title(route))
                .icon(icon::from_name(route.icon_name()).icon())
                .data(route.clone());
            if Route::SECTION_STARTS.contains(route) {
                item.divider_above(true);
            }
        }

        let today = Local::now().date_naive();
        let doctor = flags.session.get();

        let mut app = Self {
            core,
            nav_model,
            config: flags.config,
            cosmic_config: flags.cosmic_config,
            session: flags.session,
            doctor,
            route: Route::Login,
            page: PageState::Login(LoginPage::default()),
            today,
        };
        app.navigate(Route::parse(&flags.start_path));

        (app, CosmicTask::none())
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        if self.shows_chrome() {
            Some(&self.nav_model)
        } else {
            None
        }
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> CosmicTask<Message> {
        if let Some(route) = self.nav_model.data::<Route>(id).cloned() {
            self.navigate(route);
        }
        CosmicTask::none()
    }

    fn header_center(&self) -> Vec<Element<'_, Message>> {
        vec![text::title4(pages::route_title(&self.route)).into()]
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        let Some(doctor) = self.doctor.as_ref().filter(|_| self.shows_chrome()) else {
            return Vec::new();
        };
        vec![
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(fl!("welcome", name = doctor.name.clone())))
                .push(avatar(&doctor.name))
                .into(),
        ]
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::Navigate(route) => {
                self.navigate(route);
            }

            // --- Login / registration ---
            Message::LoginEmail(value) => {
                if let PageState::Login(page) = &mut self.page {
                    page.form.email = value;
                }
            }

            Message::LoginPassword(value) => {
                if let PageState::Login(page) = &mut self.page {
                    page.form.password = value;
                }
            }

            Message::LoginSubmit => {
                let PageState::Login(page) = &mut self.page else {
                    return CosmicTask::none();
                };
                match session::login(self.session.as_mut(), &page.form.email, &page.form.password) {
                    Ok(account) => {
                        self.doctor = Some(account);
                        self.navigate(Route::Dashboard);
                    }
                    Err(e) => page.error = Some(e.to_string()),
                }
            }

            Message::RegisterInput(field, value) => {
                if let PageState::Register(page) = &mut self.page {
                    page.set(field, value);
                }
            }

            Message::RegisterSubmit => {
                let PageState::Register(page) = &mut self.page else {
                    return CosmicTask::none();
                };
                match session::register(self.session.as_mut(), &page.form) {
                    Ok(account) => {
                        self.doctor = Some(account);
                        self.navigate(Route::Login);
                    }
                    Err(e) => page.error = Some(e.to_string()),
                }
            }

            // --- List pages ---
            Message::SearchChanged(query) => {
                with_list!(&mut self.page, list => list.set_query(query));
            }

            Message::ToggleSelect(id) => {
                with_list!(&mut self.page, list => list.toggle_select(id));
            }

            Message::ToggleSelectAll => {
                with_list!(&mut self.page, list => list.toggle_select_all());
            }

            Message::ClearSelection => {
                with_list!(&mut self.page, list => list.clear_selection());
            }

            Message::StarSelected => {
                if let PageState::Inbox(list) = &mut self.page {
                    let count = mail::star_selected(list);
                    log::debug!("Starred {} messages", count);
                }
            }

            Message::InboxFilter(filter) => {
                if let PageState::Inbox(list) = &mut self.page {
                    list.set_category(filter);
                }
            }

            Message::ImportantFilter(filter) => {
                if let PageState::Important(list) = &mut self.page {
                    list.set_category(filter);
                }
            }

            Message::PatientFilter(filter) => {
                if let PageState::Patients(page) = &mut self.page {
                    page.list.set_category(filter);
                }
            }

            Message::TrashFilter(filter) => {
                if let PageState::Trash(page) = &mut self.page {
                    page.list.set_category(filter);
                }
            }

            Message::ToggleTaskStatus(id) => match &mut self.page {
                PageState::Dashboard(page) => page.toggle_task(id),
                PageState::Important(list) => {
                    list.update(id, |task| task.toggle_status());
                }
                _ => {}
            },

            // --- Calendar ---
            Message::CalendarPrevMonth => {
                if let Some(cursor) = self.month_cursor() {
                    cursor.prev_month();
                }
            }

            Message::CalendarNextMonth => {
                if let Some(cursor) = self.month_cursor() {
                    cursor.next_month();
                }
            }

            Message::CalendarSelectDay(date) => {
                if let Some(cursor) = self.month_cursor() {
                    cursor.select_day(date);
                }
            }

            // --- Patients ---
            Message::OpenPatientForm => {
                if let PageState::Patients(page) = &mut self.page {
                    page.form = Some(PatientForm::new(self.today));
                    page.error = None;
                }
            }

            Message::ClosePatientForm => {
                if let PageState::Patients(page) = &mut self.page {
                    page.form = None;
                    page.error = None;
                }
            }

            Message::PatientInput(field, value) => {
                if let PageState::Patients(page) = &mut self.page {
                    page.set(field, value);
                }
            }

            Message::PatientGender(gender) => {
                if let PageState::Patients(PatientsPage { form: Some(form), .. }) = &mut self.page {
                    form.gender = gender;
                }
            }

            Message::PatientStatusSelected(status) => {
                if let PageState::Patients(PatientsPage { form: Some(form), .. }) = &mut self.page {
                    form.status = status;
                }
            }

            Message::SubmitPatient => {
                if let PageState::Patients(page) = &mut self.page {
                    let Some(form) = &page.form else {
                        return CosmicTask::none();
                    };
                    match form.validate() {
                        Ok(patient) => {
                            log::info!("Added patient {}", patient.name);
                            page.list.add(patient);
                            page.form = None;
                            page.error = None;
                        }
                        Err(e) => page.error = Some(e.to_string()),
                    }
                }
            }

            // --- Create task ---
            Message::TaskInput(field, value) => {
                if let PageState::CreateTask(page) = &mut self.page {
                    page.set(field, value);
                }
            }

            Message::TaskAssignee(idx) => {
                if let PageState::CreateTask(page) = &mut self.page {
                    page.set_assignee(idx);
                }
            }

            Message::TaskPriority(priority) => {
                if let PageState::CreateTask(page) = &mut self.page {
                    page.form.priority = priority;
                }
            }

            Message::SubmitTask => {
                let PageState::CreateTask(page) = &mut self.page else {
                    return CosmicTask::none();
                };
                if page.submitting() {
                    return CosmicTask::none();
                }
                match page.form.validate() {
                    Ok(task) => {
                        log::debug!("Submitting task '{}'", task.title);
                        page.notice = None;
                        return CosmicTask::perform(page.timer.arm(timer::TASK_SUBMIT_DELAY), |generation| {
                            cosmic::Action::App(Message::TaskSubmitted(generation))
                        });
                    }
                    Err(e) => page.notice = Some(Notice::Error(e.to_string())),
                }
            }

            Message::TaskSubmitted(generation) => {
                if let (PageState::CreateTask(page), Some(generation)) = (&mut self.page, generation) {
                    if page.timer.accept(generation) {
                        log::info!("Task '{}' created", page.form.title.trim());
                        page.form.reset();
                        page.notice = Some(Notice::Success(fl!("toast-task-created")));
                    }
                }
            }

            // --- Settings ---
            Message::ProfileInput(field, value) => {
                if let PageState::Settings(page) = &mut self.page {
                    page.prefs.set_profile(field, value);
                }
            }

            Message::TogglePreference(toggle) => {
                if let PageState::Settings(page) = &mut self.page {
                    page.prefs.toggle(toggle);
                }
            }

            Message::SetRetention(months) => {
                if let PageState::Settings(page) = &mut self.page {
                    page.prefs.set_retention(months);
                }
            }

            Message::SaveSettings => {
                if let PageState::Settings(page) = &mut self.page {
                    log::info!("Settings saved for {}", page.prefs.name);
                    page.toast = Some(fl!("toast-settings-saved"));
                }
            }

            Message::RunBackup => {
                let PageState::Settings(page) = &mut self.page else {
                    return CosmicTask::none();
                };
                if page.backup.is_running() {
                    return CosmicTask::none();
                }
                log::info!("Backup started");
                page.backup = BackupRun::start();
                page.toast = None;
                return CosmicTask::perform(page.timer.arm(timer::BACKUP_TICK), |generation| {
                    cosmic::Action::App(Message::BackupTick(generation))
                });
            }

            Message::BackupTick(generation) => {
                let (PageState::Settings(page), Some(generation)) = (&mut self.page, generation) else {
                    return CosmicTask::none();
                };
                if !page.timer.accept(generation) {
                    return CosmicTask::none();
                }
                page.backup = page.backup.step();
                if page.backup.is_running() {
                    return CosmicTask::perform(page.timer.arm(timer::BACKUP_TICK), |generation| {
                        cosmic::Action::App(Message::BackupTick(generation))
                    });
                }
                log::info!("Backup complete");
                page.toast = Some(fl!("toast-backup-complete"));
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                healthplus::set_debug_logging(self.config.debug_logging);
                log::info!("Debug logging {}", if self.config.debug_logging { "enabled" } else { "disabled" });
                self.save_config();
            }

            Message::DismissToast => {
                if let PageState::Settings(page) = &mut self.page {
                    page.toast = None;
                }
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.page {
            PageState::Login(page) => pages::login::login_view(page),
            PageState::Register(page) => pages::register::register_view(page),
            PageState::Dashboard(page) => {
                let name = self.doctor.as_ref().map(|d| d.name.as_str()).unwrap_or("Doctor");
                pages::dashboard::dashboard_view(page, name, self.today)
            }
            PageState::CreateTask(page) => pages::create_task::create_task_view(page),
            PageState::Inbox(list) => pages::inbox::inbox_view(list),
            PageState::Important(list) => pages::important::important_view(list, self.today),
            PageState::Calendar(page) => pages::calendar::calendar_view(page, self.today),
            PageState::Patients(page) => pages::patients::patients_view(page),
            PageState::Analytics => pages::analytics::analytics_view(),
            PageState::Trash(page) => pages::trash::trash_view(page),
            PageState::Settings(page) => pages::settings::settings_view(page, &self.config),
            PageState::NotFound(path) => pages::not_found::not_found_view(path),
        }
    }
}

impl HealthPlus {
    /// Sidebar and header are shown on dashboard pages, and on the
    /// not-found page once a doctor is signed in.
    fn shows_chrome(&self) -> bool {
        self.route.requires_session() || (self.doctor.is_some() && matches!(self.route, Route::NotFound(_)))
    }

    /// Resolve `target` through the session gate and show it. Logout clears
    /// the session marker and lands on the login page.
    fn navigate(&mut self, target: Route) {
        let target = if target == Route::Logout {
            session::logout(self.session.as_mut());
            self.doctor = None;
            Route::Login
        } else {
            route::gate(target, self.session.as_ref())
        };

        log::debug!("Showing {}", target.path());
        self.page = PageState::for_route(&target, self.today);

        let nav_id = self
            .nav_model
            .iter()
            .find(|&id| self.nav_model.data::<Route>(id) == Some(&target));
        if let Some(id) = nav_id {
            self.nav_model.activate(id);
        }
        self.route = target;
    }

    fn month_cursor(&mut self) -> Option<&mut MonthCursor> {
        match &mut self.page {
            PageState::Dashboard(page) => Some(&mut page.cursor),
            PageState::Calendar(page) => Some(&mut page.cursor),
            _ => None,
        }
    }

    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}
