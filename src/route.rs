use crate::session::{self, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Logout,
    Dashboard,
    CreateTask,
    Inbox,
    Important,
    Calendar,
    Patients,
    Analytics,
    Trash,
    Settings,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/logout" => Self::Logout,
            "/" | "" => Self::Dashboard,
            "/create-task" => Self::CreateTask,
            "/inbox" => Self::Inbox,
            "/important" => Self::Important,
            "/calendar" => Self::Calendar,
            "/patients" => Self::Patients,
            "/analytics" => Self::Analytics,
            "/trash" => Self::Trash,
            "/settings" => Self::Settings,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Logout => "/logout",
            Self::Dashboard => "/",
            Self::CreateTask => "/create-task",
            Self::Inbox => "/inbox",
            Self::Important => "/important",
            Self::Calendar => "/calendar",
            Self::Patients => "/patients",
            Self::Analytics => "/analytics",
            Self::Trash => "/trash",
            Self::Settings => "/settings",
            Self::NotFound(path) => path,
        }
    }

    /// The dashboard pages. Auth pages and unknown paths are public.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::Logout | Self::NotFound(_))
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Dashboard => "view-grid-symbolic",
            Self::Inbox => "mail-folder-inbox-symbolic",
            Self::CreateTask => "list-add-symbolic",
            Self::Important => "starred-symbolic",
            Self::Calendar => "x-office-calendar-symbolic",
            Self::Patients => "system-users-symbolic",
            Self::Analytics => "utilities-system-monitor-symbolic",
            Self::Trash => "user-trash-symbolic",
            Self::Settings => "emblem-system-symbolic",
            Self::Logout => "system-log-out-symbolic",
            Self::Login | Self::Register => "dialog-password-symbolic",
            Self::NotFound(_) => "dialog-question-symbolic",
        }
    }

    /// Sidebar entries, in display order.
    pub const SIDEBAR: &'static [Route] = &[
        Route::Dashboard,
        Route::Inbox,
        Route::CreateTask,
        Route::Important,
        Route::Calendar,
        Route::Patients,
        Route::Analytics,
        Route::Trash,
        Route::Settings,
        Route::Logout,
    ];

    /// Sidebar entries that start a new section (divider drawn above them).
    pub const SECTION_STARTS: &'static [Route] = &[Route::Calendar, Route::Trash, Route::Logout];
}

/// Resolve a path to the route that may actually be shown. Protected routes
/// redirect to the login page while no session marker is present.
pub fn resolve(path: &str, store: &dyn SessionStore) -> Route {
    let route = Route::parse(path);
    gate(route, store)
}

pub fn gate(route: Route, store: &dyn SessionStore) -> Route {
    if route.requires_session() && !session::is_authorized(store) {
        log::debug!("No session, redirecting {} to /login", route.path());
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Account, MemorySessionStore};

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/inbox"), Route::Inbox);
        assert_eq!(Route::parse("/inbox/"), Route::Inbox);
        assert_eq!(Route::parse("/create-task"), Route::CreateTask);
        assert_eq!(Route::parse("/logout"), Route::Logout);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(Route::parse("/billing"), Route::NotFound("/billing".into()));
        assert_eq!(Route::parse("/billing").path(), "/billing");
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::SIDEBAR {
            assert_eq!(&Route::parse(route.path()), route);
        }
        assert_eq!(Route::parse(Route::Login.path()), Route::Login);
        assert_eq!(Route::parse(Route::Register.path()), Route::Register);
    }

    #[test]
    fn protected_routes_redirect_without_session() {
        let store = MemorySessionStore::default();
        assert_eq!(resolve("/patients", &store), Route::Login);
        assert_eq!(resolve("/", &store), Route::Login);
        assert_eq!(resolve("/register", &store), Route::Register);
        assert_eq!(resolve("/logout", &store), Route::Logout);
    }

    #[test]
    fn unknown_paths_render_not_found_regardless_of_session() {
        let mut store = MemorySessionStore::default();
        assert_eq!(resolve("/nowhere", &store), Route::NotFound("/nowhere".into()));
        store.set(&Account::fixture()).unwrap();
        assert_eq!(resolve("/nowhere", &store), Route::NotFound("/nowhere".into()));
        assert!(!Route::parse("/billing").requires_session());
    }

    #[test]
    fn protected_routes_open_with_session() {
        let mut store = MemorySessionStore::default();
        store.set(&Account::fixture()).unwrap();
        assert_eq!(resolve("/patients", &store), Route::Patients);
        assert_eq!(resolve("/nowhere", &store), Route::NotFound("/nowhere".into()));
    }
}
