//! Session marker storage and the login/registration gate.
//!
//! The presence of a stored [`Account`] is the only signal that a doctor is
//! signed in. There is no expiry and no server-side validation.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::form::RegistrationForm;
use crate::error::{AuthError, ValidationError};

/// Key under which the marker is persisted.
pub const SESSION_KEY: &str = "doctor";

/// The serialized session marker. The password is kept in clear text, as the
/// dashboard has never had real authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub avatar: String,
}

impl Account {
    /// The single account that may sign in.
    pub fn fixture() -> Self {
        Self {
            email: "doctor@healthplus.com".into(),
            name: "Dr. Azmat".into(),
            password: "health123".into(),
            avatar: "doctor-portrait.jpg".into(),
        }
    }
}

/// Persistent client storage for the session marker.
pub trait SessionStore {
    fn get(&self) -> Option<Account>;
    fn set(&mut self, account: &Account) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Stores the marker as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    doctor: Account,
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Account> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Failed to read session file {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<StoredSession>(&content) {
            Ok(stored) => Some(stored.doctor),
            Err(e) => {
                log::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, account: &Account) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredSession { doctor: account.clone() })
            .map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(tmp, &self.path)
    }

    fn clear(&mut self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Keeps the marker in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    doctor: Option<Account>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Account> {
        self.doctor.clone()
    }

    fn set(&mut self, account: &Account) -> io::Result<()> {
        self.doctor = Some(account.clone());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.doctor = None;
        Ok(())
    }
}

/// True iff a session marker is present.
pub fn is_authorized(store: &dyn SessionStore) -> bool {
    store.get().is_some()
}

/// Check the credentials against the fixture account and record the session.
pub fn login(store: &mut dyn SessionStore, email: &str, password: &str) -> Result<Account, AuthError> {
    let account = Account::fixture();
    if email != account.email || password != account.password {
        log::info!("Rejected login for {}", email);
        return Err(AuthError::InvalidCredentials);
    }
    store.set(&account)?;
    log::info!("{} signed in", account.name);
    Ok(account)
}

/// Drop the session marker. Storage failures are logged, never returned.
pub fn logout(store: &mut dyn SessionStore) {
    if let Err(e) = store.clear() {
        log::warn!("Failed to clear session: {}", e);
    }
    log::info!("Signed out");
}

/// Record a session built from the registration form. Any account may
/// register; there is no uniqueness check.
pub fn register(store: &mut dyn SessionStore, form: &RegistrationForm) -> Result<Account, ValidationError> {
    let account = form.validate()?;
    if let Err(e) = store.set(&account) {
        log::error!("Failed to store registration: {}", e);
    }
    log::info!("Registered {}", account.name);
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            avatar: String::new(),
        }
    }

    #[test]
    fn login_with_fixture_sets_marker() {
        let mut store = MemorySessionStore::default();
        assert!(!is_authorized(&store));

        let account = login(&mut store, "doctor@healthplus.com", "health123").unwrap();
        assert_eq!(account.name, "Dr. Azmat");
        assert!(is_authorized(&store));
        assert_eq!(store.get(), Some(Account::fixture()));
    }

    #[test]
    fn wrong_password_leaves_storage_untouched() {
        let mut store = MemorySessionStore::default();
        let err = login(&mut store, "doctor@healthplus.com", "health124").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(store.get().is_none());

        // An existing marker is not replaced either.
        let other = Account {
            email: "a@b.c".into(),
            name: "Dr. Other".into(),
            password: "x".into(),
            avatar: String::new(),
        };
        store.set(&other).unwrap();
        assert!(login(&mut store, "doctor@healthplus.com", "").is_err());
        assert_eq!(store.get(), Some(other));
    }

    #[test]
    fn email_match_is_exact() {
        let mut store = MemorySessionStore::default();
        assert!(login(&mut store, "Doctor@HealthPlus.com", "health123").is_err());
        assert!(login(&mut store, " doctor@healthplus.com", "health123").is_err());
    }

    #[test]
    fn logout_clears_marker() {
        let mut store = MemorySessionStore::default();
        login(&mut store, "doctor@healthplus.com", "health123").unwrap();
        logout(&mut store);
        assert!(!is_authorized(&store));
        // Logging out twice is fine.
        logout(&mut store);
        assert!(!is_authorized(&store));
    }

    #[test]
    fn register_requires_name_email_password() {
        let mut store = MemorySessionStore::default();
        assert_eq!(
            register(&mut store, &registration("", "a@b.c", "pw")),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            register(&mut store, &registration("Dr. A", "", "pw")),
            Err(ValidationError::MissingField("email"))
        );
        assert_eq!(
            register(&mut store, &registration("Dr. A", "a@b.c", "")),
            Err(ValidationError::MissingField("password"))
        );
        assert!(store.get().is_none());
    }

    #[test]
    fn register_writes_submitted_fields() {
        let mut store = MemorySessionStore::default();
        let account = register(&mut store, &registration("Dr. Prachi", "p@hp.com", "secret")).unwrap();
        assert_eq!(store.get(), Some(account.clone()));
        assert_eq!(account.avatar, "");
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path().join("nested").join("doctor.json"));
        assert!(store.get().is_none());

        store.set(&Account::fixture()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(SESSION_KEY));
        assert_eq!(store.get(), Some(Account::fixture()));

        store.clear().unwrap();
        assert!(store.get().is_none());
        // Clearing a missing file is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_file_is_not_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctor.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileSessionStore::new(path);
        assert!(!is_authorized(&store));
    }

    #[test]
    fn unreadable_session_file_is_not_a_session() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be fails with an error other than NotFound.
        let path = dir.path().join("doctor.json");
        std::fs::create_dir(&path).unwrap();
        let store = FileSessionStore::new(path);
        assert!(store.get().is_none());
        assert!(!is_authorized(&store));
    }
}
