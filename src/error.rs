//! Errors surfaced inline at the form boundary.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Failed to store session: {0}")]
    Storage(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required free-text field was left empty.
    #[error("All fields are required ({0} is missing)")]
    MissingField(&'static str),
    /// A required choice (assignee, due date, title) was not made.
    #[error("Please fill in all required fields.")]
    MissingRequiredSelection(&'static str),
    #[error("Invalid value for {0}")]
    InvalidField(&'static str),
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(f) | Self::MissingRequiredSelection(f) | Self::InvalidField(f) => f,
        }
    }
}
