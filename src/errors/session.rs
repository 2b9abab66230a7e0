use thiserror::Error;

/// Local, pre-flight errors returned to the command caller
///
/// These block dispatch: when one is produced, no provider call has been
/// made. Provider-reported failures are a separate type (`AuthFailure`)
/// because they follow a different path - they are displayed transiently
/// and never returned through command results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A required input field is empty
    #[error("Required field is missing: {field}")]
    Validation { field: &'static str },

    /// Account link requested without an established session
    #[error("No active session to link")]
    NoActiveSession,
}

impl SessionError {
    /// Create a validation error naming the missing field
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }
}

/// Provider-reported authentication failure
///
/// Non-fatal and transient: surfaced to the view as a fire-and-forget
/// notification. A failure never mutates the identity snapshot and never
/// rolls back a state change that a notification already applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Authentication failed: {reason}")]
pub struct AuthFailure {
    pub reason: String,
}

impl AuthFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Provider unreachable
    pub fn network() -> Self {
        Self::new("network error")
    }

    /// Credential rejected by the provider
    pub fn invalid_credentials() -> Self {
        Self::new("invalid credentials")
    }

    /// Credential already attached to another account
    pub fn credential_in_use() -> Self {
        Self::new("credential already in use")
    }

    /// Link attempted while the provider has no current user
    pub fn no_current_user() -> Self {
        Self::new("no current user")
    }
}
