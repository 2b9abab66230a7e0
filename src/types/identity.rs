use serde::{Deserialize, Serialize};

/// Stable attributes of the authenticated account as known to the provider
///
/// `Option<Identity>` is the session snapshot everywhere in this crate:
/// `None` means signed out. The id is opaque and stays stable across
/// account linking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque account id assigned by the provider
    pub id: String,

    /// Display name, when the provider knows one
    pub display_name: Option<String>,

    /// Email address, absent for anonymous and token-only accounts
    pub email: Option<String>,
}

impl Identity {
    /// Create an anonymous identity carrying only an account id
    pub fn anonymous(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            email: None,
        }
    }
}
