use serde::{Deserialize, Serialize};

use crate::types::identity::Identity;

/// Label rendered in place of an account id when no session exists
pub const SIGNED_OUT_LABEL: &str = "Signed out";

/// UI-enablement decision derived from the current identity snapshot
///
/// Enablement is fully determined by `signed_in`: sign-in is offered to
/// signed-out users, sign-out and account linking to signed-in users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub signed_in: bool,
    pub id_label: String,
    pub email_label: Option<String>,
    pub sign_in_enabled: bool,
    pub sign_out_enabled: bool,
    pub link_enabled: bool,
}

/// Derive the UI state for an identity snapshot
///
/// Pure function of its input; re-derivable at any time without side
/// effects.
pub fn derive_ui_state(identity: Option<&Identity>) -> UiState {
    let signed_in = identity.is_some();

    UiState {
        signed_in,
        id_label: identity
            .map(|user| user.id.clone())
            .unwrap_or_else(|| SIGNED_OUT_LABEL.to_string()),
        email_label: identity.and_then(|user| user.email.clone()),
        sign_in_enabled: !signed_in,
        sign_out_enabled: signed_in,
        link_enabled: signed_in,
    }
}
