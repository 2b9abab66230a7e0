use crate::errors::AuthFailure;
use crate::types::UiState;
use crate::views::View;

/// View that reports every render and failure through tracing
///
/// Used by the demo binary and useful as a reference implementation.
pub struct TracingView;

impl View for TracingView {
    fn render(&self, state: &UiState) {
        tracing::info!(
            signed_in = state.signed_in,
            id = %state.id_label,
            email = state.email_label.as_deref().unwrap_or(""),
            "render"
        );

        // Full state at debug level for diagnosis
        match serde_json::to_string(state) {
            Ok(json) => tracing::debug!(ui_state = %json, "ui state"),
            Err(e) => tracing::error!("Failed to serialize ui state: {}", e),
        }
    }

    fn show_failure(&self, failure: &AuthFailure) {
        tracing::warn!("Authentication failed: {}", failure.reason);
    }
}
