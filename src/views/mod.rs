// Views layer - Rendering collaborator seam
//
// Views consume UI-enablement decisions and transient failure
// notifications. They are plain interfaces, independent of any widget
// toolkit; the coordinator calls them, never the other way around.

pub mod tracing_view;

// Re-export views for clean imports
pub use tracing_view::TracingView;

use crate::errors::AuthFailure;
use crate::types::UiState;

/// Rendering collaborator the coordinator pushes decisions to
pub trait View: Send + Sync {
    /// Render the full UI state
    ///
    /// Called once per state change and once per eager sign-out. Must be
    /// cheap and must not call back into the coordinator.
    fn render(&self, state: &UiState);

    /// Display a transient failure notification
    ///
    /// Fire-and-forget, toast-equivalent. No acknowledgment expected.
    fn show_failure(&self, failure: &AuthFailure);
}
