// Types layer - All data structures

pub mod credential;
pub mod identity;
pub mod request;
pub mod ui_state;

// Re-exports for convenience
pub use credential::{Credential, ProviderKind};
pub use identity::Identity;
pub use request::SignInRequest;
pub use ui_state::{derive_ui_state, UiState};
