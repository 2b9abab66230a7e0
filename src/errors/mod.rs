// Errors layer - Error type definitions

pub mod session;

// Re-exports for convenience
pub use session::{AuthFailure, SessionError};
