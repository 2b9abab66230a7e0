// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider operations and consume provider
// notifications for specific UI surfaces. They decide the sequence of
// operations without containing provider logic themselves.

pub mod session_coordinator;

// Re-export coordinators for clean imports
pub use session_coordinator::{SessionCoordinator, SubscriptionHandle};
