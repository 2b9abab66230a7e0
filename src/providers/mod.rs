// Providers layer - Identity provider seam
//
// The identity provider performs the actual authentication work (an auth
// SDK in a real deployment). Coordinators orchestrate provider commands
// and consume provider notifications; they contain no provider logic
// themselves.

pub mod identity_provider;
pub mod local_provider;

// Re-export providers for clean imports
pub use identity_provider::{AuthStateSubscription, IdentityProvider};
pub use local_provider::LocalIdentityProvider;
