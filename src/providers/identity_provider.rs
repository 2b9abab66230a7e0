use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::errors::AuthFailure;
use crate::types::{Credential, Identity};

/// External identity provider seam
///
/// Injected into the coordinator as `Arc<dyn IdentityProvider>` so test
/// doubles and SDK-backed implementations are interchangeable.
///
/// Command completions report failure only. Success is never inferred
/// from a clean completion: the notification channel is the sole source
/// of truth for the current identity. This keeps a coordinator correct
/// when the provider changes state through another path (token expiry,
/// another device).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Establish an anonymous session
    async fn sign_in_anonymously(&self) -> Result<(), AuthFailure>;

    /// Establish a session from a credential
    async fn sign_in_with_credential(&self, credential: Credential) -> Result<(), AuthFailure>;

    /// Attach a permanent credential to the current session
    ///
    /// The account id of the current identity is preserved across a
    /// successful link.
    async fn link_with_credential(&self, credential: Credential) -> Result<(), AuthFailure>;

    /// Clear the current session
    ///
    /// Synchronous from the caller's perspective; no round trip needed.
    fn sign_out(&self);

    /// Subscribe to state-change notifications
    ///
    /// The subscription immediately receives the current snapshot, then
    /// one message per state change, in emission order. Dropping the
    /// subscription releases the listener registration.
    fn subscribe(&self) -> AuthStateSubscription;
}

/// Receiving end of a provider's notification channel
///
/// Backed by an unbounded in-order channel so notifications are never
/// dropped or reordered. Each message is a full snapshot: `Some` for a
/// signed-in identity, `None` for signed out.
pub struct AuthStateSubscription {
    rx: mpsc::UnboundedReceiver<Option<Identity>>,
}

impl AuthStateSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<Option<Identity>>) -> Self {
        Self { rx }
    }

    /// Wait for the next snapshot
    ///
    /// # Returns
    /// * `Some(snapshot)` - Next state change, in emission order
    /// * `None` - The provider side of the channel is gone
    pub async fn next(&mut self) -> Option<Option<Identity>> {
        self.rx.recv().await
    }

    /// Non-blocking variant of `next` for draining in tests
    pub fn try_next(&mut self) -> Option<Option<Identity>> {
        self.rx.try_recv().ok()
    }
}
