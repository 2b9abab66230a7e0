use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::errors::{AuthFailure, SessionError};
use crate::providers::{AuthStateSubscription, IdentityProvider};
use crate::types::{derive_ui_state, Credential, Identity, SignInRequest, UiState};
use crate::views::View;

/// Session coordinator that reconciles provider state changes with UI policy
///
/// Owns the latest-known identity snapshot, issues sign-in, sign-out and
/// link commands to the injected identity provider, and pushes the derived
/// `UiState` to the injected view.
///
/// The snapshot is mutated only by `on_auth_state_changed`. Command
/// completions are interpreted for failure reporting alone: success is
/// always learned from the provider's notification channel, never assumed
/// from a clean completion. Sign-out is the one exception and renders the
/// signed-out state eagerly, matching the source behavior this component
/// was extracted from.
pub struct SessionCoordinator {
    provider: Arc<dyn IdentityProvider>,
    view: Arc<dyn View>,
    current_identity: RwLock<Option<Identity>>,
    /// Serializes sign-in and link dispatch so racing UI commands cannot
    /// interleave their provider calls
    command_guard: Mutex<()>,
}

impl SessionCoordinator {
    /// Create a coordinator with no established session
    pub fn new(provider: Arc<dyn IdentityProvider>, view: Arc<dyn View>) -> Self {
        Self {
            provider,
            view,
            current_identity: RwLock::new(None),
            command_guard: Mutex::new(()),
        }
    }

    /// Latest identity snapshot delivered by the provider
    pub fn current_identity(&self) -> Option<Identity> {
        self.current_identity.read().clone()
    }

    /// Derive the UI state for the current snapshot
    ///
    /// Pure with respect to coordinator state; callable at any time.
    pub fn ui_state(&self) -> UiState {
        derive_ui_state(self.current_identity.read().as_ref())
    }

    /// Apply a state-change notification from the provider
    ///
    /// Last-write-wins replacement of the snapshot, then a render. The
    /// value is trusted as delivered; there is no error path. Delivering
    /// the same snapshot twice re-renders the same state and has no other
    /// effect.
    pub fn on_auth_state_changed(&self, identity: Option<Identity>) {
        match &identity {
            Some(user) => tracing::debug!(user_id = %user.id, "auth state changed: signed in"),
            None => tracing::debug!("auth state changed: signed out"),
        }

        *self.current_identity.write() = identity;
        self.render();
    }

    /// Issue a sign-in command to the provider
    ///
    /// Email/password and provider-token requests are validated before
    /// dispatch; an empty field yields a `Validation` error and the
    /// provider is never contacted.
    ///
    /// A provider-reported failure is surfaced to the view as exactly one
    /// transient `AuthFailure` and leaves the snapshot untouched. The
    /// subsequent notification (if any) is the sole source of truth for
    /// success, so this returns `Ok(())` even when the provider failed.
    pub async fn request_sign_in(&self, request: SignInRequest) -> Result<(), SessionError> {
        let outcome = {
            let _in_flight = self.command_guard.lock().await;
            match request {
                SignInRequest::Anonymous => self.provider.sign_in_anonymously().await,
                SignInRequest::EmailPassword { email, password } => {
                    let credential = Credential::email_password(email, password)?;
                    self.provider.sign_in_with_credential(credential).await
                }
                SignInRequest::ProviderToken {
                    provider,
                    token,
                    secret,
                } => {
                    let credential = Credential::provider_token(provider, token, secret)?;
                    self.provider.sign_in_with_credential(credential).await
                }
            }
        };

        if let Err(failure) = outcome {
            self.report_failure(failure);
        }
        Ok(())
    }

    /// Clear the session
    ///
    /// Tells the provider to drop its session and renders the signed-out
    /// state eagerly, without waiting for the notification. The
    /// notification that follows delivers the same signed-out snapshot and
    /// is a no-op re-render.
    pub fn request_sign_out(&self) {
        tracing::debug!("sign-out requested");
        self.provider.sign_out();
        self.on_auth_state_changed(None);
    }

    /// Attach a permanent credential to the current session
    ///
    /// Requires an established session; returns `NoActiveSession`
    /// otherwise, without contacting the provider. On success the
    /// notification channel delivers the merged identity (same id,
    /// email-bearing); on failure exactly one `AuthFailure` reaches the
    /// view and the snapshot stays as it was.
    pub async fn request_link_account(&self, credential: Credential) -> Result<(), SessionError> {
        if self.current_identity.read().is_none() {
            return Err(SessionError::NoActiveSession);
        }

        let outcome = {
            let _in_flight = self.command_guard.lock().await;
            self.provider.link_with_credential(credential).await
        };

        if let Err(failure) = outcome {
            self.report_failure(failure);
        }
        Ok(())
    }

    /// Spawn the notification pump for a provider subscription
    ///
    /// Forwards every snapshot, in delivery order, to
    /// `on_auth_state_changed` until the subscription ends. Dropping the
    /// returned handle stops delivery, so a torn-down view never receives
    /// another render.
    pub fn attach(self: &Arc<Self>, mut subscription: AuthStateSubscription) -> SubscriptionHandle {
        let coordinator = Arc::clone(self);
        let task = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                coordinator.on_auth_state_changed(snapshot);
            }
            tracing::debug!("notification channel closed");
        });

        SubscriptionHandle { task }
    }

    fn render(&self) {
        let state = self.ui_state();
        self.view.render(&state);
    }

    /// Surface a provider failure as a transient view notification
    ///
    /// Failures never touch the identity snapshot. If a notification for
    /// the same operation already changed state, that state stands.
    fn report_failure(&self, failure: AuthFailure) {
        tracing::warn!("provider command failed: {}", failure.reason);
        self.view.show_failure(&failure);
    }
}

/// Scoped handle for a running notification pump
///
/// The pump is released on every exit path: explicitly via `detach`, or
/// implicitly when the handle is dropped (including unwind).
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    /// Stop the pump explicitly
    pub fn detach(self) {
        // Drop does the work
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
