// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::coordinators::SessionCoordinator;
use crate::errors::AuthFailure;
use crate::providers::{AuthStateSubscription, IdentityProvider, LocalIdentityProvider};
use crate::types::{Credential, UiState};
use crate::views::View;

/// View double that records every render and failure it receives
#[derive(Default)]
pub struct RecordingView {
    pub renders: Mutex<Vec<UiState>>,
    pub failures: Mutex<Vec<AuthFailure>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }

    pub fn last_render(&self) -> Option<UiState> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn last_failure(&self) -> Option<AuthFailure> {
        self.failures.lock().unwrap().last().cloned()
    }
}

impl View for RecordingView {
    fn render(&self, state: &UiState) {
        self.renders.lock().unwrap().push(state.clone());
    }

    fn show_failure(&self, failure: &AuthFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}

/// Provider double for tests asserting that no provider call is made
///
/// Every operation panics; a test passing with this provider proves the
/// pre-flight path never reached dispatch.
pub struct UnreachableProvider;

#[async_trait]
impl IdentityProvider for UnreachableProvider {
    async fn sign_in_anonymously(&self) -> Result<(), AuthFailure> {
        unreachable!("provider must not be contacted")
    }

    async fn sign_in_with_credential(&self, _credential: Credential) -> Result<(), AuthFailure> {
        unreachable!("provider must not be contacted")
    }

    async fn link_with_credential(&self, _credential: Credential) -> Result<(), AuthFailure> {
        unreachable!("provider must not be contacted")
    }

    fn sign_out(&self) {
        unreachable!("provider must not be contacted")
    }

    fn subscribe(&self) -> AuthStateSubscription {
        unreachable!("provider must not be contacted")
    }
}

/// Creates a provider with one registered account and a coordinator wired
/// to a recording view
///
/// The account is "testuser@example.com" / "testpass". Returns
/// (provider, view, coordinator); callers can discard what they don't
/// need.
pub fn setup_test_coordinator() -> (
    Arc<LocalIdentityProvider>,
    Arc<RecordingView>,
    Arc<SessionCoordinator>,
) {
    let provider = Arc::new(LocalIdentityProvider::new());
    provider.register_account("testuser@example.com", "testpass", Some("Test User"));

    let view = RecordingView::new();
    let coordinator = Arc::new(SessionCoordinator::new(provider.clone(), view.clone()));

    (provider, view, coordinator)
}
