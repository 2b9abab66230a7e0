// Common test utilities for integration tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use authlink::coordinators::SessionCoordinator;
use authlink::errors::AuthFailure;
use authlink::providers::LocalIdentityProvider;
use authlink::types::UiState;
use authlink::views::View;

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

    pub fn signed_in_sequence(&self) -> Vec<bool> {
        self.renders
            .lock()
            .unwrap()
            .iter()
            .map(|state| state.signed_in)
            .collect()
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

/// Creates a provider with one registered account and a coordinator wired
/// to a recording view
///
/// The account is "testuser@example.com" / "testpass".
pub fn setup_coordinator() -> (
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

/// Poll a condition until it holds, failing the test after ~1s
pub async fn wait_until(description: &str, condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within timeout: {}", description);
}
