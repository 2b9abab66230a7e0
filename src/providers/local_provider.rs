use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::errors::AuthFailure;
use crate::providers::identity_provider::{AuthStateSubscription, IdentityProvider};
use crate::types::credential::CredentialPayload;
use crate::types::{Credential, Identity};

/// In-process identity provider for demos and tests
///
/// Holds accounts and the current session in memory: no tokens, no
/// network, no persistence. Real deployments implement `IdentityProvider`
/// over their auth SDK instead; this type exists so coordinator behavior
/// is testable without one.
///
/// Notification ordering: every mutation emits one snapshot to each live
/// subscriber, under the state lock, so subscribers observe mutations in
/// the order they happened.
pub struct LocalIdentityProvider {
    state: Mutex<ProviderState>,
}

#[derive(Default)]
struct ProviderState {
    current: Option<Identity>,
    /// Email/password accounts, keyed by email
    accounts: HashMap<String, Account>,
    /// Federated accounts, keyed by provider name + token
    federated: HashMap<String, String>,
    listeners: Vec<mpsc::UnboundedSender<Option<Identity>>>,
    offline: bool,
}

struct Account {
    user_id: String,
    password: String,
    display_name: Option<String>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ProviderState::default()),
        }
    }

    /// Register an email/password account that sign-in will accept
    ///
    /// # Returns
    /// * `String` - The generated account id
    pub fn register_account(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: Option<&str>,
    ) -> String {
        let user_id = Uuid::new_v4().to_string();
        let mut state = self.state.lock();
        state.accounts.insert(
            email.into(),
            Account {
                user_id: user_id.clone(),
                password: password.into(),
                display_name: display_name.map(str::to_string),
            },
        );
        user_id
    }

    /// Simulate losing the connection to the provider backend
    ///
    /// While offline, every command fails with a network `AuthFailure`.
    /// Sign-out still works: clearing the local session needs no round
    /// trip.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    /// Provider-side view of the current session, for test assertions
    pub fn current_identity(&self) -> Option<Identity> {
        self.state.lock().current.clone()
    }

    fn set_current(state: &mut ProviderState, identity: Option<Identity>) {
        state.current = identity;
        Self::notify(state);
    }

    /// Push the current snapshot to every live listener, pruning closed ones
    fn notify(state: &mut ProviderState) {
        let snapshot = state.current.clone();
        state
            .listeners
            .retain(|listener| listener.send(snapshot.clone()).is_ok());
    }

    fn federated_key(provider: &str, token: &str) -> String {
        format!("{}/{}", provider, token)
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in_anonymously(&self) -> Result<(), AuthFailure> {
        let mut state = self.state.lock();
        if state.offline {
            return Err(AuthFailure::network());
        }

        let identity = Identity::anonymous(Uuid::new_v4().to_string());
        tracing::debug!(user_id = %identity.id, "anonymous sign-in");
        Self::set_current(&mut state, Some(identity));
        Ok(())
    }

    async fn sign_in_with_credential(&self, credential: Credential) -> Result<(), AuthFailure> {
        let mut state = self.state.lock();
        if state.offline {
            return Err(AuthFailure::network());
        }

        let identity = match credential.payload() {
            CredentialPayload::EmailPassword { email, password } => {
                let account = state
                    .accounts
                    .get(email)
                    .filter(|account| account.password == *password)
                    .ok_or_else(AuthFailure::invalid_credentials)?;
                Identity {
                    id: account.user_id.clone(),
                    display_name: account.display_name.clone(),
                    email: Some(email.clone()),
                }
            }
            CredentialPayload::ProviderToken { token, .. } => {
                // Any non-empty token is accepted; the id stays stable for
                // repeat sign-ins with the same token.
                let key = Self::federated_key(credential.provider().as_str(), token);
                let user_id = state
                    .federated
                    .entry(key)
                    .or_insert_with(|| Uuid::new_v4().to_string())
                    .clone();
                Identity::anonymous(user_id)
            }
        };

        tracing::debug!(user_id = %identity.id, provider = credential.provider().as_str(), "credential sign-in");
        Self::set_current(&mut state, Some(identity));
        Ok(())
    }

    async fn link_with_credential(&self, credential: Credential) -> Result<(), AuthFailure> {
        let mut state = self.state.lock();
        if state.offline {
            return Err(AuthFailure::network());
        }

        let mut current = state
            .current
            .clone()
            .ok_or_else(AuthFailure::no_current_user)?;

        match credential.payload() {
            CredentialPayload::EmailPassword { email, password } => {
                if state.accounts.contains_key(email) {
                    return Err(AuthFailure::credential_in_use());
                }
                state.accounts.insert(
                    email.clone(),
                    Account {
                        user_id: current.id.clone(),
                        password: password.clone(),
                        display_name: current.display_name.clone(),
                    },
                );
                current.email = Some(email.clone());
            }
            CredentialPayload::ProviderToken { token, .. } => {
                let key = Self::federated_key(credential.provider().as_str(), token);
                if state.federated.contains_key(&key) {
                    return Err(AuthFailure::credential_in_use());
                }
                state.federated.insert(key, current.id.clone());
            }
        }

        tracing::debug!(user_id = %current.id, "credential linked");
        Self::set_current(&mut state, Some(current));
        Ok(())
    }

    fn sign_out(&self) {
        let mut state = self.state.lock();
        if state.current.is_some() {
            tracing::debug!("sign-out");
        }
        Self::set_current(&mut state, None);
    }

    fn subscribe(&self) -> AuthStateSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();

        // Matching auth SDK listener semantics: a new subscriber is
        // immediately told the current state.
        let _ = tx.send(state.current.clone());
        state.listeners.push(tx);

        AuthStateSubscription::new(rx)
    }
}
