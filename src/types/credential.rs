use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// Credential family a credential was minted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Email/password account on the identity provider itself
    Password,
    Google,
    Facebook,
    Twitter,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Password => "password",
            ProviderKind::Google => "google",
            ProviderKind::Facebook => "facebook",
            ProviderKind::Twitter => "twitter",
        }
    }
}

/// Opaque proof of identity ownership
///
/// Built only through the factory functions below, which perform the
/// non-empty field validation shared by sign-in and link. The session
/// coordinator forwards credentials to the identity provider without
/// inspecting the payload; only provider implementations consume it.
///
/// Deliberately not serializable: the payload carries secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    provider: ProviderKind,
    payload: CredentialPayload,
}

/// Provider-specific contents of a credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPayload {
    EmailPassword {
        email: String,
        password: String,
    },
    /// OAuth-style access token, with the token secret for providers that
    /// issue token/secret pairs (Twitter)
    ProviderToken {
        token: String,
        secret: Option<String>,
    },
}

impl Credential {
    /// Build an email/password credential
    ///
    /// Both fields must be non-empty; the first missing field is reported.
    ///
    /// # Returns
    /// * `Result<Credential, SessionError>` - Credential or `Validation` naming the empty field
    pub fn email_password(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let email = email.into();
        let password = password.into();

        if email.is_empty() {
            return Err(SessionError::validation("email"));
        }
        if password.is_empty() {
            return Err(SessionError::validation("password"));
        }

        Ok(Self {
            provider: ProviderKind::Password,
            payload: CredentialPayload::EmailPassword { email, password },
        })
    }

    /// Build a token credential for a third-party provider
    ///
    /// # Arguments
    /// * `provider` - Which provider issued the token
    /// * `token` - Access token, must be non-empty
    /// * `secret` - Token secret for token/secret pair providers
    pub fn provider_token(
        provider: ProviderKind,
        token: impl Into<String>,
        secret: Option<String>,
    ) -> Result<Self, SessionError> {
        let token = token.into();

        if token.is_empty() {
            return Err(SessionError::validation("token"));
        }

        Ok(Self {
            provider,
            payload: CredentialPayload::ProviderToken { token, secret },
        })
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Payload accessor for provider implementations
    ///
    /// The coordinator never calls this.
    pub fn payload(&self) -> &CredentialPayload {
        &self.payload
    }
}
