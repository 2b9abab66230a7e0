use crate::types::credential::ProviderKind;

/// Raw sign-in input as collected from a UI surface
///
/// Carries unvalidated user input. The coordinator validates the fields
/// before any provider call and converts them into a `Credential`.
#[derive(Debug, Clone)]
pub enum SignInRequest {
    /// Establish an anonymous session
    Anonymous,

    /// Sign in with an email/password account
    EmailPassword { email: String, password: String },

    /// Sign in with a token obtained from a third-party provider
    ProviderToken {
        provider: ProviderKind,
        token: String,
        secret: Option<String>,
    },
}
