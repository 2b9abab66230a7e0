use std::sync::Arc;
use std::time::Duration;

use authlink::config;
use authlink::coordinators::SessionCoordinator;
use authlink::providers::{IdentityProvider, LocalIdentityProvider};
use authlink::types::{Credential, SignInRequest};
use authlink::views::TracingView;

/// Demonstration driver: wires the session coordinator to an in-process
/// identity provider and walks the anonymous-auth scenario end to end.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging()?;

    // In-process provider with one registered account. A real deployment
    // implements IdentityProvider over its auth SDK instead.
    let provider = Arc::new(LocalIdentityProvider::new());
    provider.register_account("demo@example.com", "demo-password", Some("Demo User"));

    let view = Arc::new(TracingView);
    let coordinator = Arc::new(SessionCoordinator::new(provider.clone(), view));

    // Scoped: dropping the handle at the end of main stops delivery.
    let _pump = coordinator.attach(provider.subscribe());

    tracing::info!("signing in anonymously");
    coordinator.request_sign_in(SignInRequest::Anonymous).await?;

    tracing::info!("linking session to a permanent credential");
    let credential = Credential::email_password("new-user@example.com", "s3cret")?;
    coordinator.request_link_account(credential).await?;

    tracing::info!("signing in with a registered account");
    coordinator.request_sign_out();
    coordinator
        .request_sign_in(SignInRequest::EmailPassword {
            email: "demo@example.com".to_string(),
            password: "demo-password".to_string(),
        })
        .await?;

    tracing::info!("signing out");
    coordinator.request_sign_out();

    // Let the notification pump drain before exiting
    tokio::time::sleep(Duration::from_millis(50)).await;

    Ok(())
}
