use async_trait::async_trait;

use crate::error::Result;

pub mod cookie;
pub mod credential;
pub mod session;

pub use cookie::{SameSite, SessionCookie};
pub use credential::Credential;
pub use session::Session;

pub use ::url::Url;

/// Authenticated-session provider.
///
/// There is a single concrete implementation (`LinkedinClient`); the trait
/// exists so callers can be driven with a fake provider in tests.
#[async_trait]
pub trait Client: Send + Sync {
    /// Provider name for log and error messages.
    fn provider(&self) -> &'static str;

    /// Establish a fresh authenticated session with the given credentials.
    async fn login(&self, cred: &Credential) -> Result<Session>;
}
