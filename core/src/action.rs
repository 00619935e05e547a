pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, Context as _};
    pub use anyhow::{Error, Result};
}
use error::*;
use voy_webclient::{Credential, Error as ClientError, Session};

use crate::client::SessionPersistentClient;

#[derive(Debug)]
pub enum LoginOutcome {
    Established(Session),
    ChallengeRequired,
    Unauthorized,
}

/// Establish a session for `cred.username`.
///
/// With `refresh_cookies == false`, a cached session from the cookie file
/// is reused when present and not expired; otherwise the provider login
/// runs and the resulting session is persisted. Challenge and unauthorized
/// failures are outcomes, not errors; everything else propagates.
pub async fn login(
    cli: &mut SessionPersistentClient,
    cred: &Credential,
    refresh_cookies: bool,
) -> Result<LoginOutcome> {
    if !refresh_cookies {
        if let Some(session) = cli.load_session_if_file_exists()? {
            log::info!("Using cached session for '{}'", cli.username());
            return Ok(LoginOutcome::Established(session));
        }
    }

    match cli.login(cred).await {
        Ok(session) => {
            cli.save_session_to_storage(&session)?;
            Ok(LoginOutcome::Established(session))
        }
        Err(ClientError::ChallengeRequired { url }) => {
            log::info!("Login challenged (url: {})", url);
            Ok(LoginOutcome::ChallengeRequired)
        }
        Err(ClientError::Unauthorized) => Ok(LoginOutcome::Unauthorized),
        Err(e) => Err(e).with_context(|| format!("Failed to login to {}", cli.provider())),
    }
}

/// Best-effort removal of the cached cookie file. Removal failure
/// (typically a missing file) is swallowed.
pub fn discard_session(cli: &SessionPersistentClient) {
    if let Err(e) = cli.remove_session_from_storage() {
        log::debug!("Ignoring cookie file removal failure: {:#}", e);
    }
}
