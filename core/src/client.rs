use std::{
    ops::{Deref, DerefMut},
    path::Path,
};

use anyhow::{anyhow, Context};
use voy_webclient::{Client, Session};

use crate::config;
use fsutil::SingleFileDriver;

/// A provider client paired with the on-disk cookie jar for one username
/// (`<cookie_dir>/<username>.jr`).
pub struct SessionPersistentClient {
    cli: Box<dyn Client>,
    username: String,
    session_file: SingleFileDriver,
}

impl Deref for SessionPersistentClient {
    type Target = Box<dyn Client>;

    fn deref(&self) -> &Self::Target {
        &self.cli
    }
}

impl DerefMut for SessionPersistentClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cli
    }
}

impl SessionPersistentClient {
    pub fn new(username: &str, cookie_dir: impl AsRef<Path>) -> Self {
        Self::with_client(voy_webclient::new_client(), username, cookie_dir)
    }

    pub fn with_client(
        cli: Box<dyn Client>,
        username: &str,
        cookie_dir: impl AsRef<Path>,
    ) -> Self {
        let savepath = cookie_dir.as_ref().join(config::cookie_filename(username));
        Self {
            cli,
            username: username.to_owned(),
            session_file: SingleFileDriver::new(savepath),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session_filepath(&self) -> &Path {
        &self.session_file.filepath
    }

    /// `Ok(None)` when the cookie file does not exist or the stored
    /// session has already expired.
    pub fn load_session_if_file_exists(&self) -> anyhow::Result<Option<Session>> {
        let json = match self.session_file.read() {
            Ok(json) => json,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(anyhow!(e)),
        };
        let session = Session::from_json(&json).with_context(|| {
            format!(
                "Invalid JSON '{}'",
                self.session_file.filepath.to_string_lossy()
            )
        })?;
        if session.is_expired() {
            log::info!("Cached session for '{}' has expired", self.username);
            return Ok(None);
        }
        Ok(Some(session))
    }

    #[must_use]
    pub fn save_session_to_storage(&self, session: &Session) -> anyhow::Result<()> {
        self.session_file
            .write(&session.to_json())
            .map_err(|e| anyhow!(e))
    }

    #[must_use]
    pub fn remove_session_from_storage(&self) -> anyhow::Result<()> {
        self.session_file.remove().map_err(|e| anyhow!(e))
    }
}
