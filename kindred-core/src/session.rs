//! The logged-in session (bearer token + user profile), persisted between
//! CLI invocations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::{AuthResponse, UserProfile};
use crate::config::KindredConfig;
use crate::error::{KindredError, KindredResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            token: resp.token,
            user: resp.user,
        }
    }
}

impl Session {
    /// ~/.config/kindred/session.toml
    pub fn path() -> KindredResult<PathBuf> {
        Ok(KindredConfig::config_dir()?.join("session.toml"))
    }

    /// The stored session, or `None` when nobody is logged in.
    pub fn load() -> KindredResult<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Like [`Session::load`] but fails when nobody is logged in.
    pub fn require() -> KindredResult<Self> {
        Self::load()?.ok_or(KindredError::NotLoggedIn)
    }

    pub fn load_from(path: &Path) -> KindredResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let session: Session = toml::from_str(&contents).map_err(|e| {
            KindredError::Session(format!("Failed to parse session from {}: {e}", path.display()))
        })?;

        Ok(Some(session))
    }

    pub fn save(&self) -> KindredResult<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> KindredResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| KindredError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        // Owner-only (0600): the file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        log::info!("saved session for {} to {}", self.user.username, path.display());
        Ok(())
    }

    /// Forget the stored session. Returns whether one existed.
    pub fn clear() -> KindredResult<bool> {
        Self::clear_at(&Self::path()?)
    }

    pub fn clear_at(path: &Path) -> KindredResult<bool> {
        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path)?;
        Ok(true)
    }
}
