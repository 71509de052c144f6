//! TransportAPI credentials.
//!
//! The app id and key are opaque strings. They are looked up once at
//! startup and passed into [`TransportConfig`](crate::transport::TransportConfig)
//! explicitly; nothing reads them from global state afterwards.

use std::fmt;
use std::path::Path;

use tracing::debug;

/// File holding the app id, relative to the credentials directory.
pub const APP_ID_FILE: &str = ".transportAppId";

/// File holding the app key, relative to the credentials directory.
pub const APP_KEY_FILE: &str = ".transportAppKey";

/// A credential could not be found in the environment or on disk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not find credential: set {env_var} or create {file}")]
pub struct CredentialMissing {
    pub env_var: String,
    pub file: String,
}

/// TransportAPI `app_id` / `app_key` pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Resolve credentials from the process environment, then from files in `dir`.
    pub fn resolve(dir: impl AsRef<Path>) -> Result<Self, CredentialMissing> {
        Self::resolve_with(dir, |name| std::env::var(name).ok())
    }

    /// Resolve credentials using `env` for variable lookup.
    ///
    /// Each credential's variable is named after its file: leading dot
    /// dropped, upper-cased (`.transportAppId` → `TRANSPORTAPPID`). A
    /// non-empty variable wins; otherwise the trimmed file contents are used.
    pub fn resolve_with<F>(dir: impl AsRef<Path>, env: F) -> Result<Self, CredentialMissing>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dir = dir.as_ref();
        Ok(Self {
            app_id: read_credential(dir, APP_ID_FILE, &env)?,
            app_key: read_credential(dir, APP_KEY_FILE, &env)?,
        })
    }
}

/// Environment variable name for a credential file.
pub fn env_var_for(file: &str) -> String {
    file.trim_start_matches('.').to_uppercase()
}

fn read_credential<F>(dir: &Path, file: &str, env: &F) -> Result<String, CredentialMissing>
where
    F: Fn(&str) -> Option<String>,
{
    let env_var = env_var_for(file);

    if let Some(value) = env(&env_var).filter(|v| !v.trim().is_empty()) {
        debug!(source = %env_var, "read credential from environment");
        return Ok(value.trim().to_string());
    }

    let path = dir.join(file);
    if let Ok(contents) = std::fs::read_to_string(&path) {
        let value = contents.trim();
        if !value.is_empty() {
            debug!(source = %path.display(), "read credential from file");
            return Ok(value.to_string());
        }
    }

    Err(CredentialMissing {
        env_var,
        file: path.display().to_string(),
    })
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}
