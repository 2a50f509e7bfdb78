//! Tracker configuration loaded via OrthoConfig.

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::DEFAULT_FALLBACK_AVATAR;
use crate::outbound::duolingo::{DEFAULT_API_BASE, StaticCredentialProvider};

const STATE_DIR_NAME: &str = ".duo-tracker";

fn default_state_dir() -> Utf8PathBuf {
    dirs::home_dir()
        .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
        .join(STATE_DIR_NAME)
}

/// Settings layered from defaults, configuration files and `DUO_TRACKER_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DUO_TRACKER")]
pub struct TrackerSettings {
    /// Override for the versioned API root.
    pub api_base_url: Option<String>,
    /// Raw `Cookie` header value of a signed-in browser session.
    pub session_cookie: Option<String>,
    /// Bearer token used when no session cookie is configured.
    pub jwt: Option<String>,
    /// Directory holding the last tracked username.
    pub state_dir: Option<String>,
    /// Disable reading and writing the last username.
    #[ortho_config(default = false)]
    pub skip_history: bool,
    /// Avatar reference shown when a user has no picture.
    pub fallback_avatar: Option<String>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl TrackerSettings {
    /// Return the API base URL, falling back to the public service.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured override is not an absolute URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE))
    }

    /// Return the history directory, falling back to `.duo-tracker` in the
    /// user's home directory.
    ///
    /// The directory lands under the current directory only when no home
    /// directory can be determined.
    pub fn state_dir(&self) -> Utf8PathBuf {
        self.state_dir
            .as_deref()
            .map_or_else(default_state_dir, Utf8PathBuf::from)
    }

    /// Return the fallback avatar reference.
    pub fn fallback_avatar(&self) -> &str {
        self.fallback_avatar
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_AVATAR)
    }

    /// Build the credential provider; the session cookie wins over the JWT.
    pub fn credentials(&self) -> StaticCredentialProvider {
        StaticCredentialProvider::from_parts(self.session_cookie.as_deref(), self.jwt.as_deref())
    }
}
