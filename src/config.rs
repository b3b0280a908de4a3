// Configuration: read once by the entry point and passed down, so nothing
// below `main` touches the process environment.

use std::path::PathBuf;

pub const TOKEN_ENV: &str = "QIITA_TOKEN";
pub const API_URL_ENV: &str = "QIITA_API_URL";
pub const DEFAULT_API_URL: &str = "https://qiita.com/api/v2";

/// File in the home directory holding a token, used when `QIITA_TOKEN` is unset.
const TOKEN_FILE: &str = ".qiita_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base of the API, without the `/items` action.
    pub api_url: String,
    /// Bearer token; `None` sends unauthenticated requests.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Build the configuration from `QIITA_API_URL`, `QIITA_TOKEN` and
    /// `~/.qiita_token`, falling back to the public endpoint without a token.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        let token = resolve_token(std::env::var(TOKEN_ENV).ok(), load_token_file());
        if token.is_none() {
            log::debug!("no API token configured, sending unauthenticated requests");
        }
        Config { api_url, token }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = normalize_token(token);
        self
    }
}

/// The environment value wins over the token file; blank values count as absent.
pub fn resolve_token(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
    normalize_token(from_env).or_else(|| normalize_token(from_file))
}

fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn token_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TOKEN_FILE)
}

/// Load the token from the user's home directory file, if there is one.
fn load_token_file() -> Option<String> {
    let path = token_file_path();
    match std::fs::read_to_string(&path) {
        Ok(data) => Some(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Ignoring token file {}: {}", path.display(), e);
            None
        }
    }
}
