//! Configuration types.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default service endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/conversation/api";

/// API version date sent with every request.
pub const DEFAULT_API_VERSION: &str = "2016-09-20";

/// Default location of the documentation links table.
pub const DEFAULT_DOCS_PATH: &str = "documentation_links.json";

/// Dialog client configuration.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// Service username.
    pub username: String,
    /// Service password.
    pub password: SecretString,
    /// Workspace the dialog runs against.
    pub workspace_id: String,
    /// Base URL of the service, without trailing slash.
    pub base_url: String,
    /// Version date passed as the `version` query parameter.
    pub api_version: String,
    /// Path to the documentation links JSON file.
    pub docs_path: PathBuf,
}

impl DialogConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variables.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let username = require("CONVERSATION_USERNAME")?;
        let password = SecretString::from(require("CONVERSATION_PASSWORD")?);
        let workspace_id = require("CONVERSATION_WORKSPACE_ID")?;

        let base_url = get("CONVERSATION_URL")
            .unwrap_or_else(|| DEFAULT_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "CONVERSATION_URL".to_string(),
                message: format!("'{}' is not an http(s) URL", base_url),
            });
        }

        let api_version =
            get("CONVERSATION_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let docs_path = get("DOCUMENTATION_LINKS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_PATH));

        Ok(Self {
            username,
            password,
            workspace_id,
            base_url,
            api_version,
            docs_path,
        })
    }
}
