//! Board Configuration
//!
//! Backend location and the client table, assembled once at startup.

use serde::{Deserialize, Serialize};

use crate::client::ClientDirectory;
use crate::error::ConfigError;

/// Environment variable naming the service base URL
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the anonymous API key
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Where the persistence service lives and how to authenticate to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::Missing(URL_VAR.to_string()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {}", url),
            });
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(KEY_VAR.to_string()));
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Build from optional environment values, e.g. `option_env!` lookups.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url.ok_or_else(|| ConfigError::Missing(URL_VAR.to_string()))?;
        let anon_key = anon_key.ok_or_else(|| ConfigError::Missing(KEY_VAR.to_string()))?;
        Self::new(url, anon_key)
    }

    /// Endpoint for one table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

/// Everything injected into the UI at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// `None` when the backend settings were missing or invalid
    pub backend: Option<BackendConfig>,
    pub clients: ClientDirectory,
}

impl BoardConfig {
    /// A broken backend setting does not stop the board from starting; it
    /// is reported and every fetch will fail instead.
    pub fn load(url: Option<&str>, anon_key: Option<&str>, clients: ClientDirectory) -> Self {
        let backend = match BackendConfig::from_values(url, anon_key) {
            Ok(backend) => {
                tracing::info!(url = %backend.url, "backend configured");
                Some(backend)
            }
            Err(e) => {
                tracing::error!(error = %e, "backend configuration unusable");
                None
            }
        };
        Self { backend, clients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_backend_trims_url() {
        let backend = BackendConfig::new(" https://xyz.supabase.co/ ", " anon ").unwrap();
        assert_eq!(backend.url, "https://xyz.supabase.co");
        assert_eq!(backend.anon_key, "anon");
        assert_eq!(backend.table_url("tasks"), "https://xyz.supabase.co/rest/v1/tasks");
    }

    #[test]
    fn test_backend_validation() {
        assert_eq!(
            BackendConfig::from_values(None, Some("k")).unwrap_err(),
            ConfigError::Missing(URL_VAR.to_string())
        );
        assert_eq!(
            BackendConfig::from_values(Some("https://a.b"), Some("  ")).unwrap_err(),
            ConfigError::Missing(KEY_VAR.to_string())
        );
        assert!(matches!(
            BackendConfig::new("xyz.supabase.co", "k"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_load_without_backend_still_has_clients() {
        let config = BoardConfig::load(None, None, ClientDirectory::builtin());
        assert!(config.backend.is_none());
        assert_eq!(config.clients.default_client().as_str(), "redrose_001");
        assert!(logs_contain("backend configuration unusable"));
    }

    #[test]
    fn test_load_with_backend() {
        let config = BoardConfig::load(
            Some("http://localhost:54321"),
            Some("local-anon"),
            ClientDirectory::builtin(),
        );
        assert_eq!(
            config.backend.map(|b| b.url),
            Some("http://localhost:54321".to_string())
        );
    }
}
