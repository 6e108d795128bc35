//! Client Directory
//!
//! The fixed set of clients a board can be scoped to.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Opaque key partitioning all records by client
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One selectable client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ClientId::from(id),
            name: name.to_string(),
        }
    }
}

/// Immutable, ordered client table plus the selection used on first load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    default_client: ClientId,
}

impl ClientDirectory {
    /// Rejects an empty table, blank or duplicate ids, and a default that is
    /// not in the table.
    pub fn new(clients: Vec<Client>, default_client: ClientId) -> Result<Self, ConfigError> {
        if clients.is_empty() {
            return Err(ConfigError::Missing("clients".to_string()));
        }
        for (index, client) in clients.iter().enumerate() {
            if client.id.as_str().trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "clients".to_string(),
                    reason: format!("entry {} has a blank id", index),
                });
            }
            if clients[..index].iter().any(|earlier| earlier.id == client.id) {
                return Err(ConfigError::Invalid {
                    key: "clients".to_string(),
                    reason: format!("duplicate id {}", client.id),
                });
            }
        }
        if !clients.iter().any(|client| client.id == default_client) {
            return Err(ConfigError::Invalid {
                key: "default_client".to_string(),
                reason: format!("{} is not a known client", default_client),
            });
        }
        Ok(Self { clients, default_client })
    }

    /// The clients the board ships with
    pub fn builtin() -> Self {
        Self {
            clients: vec![
                Client::new("redrose_001", "Red Rose Media"),
                Client::new("columbia_001", "Columbia Borough"),
            ],
            default_client: ClientId::from("redrose_001"),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn default_client(&self) -> &ClientId {
        &self.default_client
    }

    pub fn resolve(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.id.as_str() == id)
    }

    pub fn contains(&self, id: &ClientId) -> bool {
        self.clients.iter().any(|client| &client.id == id)
    }
}

impl Default for ClientDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
