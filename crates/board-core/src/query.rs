//! Scoped Queries
//!
//! The only read the board performs: every row of one table for one client,
//! newest first.

use serde::{Deserialize, Serialize};

use crate::client::ClientId;
use crate::error::{FetchError, FetchResult};

/// Column every query filters on
pub const CLIENT_COLUMN: &str = "client_id";
/// Column every query orders by, descending
pub const ORDER_COLUMN: &str = "inserted_at";

/// Tables the board reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Tasks,
    Files,
}

impl Collection {
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Tasks => "tasks",
            Collection::Files => "files",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// A read of one collection restricted to one client.
///
/// There is no way to build an unscoped query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedQuery {
    collection: Collection,
    client_id: ClientId,
}

impl ScopedQuery {
    pub fn new(collection: Collection, client_id: &ClientId) -> FetchResult<Self> {
        if client_id.as_str().trim().is_empty() {
            return Err(FetchError::InvalidQuery(format!(
                "{} query needs a client id",
                collection
            )));
        }
        Ok(Self {
            collection,
            client_id: client_id.clone(),
        })
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// PostgREST query string pairs: all columns, equality filter, ordering.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            (CLIENT_COLUMN, format!("eq.{}", self.client_id)),
            ("order", format!("{}.desc", ORDER_COLUMN)),
        ]
    }
}
