//! Test Sources
//!
//! In-memory [`RecordSource`] doubles.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::client::ClientId;
use crate::error::{FetchError, FetchResult};
use crate::query::{Collection, ScopedQuery};
use crate::record::Record;
use crate::source::RecordSource;

fn decode<R: Record>(rows: Vec<Value>) -> FetchResult<Vec<R>> {
    serde_json::from_value(Value::Array(rows)).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Serves stored JSON rows filtered by `client_id`, in stored order, and
/// records every query it receives.
#[derive(Default)]
pub struct MemorySource {
    rows: RefCell<HashMap<Collection, Vec<Value>>>,
    failing: RefCell<HashSet<ClientId>>,
    calls: RefCell<Vec<(Collection, ClientId)>>,
}

impl MemorySource {
    pub fn with_rows(collection: Collection, rows: Vec<Value>) -> Self {
        let source = Self::default();
        source.rows.borrow_mut().insert(collection, rows);
        source
    }

    pub fn fail_for(&self, client_id: &str) {
        self.failing.borrow_mut().insert(ClientId::from(client_id));
    }

    pub fn calls(&self) -> Vec<(Collection, ClientId)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RecordSource for MemorySource {
    async fn fetch<R: Record>(&self, query: &ScopedQuery) -> FetchResult<Vec<R>> {
        self.calls
            .borrow_mut()
            .push((query.collection(), query.client_id().clone()));

        if self.failing.borrow().contains(query.client_id()) {
            return Err(FetchError::Remote {
                status: 401,
                message: "Invalid API key".to_string(),
            });
        }

        let rows = self
            .rows
            .borrow()
            .get(&query.collection())
            .map(|rows| {
                rows.iter()
                    .filter(|row| row["client_id"] == query.client_id().as_str())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        decode(rows)
    }
}

/// Holds every fetch open until the test releases it, so completion order
/// can differ from issue order.
#[derive(Default)]
pub struct GatedSource {
    pending: RefCell<Vec<(ClientId, oneshot::Sender<FetchResult<Vec<Value>>>)>>,
}

impl GatedSource {
    pub fn waiting(&self) -> Vec<ClientId> {
        self.pending.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    /// Resolve the oldest open fetch for `client_id`
    pub fn release(&self, client_id: &str, result: FetchResult<Vec<Value>>) {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .position(|(id, _)| id.as_str() == client_id)
            .unwrap_or_else(|| panic!("no open fetch for {}", client_id));
        let (_, sender) = pending.remove(index);
        let _ = sender.send(result);
    }
}

#[async_trait(?Send)]
impl RecordSource for GatedSource {
    async fn fetch<R: Record>(&self, query: &ScopedQuery) -> FetchResult<Vec<R>> {
        let (sender, receiver) = oneshot::channel();
        self.pending
            .borrow_mut()
            .push((query.client_id().clone(), sender));
        let rows = receiver
            .await
            .map_err(|_| FetchError::Transport("gate dropped".to_string()))??;
        decode(rows)
    }
}
