//! Collection State
//!
//! Per-view state machine: the selected client, the rows last fetched for
//! it, and the fetches still outstanding.
//!
//! ```text
//! Idle(rows) --mount / client change--> Fetching(rows)
//! Fetching   --success--> Idle(new rows)
//! Fetching   --failure--> Idle(rows)      diagnostic only
//! ```
//!
//! Results are tagged with the client they were requested for. A result
//! for a client that is no longer selected is dropped, so a slow response
//! can never overwrite rows for the current selection. A dropped failure
//! still carries its error so it can be reported.

use crate::client::ClientId;
use crate::error::{FetchError, FetchResult};

/// Whether any fetch is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Fetching { outstanding: usize },
}

/// Handle for one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    client_id: ClientId,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }
}

/// What completing a fetch did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Held rows replaced wholesale
    Replaced { rows: usize },
    /// Held rows untouched
    Failed(FetchError),
    /// The result belonged to a client that is no longer selected; `error`
    /// is set when that result was a failure
    Discarded {
        requested: ClientId,
        current: ClientId,
        error: Option<FetchError>,
    },
    /// The view was torn down before the result arrived
    Detached,
}

#[derive(Debug, Clone)]
pub struct CollectionState<R> {
    client_id: ClientId,
    rows: Vec<R>,
    phase: ViewPhase,
    next_seq: u64,
}

impl<R> CollectionState<R> {
    /// Empty and idle, scoped to `client_id`
    pub fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            rows: Vec::new(),
            phase: ViewPhase::Idle,
            next_seq: 0,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, ViewPhase::Fetching { .. })
    }

    /// Issue a fetch for the current client (initial mount)
    pub fn begin(&mut self) -> FetchTicket {
        let ticket = FetchTicket {
            seq: self.next_seq,
            client_id: self.client_id.clone(),
        };
        self.next_seq += 1;
        self.phase = match self.phase {
            ViewPhase::Idle => ViewPhase::Fetching { outstanding: 1 },
            ViewPhase::Fetching { outstanding } => ViewPhase::Fetching {
                outstanding: outstanding + 1,
            },
        };
        ticket
    }

    /// Change the selection and issue its fetch. Selecting the client that
    /// is already selected is not a change and issues nothing.
    pub fn select(&mut self, client_id: ClientId) -> Option<FetchTicket> {
        if client_id == self.client_id {
            return None;
        }
        self.client_id = client_id;
        Some(self.begin())
    }

    /// Settle a fetch issued by [`begin`](Self::begin) or [`select`](Self::select).
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult<Vec<R>>) -> FetchOutcome {
        self.phase = match self.phase {
            ViewPhase::Fetching { outstanding } if outstanding > 1 => ViewPhase::Fetching {
                outstanding: outstanding - 1,
            },
            _ => ViewPhase::Idle,
        };

        if ticket.client_id != self.client_id {
            return FetchOutcome::Discarded {
                requested: ticket.client_id,
                current: self.client_id.clone(),
                error: result.err(),
            };
        }

        match result {
            Ok(rows) => {
                let count = rows.len();
                self.rows = rows;
                FetchOutcome::Replaced { rows: count }
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
