//! Client Board Core
//!
//! Platform-neutral side of the client board:
//! - record: task and file rows
//! - status / card: pure presentation of a row
//! - client / config: the fixed client table and backend settings
//! - query / source / postgrest: scoped reads against the table store
//! - collection / driver: per-view fetch state and the fetch driver
//! - route: the two board pages

pub mod card;
pub mod client;
pub mod collection;
pub mod config;
pub mod driver;
pub mod error;
pub mod postgrest;
pub mod query;
pub mod record;
pub mod route;
pub mod source;
pub mod status;

#[cfg(test)]
mod testing;

pub use card::{file_name, format_due, FileCard, TaskCard, UNKNOWN_SOURCE};
pub use client::{Client, ClientDirectory, ClientId};
pub use collection::{CollectionState, FetchOutcome, FetchTicket, ViewPhase};
pub use config::{BackendConfig, BoardConfig};
pub use driver::{CollectionDriver, PendingFetch, StateCell};
pub use error::{ConfigError, FetchError, FetchResult};
pub use postgrest::PostgrestSource;
pub use query::{Collection, ScopedQuery};
pub use record::{DisplayValue, FileRecord, Record, RecordId, TaskRecord};
pub use route::Route;
pub use source::RecordSource;
pub use status::{status_label, StatusBadge, StatusStyle};
