//! Record Source
//!
//! Abstract read access to the persistence service.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::query::ScopedQuery;
use crate::record::Record;

/// Read side of the persistence boundary
///
/// Implementations run on a single-threaded event loop, so the returned
/// futures are not required to be `Send`. A source keeps no cache and never
/// retries.
#[async_trait(?Send)]
pub trait RecordSource {
    /// Every row matching the query, newest first, or a failure with no rows
    async fn fetch<R: Record>(&self, query: &ScopedQuery) -> FetchResult<Vec<R>>;
}
