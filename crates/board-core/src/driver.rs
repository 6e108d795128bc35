//! Fetch Driver
//!
//! Connects a view's [`CollectionState`] to a [`RecordSource`]. The view
//! calls [`CollectionDriver::mount`] once and [`CollectionDriver::select`]
//! from its client selector callback; each call issues its ticket right
//! away and hands back a future that performs the read and applies the
//! result. The caller decides how to run that future (`spawn_local` in the
//! browser, plain `.await` in tests).

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::client::ClientId;
use crate::collection::{CollectionState, FetchOutcome, FetchTicket};
use crate::query::ScopedQuery;
use crate::record::Record;
use crate::source::RecordSource;

/// A fetch that has been issued but not yet run
pub type PendingFetch = LocalBoxFuture<'static, FetchOutcome>;

/// Shared, mutable home of a view's state
pub trait StateCell<R>: Clone + 'static {
    /// Run `f` against the state; `None` once the view is gone.
    fn update<T>(&self, f: impl FnOnce(&mut CollectionState<R>) -> T) -> Option<T>;
}

impl<R: 'static> StateCell<R> for Rc<RefCell<CollectionState<R>>> {
    fn update<T>(&self, f: impl FnOnce(&mut CollectionState<R>) -> T) -> Option<T> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

pub struct CollectionDriver<R, S, C> {
    source: Rc<S>,
    cell: C,
    _record: PhantomData<fn() -> R>,
}

impl<R, S, C> Clone for CollectionDriver<R, S, C>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            cell: self.cell.clone(),
            _record: PhantomData,
        }
    }
}

impl<R, S, C> CollectionDriver<R, S, C>
where
    R: Record,
    S: RecordSource + 'static,
    C: StateCell<R>,
{
    pub fn new(source: Rc<S>, cell: C) -> Self {
        Self {
            source,
            cell,
            _record: PhantomData,
        }
    }

    /// Fetch for whatever client is currently selected
    pub fn mount(&self) -> PendingFetch {
        match self.cell.update(|state| state.begin()) {
            Some(ticket) => self.run(ticket),
            None => futures::future::ready(FetchOutcome::Detached).boxed_local(),
        }
    }

    /// Switch to `client_id`; `None` when it was already selected
    pub fn select(&self, client_id: ClientId) -> Option<PendingFetch> {
        let ticket = self.cell.update(|state| state.select(client_id))??;
        Some(self.run(ticket))
    }

    fn run(&self, ticket: FetchTicket) -> PendingFetch {
        let source = Rc::clone(&self.source);
        let cell = self.cell.clone();
        let collection = R::COLLECTION;
        tracing::debug!(%collection, client_id = %ticket.client_id(), seq = ticket.seq(), "fetch issued");

        async move {
            let result = match ScopedQuery::new(collection, ticket.client_id()) {
                Ok(query) => source.fetch::<R>(&query).await,
                Err(e) => Err(e),
            };
            let client_id = ticket.client_id().clone();
            let outcome = cell
                .update(|state| state.complete(ticket, result))
                .unwrap_or(FetchOutcome::Detached);

            match &outcome {
                FetchOutcome::Replaced { rows } => {
                    tracing::info!(%collection, %client_id, rows, "rows loaded");
                }
                FetchOutcome::Failed(e) => {
                    tracing::error!(%collection, %client_id, error = %e, "fetch failed");
                }
                FetchOutcome::Discarded {
                    current,
                    error: Some(e),
                    ..
                } => {
                    tracing::error!(%collection, %client_id, %current, error = %e, "fetch failed");
                }
                FetchOutcome::Discarded { current, error: None, .. } => {
                    tracing::debug!(%collection, %client_id, %current, "stale result dropped");
                }
                FetchOutcome::Detached => {
                    tracing::debug!(%collection, %client_id, "view gone before result");
                }
            }
            outcome
        }
        .boxed_local()
    }
}
