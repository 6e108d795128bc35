//! Collection Binding
//!
//! Hosts a view's `CollectionState` in a signal and wires it to the fetch
//! driver. Both board pages go through [`use_collection`].

use std::rc::Rc;

use board_core::{
    ClientId, CollectionDriver, CollectionState, PostgrestSource, Record, StateCell,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;

/// Signal-backed state cell; renders re-run whenever the driver settles a fetch
pub struct SignalCell<R: Send + Sync + 'static>(pub RwSignal<CollectionState<R>>);

impl<R: Send + Sync + 'static> Clone for SignalCell<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for SignalCell<R> {}

impl<R: Record> StateCell<R> for SignalCell<R> {
    fn update<T>(&self, f: impl FnOnce(&mut CollectionState<R>) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}

/// Mount a collection: creates its state at the default client, issues the
/// initial fetch, and returns the state plus the selection callback the
/// client switcher should notify.
pub fn use_collection<R: Record>(
    source: Rc<PostgrestSource>,
) -> (RwSignal<CollectionState<R>>, impl Fn(ClientId) + Clone + 'static) {
    let board = use_board();
    let state = RwSignal::new(CollectionState::<R>::new(
        board.clients().default_client().clone(),
    ));
    let driver = CollectionDriver::new(source, SignalCell(state));

    let initial = driver.mount();
    spawn_local(async move {
        initial.await;
    });

    let on_select = move |client_id: ClientId| {
        if !board.clients().contains(&client_id) {
            tracing::warn!(%client_id, collection = %R::COLLECTION, "ignoring unknown client");
            return;
        }
        if let Some(fetch) = driver.select(client_id) {
            spawn_local(async move {
                fetch.await;
            });
        }
    };

    (state, on_select)
}
