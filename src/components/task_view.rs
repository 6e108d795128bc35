//! Task View
//!
//! Task page: client switcher over a grid of task cards for that client.

use std::rc::Rc;

use board_core::{PostgrestSource, Route, TaskRecord};
use leptos::prelude::*;

use crate::collection::use_collection;
use crate::components::{ClientSwitcher, TaskCard};
use crate::context::use_board;

#[component]
pub fn TaskView(source: Rc<PostgrestSource>) -> impl IntoView {
    let board = use_board();
    let (state, on_select) = use_collection::<TaskRecord>(source);
    let selected = Signal::derive(move || state.with(|s| s.client_id().clone()));

    view! {
        <section class="collection-view">
            <h1 class="page-title">{Route::Tasks.title()}</h1>

            <ClientSwitcher
                clients=board.clients().clients().to_vec()
                selected=selected
                on_select=on_select
            />

            <div class="card-grid">
                <For
                    each=move || state.with(|s| s.rows().to_vec())
                    key=|task| task.id.clone()
                    children=|task| view! { <TaskCard task=task /> }
                />
            </div>
        </section>
    }
}
