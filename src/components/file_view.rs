//! File View
//!
//! File page: same fetch-and-render flow as the task page over the files table.

use std::rc::Rc;

use board_core::{FileRecord, PostgrestSource, Route};
use leptos::prelude::*;

use crate::collection::use_collection;
use crate::components::{ClientSwitcher, FileCard};
use crate::context::use_board;

#[component]
pub fn FileView(source: Rc<PostgrestSource>) -> impl IntoView {
    let board = use_board();
    let (state, on_select) = use_collection::<FileRecord>(source);
    let selected = Signal::derive(move || state.with(|s| s.client_id().clone()));

    view! {
        <section class="collection-view">
            <h1 class="page-title">{Route::Files.title()}</h1>
            <ClientSwitcher
                clients=board.clients().clients().to_vec()
                selected=selected
                on_select=on_select
            />

            <div class="card-grid">
                <For
                    each=move || state.with(|s| s.rows().to_vec())
                    key=|file| file.id.clone()
                    children=|file| view! { <FileCard file=file /> }
                />
            </div>
        </section>
    }
}
