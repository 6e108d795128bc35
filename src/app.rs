//! Client Board App
//!
//! Navigation shell: loads configuration, provides it to the pages and
//! renders the page for the current path (`/` tasks, `/files` files).

use std::rc::Rc;

use board_core::{BoardConfig, ClientDirectory, PostgrestSource, Route};
use leptos::either::Either;
use leptos::prelude::*;

use crate::components::{FileView, NavBar, TaskView};
use crate::context::BoardContext;

/// Route for the path the page was loaded at
fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Tasks)
}

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::load(
        option_env!("SUPABASE_URL"),
        option_env!("SUPABASE_ANON_KEY"),
        ClientDirectory::builtin(),
    );
    // One HTTP client for the whole page
    let source = Rc::new(PostgrestSource::new(config.backend.clone()));

    let board = BoardContext::new(config);
    if !board.is_backend_configured() {
        let _ = rolling_logger::error("board started without a backend; lists will stay empty");
    }
    provide_context(board);

    let route = current_route();
    tracing::info!(path = route.path(), "rendering page");

    view! {
        <div class="board-layout">
            <NavBar current=route />
            <main class="board-main">
                {match route {
                    Route::Tasks => Either::Left(view! { <TaskView source=source /> }),
                    Route::Files => Either::Right(view! { <FileView source=source /> }),
                }}
            </main>
        </div>
    }
}
