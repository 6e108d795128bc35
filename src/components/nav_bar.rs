//! Navigation Bar Component

use board_core::Route;
use leptos::prelude::*;

/// Links to both board pages, marking the current one
#[component]
pub fn NavBar(current: Route) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Route::ALL.iter().map(|route| {
                let class = if *route == current { "nav-link active" } else { "nav-link" };
                view! {
                    <a class=class href=route.path()>{route.nav_label()}</a>
                }
            }).collect_view()}
        </nav>
    }
}
