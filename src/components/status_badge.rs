//! Status Badge Component

use leptos::prelude::*;

/// Pill showing a status label in its style
#[component]
pub fn StatusBadge(badge: board_core::StatusBadge) -> impl IntoView {
    view! {
        <span class=badge.class()>{badge.label.clone()}</span>
    }
}
