//! Task Card Component
//!
//! Compact summary of one task row.

use board_core::TaskRecord;
use leptos::prelude::*;

use crate::components::StatusBadge;

#[component]
pub fn TaskCard(task: TaskRecord) -> impl IntoView {
    let card = board_core::TaskCard::new(&task);
    let priority = card.priority_line();
    let due = card.due_line();
    let source = card.source_line();

    view! {
        <div class="task-card">
            <div class="card-header">
                <h2 class="card-title">{card.title}</h2>
                <StatusBadge badge=card.badge />
            </div>

            <div class="card-meta">
                <span class="card-priority">{priority}</span>
                {due.map(|line| view! { <span class="card-due">{line}</span> })}
            </div>

            <div class="card-source">{source}</div>
        </div>
    }
}
