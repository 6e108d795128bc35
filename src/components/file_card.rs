//! File Card Component

use board_core::FileRecord;
use leptos::prelude::*;

use crate::components::StatusBadge;

/// One file row: derived name, owning task, status
#[component]
pub fn FileCard(file: FileRecord) -> impl IntoView {
    let card = board_core::FileCard::new(&file);
    let task_line = card.task_line();

    view! {
        <div class="file-card">
            <div class="card-title" title=file.file_url>{card.file_name}</div>
            <div class="card-meta card-meta-split">
                <span>{task_line}</span>
                <StatusBadge badge=card.badge />
            </div>
        </div>
    }
}
