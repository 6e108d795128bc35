//! UI Components
//!
//! Leptos components for the two board pages.

mod status_badge;
mod task_card;
mod file_card;
mod client_switcher;
mod task_view;
mod file_view;
mod nav_bar;

pub use status_badge::StatusBadge;
pub use task_card::TaskCard;
pub use file_card::FileCard;
pub use client_switcher::ClientSwitcher;
pub use task_view::TaskView;
pub use file_view::FileView;
pub use nav_bar::NavBar;
