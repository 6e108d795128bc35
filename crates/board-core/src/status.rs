//! Status Presentation
//!
//! Maps a raw status value to a badge label and a style token.

use serde::{Deserialize, Serialize};

/// Visual category of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusStyle {
    ToDo,
    InProgress,
    Done,
    Uploaded,
    /// Anything outside the known status set
    Fallback,
}

impl StatusStyle {
    /// Known statuses and their styles
    pub const KNOWN: &'static [(&'static str, StatusStyle)] = &[
        ("to_do", StatusStyle::ToDo),
        ("in_progress", StatusStyle::InProgress),
        ("done", StatusStyle::Done),
        ("uploaded", StatusStyle::Uploaded),
    ];

    /// Never fails: unknown values map to `Fallback`.
    pub fn for_status(status: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(value, _)| *value == status)
            .map(|(_, style)| *style)
            .unwrap_or(StatusStyle::Fallback)
    }

    /// CSS class carried by the badge
    pub fn token(&self) -> &'static str {
        match self {
            StatusStyle::ToDo => "badge-to-do",
            StatusStyle::InProgress => "badge-in-progress",
            StatusStyle::Done => "badge-done",
            StatusStyle::Uploaded => "badge-uploaded",
            StatusStyle::Fallback => "badge-default",
        }
    }
}

/// Rendered form of a status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    pub style: StatusStyle,
}

impl StatusBadge {
    pub fn new(status: &str) -> Self {
        Self {
            label: status_label(status),
            style: StatusStyle::for_status(status),
        }
    }

    pub fn class(&self) -> String {
        format!("status-badge {}", self.style.token())
    }
}

/// Underscores become spaces; casing is left alone.
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}
