//! Record Cards
//!
//! Display models for one task or file. Everything here is a pure function
//! of the row; the UI layer only lays these strings out.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::record::{FileRecord, RecordId, TaskRecord};
use crate::status::StatusBadge;

/// Placeholder for a task with no recorded author
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Summary of a task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub key: RecordId,
    pub title: String,
    pub badge: StatusBadge,
    pub priority: String,
    /// Formatted date, `None` when the task has no due value
    pub due: Option<String>,
    pub source: String,
}

impl TaskCard {
    pub fn new(task: &TaskRecord) -> Self {
        Self {
            key: task.id.clone(),
            title: task.task.clone(),
            badge: StatusBadge::new(&task.status),
            priority: task.priority.to_string(),
            due: task
                .due
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map(format_due),
            source: task
                .created_by
                .as_deref()
                .filter(|author| !author.trim().is_empty())
                .unwrap_or(UNKNOWN_SOURCE)
                .to_string(),
        }
    }

    pub fn priority_line(&self) -> String {
        format!("Priority: {}", self.priority)
    }

    pub fn due_line(&self) -> Option<String> {
        self.due.as_ref().map(|date| format!("Due: {}", date))
    }

    pub fn source_line(&self) -> String {
        format!("Source: {}", self.source)
    }
}

/// Summary of a file row
#[derive(Debug, Clone, PartialEq)]
pub struct FileCard {
    pub key: RecordId,
    pub file_name: String,
    pub task_ref: String,
    pub badge: StatusBadge,
}

impl FileCard {
    pub fn new(file: &FileRecord) -> Self {
        Self {
            key: file.id.clone(),
            file_name: file_name(&file.file_url).to_string(),
            task_ref: file
                .task_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            badge: StatusBadge::new(&file.status),
        }
    }

    pub fn task_line(&self) -> String {
        format!("Task ID: {}", self.task_ref)
    }
}

/// Last `/`-separated segment. No separator gives the whole string; a
/// trailing separator gives an empty name.
pub fn file_name(file_url: &str) -> &str {
    file_url.rsplit('/').next().unwrap_or(file_url)
}

/// Date part of a stored date-time.
///
/// In the browser this is the locale date in local time. Elsewhere it is
/// month/day/year in the offset the value was stored with. Text that is
/// not a recognizable date is shown as-is.
pub fn format_due(raw: &str) -> String {
    locale_date(raw.trim())
        .or_else(|| parse_date(raw.trim()).map(|date| date.format("%-m/%-d/%Y").to_string()))
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(target_arch = "wasm32")]
fn locale_date(raw: &str) -> Option<String> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return None;
    }
    Some(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED).into())
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date(_raw: &str) -> Option<String> {
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DisplayValue;
    use crate::status::StatusStyle;

    fn task(due: Option<&str>, created_by: Option<&str>) -> TaskRecord {
        TaskRecord {
            id: RecordId::Int(1),
            task: "Draft newsletter".to_string(),
            status: "in_progress".to_string(),
            priority: DisplayValue(serde_json::json!("medium")),
            due: due.map(str::to_string),
            created_by: created_by.map(str::to_string),
            client_id: "redrose_001".to_string(),
            inserted_at: None,
        }
    }

    fn file(url: &str) -> FileRecord {
        FileRecord {
            id: RecordId::Int(9),
            file_url: url.to_string(),
            task_id: Some(RecordId::Int(1)),
            status: "uploaded".to_string(),
            client_id: "redrose_001".to_string(),
            inserted_at: None,
        }
    }

    #[test]
    fn test_task_card_full() {
        let card = TaskCard::new(&task(Some("2024-06-01T17:30:00+00:00"), Some("ops-bot")));
        assert_eq!(card.title, "Draft newsletter");
        assert_eq!(card.badge.label, "in progress");
        assert_eq!(card.badge.style, StatusStyle::InProgress);
        assert_eq!(card.priority_line(), "Priority: medium");
        assert_eq!(card.due_line().as_deref(), Some("Due: 6/1/2024"));
        assert_eq!(card.source_line(), "Source: ops-bot");
    }

    #[test]
    fn test_task_without_due_has_no_due_line() {
        let card = TaskCard::new(&task(None, Some("ops-bot")));
        assert!(card.due.is_none());
        assert!(card.due_line().is_none());

        let blank = TaskCard::new(&task(Some(""), None));
        assert!(blank.due_line().is_none());

        let spaces = TaskCard::new(&task(Some("   "), None));
        assert!(spaces.due.is_none());
        assert!(spaces.due_line().is_none());
    }

    #[test]
    fn test_task_without_author_shows_unknown() {
        assert_eq!(TaskCard::new(&task(None, None)).source_line(), "Source: unknown");
        assert_eq!(TaskCard::new(&task(None, Some(""))).source, UNKNOWN_SOURCE);
        assert_eq!(TaskCard::new(&task(None, Some("  "))).source, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_priority_always_shown() {
        let mut row = task(None, None);
        row.priority = DisplayValue::default();
        assert_eq!(TaskCard::new(&row).priority_line(), "Priority: ");
    }

    #[test]
    fn test_file_name_segments() {
        assert_eq!(file_name("a/b/c.pdf"), "c.pdf");
        assert_eq!(file_name("a/b/"), "");
        assert_eq!(file_name("report.docx"), "report.docx");
        assert_eq!(file_name(""), "");
        assert_eq!(
            file_name("https://cdn.example.com/clients/redrose/brief.pdf"),
            "brief.pdf"
        );
    }

    #[test]
    fn test_file_card() {
        let card = FileCard::new(&file("uploads/redrose/logo.png"));
        assert_eq!(card.file_name, "logo.png");
        assert_eq!(card.task_line(), "Task ID: 1");
        assert_eq!(card.badge.style, StatusStyle::Uploaded);

        let mut orphan = file("uploads/");
        orphan.task_id = None;
        let card = FileCard::new(&orphan);
        assert_eq!(card.file_name, "");
        assert_eq!(card.task_line(), "Task ID: ");
    }

    #[test]
    fn test_format_due_variants() {
        assert_eq!(format_due("2024-12-31T23:59:59.123+00:00"), "12/31/2024");
        assert_eq!(format_due("2024-03-05T08:00:00-05:00"), "3/5/2024");
        assert_eq!(format_due("2024-03-05 08:00:00+00"), "3/5/2024");
        assert_eq!(format_due("2024-03-05T08:00:00"), "3/5/2024");
        assert_eq!(format_due("2024-03-05"), "3/5/2024");
        assert_eq!(format_due("next friday"), "next friday");
        assert_eq!(format_due("  "), "  ");
        // Native builds have no browser locale to consult
        assert!(locale_date("2024-03-05").is_none());
    }
}
