//! Board Routes
//!
//! The two pages of the board and the paths they live at.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tasks,
    Files,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Tasks, Route::Files];

    /// `/files` is the file page; every other path shows the task page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/files" => Route::Files,
            _ => Route::Tasks,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Tasks => "/",
            Route::Files => "/files",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Tasks => "Task Tracker",
            Route::Files => "File Tracker",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Tasks => "Tasks",
            Route::Files => "Files",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Tasks);
        assert_eq!(Route::from_path(""), Route::Tasks);
        assert_eq!(Route::from_path("/files"), Route::Files);
        assert_eq!(Route::from_path("/files/"), Route::Files);
        assert_eq!(Route::from_path("/unknown"), Route::Tasks);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
