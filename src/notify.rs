//! Notifications
//!
//! Every user-facing outcome, success or failure, is reported through a
//! single notification surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: Level,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Level::Success)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Level::Warning)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Level::Error)
    }

    fn new(title: impl Into<String>, message: impl Into<String>, level: Level) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    /// Generic message for a form with blank required fields
    pub fn validation_failed() -> Self {
        Self::error("Validation Error", "Please fill in all required fields.")
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}
