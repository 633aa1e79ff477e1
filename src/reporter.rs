//! Presentation boundary for run results.
//!
//! The runner decides what to say and whether to notify; a [`Reporter`]
//! decides how that reaches the user:
//! - `ConsoleReporter` colours console output and logs notifications
//! - `RecordingReporter` keeps every call in memory

use std::io::{self, Write};

use crossterm::style::Stylize;
use tracing::info;

/// Severity image attached to a notification.
/// Notifications without one use the backend's default image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Image {
    Failed,
}

/// Presentation options for a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    pub title: String,

    /// None leaves the backend's default image
    pub image: Option<Image>,

    /// None leaves the backend's default priority
    pub priority: Option<i32>,
}

impl NotifyOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: None,
            priority: None,
        }
    }

    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Trait for presenting run results
pub trait Reporter {
    /// Show an error message on the console
    fn report_error(&mut self, text: &str);

    /// Show a success message on the console
    fn report_success(&mut self, text: &str);

    /// Emit a desktop notification
    fn notify(&mut self, text: &str, options: &NotifyOptions);
}

/// Writes errors to stderr in red and successes to stdout in green
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report_error(&mut self, text: &str) {
        let _ = writeln!(io::stderr(), "{}", text.red());
    }

    fn report_success(&mut self, text: &str) {
        let _ = writeln!(io::stdout(), "{}", text.green());
    }

    fn notify(&mut self, text: &str, options: &NotifyOptions) {
        info!(
            title = %options.title,
            image = ?options.image,
            priority = ?options.priority,
            "notification: {}",
            text
        );
    }
}

/// A single call made on a [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCall {
    Error(String),
    Success(String),
    Notify(String, NotifyOptions),
}

/// Captures every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub calls: Vec<ReportCall>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ReportCall::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ReportCall::Success(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<(&str, &NotifyOptions)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ReportCall::Notify(text, options) => Some((text.as_str(), options)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report_error(&mut self, text: &str) {
        self.calls.push(ReportCall::Error(text.to_string()));
    }

    fn report_success(&mut self, text: &str) {
        self.calls.push(ReportCall::Success(text.to_string()));
    }

    fn notify(&mut self, text: &str, options: &NotifyOptions) {
        self.calls.push(ReportCall::Notify(text.to_string(), options.clone()));
    }
}
