//! Mapping of outcomes to console messages and notifications.

use crate::config::RunConfiguration;
use crate::process::RunnerError;
use crate::reporter::{Image, NotifyOptions, Reporter};

use super::types::{RunOutcome, Stats, Suite};

/// Notification title for harness and process errors
pub const ERROR_TITLE: &str = "Jasmine error";

/// Notification title for completed runs
pub const RESULTS_TITLE: &str = "Jasmine results";

/// Priority attached to failure notifications
pub const FAILURE_PRIORITY: i32 = 2;

/// Console stream a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Error,
    Success,
}

/// What to tell the user about one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub channel: Channel,
    pub message: String,
    /// Set when a notification should be emitted
    pub notification: Option<NotifyOptions>,
    pub passed: bool,
}

impl Report {
    /// Send the report through `reporter`: console first, then the notification
    pub fn deliver<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        match self.channel {
            Channel::Error => reporter.report_error(&self.message),
            Channel::Success => reporter.report_success(&self.message),
        }
        if let Some(options) = &self.notification {
            reporter.notify(&self.message, options);
        }
    }

    fn error(message: String, config: &RunConfiguration) -> Self {
        Self {
            channel: Channel::Error,
            notification: config
                .notification
                .then(|| failure_notification(ERROR_TITLE)),
            message,
            passed: false,
        }
    }
}

/// Decide how to report a parsed outcome
pub fn classify(outcome: &RunOutcome, config: &RunConfiguration) -> Report {
    match outcome {
        RunOutcome::ServerError { message } => Report::error(error_message(message), config),
        RunOutcome::ParseFailure { reason } => Report::error(error_message(reason), config),
        RunOutcome::SpecResult { suites, stats } if stats.failures > 0 => {
            let mut lines = failure_lines(suites);
            lines.push(summary_line(stats));
            Report {
                channel: Channel::Error,
                message: lines.join("\n"),
                notification: config
                    .notification
                    .then(|| failure_notification(RESULTS_TITLE)),
                passed: false,
            }
        }
        RunOutcome::SpecResult { stats, .. } => Report {
            channel: Channel::Success,
            message: summary_line(stats),
            notification: (config.notification && !config.hide_success_notification)
                .then(|| NotifyOptions::new(RESULTS_TITLE)),
            passed: true,
        },
    }
}

/// Decide how to report a browser process that could not be run
pub fn classify_process_failure(error: &RunnerError, config: &RunConfiguration) -> Report {
    Report::error(error_message(&error.to_string()), config)
}

fn error_message(detail: &str) -> String {
    format!("An error occurred: {}", detail)
}

fn failure_notification(title: &str) -> NotifyOptions {
    NotifyOptions::new(title)
        .image(Image::Failed)
        .priority(FAILURE_PRIORITY)
}

fn failure_lines(suites: &[Suite]) -> Vec<String> {
    suites
        .iter()
        .flat_map(|suite| &suite.specs)
        .filter_map(|spec| {
            spec.error_message
                .as_ref()
                .map(|error| format!("Spec '{}' failed with '{}'!", spec.description, error))
        })
        .collect()
}

/// `Jasmine ran 4 specs, 1 failure in 0.007s.`
fn summary_line(stats: &Stats) -> String {
    format!(
        "Jasmine ran {} specs, {} in {}s.",
        stats.total_specs,
        pluralize(stats.failures, "failure"),
        format_seconds(stats.elapsed_seconds)
    )
}

fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Shortest decimal form, keeping one fractional digit for whole numbers
fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{:.1}", seconds)
    } else {
        format!("{}", seconds)
    }
}
