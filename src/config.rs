//! Configuration management with environment variable support.
//!
//! The runner consumes a small, immutable option set per invocation. This module
//! resolves that set from:
//! - Environment variables for every option
//! - Built-in defaults matching a stock local Jasmine setup
//! - Builder methods for programmatic configuration
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JASMINE_RUNNER_URL` | Base URL of the running Jasmine harness | `http://localhost:3000/jasmine` |
//! | `JASMINE_RUNNER_BROWSER` | Headless browser executable | `/usr/local/bin/phantomjs` |
//! | `JASMINE_RUNNER_NOTIFICATION` | Emit desktop notifications | `true` |
//! | `JASMINE_RUNNER_HIDE_SUCCESS` | Suppress notifications for passing runs | `false` |
//!
//! # Example
//!
//! ```bash
//! export JASMINE_RUNNER_URL="http://localhost:8888/specs"
//! export JASMINE_RUNNER_HIDE_SUCCESS=1
//! ```

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values
// ============================================================================

/// Default Jasmine harness URL
pub const DEFAULT_HARNESS_URL: &str = "http://localhost:3000/jasmine";

/// Default headless browser binary
pub const DEFAULT_BROWSER_BINARY: &str = "/usr/local/bin/phantomjs";

/// Notifications are on unless disabled
pub const DEFAULT_NOTIFICATION: bool = true;

/// Success notifications are shown unless hidden
pub const DEFAULT_HIDE_SUCCESS: bool = false;

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the harness URL
pub const ENV_HARNESS_URL: &str = "JASMINE_RUNNER_URL";

/// Environment variable for the browser binary
pub const ENV_BROWSER_BINARY: &str = "JASMINE_RUNNER_BROWSER";

/// Environment variable toggling notifications
pub const ENV_NOTIFICATION: &str = "JASMINE_RUNNER_NOTIFICATION";

/// Environment variable hiding success notifications
pub const ENV_HIDE_SUCCESS: &str = "JASMINE_RUNNER_HIDE_SUCCESS";

static CONFIG: OnceLock<RunConfiguration> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static RunConfiguration {
    CONFIG.get_or_init(RunConfiguration::from_env)
}

/// Options consumed by a single runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Base URL of the running test harness
    pub harness_url: String,
    /// Path to the headless browser executable
    pub browser_binary_path: String,
    /// Whether to emit notifications at all
    pub notification: bool,
    /// Whether to skip the notification for a fully passing run
    pub hide_success_notification: bool,
}

impl RunConfiguration {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            harness_url: env::var(ENV_HARNESS_URL).unwrap_or_else(|_| DEFAULT_HARNESS_URL.to_string()),
            browser_binary_path: env::var(ENV_BROWSER_BINARY)
                .unwrap_or_else(|_| DEFAULT_BROWSER_BINARY.to_string()),
            notification: env::var(ENV_NOTIFICATION)
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(DEFAULT_NOTIFICATION),
            hide_success_notification: env::var(ENV_HIDE_SUCCESS)
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(DEFAULT_HIDE_SUCCESS),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            harness_url: DEFAULT_HARNESS_URL.to_string(),
            browser_binary_path: DEFAULT_BROWSER_BINARY.to_string(),
            notification: DEFAULT_NOTIFICATION,
            hide_success_notification: DEFAULT_HIDE_SUCCESS,
        }
    }

    pub fn harness_url(mut self, url: impl Into<String>) -> Self {
        self.harness_url = url.into();
        self
    }

    pub fn browser_binary_path(mut self, path: impl Into<String>) -> Self {
        self.browser_binary_path = path.into();
        self
    }

    pub fn notification(mut self, enabled: bool) -> Self {
        self.notification = enabled;
        self
    }

    pub fn hide_success_notification(mut self, hide: bool) -> Self {
        self.hide_success_notification = hide;
        self
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        get().clone()
    }
}

/// Parse a boolean-ish environment value.
/// Accepts 1/true/yes/on and 0/false/no/off, case-insensitively.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
