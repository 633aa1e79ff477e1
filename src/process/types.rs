use std::path::PathBuf;

use thiserror::Error;

/// Result type for process operations
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Error types for launching the headless browser
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The browser process could not be started
    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process started but its output could not be collected
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
