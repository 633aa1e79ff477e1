//! Process execution abstraction for the headless browser.
//!
//! The runner never spawns processes directly. It goes through [`ProcessRunner`]:
//! - `SystemProcessRunner` starts a real OS process and drains its stdout
//! - tests supply an in-memory implementation that replays canned payloads

use std::io::Read;
use std::process::{Command, Stdio};

use tracing::debug;

use super::command::HarnessCommand;
use super::types::{RunnerError, RunnerResult};
use crate::resolver::SpecRequest;

/// Trait for executing a built harness command
pub trait ProcessRunner {
    /// Run the command to completion and return everything it wrote to stdout.
    /// The exit status is not inspected.
    fn run(&mut self, command: &HarnessCommand) -> RunnerResult<String>;
}

/// Runs commands as blocking child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&mut self, command: &HarnessCommand) -> RunnerResult<String> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let mut bytes = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            // Drain fully before reaping so the child never blocks on a full pipe
            if let Err(e) = stdout.read_to_end(&mut bytes) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        }

        let status = child.wait()?;
        debug!(%status, bytes = bytes.len(), "browser process finished");

        // Invalid UTF-8 is left for the payload parser to reject
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Build the command for `request` and run it, returning the raw output
pub fn invoke<P: ProcessRunner + ?Sized>(
    runner: &mut P,
    browser_binary_path: &str,
    harness_url: &str,
    request: &SpecRequest,
) -> RunnerResult<String> {
    let command = HarnessCommand::new(browser_binary_path, harness_url, request);
    debug!(command = %command, "launching headless browser");
    runner.run(&command)
}
