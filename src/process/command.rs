//! Command construction for the headless browser.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::resolver::SpecRequest;

/// Driver script handed to the browser. It loads the harness URL and prints
/// the JSON result payload on stdout. Lives at a fixed place in the package.
pub const DRIVER_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/driver/run-jasmine.coffee");

/// A fully built browser invocation: program plus arguments, no shell involved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessCommand {
    /// Browser executable
    pub program: PathBuf,
    /// Driver script followed by the harness URL
    pub args: Vec<String>,
}

impl HarnessCommand {
    /// Build the command that runs `request` against the harness at `harness_url`
    pub fn new(browser_binary_path: impl AsRef<Path>, harness_url: &str, request: &SpecRequest) -> Self {
        Self {
            program: browser_binary_path.as_ref().to_path_buf(),
            args: vec![DRIVER_SCRIPT.to_string(), harness_url_for(harness_url, request)],
        }
    }

    /// The harness URL this command points the browser at
    pub fn url(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for HarnessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Append the `spec` query when the request is filtered
fn harness_url_for(harness_url: &str, request: &SpecRequest) -> String {
    match &request.filter {
        Some(filter) => format!("{}?spec={}", harness_url, urlencoding::encode(filter)),
        None => harness_url.to_string(),
    }
}
