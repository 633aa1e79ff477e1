//! Jasmine Runner - run browser specs through a headless browser.
//!
//! This crate provides:
//! - Resolution of spec files and directories into harness requests
//! - Blocking headless-browser invocation against a Jasmine harness
//! - Typed decoding of the harness result payload
//! - Console and notification reporting through a pluggable [`Reporter`]
//!
//! # Example
//!
//! ```rust,no_run
//! use jasmine_runner::{ConsoleReporter, RunConfiguration, Runner};
//!
//! let config = RunConfiguration::from_env();
//! let mut reporter = ConsoleReporter::new();
//! let passed = Runner::new().run(&["spec/javascripts/cart_spec.js"], &config, &mut reporter);
//! std::process::exit(if passed { 0 } else { 1 });
//! ```

pub mod config;
pub mod process;
pub mod reporter;
pub mod resolver;
pub mod runner;

// Re-export configuration
pub use config::RunConfiguration;

// Re-export process types
pub use process::{HarnessCommand, ProcessRunner, RunnerError, RunnerResult, SystemProcessRunner};

// Re-export reporting
pub use reporter::{ConsoleReporter, Image, NotifyOptions, RecordingReporter, ReportCall, Reporter};

// Re-export resolution
pub use resolver::{FileReader, FsFileReader, SpecRequest, extract_description, resolve};

// Re-export runner types
pub use runner::{OutcomeKind, RequestReport, RunOutcome, RunSummary, Runner, SpecCase, Stats, Suite, parse, run};
