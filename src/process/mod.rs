pub mod backend;
pub mod command;
pub mod types;

pub use backend::{ProcessRunner, SystemProcessRunner, invoke};
pub use command::{DRIVER_SCRIPT, HarnessCommand};
pub use types::{RunnerError, RunnerResult};
