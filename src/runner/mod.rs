pub mod classify;
pub mod orchestrate;
pub mod parser;
pub mod types;

pub use classify::{Channel, Report, classify, classify_process_failure};
pub use orchestrate::{Runner, run};
pub use parser::parse;
pub use types::{OutcomeKind, RequestReport, RunOutcome, RunSummary, SpecCase, Stats, Suite};
