use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::RunConfiguration;
use crate::process::{self, ProcessRunner, SystemProcessRunner};
use crate::reporter::Reporter;
use crate::resolver::{self, FileReader, FsFileReader, SpecRequest};

use super::classify::{classify, classify_process_failure};
use super::parser::parse;
use super::types::{OutcomeKind, RequestReport, RunSummary};

/// Runs Jasmine specs for a set of paths and reports the results.
///
/// Requests are processed one at a time in path order. A failing request
/// never stops the ones after it.
#[derive(Debug, Clone, Default)]
pub struct Runner<P = SystemProcessRunner, F = FsFileReader> {
    process: P,
    files: F,
}

impl Runner {
    /// Runner backed by real processes and the real filesystem
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ProcessRunner, F: FileReader> Runner<P, F> {
    pub fn with_backends(process: P, files: F) -> Self {
        Self { process, files }
    }

    pub fn process_runner(&self) -> &P {
        &self.process
    }

    /// Run the specs for `paths`. True only if every request passed.
    pub fn run<S, R>(&mut self, paths: &[S], config: &RunConfiguration, reporter: &mut R) -> bool
    where
        S: AsRef<Path>,
        R: Reporter + ?Sized,
    {
        self.run_detailed(paths, config, reporter).success
    }

    /// Like [`Runner::run`], returning the per-request breakdown
    pub fn run_detailed<S, R>(
        &mut self,
        paths: &[S],
        config: &RunConfiguration,
        reporter: &mut R,
    ) -> RunSummary
    where
        S: AsRef<Path>,
        R: Reporter + ?Sized,
    {
        let started_at = Utc::now();

        if paths.is_empty() {
            debug!("no paths given, nothing to run");
            return RunSummary {
                success: false,
                started_at,
                finished_at: Utc::now(),
                requests: Vec::new(),
            };
        }

        let requests = resolver::resolve(&self.files, paths);
        let reports: Vec<RequestReport> = requests
            .into_iter()
            .map(|request| self.run_request(request, config, reporter))
            .collect();

        let success = reports.iter().all(|report| report.passed);
        info!(requests = reports.len(), success, "jasmine run finished");

        RunSummary {
            success,
            started_at,
            finished_at: Utc::now(),
            requests: reports,
        }
    }

    fn run_request<R: Reporter + ?Sized>(
        &mut self,
        request: SpecRequest,
        config: &RunConfiguration,
        reporter: &mut R,
    ) -> RequestReport {
        let invoked = process::invoke(
            &mut self.process,
            &config.browser_binary_path,
            &config.harness_url,
            &request,
        );

        let (outcome, report) = match invoked {
            Ok(raw) => {
                let outcome = parse(&raw);
                debug!(filter = ?request.filter, kind = ?outcome.kind(), "parsed jasmine result");
                (outcome.kind(), classify(&outcome, config))
            }
            Err(e) => (OutcomeKind::ProcessFailure, classify_process_failure(&e, config)),
        };

        report.deliver(reporter);

        RequestReport {
            filter: request.filter,
            outcome,
            message: report.message,
            passed: report.passed,
        }
    }
}

/// Run with the real browser and filesystem
pub fn run<S, R>(paths: &[S], config: &RunConfiguration, reporter: &mut R) -> bool
where
    S: AsRef<Path>,
    R: Reporter + ?Sized,
{
    Runner::new().run(paths, config, reporter)
}
