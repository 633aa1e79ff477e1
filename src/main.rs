use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use jasmine_runner::config::{self, RunConfiguration};
use jasmine_runner::{ConsoleReporter, RecordingReporter, Reporter, Runner};

/// Jasmine Runner - run browser specs through a headless browser
#[derive(Parser, Debug)]
#[command(
    name = "jasmine-runner",
    about = "Run Jasmine specs through a headless browser and report the results",
    after_help = "ENVIRONMENT VARIABLES:\n\
        JASMINE_RUNNER_URL            Jasmine harness URL\n\
        JASMINE_RUNNER_BROWSER        Headless browser binary\n\
        JASMINE_RUNNER_NOTIFICATION   Emit notifications (true/false)\n\
        JASMINE_RUNNER_HIDE_SUCCESS   Hide success notifications (true/false)\n\
        RUST_LOG                      Log filter (e.g. debug)"
)]
struct Args {
    /// Spec files or directories. A directory runs the whole suite.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Jasmine harness URL
    #[arg(long, env = "JASMINE_RUNNER_URL", default_value = config::DEFAULT_HARNESS_URL)]
    url: String,

    /// Headless browser binary
    #[arg(long, env = "JASMINE_RUNNER_BROWSER", default_value = config::DEFAULT_BROWSER_BINARY)]
    browser: String,

    /// Do not emit notifications
    #[arg(long)]
    no_notification: bool,

    /// Do not notify when all specs pass
    #[arg(long)]
    hide_success: bool,

    /// Output the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter(args.verbose))),
        )
        .with_writer(std::io::stderr)
        .try_init();

    // Flags can only switch notifications off; the environment decides otherwise
    let env_config = config::get();
    let run_config = RunConfiguration::defaults()
        .harness_url(args.url)
        .browser_binary_path(args.browser)
        .notification(env_config.notification && !args.no_notification)
        .hide_success_notification(env_config.hide_success_notification || args.hide_success);

    // JSON output replaces the console messages; the summary carries them
    let mut reporter: Box<dyn Reporter> = if args.json {
        Box::new(RecordingReporter::new())
    } else {
        Box::new(ConsoleReporter::new())
    };
    let summary = Runner::new().run_detailed(args.paths.as_slice(), &run_config, reporter.as_mut());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(if summary.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log filter used when `RUST_LOG` is unset. Notifications are logged by the
/// console reporter at info, so that target stays visible without `--verbose`.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn,jasmine_runner::reporter=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_keeps_notifications_visible() {
        let quiet = default_log_filter(false);
        assert!(quiet.starts_with("warn"));
        assert!(quiet.contains("jasmine_runner::reporter=info"));
        assert!(tracing_subscriber::EnvFilter::try_new(quiet).is_ok());
    }

    #[test]
    fn test_verbose_log_filter() {
        assert_eq!(default_log_filter(true), "info");
    }
}
