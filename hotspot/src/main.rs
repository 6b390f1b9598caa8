use anyhow::Context;
use clap::{Parser, Subcommand};
use hotspot_core::cli::{self, ConfigArgs, ConfigCmd};
use hotspot_core::logging::init_logging;
use hotspot_core::{RunOutcome, run};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "hotspot",
    version,
    about = "Hotspot: URL latency report from nginx access logs",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    args: ConfigArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the report for the newest log (default)
    Run(ConfigArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        Some(Command::Run(args)) => run_report(&args),
        None => run_report(&cli.args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hotspot: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_report(args: &ConfigArgs) -> anyhow::Result<()> {
    let cfg = args.load().context("failed to load configuration")?;

    // Held until return so the file writer flushes.
    let _guard = init_logging(cfg.log_format, cfg.log_file.as_deref())?;

    ctrlc::set_handler(|| {
        error!("execution aborted");
        std::process::exit(1);
    })
    .context("failed to install signal handler")?;

    match run(&cfg) {
        Ok(RunOutcome::NoLogFound) => {
            info!("nothing to do");
            Ok(())
        }
        Ok(RunOutcome::AlreadyReported { path, .. }) => {
            info!(report = %path.display(), "nothing to do");
            Ok(())
        }
        Ok(RunOutcome::Reported { path, summary, .. }) => {
            info!(
                report = %path.display(),
                requests = summary.requests,
                errors = summary.errors,
                error_ratio = summary.error_ratio,
                urls = summary.distinct_urls,
                rows = summary.rows,
                "done"
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "report failed");
            Err(err.into())
        }
    }
}
