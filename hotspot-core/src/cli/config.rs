use crate::cli::args::ConfigArgs;
use crate::locate::find_latest;
use crate::report::{report_exists, report_path};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        #[command(flatten)]
        args: ConfigArgs,
    },

    /// Print resolved configuration
    Dump {
        #[command(flatten)]
        args: ConfigArgs,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { args } => check(&args),
        ConfigCmd::Dump { args, json, yaml } => dump(&args, json, yaml),
    }
}

pub fn check(args: &ConfigArgs) -> Result<()> {
    let cfg = args.load()?;

    println!("{} Config loaded successfully", "✔".green());
    println!("{} report size {}", "✔".green(), cfg.report_size);
    println!("{} error limit {}", "✔".green(), cfg.error_limit);

    if cfg.report_template_file.is_file() {
        println!(
            "{} template {}",
            "✔".green(),
            cfg.report_template_file.display()
        );
    } else {
        println!(
            "{} template {} not found",
            "!".yellow(),
            cfg.report_template_file.display()
        );
    }

    match find_latest(&cfg.log_dir)? {
        Some(log) => {
            let report = report_path(&cfg.report_dir, log.date);
            let state = if report_exists(&report) {
                "already reported"
            } else {
                "pending"
            };
            println!(
                "{} latest log {} ({}, {})",
                "✔".green(),
                log.path.display(),
                log.date.format("%Y.%m.%d"),
                state
            );
        }
        None => println!(
            "{} no log file in {}",
            "!".yellow(),
            cfg.log_dir.display()
        ),
    }

    Ok(())
}

/// JSON unless `--yaml` is given.
pub fn dump(args: &ConfigArgs, _json: bool, yaml: bool) -> Result<()> {
    let cfg = args.load()?;

    if yaml {
        dump_yaml(&cfg)
    } else {
        dump_json(&cfg)
    }
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
