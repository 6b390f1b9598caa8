use crate::conf::{AnalyzerConfig, ConfigError, ConfigLayer, DEFAULT_CONFIG_PATH, load_config};
use crate::logging::LogFormat;
use clap::Args;
use std::path::PathBuf;

/// Command line layer of the configuration. Flags win over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON or TOML config file; `--config` alone means ./config
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Maximum number of URLs in the report
    #[arg(long, value_name = "N")]
    pub report_size: Option<usize>,

    /// Directory the report is written to
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// HTML template containing `$table_json`
    #[arg(long = "template", value_name = "FILE")]
    pub report_template_file: Option<PathBuf>,

    /// Directory holding the access logs
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Tolerated share of unparsable lines, within [0, 1]
    #[arg(long, value_name = "RATIO")]
    pub error_limit: Option<f64>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            report_size: self.report_size,
            report_dir: self.report_dir.clone(),
            report_template_file: self.report_template_file.clone(),
            log_dir: self.log_dir.clone(),
            log_file: self.log_file.clone(),
            log_format: self.log_format,
            error_limit: self.error_limit,
        }
    }

    pub fn load(&self) -> Result<AnalyzerConfig, ConfigError> {
        load_config(self.config.as_deref(), self.overrides())
    }
}
