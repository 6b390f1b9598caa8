use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Used when `--config` is passed without a value.
pub const DEFAULT_CONFIG_PATH: &str = "./config";

/// Fully resolved settings for one analyzer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AnalyzerConfig {
    /// Maximum number of URLs in the report
    pub report_size: usize,
    pub report_dir: PathBuf,
    pub report_template_file: PathBuf,
    pub log_dir: PathBuf,
    /// Where the analyzer writes its own diagnostics; stderr when unset
    pub log_file: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Tolerated share of unparsable lines, within [0, 1]
    pub error_limit: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./reports"),
            report_template_file: PathBuf::from("./report.html"),
            log_dir: PathBuf::from("./log"),
            log_file: None,
            log_format: LogFormat::Text,
            error_limit: 0.5,
        }
    }
}

/// One partial source of settings: a config file or the command line.
///
/// Every key is optional; unset keys leave the lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct ConfigLayer {
    pub report_size: Option<usize>,
    pub report_dir: Option<PathBuf>,
    pub report_template_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
    pub error_limit: Option<f64>,
}

impl ConfigLayer {
    pub fn apply_to(self, config: &mut AnalyzerConfig) {
        if let Some(v) = self.report_size {
            config.report_size = v;
        }
        if let Some(v) = self.report_dir {
            config.report_dir = v;
        }
        if let Some(v) = self.report_template_file {
            config.report_template_file = v;
        }
        if let Some(v) = self.log_dir {
            config.log_dir = v;
        }
        if let Some(v) = self.log_file {
            config.log_file = Some(v);
        }
        if let Some(v) = self.log_format {
            config.log_format = v;
        }
        if let Some(v) = self.error_limit {
            config.error_limit = v;
        }
    }
}
