pub mod aggregate;
pub mod analyze;
pub mod cli;
pub mod conf;
pub mod locate;
pub mod logging;
pub mod parse;
pub mod reader;
pub mod report;

pub use analyze::{AnalyzeError, RunOutcome, RunSummary, run};
pub use conf::{AnalyzerConfig, load_config};
