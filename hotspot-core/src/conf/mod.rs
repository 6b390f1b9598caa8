mod error;
mod loader;
mod types;


pub use error::ConfigError;
pub use loader::{load_config, read_layer};
pub use types::{AnalyzerConfig, ConfigLayer, DEFAULT_CONFIG_PATH};
