mod args;
pub mod config;

pub use args::ConfigArgs;
pub use config::ConfigCmd;
