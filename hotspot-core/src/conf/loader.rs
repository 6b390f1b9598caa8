use crate::conf::error::ConfigError;
use crate::conf::types::{AnalyzerConfig, ConfigLayer};
use std::fs;
use std::path::Path;

/// Resolve the run configuration.
///
/// Layers are applied in a fixed order: built-in defaults, then the optional
/// config file, then `overrides` (the command line). The result is validated
/// before it is returned.
pub fn load_config(
    file: Option<&Path>,
    overrides: ConfigLayer,
) -> Result<AnalyzerConfig, ConfigError> {
    let mut config = AnalyzerConfig::default();

    if let Some(path) = file {
        read_layer(path)?.apply_to(&mut config);
    }
    overrides.apply_to(&mut config);

    validate(&config)?;
    Ok(config)
}

/// Read a partial config file. `.toml` files are TOML, anything else is JSON.
pub fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: e,
        }),
        _ => serde_json::from_str(&contents).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn validate(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&config.error_limit) {
        return Err(ConfigError::InvalidErrorLimit {
            value: config.error_limit,
        });
    }
    Ok(())
}
