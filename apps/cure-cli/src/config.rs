//! YAML configuration files.

use crate::error::{CliError, CliResult};
use cure_concrete::{ConcreteSpecification, Edition};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `--config` file.
///
/// ```yaml
/// edition: "2023"
/// concrete:
///   strength_class: C35/45
///   development_class: CR
///   current_age: [1, 3, 7, 14, 28]
///   curing_temperature: 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(default = "default_edition")]
    pub edition: Edition,
    #[serde(default)]
    pub concrete: Option<ConcreteSpecification>,
}

fn default_edition() -> Edition {
    Edition::En2023
}

pub fn load_yaml(path: &Path) -> CliResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile = serde_yaml::from_str(&content)?;
    tracing::debug!(path = %path.display(), edition = %config.edition, "loaded configuration");
    Ok(config)
}
