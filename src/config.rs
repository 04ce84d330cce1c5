use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::ballistics::LaunchParameters;
use crate::core::plot::ChartOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `trajectory.toml` file. Every table and key is optional.
///
/// ```toml
/// [launch]
/// angle_deg = 30.0
/// muzzle_velocity_mps = 380.0
///
/// [chart]
/// title = "9mm at 30 degrees"
/// grid = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub launch: LaunchParameters,
    pub chart: ChartOptions,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
