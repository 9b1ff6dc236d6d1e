//! YAML configuration for the CLI.
//!
//! ```yaml
//! gas:
//!   gamma: 1.4
//!   gas_constant: 287.0
//! store: gastables.json
//! generate:
//!   mach_max: 10.0
//!   rows_per_unit_mach: 100
//! ```
//!
//! Every field is optional and defaults to air.

use crate::error::{CliError, CliResult};
use gt_relations::Gas;
use gt_tables::TableGrid;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE: &str = "gastables.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gas: Gas,
    pub store: PathBuf,
    pub generate: TableGrid,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gas: Gas::AIR,
            store: PathBuf::from(DEFAULT_STORE),
            generate: TableGrid::default(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(content: &str) -> CliResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.gas.validate()?;
        config.generate.validate()?;
        Ok(config)
    }

    pub fn load_yaml(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}
