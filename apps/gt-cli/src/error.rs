//! Error types for the gt-cli front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read config file: {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Table(#[from] gt_tables::TableError),

    #[error(transparent)]
    Relation(#[from] gt_relations::RelationError),
}

pub type CliResult<T> = Result<T, CliError>;
