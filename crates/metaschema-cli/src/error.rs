use metaschema_config::ConfigError;
use metaschema_core::CompileError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// CliError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("{count} integrity finding(s)")]
    CheckFailed { count: usize },

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("failed to parse rows from {path}: {source}")]
    Rows {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
