//! CLI error types.

use residocs_config::ConfigError;

use crate::export::ExportError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Server(String),
}
