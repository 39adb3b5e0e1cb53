//! CLI error types.

use quire_config::ConfigError;
use quire_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0} page(s) failed to generate")]
    PagesFailed(usize),
}
