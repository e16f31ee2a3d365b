use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config {path:?}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: emblem_resize::Error,
    },

    #[error("Invalid --names value: {source}")]
    InvalidNames {
        #[source]
        source: emblem_resize::Error,
    },

    #[error(transparent)]
    Emblem(#[from] emblem_resize::Error),
}
