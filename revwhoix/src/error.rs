use librevwhois::FetchError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required keyword argument")]
    MissingKeyword,

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Could not determine config path")]
    NoConfigDir,

    #[error("Error occurred while reading {}: {source}", path.display())]
    KeyFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("API Key is not present at {}", path.display())]
    KeyMissing { path: PathBuf },

    #[error("Failed to write config to {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingKeyword => 2,
            AppError::NoHomeDir
            | AppError::NoConfigDir
            | AppError::KeyFileUnreadable { .. }
            | AppError::KeyMissing { .. }
            | AppError::ConfigWrite { .. } => 3,
            AppError::Runtime(_) => 1,
            AppError::Fetch(err) => match err {
                FetchError::NoDomains { .. } => 4,
                FetchError::Client(_) | FetchError::Transport(_) | FetchError::Status { .. } => 5,
                FetchError::Decode(_) => 6,
                FetchError::Output(_) => 7,
            },
        }
    }
}
