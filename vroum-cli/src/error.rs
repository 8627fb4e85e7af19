use std::io;

use thiserror::Error;
use vroum_art::VroumError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't load config: {0}")]
    ConfigLoadError(String),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Couldn't read image {0}: {1}")]
    ImageReadError(String, String),

    #[error("Image at {0} has no valid border")]
    BorderNotFound(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    VroumError(#[from] VroumError),
}
