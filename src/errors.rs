use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VroumError>;

#[derive(Error, Debug)]
pub enum VroumError {
    #[error("Don't toy with the bot! Enter a valid integer between 8 and 512")]
    InvalidSize,
    #[error(
        "Canvas is {width}x{height} but the border needs at least {required}"
    )]
    CanvasTooSmall {
        width: u32,
        height: u32,
        required: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Parsing error")]
    Parse,
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VroumError {
    /// Only a rejected size parameter can be fixed by asking the caller
    /// again; every other variant aborts the request.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidSize)
    }
}

impl From<Utf8Error> for VroumError {
    fn from(_: Utf8Error) -> Self {
        Self::Parse
    }
}

impl From<std::num::ParseIntError> for VroumError {
    fn from(_: std::num::ParseIntError) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for VroumError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
