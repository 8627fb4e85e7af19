use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, VroumError};

pub const MEDIA_ROOT_ENV: &str = "VROUM_MEDIA_ROOT";
pub const DEFAULT_MEDIA_ROOT: &str = "./media";
pub const DEFAULT_FOLDER: &str = "nft";

/// Where generated artifacts are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub media_root: PathBuf,
    /// Sub-folder of `media_root` shared by both strategies.
    pub folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from(DEFAULT_MEDIA_ROOT),
            folder: DEFAULT_FOLDER.to_owned(),
        }
    }
}

impl Config {
    /// Load a JSON config. Missing fields take their default value.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("config: loading {}", path.display());

        let file = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `VROUM_MEDIA_ROOT` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(root) = std::env::var_os(MEDIA_ROOT_ENV) {
            if !root.is_empty() {
                log::debug!("config: media root overridden by environment");
                self.media_root = PathBuf::from(root);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.folder.is_empty() {
            return Err(VroumError::Config("`folder` is empty".to_owned()));
        }
        if self.folder.contains(&['/', '\\'][..]) || self.folder == ".." {
            return Err(VroumError::Config(format!(
                "`folder` must be a single directory name, got {:?}",
                self.folder
            )));
        }
        Ok(())
    }

    pub fn storage_root(&self) -> PathBuf {
        self.media_root.join(&self.folder)
    }
}
