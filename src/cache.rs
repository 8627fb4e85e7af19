use std::fs;
use std::path::{Path, PathBuf};

use crate::atomic::{write_atomic, TMP_PREFIX};
use crate::{Identity, Result, VroumError};

/// Write-once store of generated artifacts, one `<identity>.png` per
/// identity.
///
/// The presence of the file is the only hit signal. Entries never expire;
/// [`ImageCache::regenerate`] and [`ImageCache::remove`] are the explicit
/// ways to replace one.
#[derive(Debug, Clone)]
pub struct ImageCache {
    /// Label for logging
    label: String,
    /// Directory holding the artifacts
    path: PathBuf,
}

impl ImageCache {
    /// Open the cache rooted at `path`, creating the directory if needed.
    pub fn new(label: String, path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;
        Self::validate_path(path, &label)?;

        log::debug!("cache/{}: opened at {}", label, path.display());
        Ok(Self {
            label,
            path: PathBuf::from(path),
        })
    }

    fn validate_path(path: &Path, label: &str) -> Result<()> {
        if !path.is_dir() {
            return Err(VroumError::Storage(
                label.to_owned(),
                "Path is not a directory".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn path_for(&self, identity: Identity) -> PathBuf {
        self.path.join(identity.file_name())
    }

    pub fn exists(&self, identity: Identity) -> bool {
        self.path_for(identity).is_file()
    }

    /// Return the artifact for `identity`, calling `generate` only when none
    /// is stored yet.
    ///
    /// `generate` must return the complete encoded artifact. It is never
    /// invoked on a hit, whatever parameters the caller used to build it.
    pub fn get_or_create<F>(
        &self,
        identity: Identity,
        generate: F,
    ) -> Result<PathBuf>
    where
        F: FnOnce() -> Result<Vec<u8>>,
    {
        let file_path = self.path_for(identity);
        if file_path.is_file() {
            log::debug!("cache/{}: hit for {}", self.label, identity);
            return Ok(file_path);
        }

        log::debug!("cache/{}: miss for {}", self.label, identity);
        let bytes = generate()?;
        self.persist_to_disk(identity, &bytes)?;
        Ok(file_path)
    }

    /// Generate and store a new artifact for `identity`, replacing any
    /// existing one.
    pub fn regenerate<F>(
        &self,
        identity: Identity,
        generate: F,
    ) -> Result<PathBuf>
    where
        F: FnOnce() -> Result<Vec<u8>>,
    {
        log::info!("cache/{}: regenerating {}", self.label, identity);
        let bytes = generate()?;
        self.persist_to_disk(identity, &bytes)?;
        Ok(self.path_for(identity))
    }

    /// Read the stored artifact, if any.
    pub fn read(&self, identity: Identity) -> Result<Option<Vec<u8>>> {
        let file_path = self.path_for(identity);
        if !file_path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read(file_path)?))
    }

    /// Delete the stored artifact. Returns whether one existed.
    pub fn remove(&self, identity: Identity) -> Result<bool> {
        match fs::remove_file(self.path_for(identity)) {
            Ok(()) => {
                log::info!("cache/{}: removed {}", self.label, identity);
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Identities with a stored artifact, in ascending order.
    ///
    /// Temporary files and names that are not `<u64>.png` are skipped.
    pub fn keys(&self) -> Result<impl Iterator<Item = Identity>> {
        let mut keys: Vec<Identity> = fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if !path.is_file() {
                    return None;
                }
                let name = path.file_name()?.to_str()?;
                if name.starts_with(TMP_PREFIX) {
                    return None;
                }
                name.strip_suffix(".png")?.parse().ok()
            })
            .collect();
        keys.sort();

        Ok(keys.into_iter())
    }

    fn persist_to_disk(&self, identity: Identity, bytes: &[u8]) -> Result<()> {
        log::debug!(
            "cache/{}: writing {} bytes for {}",
            self.label,
            bytes.len(),
            identity
        );

        write_atomic(self.path_for(identity), bytes).map_err(|err| {
            log::error!(
                "cache/{}: failed to write {}: {}",
                self.label,
                identity,
                err
            );
            VroumError::Storage(
                self.label.clone(),
                format!("Failed to write value for key {}: {}", identity, err),
            )
        })
    }
}
