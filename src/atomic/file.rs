use std::fs::File;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

/// Prefix shared by every temporary file, so directory listings can skip
/// writes still in flight.
pub const TMP_PREFIX: &str = ".tmp-";

/// A file under construction next to its final destination.
///
/// The file is removed on drop unless [`TmpFile::persist`] moved it into
/// place first.
pub struct TmpFile {
    file: File,
    path: PathBuf,
    persisted: bool,
}

impl TmpFile {
    pub fn create_in(temp_dir: impl AsRef<Path>) -> Result<Self> {
        let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(10)
            .collect();
        let path = temp_dir
            .as_ref()
            .join(format!("{TMP_PREFIX}{suffix}"));
        let file = File::create(&path)?;
        Ok(Self {
            file,
            path,
            persisted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush to disk and rename over `dest`.
    ///
    /// `dest` must live on the same filesystem as the temporary file, which
    /// holds when both share a directory. Readers observe either the
    /// previous content of `dest` or the complete new one.
    pub fn persist(mut self, dest: impl AsRef<Path>) -> Result<()> {
        self.file.sync_data()?;
        std::fs::rename(&self.path, dest.as_ref())?;
        self.persisted = true;
        Ok(())
    }
}

impl std::io::Write for &TmpFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (&self.file).write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        (&self.file).flush()
    }
}

impl Drop for TmpFile {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

pub(crate) fn parent_dir(dest: &Path) -> Result<&Path> {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent),
        Some(_) => Ok(Path::new(".")),
        None => Err(Error::new(
            ErrorKind::InvalidInput,
            "`dest` must name a file inside a directory",
        )),
    }
}
