mod file;

use std::io::{Result, Write};
use std::path::Path;

pub use file::{TmpFile, TMP_PREFIX};

/// Write `data` to `dest` so that no reader ever sees a partial file.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `dest`. Concurrent writers of the same path each
/// produce a complete file and the last rename wins.
pub fn write_atomic(dest: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let dest = dest.as_ref();
    let tmp = TmpFile::create_in(file::parent_dir(dest)?)?;
    (&tmp).write_all(data)?;
    (&tmp).flush()?;
    tmp.persist(dest)
}
