//! Disk I/O for finished downloads.
//!
//! Bodies are written to a `.part` file next to the destination, synced, and
//! renamed over the final name, so an interrupted write never leaves a
//! truncated image under the name the next run would skip.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (`007.jpg` → `007.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Replaces the contents of `final_path` with `data`.
///
/// Any previous file at `final_path` is replaced in full. On error the temp
/// file is removed and `final_path` is left as it was.
pub fn write_replace(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    let result = write_and_rename(&tmp, final_path, data);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&tmp) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %tmp.display(), "could not remove temp file: {}", e);
            }
        }
    }
    result
}

fn write_and_rename(tmp: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    std::fs::rename(tmp, final_path)
}
