//! Filesystem helpers for reading and replacing highscore files.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Maximum highscores file size read into memory.
pub const MAX_HIGHSCORES_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

/// Read a whole file into memory with a size cap.
///
/// The handle is dropped before returning on every path.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
    let mut file = fs::File::open(path)?;
    let len = file.metadata()?.len();
    if len > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("file too large: {len} bytes, max {max_bytes} bytes"),
        ));
    }

    let mut bytes = Vec::with_capacity(len as usize);
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Sibling path with `suffix` appended to the file name (`a.dat` -> `a.dat.tmp`).
pub fn sibling_path(path: &Path, suffix: &str) -> io::Result<PathBuf> {
    match path.file_name() {
        Some(name) => {
            let mut sibling = OsString::from(name);
            sibling.push(suffix);
            Ok(path.with_file_name(sibling))
        }
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "highscores path has no file name",
        )),
    }
}

/// Replace `path` with `bytes` without ever leaving it half-written.
///
/// The data goes to `<path>.tmp`, is synced, then renamed over `path`.
/// With `backup` set, the current contents are first copied to `<path>.bak`.
pub fn write_atomic(path: &Path, bytes: &[u8], backup: bool) -> io::Result<()> {
    let tmp_path = sibling_path(path, ".tmp")?;

    if backup && path.exists() {
        let backup_path = sibling_path(path, ".bak")?;
        fs::copy(path, &backup_path)?;
        tracing::info!("Backed up {} to {}", path.display(), backup_path.display());
    }

    let replaced = write_synced(&tmp_path, bytes).and_then(|()| replace(&tmp_path, path));
    if replaced.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    replaced
}

fn replace(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if to.exists() {
            // Windows rename fails if destination exists.
            fs::remove_file(to)?;
        }
    }

    fs::rename(from, to)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}
