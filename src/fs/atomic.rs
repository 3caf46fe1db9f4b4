//! Atomic file output for episodic.
//!
//! Episode files can be large and are produced incrementally, so output is
//! streamed into a temporary sibling (`.{filename}.tmp`) and only renamed
//! over the target once everything has been written and synced. A run that
//! fails halfway leaves any previous output untouched.
//!
//! Source and destination share a directory, so the final `rename()` stays
//! on one filesystem. `std::fs::rename` replaces an existing target on both
//! POSIX and Windows.

use crate::error::{EpisodicError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A file being written that only appears at its target path on `commit`.
///
/// Dropping an uncommitted `AtomicFile` removes the temporary file.
pub struct AtomicFile {
    target: PathBuf,
    temp_path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl AtomicFile {
    /// Start writing to `path`.
    ///
    /// Missing parent directories are created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let target = path.as_ref().to_path_buf();

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                EpisodicError::Io(format!(
                    "failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = generate_temp_path(&target)?;
        let file = File::create(&temp_path).map_err(|e| {
            EpisodicError::Io(format!(
                "failed to create temporary file '{}': {}",
                temp_path.display(),
                e
            ))
        })?;

        Ok(Self {
            target,
            temp_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Flush, sync, and move the file into place.
    pub fn commit(mut self) -> Result<()> {
        let Some(writer) = self.writer.take() else {
            return Err(EpisodicError::Io("atomic file already closed".to_string()));
        };

        let file = writer.into_inner().map_err(|e| {
            EpisodicError::Io(format!("failed to flush temporary file: {}", e.error()))
        })?;

        file.sync_all().map_err(|e| {
            EpisodicError::Io(format!("failed to sync temporary file to disk: {}", e))
        })?;
        drop(file);

        fs::rename(&self.temp_path, &self.target).map_err(|e| {
            EpisodicError::Io(format!(
                "failed to atomically replace '{}': {}",
                self.target.display(),
                e
            ))
        })?;

        // Persist the directory entry too.
        #[cfg(unix)]
        if let Some(parent) = self.target.parent()
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.writer.as_mut() {
            Some(w) => w.write(buf),
            None => Err(std::io::Error::other("atomic file already closed")),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for AtomicFile {
    fn drop(&mut self) {
        if self.writer.take().is_some() || self.temp_path.exists() {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let mut file = AtomicFile::create(path)?;
    file.write_all(content.as_bytes())
        .map_err(|e| EpisodicError::Io(format!("failed to write to temporary file: {}", e)))?;
    file.commit()
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            EpisodicError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}
