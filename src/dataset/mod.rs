//! Conversation dataset loading.
//!
//! Records are stored as JSON Lines: one conversation object per line.
//! A dataset path may be a single `.jsonl` file, a directory whose `*.jsonl`
//! files are read in name order, or `-` for stdin.
//!
//! Reading is lazy. Each call to `next()` reads at most one record, and a
//! malformed line is reported as an error for that record only; iteration
//! can continue past it.

mod types;

pub use types::{Bot, Conversation, Message};

use crate::error::{EpisodicError, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Extension of dataset files picked up from a directory.
const DATASET_EXTENSION: &str = "jsonl";

/// Source name used in errors for records read from stdin.
const STDIN_NAME: &str = "<stdin>";

/// A line-oriented source currently being read.
struct Source {
    name: String,
    lines: Lines<Box<dyn BufRead>>,
    line_no: usize,
}

/// Lazy iterator over the conversations in one or more JSONL files.
pub struct JsonlDataset {
    pending: std::vec::IntoIter<PathBuf>,
    current: Option<Source>,
}

impl JsonlDataset {
    /// Open a dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns `EpisodicError::UserError` if the path does not exist or a
    /// directory cannot be listed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_stdin(path.as_ref(), || Box::new(BufReader::new(io::stdin())))
    }

    /// Like `open`, with `stdin` supplying the reader for `-`.
    fn open_with_stdin<F>(path: &Path, stdin: F) -> Result<Self>
    where
        F: FnOnce() -> Box<dyn BufRead>,
    {
        if path == Path::new("-") {
            return Ok(Self::from_reader(STDIN_NAME, stdin()));
        }

        if !path.exists() {
            return Err(EpisodicError::UserError(format!(
                "dataset path '{}' does not exist",
                path.display()
            )));
        }

        let files = if path.is_dir() {
            list_dataset_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

        tracing::debug!(path = %path.display(), files = files.len(), "opened dataset");

        Ok(Self {
            pending: files.into_iter(),
            current: None,
        })
    }

    /// Read conversations from an already-open reader.
    pub fn from_reader(name: impl Into<String>, reader: Box<dyn BufRead>) -> Self {
        Self {
            pending: Vec::new().into_iter(),
            current: Some(Source {
                name: name.into(),
                lines: reader.lines(),
                line_no: 0,
            }),
        }
    }

    fn open_next_file(&mut self) -> Option<Result<()>> {
        let path = self.pending.next()?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                return Some(Err(EpisodicError::Dataset(format!(
                    "failed to open '{}': {}",
                    path.display(),
                    e
                ))));
            }
        };

        tracing::debug!(file = %path.display(), "reading dataset file");
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
        self.current = Some(Source {
            name: path.display().to_string(),
            lines: reader.lines(),
            line_no: 0,
        });
        Some(Ok(()))
    }
}

impl Iterator for JsonlDataset {
    type Item = Result<Conversation>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(source) = self.current.as_mut() else {
                match self.open_next_file()? {
                    Ok(()) => continue,
                    Err(e) => return Some(Err(e)),
                }
            };

            let line = match source.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    let err = EpisodicError::Dataset(format!(
                        "{}: read failed after line {}: {}",
                        source.name, source.line_no, e
                    ));
                    self.current = None;
                    return Some(Err(err));
                }
                None => {
                    self.current = None;
                    continue;
                }
            };
            source.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str::<Conversation>(&line).map_err(|e| {
                EpisodicError::Dataset(format!("{}:{}: {}", source.name, source.line_no, e))
            }));
        }
    }
}

/// List `*.jsonl` files directly inside `dir`, sorted by path.
fn list_dataset_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        EpisodicError::UserError(format!(
            "failed to read dataset directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            EpisodicError::UserError(format!(
                "failed to read dataset directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == DATASET_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
