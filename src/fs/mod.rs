//! Filesystem utilities for episodic.
//!
//! Output files are written atomically so an interrupted run never leaves a
//! truncated episode file behind.

mod atomic;

pub use atomic::{AtomicFile, atomic_write_file};
