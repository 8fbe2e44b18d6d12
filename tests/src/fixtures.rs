//! Scratch files for adapter tests

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A file in the system temp directory, removed on drop
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Write `contents` to a fresh, uniquely named file
    pub fn with_contents(contents: &[u8]) -> std::io::Result<Self> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("mdhash-test-{}-{}", std::process::id(), id));

        let mut file = File::create(&path)?;
        file.write_all(contents)?;
        file.sync_all()?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

