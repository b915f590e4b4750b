use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// Rendered output bound for a file on disk
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file, creating parent directories. Identical content is left alone.
    pub fn write(&self) -> Result<WriteResult> {
        if std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content) {
            debug!(path = %self.path.display(), "output unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content).map_err(|source| {
            Box::new(Error::Write {
                path: self.path.clone(),
                source,
            })
        })?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "output written");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
