//! Local output writer
//!
//! Writes through a temp file in the destination directory followed by a
//! rename, so a watcher or IDE never observes a half-written file.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::OutputWriter;
use crate::error::{AssetGenError, AssetGenResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOutputWriter;

impl LocalOutputWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for LocalOutputWriter {
    fn existing(&self, path: &Path) -> AssetGenResult<Option<String>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AssetGenError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn prepare(&self, path: &Path) -> AssetGenResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
                .map_err(|source| AssetGenError::OutputWrite {
                    path: parent.to_path_buf(),
                    source,
                }),
            _ => Ok(()),
        }
    }

    fn write(&self, path: &Path, content: &str) -> AssetGenResult<()> {
        self.prepare(path)?;
        atomic_write(path, content.as_bytes()).map_err(|source| AssetGenError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
