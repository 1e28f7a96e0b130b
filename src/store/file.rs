//! File-backed progress store

use crate::error::{PatternLabError, Result};
use crate::store::ProgressStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps the progress blob in a single JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProgressStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PatternLabError::Persistence(format!(
                "reading {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    PatternLabError::Persistence(format!(
                        "creating {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        fs::write(&self.path, payload).map_err(|e| {
            PatternLabError::Persistence(format!("writing {}: {}", self.path.display(), e))
        })?;
        log::debug!("wrote {} bytes to {}", payload.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("progress.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("progress.json"));

        store.write(r#"{"totalXp": 10}"#).unwrap();
        assert_eq!(store.read().unwrap().unwrap(), r#"{"totalXp": 10}"#);
    }

    #[test]
    fn test_write_overwrites_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("progress.json"));

        store.write("first").unwrap();
        store.write("second").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), "second");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/progress.json"));

        store.write("{}").unwrap();
        assert!(store.path().exists());
    }
}
