use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::StorageError;

/// Stores each item as its own file under a directory.
///
/// Writes go to `<key>.tmp`, are synced, then renamed over `<key>`, so a
/// concurrent reader sees either the previous item or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.item_path(key);
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &path)?;

        log::debug!(target: "storage", "Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
