//! Durable string key-value storage
//!
//! Local state (overrides, the saved hotkey) is stored as string items under
//! fixed keys, the way a webview's local storage would hold them. The medium is
//! injectable so tests can run against memory and the app against disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

pub trait KeyValueStore: Send + Sync {
    /// Read an item. A missing item is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace an item in full. Readers never observe a partial value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an item. Removing a missing item succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
