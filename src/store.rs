use crate::model::ShoppingList;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filename of the persisted collection. This is the one fixed key the whole
/// collection lives under; there is no other persisted state.
pub const STORE_FILENAME: &str = "shopping-lists.json";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted blob exists but does not parse as a collection.
    #[error("corrupt shopping-list data: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to serialize shopping lists: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub fn from_json(json: &str) -> Result<Vec<ShoppingList>, StoreError> {
    serde_json::from_str(json).map_err(StoreError::Corrupt)
}

pub fn to_json(lists: &[ShoppingList]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(lists).map_err(StoreError::Serialize)
}

/// Storage backends hold the collection as a single blob: `load` reads it
/// whole, `save` overwrites it whole. No incremental persistence.
pub trait Store {
    /// Read the persisted collection. A backend with nothing stored yet
    /// returns an empty collection, not an error.
    fn load(&self) -> Result<Vec<ShoppingList>, StoreError>;

    /// Replace the persisted collection with `lists`.
    fn save(&self, lists: &[ShoppingList]) -> Result<(), StoreError>;
}

/// File-backed store: the collection as pretty-printed JSON under the fixed
/// filename in a base directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORE_FILENAME),
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Vec<ShoppingList>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        from_json(&raw)
    }

    fn save(&self, lists: &[ShoppingList]) -> Result<(), StoreError> {
        let json = to_json(lists)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests. Clones share the same backing collection, so a
/// test can keep a handle and observe what a session persisted.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    lists: std::rc::Rc<std::cell::RefCell<Vec<ShoppingList>>>,
}

#[cfg(test)]
impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<ShoppingList>, StoreError> {
        Ok(self.lists.borrow().clone())
    }

    fn save(&self, lists: &[ShoppingList]) -> Result<(), StoreError> {
        *self.lists.borrow_mut() = lists.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShoppingItem;

    fn sample_lists() -> Vec<ShoppingList> {
        let mut list = ShoppingList::new("Groceries");
        list.id = 1;
        let mut item = ShoppingItem::new("Milk");
        item.id = 1;
        item.price = 1.5;
        item.quantity = 2.0;
        list.items.push(item);
        vec![list]
    }

    #[test]
    fn from_json_invalid_is_corrupt() {
        let err = from_json("not json").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn json_round_trip() {
        let lists = sample_lists();
        let json = to_json(&lists).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, lists);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let lists = sample_lists();
        store.save(&lists).unwrap();
        assert_eq!(store.load().unwrap(), lists);
    }

    #[test]
    fn file_store_save_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&sample_lists()).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_corrupt_blob_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(STORE_FILENAME), "{{{").unwrap();
        let store = JsonFileStore::new(dir.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn file_store_uses_fixed_filename() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&sample_lists()).unwrap();
        assert!(dir.path().join(STORE_FILENAME).exists());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::default();
        let lists = sample_lists();
        store.save(&lists).unwrap();
        assert_eq!(store.load().unwrap(), lists);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::default();
        let probe = store.clone();
        store.save(&sample_lists()).unwrap();
        assert_eq!(probe.load().unwrap().len(), 1);
    }
}
