//! Key-value storage backends

use charmane_core::{CharmaneError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// String-to-string storage with whole-value overwrite semantics
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage
///
/// Clones share the same underlying map, so a test can keep a handle while a
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| CharmaneError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object file
///
/// Every write rewrites the whole file through a uniquely named temporary sibling
/// followed by a rename, so readers see either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Ignoring unreadable storage file {:?}: {}", self.path, e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, items)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Wrote {} storage keys to {:?}", items.len(), self.path);
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_shared_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set_item("k", "v").unwrap();
        assert_eq!(handle.get_item("k").unwrap().as_deref(), Some("v"));

        handle.remove_item("k").unwrap();
        assert!(storage.get_item("k").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert!(storage.get_item("carrinho").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path).set_item("a", "1").unwrap();
        FileStorage::new(&path).set_item("b", "2").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));

        storage.remove_item("a").unwrap();
        assert!(FileStorage::new(&path).get_item("a").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.get_item("carrinho").unwrap().is_none());

        // A write replaces the corrupt contents
        storage.set_item("carrinho", "[]").unwrap();
        assert_eq!(storage.get_item("carrinho").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStorage::new(&path).set_item("k", "v").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["storage.json".to_string()]);
    }

    #[test]
    fn test_file_storage_concurrent_writers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let storage = FileStorage::new(&path);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        storage.set_item(&format!("w{}", n), &i.to_string())?;
                    }
                    Ok::<(), CharmaneError>(())
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        // Last rename wins; the file stays valid JSON and no temp files remain
        let content = std::fs::read_to_string(&path).unwrap();
        serde_json::from_str::<BTreeMap<String, String>>(&content).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
