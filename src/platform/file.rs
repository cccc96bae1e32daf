use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use std::rc::Rc;

use directories::ProjectDirs;

use crate::error::StorageError;
use super::KeyValueStore;

const STORAGE_FILE: &str = "storage.json";

/// Native stand-in for `localStorage`: one JSON object on disk, rewritten on every write.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl FileStorage {
    /// `storage.json` in the platform data directory for this app.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "focus_timer").ok_or_else(|| {
            StorageError::Unavailable("no home directory for app data".to_string())
        })?;
        Self::open(dirs.data_dir().join(STORAGE_FILE))
    }

    /// A missing file starts empty. A corrupt one is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable storage file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("Opened {} with {} entries", path.display(), items.len());

        Ok(Self { path, items: Rc::new(RefCell::new(items)) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&*self.items.borrow())?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.flush()
    }
}
