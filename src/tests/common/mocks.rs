use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;
use crate::platform::{ KeyValueStore, MemoryStorage };

/// Memory storage that also keeps every write in order.
#[derive(Clone, Default)]
pub struct RecordingStorage {
    pub inner: MemoryStorage,
    pub writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingStorage {
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl KeyValueStore for RecordingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        self.inner.set_item(key, value)
    }
}

/// Storage that reads fine but rejects every write, like a full quota.
pub struct ReadOnlyStorage {
    pub inner: MemoryStorage,
}

impl KeyValueStore for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}
