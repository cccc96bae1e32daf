mod document;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod storage;

use std::rc::Rc;

pub use document::{ DetachedRoot, DocumentRoot, StyleRoot };
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use storage::{ BrowserStorage, KeyValueStore, MemoryStorage };

/// The two host surfaces the stores write through.
#[derive(Clone)]
pub struct Backends {
    pub storage: Rc<dyn KeyValueStore>,
    pub root: Rc<dyn StyleRoot>,
}

impl Backends {
    pub fn new(storage: impl KeyValueStore + 'static, root: impl StyleRoot + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
            root: Rc::new(root),
        }
    }

    /// Browser `localStorage` and `documentElement` when running in a page.
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        Self::browser()
    }

    /// A JSON file in the app data directory on desktop and mobile. The root
    /// class lives in memory and `App` mirrors it onto its container.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        match FileStorage::open_default() {
            Ok(storage) => {
                log::info!("Persisting theme and settings to {}", storage.path().display());
                Self::new(storage, DetachedRoot::new())
            }
            Err(e) => {
                log::warn!("{}, theme and settings are kept in memory", e);
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), DetachedRoot::new())
    }

    #[cfg(target_arch = "wasm32")]
    fn browser() -> Self {
        let storage: Rc<dyn KeyValueStore> = match BrowserStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                log::warn!("{}, falling back to in-memory storage", e);
                Rc::new(MemoryStorage::new())
            }
        };
        let root: Rc<dyn StyleRoot> = match DocumentRoot::attach() {
            Some(root) => Rc::new(root),
            None => {
                log::warn!("No document element found, theme class will not be applied");
                Rc::new(DetachedRoot::new())
            }
        };
        Self { storage, root }
    }
}

impl std::fmt::Debug for Backends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends").finish_non_exhaustive()
    }
}
