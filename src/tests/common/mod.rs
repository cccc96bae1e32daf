pub mod mocks;

use crate::platform::{ Backends, DetachedRoot, MemoryStorage };

pub fn setup() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Backends plus handles onto them, so tests can inspect what the stores wrote.
pub struct Harness {
    pub backends: Backends,
    pub storage: MemoryStorage,
    pub root: DetachedRoot,
}

pub fn harness(items: &[(&str, &str)]) -> Harness {
    setup();
    let storage = MemoryStorage::with_items(items.iter().copied());
    let root = DetachedRoot::new();
    Harness {
        backends: Backends::new(storage.clone(), root.clone()),
        storage,
        root,
    }
}
