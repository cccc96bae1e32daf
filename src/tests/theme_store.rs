use crate::platform::{ Backends, DetachedRoot, KeyValueStore, MemoryStorage, StyleRoot };
use crate::stores::ThemeStore;
use crate::utils::{ DARK_CLASS, THEME_KEY };

use super::common::harness;
use super::common::mocks::{ ReadOnlyStorage, RecordingStorage };

#[test]
fn test_init_without_preference_is_light() {
    let h = harness(&[]);
    let store = ThemeStore::init(&h.backends);

    assert!(!store.is_dark());
    assert!(!h.root.has_class(DARK_CLASS));
    assert!(h.storage.is_empty(), "init must not write a preference");
}

#[test]
fn test_init_from_stored_dark_applies_class() {
    let h = harness(&[(THEME_KEY, "dark")]);
    let store = ThemeStore::init(&h.backends);

    assert!(store.is_dark());
    assert!(h.root.has_class(DARK_CLASS));
}

#[test]
fn test_init_from_stored_light_or_garbage() {
    for stored in ["light", "", "DARK", "{\"dark\":true}"] {
        let h = harness(&[(THEME_KEY, stored)]);
        let store = ThemeStore::init(&h.backends);
        assert!(!store.is_dark(), "stored {:?} should read as light", stored);
        assert!(!h.root.has_class(DARK_CLASS));
    }
}

#[test]
fn test_init_clears_stale_class() {
    let h = harness(&[(THEME_KEY, "light")]);
    h.root.set_class(DARK_CLASS, true);

    ThemeStore::init(&h.backends);
    assert!(!h.root.has_class(DARK_CLASS));
}

#[test]
fn test_toggle_keeps_flag_storage_and_class_in_sync() {
    let h = harness(&[]);
    let mut store = ThemeStore::init(&h.backends);

    for step in 1..=6 {
        store.toggle_theme();
        let expected_dark = step % 2 == 1;

        assert_eq!(store.is_dark(), expected_dark);
        assert_eq!(
            h.storage.get_item(THEME_KEY).as_deref(),
            Some(if expected_dark { "dark" } else { "light" })
        );
        assert_eq!(h.root.has_class(DARK_CLASS), expected_dark);
    }
}

#[test]
fn test_every_toggle_writes() {
    let storage = RecordingStorage::default();
    let mut store = ThemeStore::init(&Backends::new(storage.clone(), DetachedRoot::new()));

    store.toggle_theme();
    store.toggle_theme();

    assert_eq!(
        storage.writes(),
        vec![
            (THEME_KEY.to_string(), "dark".to_string()),
            (THEME_KEY.to_string(), "light".to_string()),
        ]
    );
}

#[test]
fn test_toggle_survives_rejected_write() {
    let root = DetachedRoot::new();
    let storage = ReadOnlyStorage { inner: MemoryStorage::with_items([(THEME_KEY, "dark")]) };
    let mut store = ThemeStore::init(&Backends::new(storage, root.clone()));

    store.toggle_theme();
    assert!(!store.is_dark());
    assert!(!root.has_class(DARK_CLASS));
}

#[test]
fn test_reinit_restores_toggled_preference() {
    let h = harness(&[]);
    let mut store = ThemeStore::init(&h.backends);
    store.toggle_theme();

    let reloaded = ThemeStore::init(&Backends::new(h.storage.clone(), DetachedRoot::new()));
    assert!(reloaded.is_dark());
}
