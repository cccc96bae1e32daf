use std::rc::Rc;

use crate::platform::{ Backends, KeyValueStore, StyleRoot };
use crate::utils::{ ThemeState, DARK_CLASS, THEME_KEY };

/// Dark-mode flag mirrored into storage under `"theme"` and onto the style root.
pub struct ThemeStore {
    state: ThemeState,
    storage: Rc<dyn KeyValueStore>,
    root: Rc<dyn StyleRoot>,
}

impl ThemeStore {
    /// Loads the saved preference and applies the marker class once, so the
    /// page matches the store before anything reads it.
    pub fn init(backends: &Backends) -> Self {
        let stored = backends.storage.get_item(THEME_KEY);
        let state = ThemeState::from_stored(stored.as_deref());
        log::info!("Theme initialized: {} (stored: {:?})", state.as_stored(), stored);

        let store = Self {
            state,
            storage: Rc::clone(&backends.storage),
            root: Rc::clone(&backends.root),
        };
        store.apply();
        store
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn toggle_theme(&mut self) {
        self.state = self.state.toggled();
        log::debug!("Theme toggled to {}", self.state.as_stored());

        if let Err(e) = self.storage.set_item(THEME_KEY, self.state.as_stored()) {
            log::error!("Failed to persist theme: {}", e);
        }
        self.apply();
    }

    fn apply(&self) {
        self.root.set_class(DARK_CLASS, self.state.is_dark);
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
