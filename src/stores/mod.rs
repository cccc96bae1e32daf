mod settings;
mod theme;

use dioxus::prelude::*;

pub use settings::SettingsStore;
pub use theme::ThemeStore;

/// Theme store provided by the `App` root.
pub fn use_theme() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

/// Settings store provided by the `App` root.
pub fn use_settings() -> Signal<SettingsStore> {
    use_context::<Signal<SettingsStore>>()
}
