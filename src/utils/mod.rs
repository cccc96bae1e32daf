mod theme_state;
mod timer_settings;

pub use theme_state::{ ThemeState, DARK_CLASS, THEME_KEY };
pub use timer_settings::{ TimerSettings, TimerSettingsPatch, SETTINGS_KEY };
