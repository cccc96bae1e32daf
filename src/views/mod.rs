mod navbar;
mod settings;
mod timer;

pub use navbar::Navbar;
pub use settings::SettingsPage;
pub use timer::TimerPage;
