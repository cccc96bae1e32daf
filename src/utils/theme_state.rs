pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub const DARK: ThemeState = ThemeState { is_dark: true };
    pub const LIGHT: ThemeState = ThemeState { is_dark: false };

    /// Anything other than a literal `"dark"` reads as light, including no value at all.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::DARK,
            _ => Self::LIGHT,
        }
    }

    pub fn as_stored(self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    /// Class string for containers that mirror the root marker class.
    pub fn root_class(self) -> &'static str {
        if self.is_dark { DARK_CLASS } else { "" }
    }
}
