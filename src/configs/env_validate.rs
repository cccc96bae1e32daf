pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter for native builds, resolved before the logger exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogFilter {
    pub filter: String,
    pub defaulted: bool,
}

impl LogFilter {
    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(filter) if !filter.trim().is_empty() => Self { filter, defaulted: false },
            _ => Self { filter: DEFAULT_LOG_FILTER.to_string(), defaulted: true },
        }
    }

    /// Call once the logger is up, so the fallback notice is not lost.
    pub fn report(&self) {
        if self.defaulted {
            log::warn!("RUST_LOG not set, using default filter '{}'", self.filter);
        }
    }
}

/// Taken from `RUST_LOG` (after `.env` is loaded).
pub fn log_filter() -> LogFilter {
    LogFilter::from_env_value(std::env::var("RUST_LOG").ok())
}
