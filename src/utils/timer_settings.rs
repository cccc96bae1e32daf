use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

pub const SETTINGS_KEY: &str = "timerSettings";

/// Durations in minutes. Values are taken as given, zero and negatives included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    pub work_duration: i64,
    pub short_break_duration: i64,
    pub long_break_duration: i64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
        }
    }
}

impl TimerSettings {
    /// Shallow merge: fields present in `patch` win, the rest are kept.
    pub fn merged(&self, patch: &TimerSettingsPatch) -> Self {
        Self {
            work_duration: patch.work_duration.unwrap_or(self.work_duration),
            short_break_duration: patch.short_break_duration.unwrap_or(self.short_break_duration),
            long_break_duration: patch.long_break_duration.unwrap_or(self.long_break_duration),
        }
    }
}

/// A partial [`TimerSettings`]. Also the shape persisted records are read as,
/// so a stored object missing some fields still loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettingsPatch {
    #[serde(default, deserialize_with = "whole_minutes")]
    pub work_duration: Option<i64>,
    #[serde(default, deserialize_with = "whole_minutes")]
    pub short_break_duration: Option<i64>,
    #[serde(default, deserialize_with = "whole_minutes")]
    pub long_break_duration: Option<i64>,
}

impl TimerSettingsPatch {
    pub fn work(minutes: i64) -> Self {
        Self { work_duration: Some(minutes), ..Self::default() }
    }

    pub fn short_break(minutes: i64) -> Self {
        Self { short_break_duration: Some(minutes), ..Self::default() }
    }

    pub fn long_break(minutes: i64) -> Self {
        Self { long_break_duration: Some(minutes), ..Self::default() }
    }
}

/// Any JSON number with a whole value (`50`, `50.0`, `5e1`). Anything else
/// leaves the field unset instead of failing the record.
fn whole_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let minutes = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    if minutes.is_none() {
        log::warn!("Ignoring saved duration {}, not a whole number", value);
    }
    Ok(minutes)
}
