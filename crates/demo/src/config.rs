//! Environment configuration for the demo driver.

use chrono::NaiveDate;
use thiserror::Error;

use stockroom_core::{Clock, FixedClock, SystemClock};
use stockroom_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const TODAY_VAR: &str = "STOCKROOM_TODAY";
pub const PRINT_SNAPSHOT_VAR: &str = "STOCKROOM_PRINT_SNAPSHOT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    /// Pins "today" for expiry checks. `None` uses the system clock.
    pub today: Option<NaiveDate>,
    pub print_snapshot: bool,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|reason| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                reason,
            })?,
            None => LogFormat::default(),
        };

        let today = lookup(TODAY_VAR)
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    ConfigError::Invalid {
                        var: TODAY_VAR,
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()?;

        let print_snapshot = match lookup(PRINT_SNAPSHOT_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: PRINT_SNAPSHOT_VAR,
                    reason: format!("expected a boolean, got {other:?}"),
                });
            }
        };

        Ok(Self {
            log_format,
            today,
            print_snapshot,
        })
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock::on(date)),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_every_variable() {
        let config = DemoConfig::from_lookup(lookup(&[
            (LOG_FORMAT_VAR, "pretty"),
            (TODAY_VAR, "2025-06-01"),
            (PRINT_SNAPSHOT_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert!(config.print_snapshot);
        assert_eq!(config.clock().today(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        let err = DemoConfig::from_lookup(lookup(&[(TODAY_VAR, "30/05/2025")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TODAY_VAR, .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = DemoConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: LOG_FORMAT_VAR, .. }));
    }

    #[test]
    fn rejects_non_boolean_snapshot_flag() {
        assert!(DemoConfig::from_lookup(lookup(&[(PRINT_SNAPSHOT_VAR, "yes please")])).is_err());
    }
}
