use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

use crate::Error;

const DEFAULT_DEPOSIT: i64 = 100;
const DEFAULT_WITHDRAWAL: i64 = 50;
const DEFAULT_WORKER_DELAY_MS: u64 = 2000;

/// Settings for a tour round and the worker demo.
#[derive(Debug, Clone, PartialEq)]
pub struct TourConfig {
    pub deposit: Decimal,
    pub withdrawal: Decimal,
    pub worker_delay: Duration,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            deposit: Decimal::from(DEFAULT_DEPOSIT),
            withdrawal: Decimal::from(DEFAULT_WITHDRAWAL),
            worker_delay: Duration::from_millis(DEFAULT_WORKER_DELAY_MS),
        }
    }
}

impl TourConfig {
    /// Reads `PRIMER_DEPOSIT`, `PRIMER_WITHDRAWAL` and `PRIMER_WORKER_DELAY_MS`.
    /// Unset keys keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();
        let deposit = parse_or("PRIMER_DEPOSIT", lookup("PRIMER_DEPOSIT"), defaults.deposit)?;
        let withdrawal = parse_or(
            "PRIMER_WITHDRAWAL",
            lookup("PRIMER_WITHDRAWAL"),
            defaults.withdrawal,
        )?;
        let delay_ms = parse_or(
            "PRIMER_WORKER_DELAY_MS",
            lookup("PRIMER_WORKER_DELAY_MS"),
            DEFAULT_WORKER_DELAY_MS,
        )?;
        Ok(Self {
            deposit,
            withdrawal,
            worker_delay: Duration::from_millis(delay_ms),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, Error> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TourConfig, Error> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TourConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.deposit, dec!(100));
        assert_eq!(config.withdrawal, dec!(50));
        assert_eq!(config.worker_delay, Duration::from_secs(2));
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PRIMER_DEPOSIT", "12.5"),
            ("PRIMER_WITHDRAWAL", " 3 "),
            ("PRIMER_WORKER_DELAY_MS", "10"),
        ])
        .unwrap();
        assert_eq!(config.deposit, dec!(12.5));
        assert_eq!(config.withdrawal, dec!(3));
        assert_eq!(config.worker_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_invalid_value() {
        let result = config_from(&[("PRIMER_WORKER_DELAY_MS", "soon")]);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                key: "PRIMER_WORKER_DELAY_MS",
                ..
            })
        ));
    }
}
