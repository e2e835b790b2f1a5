//! Strictness policy for recoverable decode anomalies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the engine reacts to missing fields, failed conversions and unused
/// input.
///
/// Token mismatches are never governed by strictness: a term with the wrong
/// head always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Every anomaly is a hard error, including unclaimed input.
    #[default]
    Strict,
    /// Anomalies are logged through `tracing` and defaults are substituted.
    Failsafe,
    /// Anomalies are substituted with defaults and nothing is logged.
    Silent,
}

impl Strictness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Failsafe => "failsafe",
            Strictness::Silent => "silent",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "failsafe" => Ok(Strictness::Failsafe),
            "silent" => Ok(Strictness::Silent),
            other => Err(format!(
                "unknown strictness '{}', expected strict, failsafe or silent",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(Strictness::default(), Strictness::Strict);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("FailSafe".parse::<Strictness>(), Ok(Strictness::Failsafe));
        assert_eq!("silent".parse::<Strictness>(), Ok(Strictness::Silent));
        assert!("lenient".parse::<Strictness>().is_err());
    }
}
