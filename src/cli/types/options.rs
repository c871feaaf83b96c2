//! Scrape and load options selectable from the command line.

use crate::error::PfrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which game-log page to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatVariant {
    /// `/gamelog/{season}/`
    #[default]
    Basic,
    /// `/gamelog/{season}/advanced`
    Advanced,
}

impl StatVariant {
    pub fn from_flag(advanced: bool) -> Self {
        if advanced {
            StatVariant::Advanced
        } else {
            StatVariant::Basic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatVariant::Basic => "basic",
            StatVariant::Advanced => "advanced",
        }
    }
}

impl fmt::Display for StatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatVariant {
    type Err = PfrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(StatVariant::Basic),
            "advanced" => Ok(StatVariant::Advanced),
            _ => Err(PfrError::InvalidOption {
                kind: "stat variant",
                value: s.to_string(),
            }),
        }
    }
}

/// What to do with games the player did not take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InactivePolicy {
    /// Leave the game out of the output entirely.
    #[default]
    Drop,
    /// Keep the game with `inactive = true` and no stat line.
    Flag,
}

impl InactivePolicy {
    pub fn from_flag(keep_inactive: bool) -> Self {
        if keep_inactive {
            InactivePolicy::Flag
        } else {
            InactivePolicy::Drop
        }
    }
}

/// How the loader reacts when a player fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Log the failure and continue with the next player.
    #[default]
    Skip,
    /// Stop the batch and return the error.
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailurePolicy::Skip => "skip",
            FailurePolicy::Abort => "abort",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FailurePolicy {
    type Err = PfrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" | "continue" => Ok(FailurePolicy::Skip),
            "abort" | "stop" => Ok(FailurePolicy::Abort),
            _ => Err(PfrError::InvalidOption {
                kind: "failure policy",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_variant_round_trip_names() {
        assert_eq!("ADVANCED".parse::<StatVariant>().unwrap(), StatVariant::Advanced);
        assert_eq!(StatVariant::Basic.to_string(), "basic");
        assert_eq!(StatVariant::from_flag(true), StatVariant::Advanced);
        assert!("fancy".parse::<StatVariant>().is_err());
    }

    #[test]
    fn test_failure_policy_parse() {
        assert_eq!("skip".parse::<FailurePolicy>().unwrap(), FailurePolicy::Skip);
        assert_eq!("Abort".parse::<FailurePolicy>().unwrap(), FailurePolicy::Abort);
        assert_eq!(FailurePolicy::default(), FailurePolicy::Skip);

        match "retry".parse::<FailurePolicy>().unwrap_err() {
            PfrError::InvalidOption { kind, value } => {
                assert_eq!(kind, "failure policy");
                assert_eq!(value, "retry");
            }
            _ => panic!("Expected InvalidOption error"),
        }
    }

    #[test]
    fn test_inactive_policy_from_flag() {
        assert_eq!(InactivePolicy::from_flag(false), InactivePolicy::Drop);
        assert_eq!(InactivePolicy::from_flag(true), InactivePolicy::Flag);
    }
}
