//! Offensive position types and roster-listing matching.

use crate::error::PfrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positions with a game-log schema.
///
/// Pro Football Reference lists players with one or more position
/// abbreviations (e.g. `RB-WR`). Only the four fantasy-relevant offensive
/// positions are scraped.
///
/// # Examples
///
/// ```rust
/// use pfr_ffl::Position;
///
/// let rb: Position = "rb".parse().unwrap();
/// assert_eq!(rb, Position::RB);
/// assert!(rb.matches_listing("Jonathan Taylor RB 2020-2024"));
/// assert!(rb.matches_listing("Kyle Juszczyk FB 2013-2024"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }

    /// Whether a roster-index entry lists this position.
    ///
    /// Running backs are also accepted when the entry lists FB or WR, since
    /// the site often files hybrid backs under those.
    pub fn matches_listing(&self, entry_text: &str) -> bool {
        if entry_text.contains(self.as_str()) {
            return true;
        }
        matches!(self, Position::RB) && (entry_text.contains("FB") || entry_text.contains("WR"))
    }

    /// Receivers and tight ends share one stat schema.
    pub fn is_receiver(&self) -> bool {
        matches!(self, Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = PfrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(PfrError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
