//! Identifier types for Pro Football Reference pages.

use crate::error::{PfrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized profile path of a player, e.g. `/players/B/BradTo00`.
///
/// Accepts the bare fragment, the roster link (`.htm`), a full URL, or a
/// previously stored game-log URL, and reduces all of them to the fragment.
///
/// # Examples
///
/// ```rust
/// use pfr_ffl::ProfileUrl;
///
/// let url: ProfileUrl = "https://www.pro-football-reference.com/players/T/TaylJo02/gamelog/"
///     .parse()
///     .unwrap();
/// assert_eq!(url.as_str(), "/players/T/TaylJo02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || PfrError::InvalidProfileUrl {
            url: raw.to_string(),
        };

        let start = raw.find("/players/").ok_or_else(invalid)?;
        let mut path = &raw[start..];
        if let Some(idx) = path.find("/gamelog") {
            path = &path[..idx];
        }
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".htm").unwrap_or(path);

        // `/players/<initial>/<id>`
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["players", initial, id] if !initial.is_empty() && !id.is_empty() => {
                Ok(Self(path.to_string()))
            }
            _ => Err(invalid()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileUrl {
    type Err = PfrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.trim())
    }
}

/// Team abbreviations as used in team page URLs.
pub const VALID_TEAMS: [&str; 32] = [
    "DET", "DEN", "CHI", "HOU", "NYJ", "IND", "LVR", "LAR", "LAC", "SFO", "ATL", "CLE", "PIT",
    "BAL", "DAL", "GNB", "BUF", "TEN", "WAS", "ARI", "NYG", "NWE", "TAM", "CIN", "MIN", "NOR",
    "JAX", "CAR", "SEA", "PHI", "KAN", "MIA",
];

/// Type-safe wrapper for a validated team code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TeamCode(&'static str);

impl TeamCode {
    pub fn all() -> impl Iterator<Item = TeamCode> {
        VALID_TEAMS.into_iter().map(TeamCode)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Team pages use lower-case codes (`/teams/kan/2022.htm`).
    pub fn url_slug(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = PfrError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        VALID_TEAMS
            .into_iter()
            .find(|code| *code == upper)
            .map(TeamCode)
            .ok_or_else(|| PfrError::InvalidTeam {
                team: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_forms() {
        let expected = "/players/B/BradTo00";
        for raw in [
            "/players/B/BradTo00",
            "/players/B/BradTo00.htm",
            "/players/B/BradTo00/",
            "https://www.pro-football-reference.com/players/B/BradTo00",
            "https://www.pro-football-reference.com/players/B/BradTo00/gamelog/",
            "https://www.pro-football-reference.com/players/B/BradTo00/gamelog/2021/advanced",
        ] {
            assert_eq!(ProfileUrl::parse(raw).unwrap().as_str(), expected, "{raw}");
        }
    }

    #[test]
    fn test_profile_url_rejects_other_paths() {
        assert!(ProfileUrl::parse("/teams/kan/2022.htm").is_err());
        assert!(ProfileUrl::parse("/players/B/").is_err());
        assert!(ProfileUrl::parse("").is_err());
    }

    #[test]
    fn test_team_code_parse() {
        let team: TeamCode = "kan".parse().unwrap();
        assert_eq!(team.as_str(), "KAN");
        assert_eq!(team.url_slug(), "kan");
        assert!("KC".parse::<TeamCode>().is_err());
    }

    #[test]
    fn test_all_teams() {
        assert_eq!(TeamCode::all().count(), 32);
    }
}
