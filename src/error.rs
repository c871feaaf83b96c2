//! Error types for the Pro Football Reference scraper

use scraper::error::SelectorErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PfrError>;

#[derive(Error, Debug)]
pub enum PfrError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position} (expected QB, RB, WR or TE)")]
    InvalidPosition { position: String },

    #[error("Invalid {kind}: {value}")]
    InvalidOption { kind: &'static str, value: String },

    #[error("Player name must contain a first name and a surname: {name}")]
    InvalidName { name: String },

    #[error("Invalid profile URL: {url}")]
    InvalidProfileUrl { url: String },

    #[error("Invalid team code: {team}")]
    InvalidTeam { team: String },

    #[error("Cannot find a {position} named {name} from {season}")]
    PlayerNotFound {
        name: String,
        position: String,
        season: u16,
    },

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    #[error("Missing required cell: {stat}")]
    MissingCell { stat: String },

    #[error("Malformed value {value:?} in cell {stat}")]
    MalformedCell { stat: String, value: String },

    #[error("Could not determine a database path; pass --db or set {env_var}")]
    MissingDatabasePath { env_var: String },
}

impl PfrError {
    /// Whether another attempt at the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PfrError::Http(_))
    }

    pub(crate) fn malformed(stat: &str, value: &str) -> Self {
        PfrError::MalformedCell {
            stat: stat.to_string(),
            value: value.to_string(),
        }
    }
}

impl<'a> From<SelectorErrorKind<'a>> for PfrError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        PfrError::Selector(err.to_string())
    }
}

#[cfg(test)]
mod tests;
