//! Pro Football Reference game-log scraper
//!
//! A Rust library and CLI that scrapes per-game NFL player and team statistics
//! from pro-football-reference.com and loads them into a local SQLite store for
//! fantasy-football analytics.
//!
//! ## Features
//!
//! - **Player Lookup**: Find a player's profile page from the roster index by
//!   name, position and season
//! - **Game Logs**: Basic and advanced per-game stat lines for QB, RB, WR and TE
//! - **Inactive Handling**: Drop DNP/inactive games or keep them as flagged rows
//! - **Incremental Loading**: Anti-join against stored rows so re-runs append
//!   only new games
//! - **Team Schedules**: Per-game team offense/defense results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pfr_ffl::{pfr::{gamelog::GameLog, http::PfrClient, locator}, InactivePolicy, Position, Season, StatVariant};
//!
//! # async fn example() -> pfr_ffl::Result<()> {
//! let client = PfrClient::new()?;
//! let season = Season::new(2021);
//! let player = locator::locate_player(&client, "Jonathan Taylor", Position::RB, season).await?;
//! let document = client
//!     .fetch_game_log(&player.profile_url, season, StatVariant::Basic)
//!     .await?;
//! let log = GameLog::parse(&document, Position::RB, StatVariant::Basic, season, InactivePolicy::Drop)?;
//! println!("{} games", log.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PFR_FFL_DB=~/fantasy/gamelogs.db
//! export PFR_FFL_USER_AGENT="my-research-bot/1.0"
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod pfr;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    FailurePolicy, InactivePolicy, Position, ProfileUrl, Season, StatVariant, TeamCode, Week,
};
pub use error::{PfrError, Result};

pub const DB_PATH_ENV_VAR: &str = "PFR_FFL_DB";
pub const BASE_URL_ENV_VAR: &str = "PFR_FFL_BASE_URL";
pub const USER_AGENT_ENV_VAR: &str = "PFR_FFL_USER_AGENT";
