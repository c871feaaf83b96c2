//! Command implementations for the pfr-ffl CLI

pub mod common;
pub mod game_log;
pub mod load;
pub mod locate;
pub mod roster;
pub mod team_log;


use std::path::PathBuf;

use crate::{storage::PlayerDatabase, Result, DB_PATH_ENV_VAR};

/// Resolve the database path from the flag, `PFR_FFL_DB`, or the cache directory
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db.or_else(|| {
        std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }) {
        return Ok(path);
    }
    Ok(PlayerDatabase::database_path()?)
}
