//! Database schema and connection management

use super::models::TableSpec;
use crate::error::PfrError;
use crate::{pfr, DB_PATH_ENV_VAR};
use anyhow::{Context, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection for the roster and game-log tables
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database with the full schema
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database file: `<cache dir>/pfr-ffl/gamelogs.db`
    pub fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| PfrError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(cache_dir.join("pfr-ffl").join("gamelogs.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS roster_players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                profile_url TEXT,
                ignore_upload INTEGER NOT NULL DEFAULT 0,
                UNIQUE (name, position)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS load_status (
                player_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                variant TEXT NOT NULL,
                is_loaded INTEGER NOT NULL DEFAULT 0,
                loaded_at INTEGER,
                PRIMARY KEY (player_id, season, variant),
                FOREIGN KEY (player_id) REFERENCES roster_players(player_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_load_status_pending
             ON load_status(season, variant, is_loaded)",
            [],
        )?;

        for spec in pfr::all_table_specs() {
            self.conn
                .execute(&create_table_sql(&spec), [])
                .with_context(|| format!("Failed to create table {}", spec.name))?;
            self.conn.execute(&create_index_sql(&spec), [])?;
        }

        Ok(())
    }
}

/// Quote an identifier taken from a [`TableSpec`].
pub(crate) fn quoted(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

pub(crate) fn create_table_sql(spec: &TableSpec) -> String {
    let columns: Vec<String> = spec
        .all_columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            // owner and season
            let not_null = if i < 2 { " NOT NULL" } else { "" };
            format!("{} {}{}", quoted(column.name), column.kind.sql_type(), not_null)
        })
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(spec.name),
        columns.join(", ")
    )
}

fn create_index_sql(spec: &TableSpec) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {}({}, \"season\")",
        quoted(&format!("idx_{}_owner_season", spec.name)),
        quoted(spec.name),
        quoted(spec.owner_column)
    )
}
