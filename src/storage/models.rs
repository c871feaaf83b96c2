//! Data models for the storage layer

use crate::cli::types::{Position, ProfileUrl, Season, StatVariant};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// SQLite storage class of a fact-table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "INTEGER",
            ColumnKind::Real => "REAL",
            ColumnKind::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }

    pub const fn real(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Real,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }
}

/// A scraped record that can be written as one table row.
///
/// `values` must line up with `columns` and use the matching storage class
/// (`Integer` for counts and flags, `Real` for rates, `Text` for labels), so
/// that a stored row reads back equal to the freshly scraped one.
pub trait Record {
    fn columns() -> Vec<Column>;
    fn values(&self) -> Vec<Value>;
}

/// A fact table keyed by an owner (player name or team code) and a season.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub name: &'static str,
    pub owner_column: &'static str,
    pub columns: Vec<Column>,
}

impl TableSpec {
    pub fn of<R: Record>(name: &'static str, owner_column: &'static str) -> Self {
        Self {
            name,
            owner_column,
            columns: R::columns(),
        }
    }

    /// Owner and season first, then the record columns.
    pub fn all_columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::text(self.owner_column), Column::int("season")];
        columns.extend(self.columns.iter().copied());
        columns
    }

    pub fn row<R: Record>(&self, owner: &str, season: Season, record: &R) -> Vec<Value> {
        let mut values = vec![
            Value::Text(owner.to_string()),
            Value::Integer(season.as_u16() as i64),
        ];
        values.extend(record.values());
        values
    }
}

/// A player queued for loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub player_id: i64,
    pub name: String,
    pub position: Position,
    pub profile_url: Option<ProfileUrl>,
    pub ignore_upload: bool,
}

/// Load progress of one player for one season and game-log variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStatus {
    pub player_id: i64,
    pub name: String,
    pub position: Position,
    pub season: Season,
    pub variant: StatVariant,
    pub is_loaded: bool,
    pub loaded_at: Option<u64>,
}
