//! Roster, load-status and fact-table queries

use super::{delta::anti_join, models::*, schema::quoted, schema::PlayerDatabase};
use crate::cli::types::{Position, ProfileUrl, Season, StatVariant};
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes for one loaded player-season, applied in a single transaction.
#[derive(Debug)]
pub struct PlayerLoad<'a> {
    pub player_id: i64,
    pub name: &'a str,
    pub season: Season,
    pub variant: StatVariant,
    pub table: &'a TableSpec,
    pub rows: Vec<Vec<Value>>,
    /// Profile URL found by a roster lookup, to be stored for later runs.
    pub learned_url: Option<&'a ProfileUrl>,
}

impl PlayerDatabase {
    /// Insert a roster player, or update the flags of an existing one.
    ///
    /// A stored profile URL is kept when `profile_url` is `None`.
    pub fn upsert_player(
        &mut self,
        name: &str,
        position: Position,
        profile_url: Option<&ProfileUrl>,
        ignore_upload: bool,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO roster_players (name, position, profile_url, ignore_upload)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(name, position) DO UPDATE SET
                profile_url = COALESCE(excluded.profile_url, roster_players.profile_url),
                ignore_upload = excluded.ignore_upload",
            params![
                name,
                position.as_str(),
                profile_url.map(|url| url.as_str()),
                ignore_upload
            ],
        )?;

        let player_id = self.conn.query_row(
            "SELECT player_id FROM roster_players WHERE name = ? AND position = ?",
            params![name, position.as_str()],
            |row| row.get(0),
        )?;
        Ok(player_id)
    }

    pub fn get_player(&self, name: &str, position: Position) -> Result<Option<RosterPlayer>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, name, position, profile_url, ignore_upload
                 FROM roster_players WHERE name = ? AND position = ?",
                params![name, position.as_str()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Queue a player-season for loading. Existing status rows are left alone.
    pub fn queue_season(
        &mut self,
        player_id: i64,
        season: Season,
        variant: StatVariant,
    ) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO load_status (player_id, season, variant, is_loaded)
             VALUES (?, ?, ?, 0)",
            params![player_id, season.as_u16(), variant.as_str()],
        )?;
        Ok(inserted > 0)
    }

    /// Players of `position` queued for `season`, skipping ignored players and,
    /// unless `include_loaded`, those already loaded.
    pub fn pending_players(
        &self,
        position: Position,
        season: Season,
        variant: StatVariant,
        include_loaded: bool,
    ) -> Result<Vec<RosterPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.name, p.position, p.profile_url, p.ignore_upload
             FROM roster_players p
             JOIN load_status s ON s.player_id = p.player_id
             WHERE p.position = ?1
               AND p.ignore_upload = 0
               AND s.season = ?2
               AND s.variant = ?3
               AND (?4 OR s.is_loaded = 0)
             ORDER BY p.player_id",
        )?;

        let players = stmt
            .query_map(
                params![position.as_str(), season.as_u16(), variant.as_str(), include_loaded],
                row_to_player,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    /// Load status of every queued player-season, optionally filtered.
    pub fn list_roster(
        &self,
        position: Option<Position>,
        season: Option<Season>,
    ) -> Result<Vec<LoadStatus>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.name, p.position, s.season, s.variant, s.is_loaded, s.loaded_at
             FROM roster_players p
             JOIN load_status s ON s.player_id = p.player_id
             WHERE (?1 IS NULL OR p.position = ?1)
               AND (?2 IS NULL OR s.season = ?2)
             ORDER BY p.position, p.name, s.season, s.variant",
        )?;

        let statuses = stmt
            .query_map(
                params![position.map(|p| p.as_str()), season.map(|s| s.as_u16())],
                row_to_load_status,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(statuses)
    }

    /// Stored rows of `table` for one owner and season, in insertion order.
    pub fn existing_rows(
        &self,
        table: &TableSpec,
        owner: &str,
        season: Season,
    ) -> Result<Vec<Vec<Value>>> {
        select_rows(&self.conn, table, owner, season)
    }

    /// Append the rows not already stored for `owner` and `season`.
    ///
    /// Returns the number of rows appended.
    pub fn store_new_rows(
        &mut self,
        table: &TableSpec,
        owner: &str,
        season: Season,
        rows: Vec<Vec<Value>>,
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let existing = select_rows(&tx, table, owner, season)?;
        let delta = anti_join(rows, &existing);
        insert_rows(&tx, table, &delta)?;
        tx.commit()?;
        Ok(delta.len())
    }

    /// Append a player's new rows, store a learned profile URL and mark the
    /// player-season loaded, all or nothing.
    pub fn complete_player_load(&mut self, load: PlayerLoad<'_>) -> Result<usize> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
        let tx = self.conn.transaction()?;

        let existing = select_rows(&tx, load.table, load.name, load.season)?;
        let delta = anti_join(load.rows, &existing);
        insert_rows(&tx, load.table, &delta)?;

        if let Some(url) = load.learned_url {
            tx.execute(
                "UPDATE roster_players SET profile_url = ? WHERE player_id = ?",
                params![url.as_str(), load.player_id],
            )?;
        }

        tx.execute(
            "INSERT INTO load_status (player_id, season, variant, is_loaded, loaded_at)
             VALUES (?, ?, ?, 1, ?)
             ON CONFLICT(player_id, season, variant) DO UPDATE SET
                is_loaded = 1,
                loaded_at = excluded.loaded_at",
            params![
                load.player_id,
                load.season.as_u16(),
                load.variant.as_str(),
                now
            ],
        )?;

        tx.commit()?;
        Ok(delta.len())
    }
}

fn select_rows(
    conn: &Connection,
    table: &TableSpec,
    owner: &str,
    season: Season,
) -> Result<Vec<Vec<Value>>> {
    let columns = table.all_columns();
    let column_list: Vec<String> = columns.iter().map(|c| quoted(c.name)).collect();
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ? AND \"season\" = ? ORDER BY rowid",
        column_list.join(", "),
        quoted(table.name),
        quoted(table.owner_column)
    );

    let mut stmt = conn
        .prepare(&sql)
        .with_context(|| format!("Failed to query {}", table.name))?;
    let rows = stmt
        .query_map(params![owner, season.as_u16()], |row| {
            (0..columns.len())
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn insert_rows(conn: &Connection, table: &TableSpec, rows: &[Vec<Value>]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let columns = table.all_columns();
    let column_list: Vec<String> = columns.iter().map(|c| quoted(c.name)).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        column_list.join(", "),
        placeholders
    );

    let mut stmt = conn.prepare(&sql)?;
    for row in rows {
        if row.len() != columns.len() {
            return Err(anyhow!(
                "Row for {} has {} values, expected {}",
                table.name,
                row.len(),
                columns.len()
            ));
        }
        stmt.execute(params_from_iter(row.iter()))?;
    }
    Ok(())
}

fn row_to_player(row: &Row) -> rusqlite::Result<RosterPlayer> {
    let position: String = row.get(2)?;
    let profile_url: Option<String> = row.get(3)?;
    Ok(RosterPlayer {
        player_id: row.get(0)?,
        name: row.get(1)?,
        position: parse_column(2, &position)?,
        // Unparsable stored URLs fall back to a fresh lookup
        profile_url: profile_url.and_then(|url| ProfileUrl::parse(&url).ok()),
        ignore_upload: row.get(4)?,
    })
}

fn row_to_load_status(row: &Row) -> rusqlite::Result<LoadStatus> {
    let position: String = row.get(2)?;
    let variant: String = row.get(4)?;
    let loaded_at: Option<i64> = row.get(6)?;
    Ok(LoadStatus {
        player_id: row.get(0)?,
        name: row.get(1)?,
        position: parse_column(2, &position)?,
        season: Season::new(row.get(3)?),
        variant: parse_column(4, &variant)?,
        is_loaded: row.get(5)?,
        loaded_at: loaded_at.map(|t| t as u64),
    })
}

fn parse_column<T>(index: usize, raw: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = crate::error::PfrError>,
{
    raw.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}
