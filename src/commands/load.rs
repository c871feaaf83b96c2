//! Load command: scrape every queued player of a position and append new
//! games to the database.
//!
//! Players are processed one at a time with a fixed pause between them.
//! A player whose page request fails may be retried; lookup misses and
//! parse errors are not. After retries are exhausted the [`FailurePolicy`]
//! decides whether the batch continues.

use std::path::PathBuf;
use std::time::Duration;

use log::{error, info, warn};
use serde::Serialize;

use crate::{
    cli::types::{FailurePolicy, InactivePolicy, Position, Season, StatVariant},
    pfr::{gamelog, gamelog::GameLog, locator::resolve_profile, PfrClient},
    storage::{PlayerDatabase, PlayerLoad, RosterPlayer, TableSpec},
    Result,
};

use super::common::CommandContext;

/// Parameters for the load command
#[derive(Debug, Clone)]
pub struct LoadParams {
    pub position: Position,
    pub season: Season,
    pub variant: StatVariant,
    pub delay: Duration,
    pub on_error: FailurePolicy,
    pub retries: u32,
    pub include_loaded: bool,
    pub inactive: InactivePolicy,
    pub limit: Option<usize>,
}

/// Outcome of one load run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub processed: usize,
    pub loaded: usize,
    pub failed: usize,
    pub rows_appended: usize,
}

pub async fn handle_load(db_path: Option<PathBuf>, params: LoadParams) -> Result<()> {
    let mut ctx = CommandContext::new(db_path)?;
    let summary = load_players(&ctx.client, &mut ctx.db, &params).await?;

    println!(
        "{} {} {}: {} processed, {} loaded, {} failed, {} rows appended",
        params.position,
        params.season,
        params.variant,
        summary.processed,
        summary.loaded,
        summary.failed,
        summary.rows_appended
    );
    Ok(())
}

/// Load every pending player for `params`.
///
/// Under [`FailurePolicy::Abort`] the first player that still fails after
/// its retries ends the run with that error; earlier players stay loaded.
pub async fn load_players(
    client: &PfrClient,
    db: &mut PlayerDatabase,
    params: &LoadParams,
) -> Result<LoadSummary> {
    let mut players = db.pending_players(
        params.position,
        params.season,
        params.variant,
        params.include_loaded,
    )?;
    if let Some(limit) = params.limit {
        players.truncate(limit);
    }

    info!(
        "Loading {} {} {} game log(s) for {} player(s)",
        params.season,
        params.position,
        params.variant,
        players.len()
    );

    let table = gamelog::table_spec(params.position, params.variant);
    let mut summary = LoadSummary::default();

    for (i, player) in players.iter().enumerate() {
        if i > 0 && !params.delay.is_zero() {
            tokio::time::sleep(params.delay).await;
        }
        summary.processed += 1;

        match load_with_retries(client, db, player, &table, params).await {
            Ok(appended) => {
                summary.loaded += 1;
                summary.rows_appended += appended;
                info!("{}: {} new row(s)", player.name, appended);
            }
            Err(e) => {
                summary.failed += 1;
                error!("{}: {}", player.name, e);
                if params.on_error == FailurePolicy::Abort {
                    return Err(e);
                }
            }
        }
    }

    Ok(summary)
}

async fn load_with_retries(
    client: &PfrClient,
    db: &mut PlayerDatabase,
    player: &RosterPlayer,
    table: &TableSpec,
    params: &LoadParams,
) -> Result<usize> {
    let mut attempt = 0;
    loop {
        match load_player(client, db, player, table, params).await {
            Err(e) if e.is_retryable() && attempt < params.retries => {
                attempt += 1;
                warn!(
                    "{}: {} (retry {}/{})",
                    player.name, e, attempt, params.retries
                );
                if !params.delay.is_zero() {
                    tokio::time::sleep(params.delay).await;
                }
            }
            result => return result,
        }
    }
}

async fn load_player(
    client: &PfrClient,
    db: &mut PlayerDatabase,
    player: &RosterPlayer,
    table: &TableSpec,
    params: &LoadParams,
) -> Result<usize> {
    let (profile, learned) = resolve_profile(
        client,
        &player.name,
        player.position,
        params.season,
        player.profile_url.as_ref(),
    )
    .await?;

    let document = client
        .fetch_game_log(&profile, params.season, params.variant)
        .await?;
    let log = GameLog::parse(
        &document,
        player.position,
        params.variant,
        params.season,
        params.inactive,
    )?;
    let rows = log.table_rows(table, &player.name, params.season);

    let appended = db.complete_player_load(PlayerLoad {
        player_id: player.player_id,
        name: &player.name,
        season: params.season,
        variant: params.variant,
        table,
        rows,
        learned_url: learned.then_some(&profile),
    })?;
    Ok(appended)
}
