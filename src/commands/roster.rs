//! Roster commands: queue players for loading and show their status.

use std::path::PathBuf;

use log::info;

use crate::{
    cli::types::{Position, ProfileUrl, Season, StatVariant},
    storage::PlayerDatabase,
    Result,
};

use super::common::open_database;

/// Parameters for `roster add`
#[derive(Debug)]
pub struct RosterAddParams {
    pub name: String,
    pub position: Position,
    pub seasons: Vec<Season>,
    pub profile_url: Option<ProfileUrl>,
    pub ignore_upload: bool,
}

/// Upsert the player and queue every season for both game-log variants.
///
/// Returns the player id and the number of newly queued player-seasons.
pub fn add_to_roster(db: &mut PlayerDatabase, params: &RosterAddParams) -> Result<(i64, usize)> {
    let player_id = db.upsert_player(
        params.name.trim(),
        params.position,
        params.profile_url.as_ref(),
        params.ignore_upload,
    )?;

    let mut queued = 0;
    for season in &params.seasons {
        for variant in [StatVariant::Basic, StatVariant::Advanced] {
            if db.queue_season(player_id, *season, variant)? {
                queued += 1;
            }
        }
    }
    Ok((player_id, queued))
}

pub fn handle_roster_add(db_path: Option<PathBuf>, params: RosterAddParams) -> Result<()> {
    let mut db = open_database(db_path)?;
    let (player_id, queued) = add_to_roster(&mut db, &params)?;
    info!("Roster player {} ({}) has id {}", params.name, params.position, player_id);

    let seasons: Vec<String> = params.seasons.iter().map(|s| s.to_string()).collect();
    println!(
        "{} ({}): queued {} new load(s) for {}",
        params.name,
        params.position,
        queued,
        seasons.join(", ")
    );
    Ok(())
}

pub fn handle_roster_list(
    db_path: Option<PathBuf>,
    position: Option<Position>,
    season: Option<Season>,
) -> Result<()> {
    let db = open_database(db_path)?;
    let statuses = db.list_roster(position, season)?;

    if statuses.is_empty() {
        println!("No queued players");
        return Ok(());
    }

    for status in statuses {
        // tarpaulin::skip - console output
        println!(
            "{:<28} {:<2} {} {:<8} {}",
            status.name,
            status.position.as_str(),
            status.season,
            status.variant.as_str(),
            if status.is_loaded { "loaded" } else { "pending" }
        );
    }
    Ok(())
}
