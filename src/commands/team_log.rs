//! Team-log command: scrape team schedule results.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use log::{error, warn};

use crate::{
    cli::types::{Season, TeamCode},
    pfr::{
        team::{self, fetch_team_games, TeamGame},
        PfrClient,
    },
    storage::PlayerDatabase,
    Result,
};

use super::common::CommandContext;

/// Parameters for the team-log command
#[derive(Debug)]
pub struct TeamLogParams {
    pub season: Season,
    pub teams: Option<Vec<TeamCode>>,
    pub store: bool,
    pub as_json: bool,
    pub delay: Duration,
}

impl TeamLogParams {
    fn teams(&self) -> Vec<TeamCode> {
        match &self.teams {
            Some(teams) if !teams.is_empty() => teams.clone(),
            _ => TeamCode::all().collect(),
        }
    }
}

/// Append a team's new games; returns the number of rows appended.
pub fn store_team_games(
    db: &mut PlayerDatabase,
    team: TeamCode,
    season: Season,
    games: &[TeamGame],
) -> Result<usize> {
    let spec = team::table_spec();
    let rows = games
        .iter()
        .map(|game| spec.row(team.as_str(), season, game))
        .collect();
    Ok(db.store_new_rows(&spec, team.as_str(), season, rows)?)
}

pub async fn handle_team_log(db_path: Option<PathBuf>, params: TeamLogParams) -> Result<()> {
    let (client, mut db) = if params.store {
        let ctx = CommandContext::new(db_path)?;
        (ctx.client, Some(ctx.db))
    } else {
        (PfrClient::new()?, None)
    };

    let mut schedules: BTreeMap<&'static str, Vec<TeamGame>> = BTreeMap::new();
    let mut failed = 0;

    for (i, team) in params.teams().into_iter().enumerate() {
        if i > 0 && !params.delay.is_zero() {
            tokio::time::sleep(params.delay).await;
        }

        let games = match fetch_team_games(&client, team, params.season).await {
            Ok(games) => games,
            Err(e) => {
                failed += 1;
                error!("{team} {}: {e}", params.season);
                continue;
            }
        };

        if let Some(db) = db.as_mut() {
            let appended = store_team_games(db, team, params.season, &games)?;
            println!("{team} {}: {} games, {} new row(s)", params.season, games.len(), appended);
        } else if params.as_json {
            schedules.insert(team.as_str(), games);
        } else {
            for game in &games {
                // tarpaulin::skip - console output
                println!("{team} {}", game.summary());
            }
        }
    }

    if params.as_json && !params.store {
        println!("{}", serde_json::to_string_pretty(&schedules)?); // tarpaulin::skip
    }
    if failed > 0 {
        warn!("{failed} team(s) failed");
    }

    Ok(())
}
