//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use pfr_ffl::{
    cli::{Commands, RosterCmd, PFR},
    commands::{
        game_log::{handle_game_log, GameLogParams},
        load::{handle_load, LoadParams},
        locate::handle_locate,
        roster::{handle_roster_add, handle_roster_list, RosterAddParams},
        team_log::{handle_team_log, TeamLogParams},
    },
    InactivePolicy, Result, StatVariant,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = PFR::parse();

    env_logger::Builder::new()
        .filter_level(if app.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match app.command {
        Commands::Locate { player } => {
            handle_locate(player.name, player.position, player.season).await?
        }

        Commands::GameLog {
            player,
            advanced,
            profile_url,
            keep_inactive,
            json,
        } => {
            handle_game_log(GameLogParams {
                name: player.name,
                position: player.position,
                season: player.season,
                variant: StatVariant::from_flag(advanced),
                profile_url,
                inactive: InactivePolicy::from_flag(keep_inactive),
                as_json: json,
            })
            .await?
        }

        Commands::Roster { cmd } => match cmd {
            RosterCmd::Add {
                name,
                position,
                seasons,
                profile_url,
                ignore_upload,
            } => handle_roster_add(
                app.db,
                RosterAddParams {
                    name,
                    position,
                    seasons,
                    profile_url,
                    ignore_upload,
                },
            )?,
            RosterCmd::List { position, season } => {
                handle_roster_list(app.db, position, season)?
            }
        },

        Commands::Load {
            position,
            season,
            advanced,
            delay_secs,
            on_error,
            retries,
            include_loaded,
            keep_inactive,
            limit,
        } => {
            handle_load(
                app.db,
                LoadParams {
                    position,
                    season,
                    variant: StatVariant::from_flag(advanced),
                    delay: Duration::from_secs(delay_secs),
                    on_error,
                    retries,
                    include_loaded,
                    inactive: InactivePolicy::from_flag(keep_inactive),
                    limit,
                },
            )
            .await?
        }

        Commands::TeamLog {
            season,
            team,
            store,
            json,
            delay_secs,
        } => {
            handle_team_log(
                app.db,
                TeamLogParams {
                    season,
                    teams: team,
                    store,
                    as_json: json,
                    delay: Duration::from_secs(delay_secs),
                },
            )
            .await?
        }
    }

    Ok(())
}
