//! Game-log command: scrape and print one player-season.

use log::info;

use crate::{
    cli::types::{InactivePolicy, Position, ProfileUrl, Season, StatVariant},
    pfr::{gamelog::GameLog, locator::resolve_profile, PfrClient},
    Result,
};

/// Parameters for the game-log command
#[derive(Debug)]
pub struct GameLogParams {
    pub name: String,
    pub position: Position,
    pub season: Season,
    pub variant: StatVariant,
    pub profile_url: Option<ProfileUrl>,
    pub inactive: InactivePolicy,
    pub as_json: bool,
}

/// Resolve the profile, fetch the page and parse it.
pub async fn fetch_player_game_log(client: &PfrClient, params: &GameLogParams) -> Result<GameLog> {
    let (profile, _) = resolve_profile(
        client,
        &params.name,
        params.position,
        params.season,
        params.profile_url.as_ref(),
    )
    .await?;

    let document = client
        .fetch_game_log(&profile, params.season, params.variant)
        .await?;
    GameLog::parse(
        &document,
        params.position,
        params.variant,
        params.season,
        params.inactive,
    )
}

pub async fn handle_game_log(params: GameLogParams) -> Result<()> {
    let client = PfrClient::new()?;
    let log = fetch_player_game_log(&client, &params).await?;

    info!(
        "{} {} {} game log: {} games, {} rows excluded",
        params.name,
        params.season,
        params.variant,
        log.len(),
        log.excluded().len()
    );

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&log)?); // tarpaulin::skip
    } else {
        for line in log.summary_lines() {
            // tarpaulin::skip - console output
            println!("{line}");
        }
    }

    Ok(())
}
