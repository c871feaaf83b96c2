//! Locate command: print a player's profile path.

use crate::{
    cli::types::{Position, Season},
    pfr::{locator::locate_player, PfrClient},
    Result,
};

pub async fn handle_locate(name: String, position: Position, season: Season) -> Result<()> {
    let client = PfrClient::new()?;
    let player = locate_player(&client, &name, position, season).await?;

    println!("{}", player.profile_url);
    println!("  {}", player.listing); // tarpaulin::skip
    Ok(())
}
