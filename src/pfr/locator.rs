//! Player lookup on the roster index pages (`/players/{initial}/`).

use crate::cli::types::{Position, ProfileUrl, Season};
use crate::error::{PfrError, Result};
use crate::pfr::cells::cell_text;
use crate::pfr::http::PfrClient;
use log::{debug, info};
use scraper::{Html, Selector};
use serde::Serialize;

/// A roster-index entry that matched a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerReference {
    /// Link text, e.g. `Tom Brady`.
    pub name: String,
    /// Whole entry text, e.g. `Tom Brady (QB) 2000-2022`.
    pub listing: String,
    pub first_season: u16,
    pub last_season: u16,
    pub profile_url: ProfileUrl,
}

/// Index pages are keyed by the first letter of the surname (second name token).
///
/// # Examples
///
/// ```rust
/// use pfr_ffl::pfr::locator::roster_key;
///
/// assert_eq!(roster_key("Amon-Ra St. Brown").unwrap(), 'S');
/// assert!(roster_key("Cher").is_err());
/// ```
pub fn roster_key(name: &str) -> Result<char> {
    name.split_whitespace()
        .nth(1)
        .and_then(|surname| surname.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| PfrError::InvalidName {
            name: name.to_string(),
        })
}

/// Trailing `start-end` token of an entry.
fn year_range(listing: &str) -> Option<(u16, u16)> {
    let (start, end) = listing.split_whitespace().last()?.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Scan an index page for the first entry active in `season` that lists
/// `position` and contains `name` (case-insensitive).
pub fn find_player(
    document: &Html,
    name: &str,
    position: Position,
    season: Season,
) -> Result<PlayerReference> {
    let entries = Selector::parse("div#div_players p")?;
    let link = Selector::parse("a")?;
    let needle = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    for entry in document.select(&entries) {
        let listing = cell_text(entry);
        let Some((first_season, last_season)) = year_range(&listing) else {
            debug!("Skipping roster entry without a year range: {listing}");
            continue;
        };

        if !(first_season..=last_season).contains(&season.as_u16())
            || !position.matches_listing(&listing)
            || !listing.to_lowercase().contains(&needle)
        {
            continue;
        }

        let Some(anchor) = entry.select(&link).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let Ok(profile_url) = ProfileUrl::parse(href) else {
            debug!("Skipping roster entry with an unusable link {href:?}: {listing}");
            continue;
        };

        return Ok(PlayerReference {
            name: cell_text(anchor),
            listing,
            first_season,
            last_season,
            profile_url,
        });
    }

    Err(PfrError::PlayerNotFound {
        name: name.to_string(),
        position: position.to_string(),
        season: season.as_u16(),
    })
}

/// Fetch the index page for `name` and find the player on it.
pub async fn locate_player(
    client: &PfrClient,
    name: &str,
    position: Position,
    season: Season,
) -> Result<PlayerReference> {
    let key = roster_key(name)?;
    let document = client.fetch_roster_index(key).await?;
    let player = find_player(&document, name, position, season)?;
    info!("Located {} at {}", player.listing, player.profile_url);
    Ok(player)
}

/// Use a known profile URL, or look one up.
///
/// The flag is true when the URL was learned by a lookup and should be
/// persisted for future runs.
pub async fn resolve_profile(
    client: &PfrClient,
    name: &str,
    position: Position,
    season: Season,
    known: Option<&ProfileUrl>,
) -> Result<(ProfileUrl, bool)> {
    if let Some(url) = known {
        return Ok((url.clone(), false));
    }
    let player = locate_player(client, name, position, season).await?;
    Ok((player.profile_url, true))
}
