//! Page requests against pro-football-reference.com

use crate::cli::types::{ProfileUrl, Season, StatVariant, TeamCode};
use crate::core::default_header_map;
use crate::{Result, BASE_URL_ENV_VAR};
use log::debug;
use reqwest::Client;
use scraper::Html;

/// Production site root.
pub const PFR_BASE_URL: &str = "https://www.pro-football-reference.com";

/// HTTP client bound to one site root.
#[derive(Debug, Clone)]
pub struct PfrClient {
    http: Client,
    base_url: String,
}

impl PfrClient {
    /// Client for the live site, or for `PFR_FFL_BASE_URL` when set.
    pub fn new() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| PFR_BASE_URL.to_string());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_header_map()?)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/players/{key}/`
    pub fn roster_index_url(&self, key: char) -> String {
        format!("{}/players/{}/", self.base_url, key)
    }

    /// `{profile}/gamelog/{season}/` or `{profile}/gamelog/{season}/advanced`
    pub fn gamelog_url(&self, profile: &ProfileUrl, season: Season, variant: StatVariant) -> String {
        let base = format!("{}{}/gamelog/{}/", self.base_url, profile, season);
        match variant {
            StatVariant::Basic => base,
            StatVariant::Advanced => format!("{base}advanced"),
        }
    }

    /// `/teams/{team}/{season}.htm`
    pub fn team_season_url(&self, team: TeamCode, season: Season) -> String {
        format!("{}/teams/{}/{}.htm", self.base_url, team.url_slug(), season)
    }

    /// GET a page and parse it. Non-success statuses are errors.
    pub async fn get_document(&self, url: &str) -> Result<Html> {
        debug!("GET {url}");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(Html::parse_document(&body))
    }

    pub async fn fetch_roster_index(&self, key: char) -> Result<Html> {
        self.get_document(&self.roster_index_url(key)).await
    }

    pub async fn fetch_game_log(
        &self,
        profile: &ProfileUrl,
        season: Season,
        variant: StatVariant,
    ) -> Result<Html> {
        self.get_document(&self.gamelog_url(profile, season, variant))
            .await
    }

    pub async fn fetch_team_season(&self, team: TeamCode, season: Season) -> Result<Html> {
        self.get_document(&self.team_season_url(team, season)).await
    }
}

#[cfg(test)]
mod tests;
