//! Resources shared by the command handlers.

use std::path::PathBuf;

use log::debug;

use crate::{pfr::PfrClient, storage::PlayerDatabase, Result};

use super::resolve_db_path;

/// Context containing the resources needed by the loading commands
pub struct CommandContext {
    pub client: PfrClient,
    pub db: PlayerDatabase,
}

impl CommandContext {
    /// Open the database and build the page client
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let db = open_database(db_path)?;
        let client = PfrClient::new()?;
        debug!("Scraping {}", client.base_url());
        Ok(Self { client, db })
    }
}

/// Open the database chosen by `--db`, `PFR_FFL_DB` or the default path
pub fn open_database(db_path: Option<PathBuf>) -> Result<PlayerDatabase> {
    let path = resolve_db_path(db_path)?;
    debug!("Using database {}", path.display());
    Ok(PlayerDatabase::open(&path)?)
}
