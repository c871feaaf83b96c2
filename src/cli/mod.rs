//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{FailurePolicy, Position, ProfileUrl, Season, TeamCode};

/// Arguments identifying one player-season
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Full name as listed on Pro Football Reference (e.g. "Tom Brady").
    #[clap(long, short = 'n')]
    pub name: String,

    /// Position: QB, RB, WR or TE.
    #[clap(long, short = 'p')]
    pub position: Position,

    /// Season year (e.g. 2021).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Parser)]
#[clap(
    name = "pfr-ffl",
    about = "Pro Football Reference game-log scraper for fantasy football"
)]
pub struct PFR {
    /// SQLite database path (or set `PFR_FFL_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a player's profile page from the roster index.
    Locate {
        #[clap(flatten)]
        player: PlayerArgs,
    },

    /// Scrape and print one player's game log for a season.
    GameLog {
        #[clap(flatten)]
        player: PlayerArgs,

        /// Use the advanced game log instead of the basic one.
        #[clap(long)]
        advanced: bool,

        /// Known profile URL; skips the roster lookup.
        #[clap(long)]
        profile_url: Option<ProfileUrl>,

        /// Keep inactive/DNP games as flagged rows without stats.
        #[clap(long)]
        keep_inactive: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Manage the players queued for loading.
    Roster {
        #[clap(subcommand)]
        cmd: RosterCmd,
    },

    /// Scrape every queued player of a position and append new games to the database.
    Load {
        /// Position to load: QB, RB, WR or TE.
        #[clap(long, short = 'p')]
        position: Position,

        /// Season year (e.g. 2023).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Load the advanced game log instead of the basic one.
        #[clap(long)]
        advanced: bool,

        /// Seconds to wait between players.
        #[clap(long, default_value_t = 3)]
        delay_secs: u64,

        /// What to do when a player fails: skip | abort.
        #[clap(long, default_value_t = FailurePolicy::Skip)]
        on_error: FailurePolicy,

        /// Extra attempts for a player whose page request failed.
        #[clap(long, default_value_t = 0)]
        retries: u32,

        /// Also re-scrape players already marked loaded (active season).
        #[clap(long)]
        include_loaded: bool,

        /// Store inactive/DNP games as flagged rows without stats.
        #[clap(long)]
        keep_inactive: bool,

        /// Stop after this many players.
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Scrape team schedule results for a season.
    TeamLog {
        /// Season year (e.g. 2022).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Team code (repeatable); all 32 teams when omitted.
        #[clap(long, short)]
        team: Option<Vec<TeamCode>>,

        /// Append new games to the database instead of printing them.
        #[clap(long)]
        store: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Seconds to wait between teams.
        #[clap(long, default_value_t = 3)]
        delay_secs: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum RosterCmd {
    /// Add (or update) a player and queue seasons for loading.
    Add {
        /// Full name as listed on Pro Football Reference.
        #[clap(long, short = 'n')]
        name: String,

        /// Position: QB, RB, WR or TE.
        #[clap(long, short = 'p')]
        position: Position,

        /// Seasons to queue (repeatable): `-s 2021 -s 2022`.
        #[clap(long = "season", short = 's', required = true)]
        seasons: Vec<Season>,

        /// Known profile URL; skips the roster lookup during loads.
        #[clap(long)]
        profile_url: Option<ProfileUrl>,

        /// Keep the player in the roster but never load them.
        #[clap(long)]
        ignore_upload: bool,
    },

    /// List roster players and their load status.
    List {
        /// Only players at this position.
        #[clap(long, short = 'p')]
        position: Option<Position>,

        /// Only load status for this season.
        #[clap(long, short)]
        season: Option<Season>,
    },
}
