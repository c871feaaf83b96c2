//! Pro Football Reference scraping
//!
//! - `http`: page client and URL layout
//! - `locator`: roster-index player lookup
//! - `cells`: typed `data-stat` cell access
//! - `gamelog`: player game-log extractors
//! - `team`: team schedule extractor

pub mod cells;
pub mod gamelog;
pub mod http;
pub mod locator;
pub mod team;

use crate::cli::types::{Position, StatVariant};
use crate::storage::TableSpec;

pub use http::{PfrClient, PFR_BASE_URL};

/// Every fact table written by the loader and team-log commands.
pub fn all_table_specs() -> Vec<TableSpec> {
    let mut specs: Vec<TableSpec> = Position::ALL
        .iter()
        .flat_map(|position| {
            [StatVariant::Basic, StatVariant::Advanced]
                .into_iter()
                .map(move |variant| gamelog::table_spec(*position, variant))
        })
        .collect();
    specs.push(team::table_spec());
    specs
}
