//! Type-safe wrappers and enums for Pro Football Reference scraping.

pub mod ids;
pub mod options;
pub mod position;
pub mod time;

pub use ids::{ProfileUrl, TeamCode};
pub use options::{FailurePolicy, InactivePolicy, StatVariant};
pub use position::Position;
pub use time::{Season, Week};
