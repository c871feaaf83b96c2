//! Player game-log extraction
//!
//! Every game-log table shares one contract: rows are read from the first
//! table body in document order, rows without data cells are separators,
//! and a row whose last cell is a non-participation marker is either
//! dropped or kept as a flagged row without stats, depending on the
//! [`InactivePolicy`].

pub mod advanced;
pub mod basic;

use crate::cli::types::{InactivePolicy, Position, Season, StatVariant, Week};
use crate::error::{PfrError, Result};
use crate::pfr::cells::TableRow;
use crate::storage::{Column, Record, TableSpec};
use rusqlite::types::Value;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

pub use advanced::{passer_rating, QbAdvancedGame, RbAdvancedGame, WrAdvancedGame};
pub use basic::{QbGame, SkillGame};

/// Last-cell texts of games the player did not take part in.
pub const NOT_PLAYED_MARKERS: [&str; 4] =
    ["Inactive", "Did Not Play", "Injured Reserve", "COVID-19 List"];

/// A position-specific per-game stat line.
pub trait StatLine: Record + Serialize + Sized {
    fn parse(row: &TableRow<'_>, season: Season) -> Result<Self>;

    /// Short human-readable summary for text output.
    fn summary(&self) -> String;
}

/// Columns common to every game-log row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameInfo {
    pub date: String,
    pub week: Week,
    pub age: f64,
    pub team: String,
    pub game_location: String,
    pub opp: String,
    pub result: String,
    pub team_pts: i64,
    pub opp_pts: i64,
}

impl GameInfo {
    pub fn parse(row: &TableRow<'_>) -> Result<Self> {
        let result = row.game_result("game_result")?;
        Ok(Self {
            date: row.required_text("game_date")?,
            week: row.week("week_num")?,
            age: row.float("age")?,
            team: row.required_text("team")?,
            game_location: row.text("game_location").unwrap_or_default(),
            opp: row.required_text("opp")?,
            result: result.outcome,
            team_pts: result.team_pts,
            opp_pts: result.opp_pts,
        })
    }

    /// `Wk 3  2021-09-26  TAM @LAR  L 24-34`
    pub fn summary(&self) -> String {
        format!(
            "Wk {:<2} {} {} {}{} {} {}-{}",
            self.week,
            self.date,
            self.team,
            self.game_location,
            self.opp,
            self.result,
            self.team_pts,
            self.opp_pts
        )
    }
}

impl Record for GameInfo {
    fn columns() -> Vec<Column> {
        vec![
            Column::text("date"),
            Column::int("week"),
            Column::real("age"),
            Column::text("team"),
            Column::text("game_location"),
            Column::text("opp"),
            Column::text("result"),
            Column::int("team_pts"),
            Column::int("opp_pts"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.date.clone()),
            Value::Integer(self.week.as_u16() as i64),
            Value::Real(self.age),
            Value::Text(self.team.clone()),
            Value::Text(self.game_location.clone()),
            Value::Text(self.opp.clone()),
            Value::Text(self.result.clone()),
            Value::Integer(self.team_pts),
            Value::Integer(self.opp_pts),
        ]
    }
}

/// One game of a player's log. `stats` is `None` for flagged inactive games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogRow<S> {
    #[serde(flatten)]
    pub game: GameInfo,
    pub inactive: bool,
    #[serde(flatten)]
    pub stats: Option<S>,
}

impl<S: StatLine> Record for GameLogRow<S> {
    fn columns() -> Vec<Column> {
        let mut columns = GameInfo::columns();
        columns.push(Column::int("inactive"));
        columns.extend(S::columns());
        columns
    }

    fn values(&self) -> Vec<Value> {
        let mut values = self.game.values();
        values.push(Value::Integer(self.inactive as i64));
        match &self.stats {
            Some(stats) => values.extend(stats.values()),
            None => values.extend(S::columns().iter().map(|_| Value::Null)),
        }
        values
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExclusionReason {
    /// Last cell held one of [`NOT_PLAYED_MARKERS`].
    NotPlayed(String),
    /// Repeated header row.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedRow {
    /// Position among the table-body rows.
    pub index: usize,
    pub week: Option<String>,
    pub date: Option<String>,
    pub reason: ExclusionReason,
}

/// Rows kept from one table plus the rows left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction<S> {
    pub rows: Vec<GameLogRow<S>>,
    pub excluded: Vec<ExcludedRow>,
}

impl<S> Extraction<S> {
    /// Number of table-body rows the extraction was built from.
    pub fn total_rows(&self) -> usize {
        self.rows.len() + self.excluded.len()
    }
}

/// Marker text if the row is a game the player did not take part in.
pub fn not_played_marker(row: &TableRow<'_>) -> Option<&'static str> {
    let last = row.last_cell_text()?;
    NOT_PLAYED_MARKERS
        .into_iter()
        .find(|marker| *marker == last)
}

/// Direct `tr` children of the first table body.
pub(crate) fn body_rows<'a>(document: &'a Html, body_selector: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = Selector::parse(body_selector)?;
    let body = document
        .select(&selector)
        .next()
        .ok_or(PfrError::ElementNotFound {
            context: "stats table body",
        })?;
    Ok(body
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .collect())
}

pub fn extract<S: StatLine>(
    document: &Html,
    season: Season,
    policy: InactivePolicy,
) -> Result<Extraction<S>> {
    let mut rows = Vec::new();
    let mut excluded = Vec::new();

    for (index, tr) in body_rows(document, "tbody")?.into_iter().enumerate() {
        let row = TableRow::new(tr);

        if row.is_separator() {
            excluded.push(ExcludedRow {
                index,
                week: None,
                date: None,
                reason: ExclusionReason::Separator,
            });
            continue;
        }

        match (not_played_marker(&row), policy) {
            (Some(marker), InactivePolicy::Drop) => excluded.push(ExcludedRow {
                index,
                week: row.text("week_num"),
                date: row.text("game_date"),
                reason: ExclusionReason::NotPlayed(marker.to_string()),
            }),
            (Some(_), InactivePolicy::Flag) => rows.push(GameLogRow {
                game: GameInfo::parse(&row)?,
                inactive: true,
                stats: None,
            }),
            (None, _) => rows.push(GameLogRow {
                game: GameInfo::parse(&row)?,
                inactive: false,
                stats: Some(S::parse(&row, season)?),
            }),
        }
    }

    Ok(Extraction { rows, excluded })
}

/// Fact table for a position and game-log variant.
pub fn table_name(position: Position, variant: StatVariant) -> &'static str {
    match (position, variant) {
        (Position::QB, StatVariant::Basic) => "qb_gamelog",
        (Position::RB, StatVariant::Basic) => "rb_gamelog",
        (Position::WR, StatVariant::Basic) => "wr_gamelog",
        (Position::TE, StatVariant::Basic) => "te_gamelog",
        (Position::QB, StatVariant::Advanced) => "qb_advanced_gamelog",
        (Position::RB, StatVariant::Advanced) => "rb_advanced_gamelog",
        (Position::WR, StatVariant::Advanced) => "wr_advanced_gamelog",
        (Position::TE, StatVariant::Advanced) => "te_advanced_gamelog",
    }
}

pub fn table_spec(position: Position, variant: StatVariant) -> TableSpec {
    let name = table_name(position, variant);
    match (position, variant) {
        (Position::QB, StatVariant::Basic) => TableSpec::of::<GameLogRow<QbGame>>(name, "name"),
        (_, StatVariant::Basic) => TableSpec::of::<GameLogRow<SkillGame>>(name, "name"),
        (Position::QB, StatVariant::Advanced) => {
            TableSpec::of::<GameLogRow<QbAdvancedGame>>(name, "name")
        }
        (Position::RB, StatVariant::Advanced) => {
            TableSpec::of::<GameLogRow<RbAdvancedGame>>(name, "name")
        }
        (_, StatVariant::Advanced) => TableSpec::of::<GameLogRow<WrAdvancedGame>>(name, "name"),
    }
}

/// A parsed game log, shaped by position and variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameLog {
    Qb(Extraction<QbGame>),
    Skill(Extraction<SkillGame>),
    QbAdvanced(Extraction<QbAdvancedGame>),
    RbAdvanced(Extraction<RbAdvancedGame>),
    WrAdvanced(Extraction<WrAdvancedGame>),
}

impl GameLog {
    pub fn parse(
        document: &Html,
        position: Position,
        variant: StatVariant,
        season: Season,
        policy: InactivePolicy,
    ) -> Result<Self> {
        Ok(match (position, variant) {
            (Position::QB, StatVariant::Basic) => GameLog::Qb(extract(document, season, policy)?),
            (_, StatVariant::Basic) => GameLog::Skill(extract(document, season, policy)?),
            (Position::QB, StatVariant::Advanced) => {
                GameLog::QbAdvanced(extract(document, season, policy)?)
            }
            (Position::RB, StatVariant::Advanced) => {
                GameLog::RbAdvanced(extract(document, season, policy)?)
            }
            (_, StatVariant::Advanced) => GameLog::WrAdvanced(extract(document, season, policy)?),
        })
    }

    /// Number of kept rows.
    pub fn len(&self) -> usize {
        match self {
            GameLog::Qb(e) => e.rows.len(),
            GameLog::Skill(e) => e.rows.len(),
            GameLog::QbAdvanced(e) => e.rows.len(),
            GameLog::RbAdvanced(e) => e.rows.len(),
            GameLog::WrAdvanced(e) => e.rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn excluded(&self) -> &[ExcludedRow] {
        match self {
            GameLog::Qb(e) => &e.excluded,
            GameLog::Skill(e) => &e.excluded,
            GameLog::QbAdvanced(e) => &e.excluded,
            GameLog::RbAdvanced(e) => &e.excluded,
            GameLog::WrAdvanced(e) => &e.excluded,
        }
    }

    /// Storage rows for `spec`, prefixed with owner and season.
    pub fn table_rows(&self, spec: &TableSpec, owner: &str, season: Season) -> Vec<Vec<Value>> {
        fn rows<S: StatLine>(
            e: &Extraction<S>,
            spec: &TableSpec,
            owner: &str,
            season: Season,
        ) -> Vec<Vec<Value>> {
            e.rows.iter().map(|row| spec.row(owner, season, row)).collect()
        }

        match self {
            GameLog::Qb(e) => rows(e, spec, owner, season),
            GameLog::Skill(e) => rows(e, spec, owner, season),
            GameLog::QbAdvanced(e) => rows(e, spec, owner, season),
            GameLog::RbAdvanced(e) => rows(e, spec, owner, season),
            GameLog::WrAdvanced(e) => rows(e, spec, owner, season),
        }
    }

    /// One text line per kept row.
    pub fn summary_lines(&self) -> Vec<String> {
        fn lines<S: StatLine>(e: &Extraction<S>) -> Vec<String> {
            e.rows
                .iter()
                .map(|row| match &row.stats {
                    Some(stats) => format!("{} | {}", row.game.summary(), stats.summary()),
                    None => format!("{} | inactive", row.game.summary()),
                })
                .collect()
        }

        match self {
            GameLog::Qb(e) => lines(e),
            GameLog::Skill(e) => lines(e),
            GameLog::QbAdvanced(e) => lines(e),
            GameLog::RbAdvanced(e) => lines(e),
            GameLog::WrAdvanced(e) => lines(e),
        }
    }
}
