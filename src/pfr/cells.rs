//! Typed access to `data-stat` cells of a stats table row.

use crate::cli::types::Week;
use crate::error::{PfrError, Result};
use scraper::ElementRef;
use std::collections::HashMap;

/// One `<tr>` of a stats table, indexed by each cell's `data-stat` key.
#[derive(Debug)]
pub struct TableRow<'a> {
    cells: HashMap<&'a str, ElementRef<'a>>,
    data_cells: Vec<ElementRef<'a>>,
}

impl<'a> TableRow<'a> {
    pub fn new(row: ElementRef<'a>) -> Self {
        let mut cells = HashMap::new();
        let mut data_cells = Vec::new();

        for cell in row.children().filter_map(ElementRef::wrap) {
            let name = cell.value().name();
            if name != "td" && name != "th" {
                continue;
            }
            if name == "td" {
                data_cells.push(cell);
            }
            if let Some(stat) = cell.value().attr("data-stat") {
                cells.entry(stat).or_insert(cell);
            }
        }

        Self { cells, data_cells }
    }

    /// Repeated header rows carry no `td` cells.
    pub fn is_separator(&self) -> bool {
        self.data_cells.is_empty()
    }

    pub fn last_cell_text(&self) -> Option<String> {
        self.data_cells.last().map(|cell| cell_text(*cell))
    }

    /// True if any cell's trimmed text equals `text`.
    pub fn has_cell_text(&self, text: &str) -> bool {
        self.data_cells
            .iter()
            .chain(self.cells.values())
            .any(|cell| cell_text(*cell) == text)
    }

    pub fn has(&self, stat: &str) -> bool {
        self.cells.contains_key(stat)
    }

    pub fn text(&self, stat: &str) -> Option<String> {
        self.cells.get(stat).map(|cell| cell_text(*cell))
    }

    /// Text of a cell that must be present; may be empty.
    pub fn required_text(&self, stat: &str) -> Result<String> {
        self.text(stat).ok_or_else(|| PfrError::MissingCell {
            stat: stat.to_string(),
        })
    }

    /// Optional integer cell: 0 when absent or empty.
    pub fn int(&self, stat: &str) -> Result<i64> {
        match self.text(stat) {
            Some(raw) => parse_int(stat, &raw),
            None => Ok(0),
        }
    }

    /// Integer cell that must be present: 0 when empty.
    pub fn required_int(&self, stat: &str) -> Result<i64> {
        parse_int(stat, &self.required_text(stat)?)
    }

    /// Optional float cell: 0.0 when absent or empty.
    pub fn float(&self, stat: &str) -> Result<f64> {
        match self.text(stat) {
            Some(raw) => parse_float(stat, &raw),
            None => Ok(0.0),
        }
    }

    pub fn required_float(&self, stat: &str) -> Result<f64> {
        parse_float(stat, &self.required_text(stat)?)
    }

    /// A cell holding a non-empty marker (e.g. `*` in the games-started column).
    pub fn is_marked(&self, stat: &str) -> bool {
        self.text(stat).is_some_and(|text| !text.is_empty())
    }

    pub fn week(&self, stat: &str) -> Result<Week> {
        let week = self.required_int(stat)?;
        u16::try_from(week)
            .map(Week::new)
            .map_err(|_| PfrError::malformed(stat, &week.to_string()))
    }

    pub fn game_result(&self, stat: &str) -> Result<GameResult> {
        GameResult::parse(stat, &self.required_text(stat)?)
    }

    /// Cells that depend on `leader`; all read 0 when the leader is absent.
    pub fn group(&self, leader: &str) -> StatGroup<'_, 'a> {
        StatGroup {
            row: self.has(leader).then_some(self),
        }
    }
}

/// A run of related cells that defaults as a unit.
#[derive(Debug, Clone, Copy)]
pub struct StatGroup<'r, 'a> {
    row: Option<&'r TableRow<'a>>,
}

impl StatGroup<'_, '_> {
    pub fn is_present(&self) -> bool {
        self.row.is_some()
    }

    pub fn int(&self, stat: &str) -> Result<i64> {
        self.row.map_or(Ok(0), |row| row.int(stat))
    }

    pub fn float(&self, stat: &str) -> Result<f64> {
        self.row.map_or(Ok(0.0), |row| row.float(stat))
    }

    pub fn text(&self, stat: &str) -> Option<String> {
        self.row.and_then(|row| row.text(stat))
    }
}

/// Parsed `"W 31-10"` result cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: String,
    pub team_pts: i64,
    pub opp_pts: i64,
}

impl GameResult {
    pub fn parse(stat: &str, raw: &str) -> Result<Self> {
        let malformed = || PfrError::malformed(stat, raw);

        let mut tokens = raw.split_whitespace();
        let outcome = tokens.next().ok_or_else(malformed)?;
        let (team, opp) = tokens
            .next()
            .and_then(|score| score.split_once('-'))
            .ok_or_else(malformed)?;

        Ok(Self {
            outcome: outcome.to_string(),
            team_pts: team.parse().map_err(|_| malformed())?,
            opp_pts: opp.parse().map_err(|_| malformed())?,
        })
    }
}

pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn numeric_text(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .replace(',', "")
}

pub fn parse_int(stat: &str, raw: &str) -> Result<i64> {
    let text = numeric_text(raw);
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| PfrError::malformed(stat, raw))
}

pub fn parse_float(stat: &str, raw: &str) -> Result<f64> {
    let text = numeric_text(raw);
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse().map_err(|_| PfrError::malformed(stat, raw))
}
