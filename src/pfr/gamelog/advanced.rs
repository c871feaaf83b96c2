//! Stat lines of the advanced game log (`/gamelog/{season}/advanced`).

use super::StatLine;
use crate::cli::types::Season;
use crate::error::Result;
use crate::pfr::cells::TableRow;
use crate::storage::{Column, Record};
use rusqlite::types::Value;
use serde::Serialize;

/// First season with snap counts on receiver game logs.
pub const SNAP_COUNTS_FIRST_SEASON: u16 = 2012;

/// NFL passer rating, rounded to one decimal.
///
/// Each of the four components is clamped to `[0, 2.375]`; no attempts
/// rate 0.0.
///
/// # Examples
///
/// ```rust
/// use pfr_ffl::pfr::gamelog::passer_rating;
///
/// assert_eq!(passer_rating(10, 10, 200, 2, 0), 158.3);
/// assert_eq!(passer_rating(0, 0, 0, 0, 0), 0.0);
/// ```
pub fn passer_rating(att: i64, cmp: i64, yds: i64, td: i64, int: i64) -> f64 {
    if att <= 0 {
        return 0.0;
    }
    let att = att as f64;
    let clamp = |v: f64| v.clamp(0.0, 2.375);

    let completion = clamp((cmp as f64 / att - 0.3) * 5.0);
    let yards = clamp((yds as f64 / att - 3.0) * 0.25);
    let touchdowns = clamp(td as f64 / att * 20.0);
    let interceptions = clamp(2.375 - int as f64 / att * 25.0);

    let rating = (completion + yards + touchdowns + interceptions) / 6.0 * 100.0;
    (rating * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QbAdvancedGame {
    pub cmp: i64,
    pub att: i64,
    pub pass_yds: i64,
    pub first_down: i64,
    pub first_down_pct: f64,
    pub pass_target_yds: f64,
    pub pass_target_yds_per_att: f64,
    pub pass_air_yds: i64,
    pub pass_air_yds_per_cmp: f64,
    pub pass_air_yds_per_att: f64,
    pub pass_yac: f64,
    pub pass_yac_per_cmp: f64,
    pub pass_drops: i64,
    pub pass_drop_pct: f64,
    pub pass_poor_throws: i64,
    pub pass_poor_throws_pct: f64,
    pub pass_sacked: i64,
    pub pass_blitzed: i64,
    pub pass_hurried: i64,
    pub pass_hits: i64,
    pub pass_pressured: i64,
    pub pass_pressured_pct: f64,
    pub rush_scrambles: i64,
    pub rush_scrambles_yds_per_att: f64,
}

impl StatLine for QbAdvancedGame {
    fn parse(row: &TableRow<'_>, _season: Season) -> Result<Self> {
        Ok(Self {
            cmp: row.int("pass_cmp")?,
            att: row.int("pass_att")?,
            pass_yds: row.int("pass_yds")?,
            first_down: row.int("first_down")?,
            first_down_pct: row.float("first_down_pct")?,
            pass_target_yds: row.float("pass_target_yds")?,
            pass_target_yds_per_att: row.float("pass_target_yds_per_att")?,
            pass_air_yds: row.int("pass_air_yds")?,
            pass_air_yds_per_cmp: row.float("pass_air_yds_per_cmp")?,
            pass_air_yds_per_att: row.float("pass_air_yds_per_att")?,
            pass_yac: row.float("pass_yac")?,
            pass_yac_per_cmp: row.float("pass_yac_per_cmp")?,
            pass_drops: row.int("pass_drops")?,
            pass_drop_pct: row.float("pass_drop_pct")?,
            pass_poor_throws: row.int("pass_poor_throws")?,
            pass_poor_throws_pct: row.float("pass_poor_throws_pct")?,
            pass_sacked: row.int("pass_sacked")?,
            pass_blitzed: row.int("pass_blitzed")?,
            pass_hurried: row.int("pass_hurried")?,
            pass_hits: row.int("pass_hits")?,
            pass_pressured: row.int("pass_pressured")?,
            pass_pressured_pct: row.float("pass_pressured_pct")?,
            rush_scrambles: row.int("rush_scrambles")?,
            rush_scrambles_yds_per_att: row.float("rush_scrambles_yds_per_att")?,
        })
    }

    fn summary(&self) -> String {
        format!(
            "{}/{} {} yds, {} air yds, {} pressured ({}%), {} scrambles",
            self.cmp,
            self.att,
            self.pass_yds,
            self.pass_air_yds,
            self.pass_pressured,
            self.pass_pressured_pct,
            self.rush_scrambles
        )
    }
}

impl Record for QbAdvancedGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("cmp"),
            Column::int("att"),
            Column::int("pass_yds"),
            Column::int("first_down"),
            Column::real("first_down_pct"),
            Column::real("pass_target_yds"),
            Column::real("pass_target_yds_per_att"),
            Column::int("pass_air_yds"),
            Column::real("pass_air_yds_per_cmp"),
            Column::real("pass_air_yds_per_att"),
            Column::real("pass_yac"),
            Column::real("pass_yac_per_cmp"),
            Column::int("pass_drops"),
            Column::real("pass_drop_pct"),
            Column::int("pass_poor_throws"),
            Column::real("pass_poor_throws_pct"),
            Column::int("pass_sacked"),
            Column::int("pass_blitzed"),
            Column::int("pass_hurried"),
            Column::int("pass_hits"),
            Column::int("pass_pressured"),
            Column::real("pass_pressured_pct"),
            Column::int("rush_scrambles"),
            Column::real("rush_scrambles_yds_per_att"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.cmp),
            Value::Integer(self.att),
            Value::Integer(self.pass_yds),
            Value::Integer(self.first_down),
            Value::Real(self.first_down_pct),
            Value::Real(self.pass_target_yds),
            Value::Real(self.pass_target_yds_per_att),
            Value::Integer(self.pass_air_yds),
            Value::Real(self.pass_air_yds_per_cmp),
            Value::Real(self.pass_air_yds_per_att),
            Value::Real(self.pass_yac),
            Value::Real(self.pass_yac_per_cmp),
            Value::Integer(self.pass_drops),
            Value::Real(self.pass_drop_pct),
            Value::Integer(self.pass_poor_throws),
            Value::Real(self.pass_poor_throws_pct),
            Value::Integer(self.pass_sacked),
            Value::Integer(self.pass_blitzed),
            Value::Integer(self.pass_hurried),
            Value::Integer(self.pass_hits),
            Value::Integer(self.pass_pressured),
            Value::Real(self.pass_pressured_pct),
            Value::Integer(self.rush_scrambles),
            Value::Real(self.rush_scrambles_yds_per_att),
        ]
    }
}

/// Running back line. Every cell is required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RbAdvancedGame {
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub tgt: i64,
    pub rec_yds: i64,
    pub rec_td: i64,
}

impl StatLine for RbAdvancedGame {
    fn parse(row: &TableRow<'_>, _season: Season) -> Result<Self> {
        Ok(Self {
            rush_att: row.required_int("rush_att")?,
            rush_yds: row.required_int("rush_yds")?,
            rush_td: row.required_int("rush_td")?,
            tgt: row.required_int("targets")?,
            rec_yds: row.required_int("rec_yds")?,
            rec_td: row.required_int("rec_td")?,
        })
    }

    fn summary(&self) -> String {
        format!(
            "{} rush {} yds {} TD, {} tgt {} yds {} TD",
            self.rush_att, self.rush_yds, self.rush_td, self.tgt, self.rec_yds, self.rec_td
        )
    }
}

impl Record for RbAdvancedGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("rush_att"),
            Column::int("rush_yds"),
            Column::int("rush_td"),
            Column::int("tgt"),
            Column::int("rec_yds"),
            Column::int("rec_td"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.rush_att),
            Value::Integer(self.rush_yds),
            Value::Integer(self.rush_td),
            Value::Integer(self.tgt),
            Value::Integer(self.rec_yds),
            Value::Integer(self.rec_td),
        ]
    }
}

/// Receiver and tight end line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrAdvancedGame {
    pub tgt: i64,
    pub rec: i64,
    pub rec_yds: i64,
    pub rec_td: i64,
    pub air_yds: i64,
    pub yac: i64,
    pub adot: f64,
    pub broken_tackles: i64,
    pub drops: i64,
    pub drop_pct: f64,
    /// Passer rating when targeted.
    pub rating: f64,
    /// Fraction of offensive snaps; `None` before snap counts were kept.
    pub snap_pct: Option<f64>,
}

impl StatLine for WrAdvancedGame {
    fn parse(row: &TableRow<'_>, season: Season) -> Result<Self> {
        let receiving = row.group("targets");

        let tgt = receiving.int("targets")?;
        let rec = receiving.int("rec")?;
        let rec_yds = receiving.int("rec_yds")?;
        let rec_td = receiving.int("rec_td")?;

        let rating = match receiving.text("rec_pass_rating") {
            Some(raw) if !raw.is_empty() => receiving.float("rec_pass_rating")?,
            _ if receiving.is_present() => {
                passer_rating(tgt, rec, rec_yds, rec_td, receiving.int("rec_int")?)
            }
            _ => 0.0,
        };

        let snap_pct = if season.as_u16() >= SNAP_COUNTS_FIRST_SEASON {
            Some(row.float("off_pct")? / 100.0)
        } else {
            None
        };

        Ok(Self {
            tgt,
            rec,
            rec_yds,
            rec_td,
            air_yds: receiving.int("rec_air_yds")?,
            yac: receiving.int("rec_yac")?,
            adot: receiving.float("rec_adot")?,
            broken_tackles: receiving.int("rec_broken_tackles")?,
            drops: receiving.int("rec_drops")?,
            drop_pct: receiving.float("rec_drop_pct")?,
            rating,
            snap_pct,
        })
    }

    fn summary(&self) -> String {
        let snaps = match self.snap_pct {
            Some(pct) => format!("{:.0}% snaps", pct * 100.0),
            None => "snaps n/a".to_string(),
        };
        format!(
            "{}/{} rec {} yds {} TD, adot {}, rating {}, {}",
            self.rec, self.tgt, self.rec_yds, self.rec_td, self.adot, self.rating, snaps
        )
    }
}

impl Record for WrAdvancedGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("tgt"),
            Column::int("rec"),
            Column::int("rec_yds"),
            Column::int("rec_td"),
            Column::int("air_yds"),
            Column::int("yac"),
            Column::real("adot"),
            Column::int("broken_tackles"),
            Column::int("drops"),
            Column::real("drop_pct"),
            Column::real("rating"),
            Column::real("snap_pct"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.tgt),
            Value::Integer(self.rec),
            Value::Integer(self.rec_yds),
            Value::Integer(self.rec_td),
            Value::Integer(self.air_yds),
            Value::Integer(self.yac),
            Value::Real(self.adot),
            Value::Integer(self.broken_tackles),
            Value::Integer(self.drops),
            Value::Real(self.drop_pct),
            Value::Real(self.rating),
            self.snap_pct.map_or(Value::Null, Value::Real),
        ]
    }
}
