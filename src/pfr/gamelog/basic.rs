//! Stat lines of the basic game log (`/gamelog/{season}/`).

use super::StatLine;
use crate::cli::types::Season;
use crate::error::Result;
use crate::pfr::cells::TableRow;
use crate::storage::{Column, Record};
use rusqlite::types::Value;
use serde::Serialize;

/// Quarterback line: passing, rushing, fumbles and snaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QbGame {
    pub started: bool,
    pub cmp: i64,
    pub att: i64,
    pub cmp_perc: f64,
    pub pass_yds: i64,
    pub pass_td: i64,
    pub int: i64,
    pub rating: f64,
    pub sacked: i64,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub fumbles: i64,
    pub snaps: i64,
    /// Percent of offensive snaps, e.g. `98.0`.
    pub snap_pct: f64,
}

impl StatLine for QbGame {
    fn parse(row: &TableRow<'_>, _season: Season) -> Result<Self> {
        let passing = row.group("pass_cmp");
        let rushing = row.group("rush_att");
        let fumbles = row.group("fumbles_lost");

        Ok(Self {
            started: row.is_marked("gs"),
            cmp: passing.int("pass_cmp")?,
            att: passing.int("pass_att")?,
            cmp_perc: passing.float("pass_cmp_perc")?,
            pass_yds: passing.int("pass_yds")?,
            pass_td: passing.int("pass_td")?,
            int: passing.int("pass_int")?,
            rating: passing.float("pass_rating")?,
            sacked: passing.int("pass_sacked")?,
            rush_att: rushing.int("rush_att")?,
            rush_yds: rushing.int("rush_yds")?,
            rush_td: rushing.int("rush_td")?,
            fumbles: fumbles.int("fumbles_lost")?,
            snaps: row.int("offense")?,
            snap_pct: row.float("off_pct")?,
        })
    }

    fn summary(&self) -> String {
        format!(
            "{}/{} {} yds {} TD {} INT, {} rush {} yds {} TD",
            self.cmp,
            self.att,
            self.pass_yds,
            self.pass_td,
            self.int,
            self.rush_att,
            self.rush_yds,
            self.rush_td
        )
    }
}

impl Record for QbGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("started"),
            Column::int("cmp"),
            Column::int("att"),
            Column::real("cmp_perc"),
            Column::int("pass_yds"),
            Column::int("pass_td"),
            Column::int("int"),
            Column::real("rating"),
            Column::int("sacked"),
            Column::int("rush_att"),
            Column::int("rush_yds"),
            Column::int("rush_td"),
            Column::int("fumbles"),
            Column::int("snaps"),
            Column::real("snap_pct"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.started as i64),
            Value::Integer(self.cmp),
            Value::Integer(self.att),
            Value::Real(self.cmp_perc),
            Value::Integer(self.pass_yds),
            Value::Integer(self.pass_td),
            Value::Integer(self.int),
            Value::Real(self.rating),
            Value::Integer(self.sacked),
            Value::Integer(self.rush_att),
            Value::Integer(self.rush_yds),
            Value::Integer(self.rush_td),
            Value::Integer(self.fumbles),
            Value::Integer(self.snaps),
            Value::Real(self.snap_pct),
        ]
    }
}

/// Running back, receiver and tight end line: rushing, receiving, fumbles
/// and snaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGame {
    pub started: bool,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_yds_per_att: f64,
    pub rush_td: i64,
    pub tgt: i64,
    pub rec: i64,
    pub rec_yds: i64,
    pub rec_td: i64,
    pub yds_per_rec: f64,
    pub catch_pct: f64,
    pub yds_per_tgt: f64,
    pub fumbles: i64,
    pub snaps: i64,
    pub snap_pct: f64,
}

impl StatLine for SkillGame {
    fn parse(row: &TableRow<'_>, _season: Season) -> Result<Self> {
        let rushing = row.group("rush_att");
        let receiving = row.group("targets");
        let fumbles = row.group("fumbles_lost");

        Ok(Self {
            started: row.is_marked("gs"),
            rush_att: rushing.int("rush_att")?,
            rush_yds: rushing.int("rush_yds")?,
            rush_yds_per_att: rushing.float("rush_yds_per_att")?,
            rush_td: rushing.int("rush_td")?,
            tgt: receiving.int("targets")?,
            rec: receiving.int("rec")?,
            rec_yds: receiving.int("rec_yds")?,
            rec_td: receiving.int("rec_td")?,
            yds_per_rec: receiving.float("rec_yds_per_rec")?,
            catch_pct: receiving.float("catch_pct")?,
            yds_per_tgt: receiving.float("rec_yds_per_tgt")?,
            fumbles: fumbles.int("fumbles_lost")?,
            snaps: row.int("offense")?,
            snap_pct: row.float("off_pct")?,
        })
    }

    fn summary(&self) -> String {
        format!(
            "{} rush {} yds {} TD, {}/{} rec {} yds {} TD",
            self.rush_att,
            self.rush_yds,
            self.rush_td,
            self.rec,
            self.tgt,
            self.rec_yds,
            self.rec_td
        )
    }
}

impl Record for SkillGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("started"),
            Column::int("rush_att"),
            Column::int("rush_yds"),
            Column::real("rush_yds_per_att"),
            Column::int("rush_td"),
            Column::int("tgt"),
            Column::int("rec"),
            Column::int("rec_yds"),
            Column::int("rec_td"),
            Column::real("yds_per_rec"),
            Column::real("catch_pct"),
            Column::real("yds_per_tgt"),
            Column::int("fumbles"),
            Column::int("snaps"),
            Column::real("snap_pct"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.started as i64),
            Value::Integer(self.rush_att),
            Value::Integer(self.rush_yds),
            Value::Real(self.rush_yds_per_att),
            Value::Integer(self.rush_td),
            Value::Integer(self.tgt),
            Value::Integer(self.rec),
            Value::Integer(self.rec_yds),
            Value::Integer(self.rec_td),
            Value::Real(self.yds_per_rec),
            Value::Real(self.catch_pct),
            Value::Real(self.yds_per_tgt),
            Value::Integer(self.fumbles),
            Value::Integer(self.snaps),
            Value::Real(self.snap_pct),
        ]
    }
}
