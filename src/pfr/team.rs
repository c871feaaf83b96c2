//! Team schedule results (`/teams/{team}/{season}.htm`, `table#games`).

use crate::cli::types::{Season, TeamCode, Week};
use crate::error::Result;
use crate::pfr::cells::TableRow;
use crate::pfr::gamelog::body_rows;
use crate::pfr::http::PfrClient;
use crate::storage::{Column, Record, TableSpec};
use log::debug;
use rusqlite::types::Value;
use serde::Serialize;

pub const TEAM_TABLE: &str = "team_gamelog";

const BYE_WEEK: &str = "Bye Week";
const PLAYOFFS: &str = "Playoffs";

/// One regular-season game from a team's schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGame {
    pub week: Week,
    pub day: String,
    pub date: String,
    pub time: String,
    pub boxscore: String,
    pub outcome: String,
    pub overtime: bool,
    pub record: String,
    pub game_location: String,
    pub opp: String,
    pub pts_off: i64,
    pub pts_def: i64,
    pub first_down_off: i64,
    pub yards_off: i64,
    pub pass_yds_off: i64,
    pub rush_yds_off: i64,
    pub to_off: i64,
    pub first_down_def: i64,
    pub yards_def: i64,
    pub pass_yds_def: i64,
    pub rush_yds_def: i64,
    pub to_def: i64,
    pub exp_pts_off: f64,
    pub exp_pts_def: f64,
    pub exp_pts_st: f64,
}

impl TeamGame {
    fn parse(row: &TableRow<'_>) -> Result<Self> {
        let text = |stat: &str| row.text(stat).unwrap_or_default();
        Ok(Self {
            week: row.week("week_num")?,
            day: text("game_day_of_week"),
            date: text("game_date"),
            time: text("gametime"),
            boxscore: text("boxscore_word"),
            outcome: text("game_outcome"),
            overtime: row.is_marked("overtime"),
            record: text("team_record"),
            game_location: text("game_location"),
            opp: row.required_text("opp")?,
            pts_off: row.int("pts_off")?,
            pts_def: row.int("pts_def")?,
            first_down_off: row.int("first_down_off")?,
            yards_off: row.int("yards_off")?,
            pass_yds_off: row.int("pass_yds_off")?,
            rush_yds_off: row.int("rush_yds_off")?,
            to_off: row.int("to_off")?,
            first_down_def: row.int("first_down_def")?,
            yards_def: row.int("yards_def")?,
            pass_yds_def: row.int("pass_yds_def")?,
            rush_yds_def: row.int("rush_yds_def")?,
            to_def: row.int("to_def")?,
            exp_pts_off: row.float("exp_pts_off")?,
            exp_pts_def: row.float("exp_pts_def")?,
            exp_pts_st: row.float("exp_pts_st")?,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Wk {:<2} {} {}{} {} {}-{}{} ({}) | {} yds off, {} yds def, TO {}/{}",
            self.week,
            self.date,
            self.game_location,
            self.opp,
            self.outcome,
            self.pts_off,
            self.pts_def,
            if self.overtime { " OT" } else { "" },
            self.record,
            self.yards_off,
            self.yards_def,
            self.to_off,
            self.to_def
        )
    }
}

impl Record for TeamGame {
    fn columns() -> Vec<Column> {
        vec![
            Column::int("week"),
            Column::text("day"),
            Column::text("date"),
            Column::text("time"),
            Column::text("boxscore"),
            Column::text("outcome"),
            Column::int("overtime"),
            Column::text("record"),
            Column::text("game_location"),
            Column::text("opp"),
            Column::int("pts_off"),
            Column::int("pts_def"),
            Column::int("first_down_off"),
            Column::int("yards_off"),
            Column::int("pass_yds_off"),
            Column::int("rush_yds_off"),
            Column::int("to_off"),
            Column::int("first_down_def"),
            Column::int("yards_def"),
            Column::int("pass_yds_def"),
            Column::int("rush_yds_def"),
            Column::int("to_def"),
            Column::real("exp_pts_off"),
            Column::real("exp_pts_def"),
            Column::real("exp_pts_st"),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.week.as_u16() as i64),
            Value::Text(self.day.clone()),
            Value::Text(self.date.clone()),
            Value::Text(self.time.clone()),
            Value::Text(self.boxscore.clone()),
            Value::Text(self.outcome.clone()),
            Value::Integer(self.overtime as i64),
            Value::Text(self.record.clone()),
            Value::Text(self.game_location.clone()),
            Value::Text(self.opp.clone()),
            Value::Integer(self.pts_off),
            Value::Integer(self.pts_def),
            Value::Integer(self.first_down_off),
            Value::Integer(self.yards_off),
            Value::Integer(self.pass_yds_off),
            Value::Integer(self.rush_yds_off),
            Value::Integer(self.to_off),
            Value::Integer(self.first_down_def),
            Value::Integer(self.yards_def),
            Value::Integer(self.pass_yds_def),
            Value::Integer(self.rush_yds_def),
            Value::Integer(self.to_def),
            Value::Real(self.exp_pts_off),
            Value::Real(self.exp_pts_def),
            Value::Real(self.exp_pts_st),
        ]
    }
}

pub fn table_spec() -> TableSpec {
    TableSpec::of::<TeamGame>(TEAM_TABLE, "team")
}

/// Regular-season games in schedule order.
///
/// Bye weeks and header rows are skipped; the playoffs divider ends the scan.
pub fn parse_team_games(document: &scraper::Html) -> Result<Vec<TeamGame>> {
    let mut games = Vec::new();

    for tr in body_rows(document, "table#games > tbody")? {
        let row = TableRow::new(tr);
        if row.has_cell_text(PLAYOFFS) {
            break;
        }
        if row.is_separator() || row.has_cell_text(BYE_WEEK) {
            continue;
        }
        games.push(TeamGame::parse(&row)?);
    }

    Ok(games)
}

pub async fn fetch_team_games(
    client: &PfrClient,
    team: TeamCode,
    season: Season,
) -> Result<Vec<TeamGame>> {
    let document = client.fetch_team_season(team, season).await?;
    let games = parse_team_games(&document)?;
    debug!("{team} {season}: {} regular-season games", games.len());
    Ok(games)
}
