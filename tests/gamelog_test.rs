//! Extraction tests against saved Pro Football Reference pages

use pfr_ffl::{
    pfr::{
        gamelog::{passer_rating, ExclusionReason, GameLog},
        locator::find_player,
        team::parse_team_games,
    },
    InactivePolicy, PfrError, Position, Season, StatVariant, Week,
};
use scraper::Html;

fn fixture(name: &str) -> Html {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let body = std::fs::read_to_string(&path).unwrap();
    Html::parse_document(&body)
}

#[test]
fn test_locate_on_roster_index() {
    let index = fixture("players_index_d.html");

    let diggs = find_player(&index, "Stefon Diggs", Position::WR, Season::new(2021)).unwrap();
    assert_eq!(diggs.profile_url.as_str(), "/players/D/DiggSt00");
    assert_eq!((diggs.first_season, diggs.last_season), (2015, 2024));

    // Case-insensitive, partial name
    let dobbins = find_player(&index, "j.k. dobbins", Position::RB, Season::new(2024)).unwrap();
    assert_eq!(dobbins.profile_url.as_str(), "/players/D/DobbJK00");

    // Fullbacks are found as running backs
    let duncan = find_player(&index, "Duncan", Position::RB, Season::new(2020)).unwrap();
    assert_eq!(duncan.profile_url.as_str(), "/players/D/DuncKy00");

    // Out of the active range
    let err = find_player(&index, "AJ Dillon", Position::RB, Season::new(2024)).unwrap_err();
    assert!(matches!(err, PfrError::PlayerNotFound { season: 2024, .. }));

    // Entries without a year range never match
    assert!(find_player(&index, "Barry Duncan", Position::TE, Season::new(2020)).is_err());
}

#[test]
fn test_wr_advanced_drops_inactive_games() {
    let doc = fixture("diggs_advanced_2021.html");
    let log = GameLog::parse(
        &doc,
        Position::WR,
        StatVariant::Advanced,
        Season::new(2021),
        InactivePolicy::Drop,
    )
    .unwrap();

    let GameLog::WrAdvanced(extraction) = &log else {
        panic!("Expected a WR advanced log, got {log:?}");
    };
    assert_eq!(extraction.rows.len(), 3);
    assert_eq!(extraction.excluded.len(), 3);
    assert_eq!(extraction.total_rows(), 6);

    let weeks: Vec<Week> = extraction.rows.iter().map(|r| r.game.week).collect();
    assert_eq!(weeks, vec![Week::new(1), Week::new(2), Week::new(4)]);

    let reasons: Vec<&ExclusionReason> = extraction.excluded.iter().map(|e| &e.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &ExclusionReason::Separator,
            &ExclusionReason::NotPlayed("Inactive".to_string()),
            &ExclusionReason::NotPlayed("COVID-19 List".to_string()),
        ]
    );
    assert_eq!(extraction.excluded[1].week.as_deref(), Some("3"));

    let week1 = extraction.rows[0].stats.as_ref().unwrap();
    assert_eq!((week1.tgt, week1.rec, week1.rec_yds), (9, 4, 69));
    assert_eq!(week1.rating, 54.2);
    assert_eq!(week1.drop_pct, 0.0);
    assert_eq!(week1.snap_pct, Some(0.94));

    // Empty rating cell is derived from the receiving line
    let week2 = extraction.rows[1].stats.as_ref().unwrap();
    assert_eq!(week2.rating, passer_rating(7, 4, 60, 0, 0));
    assert_eq!(week2.rating, 85.4);
    assert_eq!(week2.drop_pct, 14.3);
    assert_eq!(week2.snap_pct, Some(0.85));

    // No receiving cells at all
    let week4 = extraction.rows[2].stats.as_ref().unwrap();
    assert_eq!((week4.tgt, week4.rec, week4.rec_yds, week4.air_yds), (0, 0, 0, 0));
    assert_eq!(week4.rating, 0.0);
    assert_eq!(week4.snap_pct, Some(0.71));
}

#[test]
fn test_wr_advanced_flags_inactive_games() {
    let doc = fixture("diggs_advanced_2021.html");
    let log = GameLog::parse(
        &doc,
        Position::TE,
        StatVariant::Advanced,
        Season::new(2021),
        InactivePolicy::Flag,
    )
    .unwrap();

    assert_eq!(log.len(), 5);
    assert_eq!(log.excluded().len(), 1);

    let GameLog::WrAdvanced(extraction) = &log else {
        panic!("Expected a WR advanced log, got {log:?}");
    };
    let inactive: Vec<u16> = extraction
        .rows
        .iter()
        .filter(|r| r.inactive)
        .map(|r| r.game.week.as_u16())
        .collect();
    assert_eq!(inactive, vec![3, 5]);
    assert!(extraction.rows[2].stats.is_none());
    assert_eq!(extraction.rows[2].game.opp, "WAS");
}

#[test]
fn test_qb_basic_game_log() {
    let doc = fixture("brady_gamelog_2021.html");
    let log = GameLog::parse(
        &doc,
        Position::QB,
        StatVariant::Basic,
        Season::new(2021),
        InactivePolicy::Drop,
    )
    .unwrap();

    let GameLog::Qb(extraction) = &log else {
        panic!("Expected a QB log, got {log:?}");
    };
    assert_eq!(extraction.rows.len(), 4);
    assert!(extraction.excluded.is_empty());

    let week1 = &extraction.rows[0];
    assert_eq!(week1.game.team, "TAM");
    assert_eq!(week1.game.age, 44.034);
    assert_eq!((week1.game.team_pts, week1.game.opp_pts), (31, 29));
    let stats = week1.stats.as_ref().unwrap();
    assert!(stats.started);
    assert_eq!((stats.cmp, stats.att, stats.pass_yds), (32, 50, 379));
    assert_eq!(stats.cmp_perc, 64.0);
    assert_eq!(stats.rush_yds, -1);
    assert_eq!(stats.snap_pct, 100.0);

    // Empty fumbles cell reads as zero
    assert_eq!(extraction.rows[1].stats.as_ref().unwrap().fumbles, 0);

    let week3 = &extraction.rows[2];
    assert_eq!(week3.game.game_location, "@");
    assert_eq!(week3.game.result, "L");

    // Missing rushing group reads as zero
    let week4 = extraction.rows[3].stats.as_ref().unwrap();
    assert_eq!((week4.rush_att, week4.rush_yds, week4.rush_td), (0, 0, 0));
    assert_eq!(week4.snaps, 66);
}

#[test]
fn test_qb_rows_for_storage() {
    let doc = fixture("brady_gamelog_2021.html");
    let season = Season::new(2021);
    let log = GameLog::parse(&doc, Position::QB, StatVariant::Basic, season, InactivePolicy::Drop)
        .unwrap();

    let spec = pfr_ffl::pfr::gamelog::table_spec(Position::QB, StatVariant::Basic);
    let rows = log.table_rows(&spec, "Tom Brady", season);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == spec.all_columns().len()));

    let lines = log.summary_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("32/50 379 yds 4 TD 2 INT"));
}

#[test]
fn test_team_schedule() {
    let doc = fixture("team_kan_2022.html");
    let games = parse_team_games(&doc).unwrap();

    // Bye week skipped, playoff games never read
    let weeks: Vec<u16> = games.iter().map(|g| g.week.as_u16()).collect();
    assert_eq!(weeks, vec![1, 2, 10]);

    let opener = &games[0];
    assert_eq!(opener.day, "Sun");
    assert_eq!(opener.time, "4:25PM ET");
    assert_eq!(opener.game_location, "@");
    assert_eq!(opener.opp, "Arizona Cardinals");
    assert_eq!((opener.pts_off, opener.pts_def), (44, 21));
    assert_eq!(opener.to_off, 0);
    assert_eq!(opener.exp_pts_def, -2.95);
    assert!(!opener.overtime);

    assert!(games[2].overtime);
    assert_eq!(games[2].record, "7-2");
}
