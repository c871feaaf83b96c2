//! End-to-end loader tests against a mocked site and an on-disk database

use std::time::Duration;

use pfr_ffl::{
    commands::{
        load::{load_players, LoadParams},
        roster::{add_to_roster, RosterAddParams},
        team_log::store_team_games,
    },
    pfr::{team::fetch_team_games, PfrClient},
    storage::PlayerDatabase,
    FailurePolicy, InactivePolicy, Position, Season, StatVariant, TeamCode,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn wr_advanced_params(include_loaded: bool) -> LoadParams {
    LoadParams {
        position: Position::WR,
        season: Season::new(2021),
        variant: StatVariant::Advanced,
        delay: Duration::ZERO,
        on_error: FailurePolicy::Abort,
        retries: 0,
        include_loaded,
        inactive: InactivePolicy::Drop,
        limit: None,
    }
}

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/D/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("players_index_d.html")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players/D/DiggSt00/gamelog/2021/advanced"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(fixture("diggs_advanced_2021.html")),
        )
        .expect(2)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_load_learns_profile_and_appends_only_new_games() {
    let server = mock_site().await;
    let client = PfrClient::with_base_url(&server.uri()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("gamelogs.db");
    let spec = pfr_ffl::pfr::gamelog::table_spec(Position::WR, StatVariant::Advanced);

    {
        let mut db = PlayerDatabase::open(&db_path).unwrap();
        add_to_roster(
            &mut db,
            &RosterAddParams {
                name: "Stefon Diggs".to_string(),
                position: Position::WR,
                seasons: vec![Season::new(2021)],
                profile_url: None,
                ignore_upload: false,
            },
        )
        .unwrap();

        let summary = load_players(&client, &mut db, &wr_advanced_params(false))
            .await
            .unwrap();
        assert_eq!((summary.loaded, summary.rows_appended), (1, 3));

        let player = db
            .get_player("Stefon Diggs", Position::WR)
            .unwrap()
            .unwrap();
        assert_eq!(
            player.profile_url.map(|url| url.as_str().to_string()),
            Some("/players/D/DiggSt00".to_string())
        );
    }

    // Reopen from disk: the stored URL skips the roster lookup and the
    // anti-join leaves nothing to append.
    let mut db = PlayerDatabase::open(&db_path).unwrap();
    let summary = load_players(&client, &mut db, &wr_advanced_params(true))
        .await
        .unwrap();
    assert_eq!((summary.processed, summary.loaded, summary.rows_appended), (1, 1, 0));

    let stored = db
        .existing_rows(&spec, "Stefon Diggs", Season::new(2021))
        .unwrap();
    assert_eq!(stored.len(), 3);

    let statuses = db.list_roster(Some(Position::WR), Some(Season::new(2021))).unwrap();
    let advanced = statuses
        .iter()
        .find(|s| s.variant == StatVariant::Advanced)
        .unwrap();
    assert!(advanced.is_loaded);
    assert!(advanced.loaded_at.is_some());
    let basic = statuses
        .iter()
        .find(|s| s.variant == StatVariant::Basic)
        .unwrap();
    assert!(!basic.is_loaded);
}

#[tokio::test]
async fn test_team_games_are_stored_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/kan/2022.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("team_kan_2022.html")))
        .mount(&server)
        .await;

    let client = PfrClient::with_base_url(&server.uri()).unwrap();
    let team: TeamCode = "kan".parse().unwrap();
    let season = Season::new(2022);

    let games = fetch_team_games(&client, team, season).await.unwrap();
    assert_eq!(games.len(), 3);

    let mut db = PlayerDatabase::new_in_memory().unwrap();
    assert_eq!(store_team_games(&mut db, team, season, &games).unwrap(), 3);
    assert_eq!(store_team_games(&mut db, team, season, &games).unwrap(), 0);

    let stored = db
        .existing_rows(&pfr_ffl::pfr::team::table_spec(), "KAN", season)
        .unwrap();
    assert_eq!(stored.len(), 3);
}
