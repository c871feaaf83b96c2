//! Unit tests for the page client

use super::*;
use crate::error::PfrError;
use scraper::Selector;
use wiremock::{
    matchers::{header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn profile() -> ProfileUrl {
    ProfileUrl::parse("/players/B/BradTo00").unwrap()
}

#[test]
fn test_url_builders() {
    let client = PfrClient::with_base_url("https://example.test/").unwrap();
    assert_eq!(client.base_url(), "https://example.test");
    assert_eq!(client.roster_index_url('B'), "https://example.test/players/B/");
    assert_eq!(
        client.gamelog_url(&profile(), Season::new(2021), StatVariant::Basic),
        "https://example.test/players/B/BradTo00/gamelog/2021/"
    );
    assert_eq!(
        client.gamelog_url(&profile(), Season::new(2021), StatVariant::Advanced),
        "https://example.test/players/B/BradTo00/gamelog/2021/advanced"
    );
    let team: TeamCode = "KAN".parse().unwrap();
    assert_eq!(
        client.team_season_url(team, Season::new(2022)),
        "https://example.test/teams/kan/2022.htm"
    );
}

#[tokio::test]
async fn test_fetch_game_log_parses_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/B/BradTo00/gamelog/2021/advanced"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>Tom Brady 2021</h1></body></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PfrClient::with_base_url(&mock_server.uri()).unwrap();
    let doc = client
        .fetch_game_log(&profile(), Season::new(2021), StatVariant::Advanced)
        .await
        .unwrap();

    let h1 = Selector::parse("h1").unwrap();
    let heading: String = doc.select(&h1).next().unwrap().text().collect();
    assert_eq!(heading, "Tom Brady 2021");
}

#[tokio::test]
async fn test_error_status_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/Z/"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = PfrClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_roster_index('Z').await.unwrap_err();
    assert!(matches!(err, PfrError::Http(_)));
    assert!(err.is_retryable());
}
