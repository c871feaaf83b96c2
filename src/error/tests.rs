//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod pfr_error_tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        // A request that fails to build yields a reqwest::Error without touching the network
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let pfr_error = PfrError::from(reqwest_error);

        match pfr_error {
            PfrError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let pfr_error = PfrError::from(json_error);

        match pfr_error {
            PfrError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let pfr_error = PfrError::from(io_error);

        match pfr_error {
            PfrError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let pfr_error = PfrError::from(header_error);

        match pfr_error {
            PfrError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let pfr_error = PfrError::from(parse_error);

        match pfr_error {
            PfrError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_is_transparent() {
        let anyhow_error = anyhow::anyhow!("failed to open database");
        let pfr_error = PfrError::from(anyhow_error);

        match &pfr_error {
            PfrError::Storage(_) => (),
            _ => panic!("Expected Storage error variant"),
        }
        assert_eq!(pfr_error.to_string(), "failed to open database");
    }

    #[test]
    fn test_selector_error_conversion() {
        let selector_error = scraper::Selector::parse("td[").unwrap_err();
        let pfr_error = PfrError::from(selector_error);

        match pfr_error {
            PfrError::Selector(_) => (),
            _ => panic!("Expected Selector error variant"),
        }
    }

    #[test]
    fn test_player_not_found_error() {
        let error = PfrError::PlayerNotFound {
            name: "John Doe".to_string(),
            position: "QB".to_string(),
            season: 2021,
        };

        assert_eq!(
            error.to_string(),
            "Cannot find a QB named John Doe from 2021"
        );
    }

    #[test]
    fn test_invalid_position_error() {
        let error = PfrError::InvalidPosition {
            position: "K".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid position"));
        assert!(error_string.contains("K"));
    }

    #[test]
    fn test_malformed_cell_error() {
        let error = PfrError::malformed("week_num", "abc");
        let error_string = error.to_string();
        assert!(error_string.contains("week_num"));
        assert!(error_string.contains("\"abc\""));
    }

    #[test]
    fn test_missing_database_path_error() {
        let error = PfrError::MissingDatabasePath {
            env_var: "PFR_FFL_DB".to_string(),
        };
        assert!(error.to_string().contains("PFR_FFL_DB"));
    }

    #[test]
    fn test_only_http_errors_are_retryable() {
        let http = PfrError::from(
            reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err(),
        );
        assert!(http.is_retryable());

        let not_found = PfrError::PlayerNotFound {
            name: "John Doe".to_string(),
            position: "RB".to_string(),
            season: 2020,
        };
        assert!(!not_found.is_retryable());

        let missing = PfrError::MissingCell {
            stat: "rush_att".to_string(),
        };
        assert!(!missing.is_retryable());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let pfr_error = PfrError::from(io_error);

        let error_trait: &dyn std::error::Error = &pfr_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(PfrError::ElementNotFound {
                context: "game log table body",
            })
        }

        match test_function().unwrap_err() {
            PfrError::ElementNotFound { context } => {
                assert_eq!(context, "game log table body")
            }
            _ => panic!("Expected ElementNotFound error"),
        }
    }
}
