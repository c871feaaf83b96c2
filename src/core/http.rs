//! HTTP utilities for Pro Football Reference requests

use crate::{Result, USER_AGENT_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// User-Agent sent when `PFR_FFL_USER_AGENT` is not set.
pub const DEFAULT_USER_AGENT: &str = concat!("pfr-ffl/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every page request.
///
/// The site serves HTML only, so `Accept` is fixed.
pub fn header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}

/// [`header_map`] with the User-Agent from `PFR_FFL_USER_AGENT`, if set.
pub fn default_header_map() -> Result<HeaderMap> {
    let agent = std::env::var(USER_AGENT_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
    header_map(&agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map() {
        let headers = header_map(DEFAULT_USER_AGENT).unwrap();
        assert_eq!(
            headers.get(ACCEPT).unwrap(),
            "text/html,application/xhtml+xml"
        );
        assert_eq!(headers.get(USER_AGENT).unwrap(), DEFAULT_USER_AGENT);

        assert!(header_map("bad\nagent").is_err());
    }

    #[test]
    fn test_default_header_map_env_override() {
        std::env::set_var(USER_AGENT_ENV_VAR, "research-bot/1.0");
        let headers = default_header_map().unwrap();
        assert_eq!(headers.get(USER_AGENT).unwrap(), "research-bot/1.0");
        std::env::remove_var(USER_AGENT_ENV_VAR);
    }
}
