use reqwest::Client;
use thiserror::Error;

use crate::types::{Credentials, HashResponse};

const AUTH_URL: &str = "http://auth.smoothstreams.tv/hash_api.php";

/// Ways an authentication attempt can fail. Every variant is fatal; there is
/// no retry and no re-prompt.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(
        "unable to retrieve data from the server, check your internet connection and try again: {0}"
    )]
    Network(#[from] reqwest::Error),
    #[error("the authentication server returned an unreadable response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("there was an error with your credentials, double-check your username and password")]
    Rejected,
}

pub struct AuthClient {
    client: Client,
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Request a signed auth token for the given account and host code.
    pub async fn fetch_auth_token(
        &self,
        credentials: &Credentials,
        host: &str,
    ) -> Result<String, AuthError> {
        log::debug!(
            "requesting auth hash for user {} on host {}",
            credentials.username,
            host
        );
        let response = self
            .client
            .get(AUTH_URL)
            .query(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("site", host),
            ])
            .send()
            .await?;
        let body = response.text().await?;
        parse_auth_response(&body)
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the token from an auth response body.
///
/// A body that is not JSON counts as a connectivity problem; well-formed JSON
/// without a non-empty `hash` field means the credentials were rejected.
fn parse_auth_response(body: &str) -> Result<String, AuthError> {
    let parsed: HashResponse = serde_json::from_str(body)?;
    match parsed.hash {
        Some(hash) if !hash.is_empty() => Ok(hash),
        _ => Err(AuthError::Rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_returns_hash_verbatim() {
        let body = r#"{"hash": "abc123XYZ=="}"#;
        assert_eq!(parse_auth_response(body).unwrap(), "abc123XYZ==");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"code": "1", "hash": "tok", "valid": 240}"#;
        assert_eq!(parse_auth_response(body).unwrap(), "tok");
    }

    #[test]
    fn test_missing_hash_is_rejection() {
        let body = r#"{"error": "Invalid Username or Password"}"#;
        assert!(matches!(parse_auth_response(body), Err(AuthError::Rejected)));
    }

    #[test]
    fn test_empty_hash_is_rejection() {
        let body = r#"{"hash": ""}"#;
        assert!(matches!(parse_auth_response(body), Err(AuthError::Rejected)));
    }

    #[test]
    fn test_non_json_body_is_invalid_response() {
        let body = "<html>502 Bad Gateway</html>";
        assert!(matches!(
            parse_auth_response(body),
            Err(AuthError::InvalidResponse(_))
        ));
    }
}
