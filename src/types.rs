use serde::Deserialize;
use std::fmt;

/// Account credentials for the auth endpoint.
///
/// The password must never reach the terminal or the log output, so Debug is
/// implemented by hand and redacts it.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fully resolved run configuration: credentials plus server and host codes.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub server: String,
    pub host: String,
}

/// Response body of the hash auth endpoint.
#[derive(Debug, Deserialize)]
pub struct HashResponse {
    #[serde(default)]
    pub hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            username: "sampleuser@email.com".to_string(),
            password: "psswrd1234!".to_string(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("sampleuser@email.com"));
        assert!(!rendered.contains("psswrd1234!"));
        assert!(rendered.contains("<redacted>"));
    }
}
