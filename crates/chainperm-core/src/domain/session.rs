use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Deserializer};

/// User-supplied identity for the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub client_id: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            client_id: client_id.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("client_id", &self.client_id)
            .finish()
    }
}

/// Successful token endpoint response.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub expires_in: String,
    pub scope: String,
    pub token_type: String,
}

impl Debug for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_token_with_string_expiry() {
        let token: SessionToken = serde_json::from_str(
            r#"{"access_token":"at","refresh_token":"rt","expires_in":"600","scope":"trapi","token_type":"Bearer"}"#,
        )
        .expect("token should decode");

        assert_eq!(token.access_token, "at");
        assert_eq!(token.expires_in, "600");
        assert_eq!(token.token_type, "Bearer");
    }

    #[test]
    fn decodes_token_with_numeric_expiry() {
        let token: SessionToken = serde_json::from_str(
            r#"{"access_token":"at","refresh_token":"rt","expires_in":300,"scope":"trapi","token_type":"Bearer"}"#,
        )
        .expect("token should decode");

        assert_eq!(token.expires_in, "300");
    }

    #[test]
    fn token_requires_all_fields() {
        let result: Result<SessionToken, _> =
            serde_json::from_str(r#"{"access_token":"at","expires_in":"600"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let token = SessionToken {
            access_token: String::from("secret-access"),
            refresh_token: String::from("secret-refresh"),
            expires_in: String::from("600"),
            scope: String::from("trapi"),
            token_type: String::from("Bearer"),
        };
        let credentials = Credentials::new("user", "hunter2", "app");

        let rendered = format!("{token:?} {credentials:?}");
        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));
        assert!(!rendered.contains("hunter2"));
    }
}
