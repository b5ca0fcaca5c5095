//! # Signed-in user
//!
//! [`UserInfo`] is the profile the app keeps about the signed-in admin. It
//! comes back from `POST /auth_login` and is stored JSON-encoded in the `user`
//! session cookie, so it must round-trip through serde without loss.
//!
//! [`AuthLoginRequest`] carries the identity-provider credential and the
//! claims decoded from it; [`AuthLoginResponse`] is the backend's answer with
//! the session token used as the bearer for every later call.

use serde::{Deserialize, Serialize};

/// User information kept in the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Body of `POST /auth_login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthLoginRequest {
    /// Raw identity-provider credential (a JWT).
    pub token: String,
    pub email: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
}

/// `POST /auth_login` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthLoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let mut user = UserInfo {
            email: "sam@example.com".to_string(),
            name: None,
            picture: None,
        };
        assert_eq!(user.display_name(), "sam@example.com");
        user.name = Some(" ".to_string());
        assert_eq!(user.display_name(), "sam@example.com");
        user.name = Some("Sam Rivera".to_string());
        assert_eq!(user.display_name(), "Sam Rivera");
    }

    #[test]
    fn test_login_response_with_extra_fields() {
        let json = r#"{"token":"t0k","user":{"email":"sam@example.com","name":"Sam","picture":"https://x/y.png","id":3}}"#;
        let response: AuthLoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "t0k");
        assert_eq!(response.user.name.as_deref(), Some("Sam"));
    }
}
