//! Application configuration baked in at build time.
//!
//! The app runs in the browser, so there is no process environment to read at
//! runtime. Values are captured from the build environment with `option_env!`:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `DONATE_API_BASE_URL` | `http://localhost:8000` | Origin of the external REST backend. |
//! | `GOOGLE_CLIENT_ID` | empty | OAuth client id used for the identity-provider redirect. |
//! | `AUTH_REDIRECT_URI` | `http://localhost:8080/auth/callback` | Where the identity provider sends the user back. |
//! | `DONATE_ENV` | `development` | `production` turns on `Secure` session cookies. |

use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/auth/callback";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub google_client_id: String,
    pub auth_redirect_uri: Url,
    pub production: bool,
}

impl AppConfig {
    /// Configuration captured from the build environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| {
            let value = match key {
                "DONATE_API_BASE_URL" => option_env!("DONATE_API_BASE_URL"),
                "GOOGLE_CLIENT_ID" => option_env!("GOOGLE_CLIENT_ID"),
                "AUTH_REDIRECT_URI" => option_env!("AUTH_REDIRECT_URI"),
                "DONATE_ENV" => option_env!("DONATE_ENV"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let base = lookup("DONATE_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url =
            Url::parse(base.trim()).map_err(|e| format!("Invalid DONATE_API_BASE_URL: {e}"))?;

        let redirect = lookup("AUTH_REDIRECT_URI")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());
        let auth_redirect_uri =
            Url::parse(redirect.trim()).map_err(|e| format!("Invalid AUTH_REDIRECT_URI: {e}"))?;

        let production = lookup("DONATE_ENV")
            .map(|v| v.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Ok(Self {
            api_base_url,
            google_client_id: lookup("GOOGLE_CLIENT_ID").unwrap_or_default(),
            auth_redirect_uri,
            production,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None).expect("default URLs are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.auth_redirect_uri.path(), "/auth/callback");
        assert!(config.google_client_id.is_empty());
        assert!(!config.production);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DONATE_API_BASE_URL", "https://api.blueroot.org"),
            ("GOOGLE_CLIENT_ID", "abc.apps.googleusercontent.com"),
            ("DONATE_ENV", "Production"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("api.blueroot.org"));
        assert_eq!(config.google_client_id, "abc.apps.googleusercontent.com");
        assert!(config.production);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = AppConfig::from_lookup(lookup(&[("DONATE_API_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(err.contains("DONATE_API_BASE_URL"));
    }
}
