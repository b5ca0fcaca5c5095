//! Shared session and client constructors for all platforms.
//!
//! Returns a [`store::Session`] backed by the appropriate [`store::CookieJar`]:
//! - **Web** (WASM + `web` feature): `document.cookie` via [`store::DocumentJar`]
//! - **Native**: one process-wide [`store::MemoryJar`], so every call sees
//!   the same cookies

use api::{ApiClient, AppConfig};
use store::{CookiePolicy, Session};

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
static NATIVE_JAR: once_cell::sync::Lazy<store::MemoryJar> =
    once_cell::sync::Lazy::new(store::MemoryJar::new);

/// Build configuration, falling back to the defaults when a baked-in value
/// does not parse.
pub fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid build configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

/// Create a platform-appropriate session with cookie attributes for the
/// configured environment.
pub fn make_session(config: &AppConfig) -> Session<impl store::CookieJar> {
    let policy = CookiePolicy::for_environment(config.production);
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::DocumentJar::new(), policy)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::new(NATIVE_JAR.clone(), policy)
    }
}

/// API client carrying the current session token, if any.
pub fn api_client(config: &AppConfig) -> ApiClient {
    ApiClient::from_config(config).with_token(make_session(config).token())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use api::UserInfo;

    #[test]
    fn test_native_sessions_share_cookies() {
        let config = AppConfig::default();
        let user = UserInfo {
            email: "olive@example.com".into(),
            ..Default::default()
        };
        make_session(&config).login("tok-shared", &user).unwrap();
        assert_eq!(make_session(&config).token().as_deref(), Some("tok-shared"));
        assert!(api_client(&config).has_token());

        make_session(&config).logout();
        assert!(!make_session(&config).is_authenticated());
        assert!(!api_client(&config).has_token());
    }
}
