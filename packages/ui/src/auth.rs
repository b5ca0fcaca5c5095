//! Authentication context and hooks for the UI.
//!
//! The session lives in cookies, so the provider reads it synchronously on
//! mount and there is no loading phase. Sign-in is a round trip through
//! Google: [`start_sign_in`] stores a nonce and returns the redirect URL,
//! [`finish_sign_in`] runs on the callback page and trades the identity
//! token for a backend session.

use api::auth::{authorize_url, decode_id_token, generate_nonce, parse_callback_fragment};
use api::{ApiClient, AppConfig, UserInfo};
use dioxus::prelude::*;
use store::{CookieJar, Session};

use crate::session::{load_config, make_session};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub authenticated: bool,
}

impl AuthState {
    pub fn from_session<J: CookieJar>(session: &Session<J>) -> Self {
        Self {
            user: session.user(),
            authenticated: session.is_authenticated(),
        }
    }

    /// Fresh state when the cookies no longer match `self`, e.g. after the
    /// `token` cookie expired under a long-lived tab.
    pub fn refreshed<J: CookieJar>(&self, session: &Session<J>) -> Option<Self> {
        let current = Self::from_session(session);
        (current != *self).then_some(current)
    }

    /// Owner email used to scope admin queries.
    pub fn email(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| u.email.clone())
            .filter(|e| !e.trim().is_empty())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Build configuration provided by [`AuthProvider`].
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    let auth_state = use_signal(|| AuthState::from_session(&make_session(&config)));
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Start a Google sign-in: remember a fresh nonce and return the URL to
/// send the browser to.
pub fn start_sign_in<J: CookieJar>(config: &AppConfig, session: &Session<J>) -> Result<String, String> {
    let nonce = generate_nonce();
    let url = authorize_url(config, &nonce)?;
    session.remember_nonce(&nonce);
    tracing::info!("Redirecting to identity provider");
    Ok(url.to_string())
}

/// Check the token's nonce against the one stored when the redirect began.
/// A token without a nonce is accepted; the backend verifies it anyway.
pub fn verify_nonce(expected: Option<&str>, received: Option<&str>) -> Result<(), String> {
    match (expected, received) {
        (_, None) => Ok(()),
        (Some(expected), Some(received)) if expected == received => Ok(()),
        (None, Some(_)) => Err("Sign-in expired. Please try again.".to_string()),
        (Some(_), Some(_)) => Err("Sign-in could not be verified. Please try again.".to_string()),
    }
}

/// Complete sign-in from the callback URL fragment and store the session.
pub async fn finish_sign_in<J: CookieJar>(
    client: &ApiClient,
    session: &Session<J>,
    fragment: &str,
) -> Result<UserInfo, String> {
    let credential = parse_callback_fragment(fragment)?;
    let claims = decode_id_token(&credential)?;
    verify_nonce(session.take_nonce().as_deref(), claims.nonce.as_deref())?;

    let response = client
        .auth_login(&claims.into_login_request(credential))
        .await
        .map_err(|e| e.message)?;
    session
        .login(&response.token, &response.user)
        .map_err(|e| format!("Could not store session: {e}"))?;
    Ok(response.user)
}

/// Send the browser somewhere outside the router.
pub fn redirect_browser(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to redirect: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Open {} to continue", url);
    }
}

/// Button that sends the user to Google.
#[component]
pub fn GoogleSignInButton(
    #[props(default = "Continue with Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] disabled: bool,
    /// Called instead of redirecting when the sign-in cannot start.
    on_error: EventHandler<String>,
) -> Element {
    let config = use_config();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        loading.set(true);
        match start_sign_in(&config, &make_session(&config)) {
            Ok(url) => redirect_browser(&url),
            Err(e) => {
                tracing::error!("Failed to start sign-in: {}", e);
                loading.set(false);
                on_error.call(e);
            }
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "w-full flex items-center justify-center gap-2 rounded-md border border-neutral-300 bg-white px-4 py-2 text-sm font-medium text-neutral-800 hover:bg-neutral-50 disabled:opacity-50 {class}",
            disabled: disabled || loading(),
            onclick: onclick,
            crate::Icon { icon: crate::icons::brands::FaGoogle, width: 14, height: 14 }
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let config = use_config();
    let nav = use_navigator();

    let onclick = move |_| {
        make_session(&config).logout();
        auth_state.set(AuthState::default());
        nav.replace("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{CookiePolicy, MemoryJar};

    fn session() -> Session<MemoryJar> {
        Session::new(MemoryJar::new(), CookiePolicy::development())
    }

    #[test]
    fn test_auth_state_from_session() {
        let s = session();
        assert_eq!(AuthState::from_session(&s), AuthState::default());

        let user = UserInfo {
            email: "olive@example.com".into(),
            name: Some("Olive".into()),
            picture: None,
        };
        s.login("tok", &user).unwrap();
        let state = AuthState::from_session(&s);
        assert!(state.authenticated);
        assert_eq!(state.email().as_deref(), Some("olive@example.com"));
    }

    #[test]
    fn test_refreshed_notices_expired_token() {
        let s = session();
        let user = UserInfo {
            email: "olive@example.com".into(),
            name: None,
            picture: None,
        };
        s.login("tok", &user).unwrap();
        let cached = AuthState::from_session(&s);
        assert_eq!(cached.refreshed(&s), None);

        s.jar().insert_raw("token", "");
        let fresh = cached.refreshed(&s).unwrap();
        assert!(!fresh.authenticated);

        s.logout();
        assert_eq!(AuthState::default().refreshed(&s), None);
    }

    #[test]
    fn test_verify_nonce() {
        assert!(verify_nonce(Some("abc"), Some("abc")).is_ok());
        assert!(verify_nonce(Some("abc"), None).is_ok());
        assert!(verify_nonce(None, None).is_ok());
        assert!(verify_nonce(Some("abc"), Some("xyz")).is_err());
        assert!(verify_nonce(None, Some("xyz")).is_err());
    }

    #[test]
    fn test_start_sign_in_remembers_nonce() {
        let config = AppConfig::from_lookup(|key| match key {
            "GOOGLE_CLIENT_ID" => Some("client-123".to_string()),
            _ => None,
        })
        .unwrap();
        let s = session();
        let url = start_sign_in(&config, &s).unwrap();
        let nonce = s.take_nonce().unwrap();
        assert!(url.contains(&format!("nonce={nonce}")));
        assert!(url.contains("client_id=client-123"));
    }

    #[test]
    fn test_start_sign_in_without_client_id() {
        let s = session();
        let err = start_sign_in(&AppConfig::default(), &s).unwrap_err();
        assert_eq!(err, "GOOGLE_CLIENT_ID not set");
        assert_eq!(s.take_nonce(), None);
    }
}
