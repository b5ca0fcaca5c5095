//! # Google sign-in (OpenID Connect implicit flow)
//!
//! The app has no server of its own, so it cannot hold a client secret or run
//! the authorization-code exchange. Instead it asks Google for an ID token
//! directly and hands that credential to the donation backend, which is the
//! party that verifies it.
//!
//! ## Flow
//!
//! 1. **[`authorize_url`]** builds the redirect to Google with
//!    `response_type=id_token`, the `openid email profile` scopes, a random
//!    nonce from [`generate_nonce`] and `prompt=select_account`.
//! 2. Google sends the browser back to the configured redirect URI with the
//!    token in the fragment (`#id_token=...`). [`parse_callback_fragment`]
//!    pulls it out, or surfaces the provider's `error` parameter.
//! 3. **[`decode_id_token`]** reads the JWT claims without checking the
//!    signature. The claims only prefill the `/auth_login` request; the
//!    backend verifies the raw credential.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use url::Url;

use crate::config::AppConfig;
use crate::models::AuthLoginRequest;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

const NONCE_LEN: usize = 32;

/// Claims read from a Google ID token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub nonce: Option<String>,
}

impl IdentityClaims {
    /// Build the `/auth_login` body from these claims and the raw credential.
    pub fn into_login_request(self, credential: impl Into<String>) -> AuthLoginRequest {
        AuthLoginRequest {
            token: credential.into(),
            email: self.email,
            name: self.name,
            given_name: self.given_name,
            family_name: self.family_name,
            picture: self.picture,
        }
    }
}

/// Random alphanumeric nonce bound to one sign-in attempt.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Google authorization URL for the implicit ID-token flow.
pub fn authorize_url(config: &AppConfig, nonce: &str) -> Result<Url, String> {
    if config.google_client_id.trim().is_empty() {
        return Err("GOOGLE_CLIENT_ID not set".to_string());
    }

    let mut url = Url::parse(GOOGLE_AUTH_URL).map_err(|e| e.to_string())?;
    url.query_pairs_mut()
        .append_pair("client_id", config.google_client_id.trim())
        .append_pair("redirect_uri", config.auth_redirect_uri.as_str())
        .append_pair("response_type", "id_token")
        .append_pair("scope", "openid email profile")
        .append_pair("nonce", nonce)
        .append_pair("prompt", "select_account");
    Ok(url)
}

/// Extract the ID token from a callback URL fragment.
///
/// Accepts the fragment with or without its leading `#`. A provider `error`
/// (for example `access_denied`) is returned as the error message.
pub fn parse_callback_fragment(fragment: &str) -> Result<String, String> {
    let fragment = fragment.trim_start_matches('#');
    let mut id_token = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "id_token" if !value.is_empty() => id_token = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    match (id_token, error) {
        (Some(token), _) => Ok(token),
        (None, Some(error)) => Err(format!("Sign-in was cancelled or failed: {error}")),
        (None, None) => Err("No identity token in callback".to_string()),
    }
}

/// Decode the payload segment of a JWT. The signature is not checked.
pub fn decode_id_token(token: &str) -> Result<IdentityClaims, String> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err("Malformed identity token".to_string());
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("Malformed identity token: {e}"))?;
    let claims: IdentityClaims =
        serde_json::from_slice(&bytes).map_err(|e| format!("Unreadable identity token: {e}"))?;

    if claims.email.trim().is_empty() {
        return Err("Identity token has no email".to_string());
    }
    Ok(claims)
}
