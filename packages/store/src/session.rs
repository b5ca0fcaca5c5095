//! # Client session
//!
//! The signed-in state is a pair of cookies written after the identity
//! exchange with the backend:
//!
//! | Cookie | Value |
//! |--------|-------|
//! | `token` | bearer token for API calls |
//! | `user` | JSON-encoded [`UserInfo`] |
//!
//! Both use path `/` and a 7 day max-age. In production they are also
//! `Secure` and `SameSite=Strict`. There is no refresh and no expiry check
//! beyond the cookie lifetime.
//!
//! A third, short-lived `auth_nonce` cookie ties an identity-provider
//! redirect to the callback that completes it.

use api::UserInfo;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::jar::CookieJar;

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";
pub const NONCE_COOKIE: &str = "auth_nonce";

pub const SESSION_DAYS: i64 = 7;
pub const NONCE_MINUTES: i64 = 10;

/// Attributes applied to every session cookie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub max_age: Duration,
}

impl CookiePolicy {
    pub fn development() -> Self {
        Self {
            secure: false,
            max_age: Duration::days(SESSION_DAYS),
        }
    }

    pub fn production() -> Self {
        Self {
            secure: true,
            max_age: Duration::days(SESSION_DAYS),
        }
    }

    pub fn for_environment(production: bool) -> Self {
        if production {
            Self::production()
        } else {
            Self::development()
        }
    }

    fn build(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        let mut builder = Cookie::build((name, value)).path("/").max_age(max_age);
        if self.secure {
            builder = builder.secure(true).same_site(SameSite::Strict);
        }
        builder.build()
    }
}

#[derive(Clone, Debug)]
pub struct Session<J> {
    jar: J,
    policy: CookiePolicy,
}

impl<J: CookieJar> Session<J> {
    pub fn new(jar: J, policy: CookiePolicy) -> Self {
        Self { jar, policy }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn policy(&self) -> CookiePolicy {
        self.policy
    }

    /// Stored bearer token, ignoring an empty cookie.
    pub fn token(&self) -> Option<String> {
        self.jar
            .get(TOKEN_COOKIE)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Profile from the `user` cookie. Unreadable JSON counts as no user.
    pub fn user(&self) -> Option<UserInfo> {
        let raw = self.jar.get(USER_COOKIE)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed user cookie: {}", e);
                None
            }
        }
    }

    /// Owner email of the signed-in user, used to scope admin queries.
    pub fn email(&self) -> Option<String> {
        self.user()
            .map(|u| u.email)
            .filter(|e| !e.trim().is_empty())
    }

    pub fn login(&self, token: &str, user: &UserInfo) -> Result<(), serde_json::Error> {
        let user_json = serde_json::to_string(user)?;
        self.jar.set(
            self.policy
                .build(TOKEN_COOKIE, token.to_string(), self.policy.max_age),
        );
        self.jar
            .set(self.policy.build(USER_COOKIE, user_json, self.policy.max_age));
        tracing::info!("Signed in as {}", user.email);
        Ok(())
    }

    pub fn logout(&self) {
        self.remove(TOKEN_COOKIE);
        self.remove(USER_COOKIE);
        tracing::info!("Signed out");
    }

    /// Remember the nonce sent with an identity-provider redirect.
    pub fn remember_nonce(&self, nonce: &str) {
        self.jar.set(self.policy.build(
            NONCE_COOKIE,
            nonce.to_string(),
            Duration::minutes(NONCE_MINUTES),
        ));
    }

    /// Read and clear the pending nonce.
    pub fn take_nonce(&self) -> Option<String> {
        let nonce = self.jar.get(NONCE_COOKIE).filter(|n| !n.is_empty());
        self.remove(NONCE_COOKIE);
        nonce
    }

    fn remove(&self, name: &'static str) {
        self.jar
            .set(self.policy.build(name, String::new(), Duration::ZERO));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryJar;

    fn user() -> UserInfo {
        UserInfo {
            email: "olive@example.com".to_string(),
            name: Some("Olive Owner".to_string()),
            picture: Some("https://img.example.com/o.png".to_string()),
        }
    }

    fn session(policy: CookiePolicy) -> Session<MemoryJar> {
        Session::new(MemoryJar::new(), policy)
    }

    #[test]
    fn test_fresh_session_is_anonymous() {
        let s = session(CookiePolicy::development());
        assert!(!s.is_authenticated());
        assert!(s.token().is_none());
        assert!(s.user().is_none());
        assert!(s.email().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let s = session(CookiePolicy::development());
        s.login("tok-1", &user()).unwrap();

        assert!(s.is_authenticated());
        assert_eq!(s.token().as_deref(), Some("tok-1"));
        assert_eq!(s.user(), Some(user()));
        assert_eq!(s.email().as_deref(), Some("olive@example.com"));

        s.logout();
        assert!(!s.is_authenticated());
        assert!(s.user().is_none());
        assert!(s.jar().is_empty());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let s = session(CookiePolicy::development());
        s.jar().insert_raw(TOKEN_COOKIE, "");
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_malformed_user_cookie() {
        let s = session(CookiePolicy::development());
        s.jar().insert_raw(USER_COOKIE, "{not json");
        assert!(s.user().is_none());
    }

    #[test]
    fn test_cookie_attributes() {
        let s = session(CookiePolicy::production());
        s.login("tok", &user()).unwrap();
        let written = s.jar().written();
        assert_eq!(written.len(), 2);
        for line in &written {
            assert!(line.contains("Path=/"));
            assert!(line.contains("Max-Age=604800"));
            assert!(line.contains("Secure"));
            assert!(line.contains("SameSite=Strict"));
        }

        let dev = session(CookiePolicy::development());
        dev.login("tok", &user()).unwrap();
        assert!(!dev.jar().written()[0].contains("Secure"));
    }

    #[test]
    fn test_nonce_is_single_use() {
        let s = session(CookiePolicy::development());
        s.remember_nonce("abc");
        assert!(s.jar().written()[0].contains("Max-Age=600"));
        assert_eq!(s.take_nonce().as_deref(), Some("abc"));
        assert_eq!(s.take_nonce(), None);
    }
}
