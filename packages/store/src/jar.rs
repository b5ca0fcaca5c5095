//! # Cookie jars
//!
//! [`CookieJar`] is the seam between the session logic and wherever cookies
//! actually live. Implementations:
//!
//! | Type | Backing | Used by |
//! |------|---------|---------|
//! | [`crate::MemoryJar`] | `Arc<Mutex<HashMap>>` | native builds and tests |
//! | `DocumentJar` | `document.cookie` | the browser (wasm32 + `web` feature) |
//!
//! Jars behave like a browser: setting a cookie whose `Max-Age` is zero or
//! negative deletes it. Values are percent-encoded on write and decoded on
//! read, so JSON values survive the round trip.

use cookie::Cookie;

pub trait CookieJar {
    /// Decoded value of the named cookie, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// Store a cookie, or delete it when its max-age is not positive.
    fn set(&self, cookie: Cookie<'static>);
}

/// Find `name` in a `Cookie` request-header style string (`a=1; b=2`).
pub fn find_in_header(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header.to_string())
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// True when the cookie asks the browser to drop it.
pub fn is_removal(cookie: &Cookie<'_>) -> bool {
    cookie
        .max_age()
        .map(|age| age <= cookie::time::Duration::ZERO)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_header() {
        let header = "theme=dark; token=abc123; user=%7B%22email%22%3A%22a%40b.co%22%7D";
        assert_eq!(find_in_header(header, "token").as_deref(), Some("abc123"));
        assert_eq!(
            find_in_header(header, "user").as_deref(),
            Some(r#"{"email":"a@b.co"}"#)
        );
        assert_eq!(find_in_header(header, "missing"), None);
        assert_eq!(find_in_header("", "token"), None);
    }

    #[test]
    fn test_is_removal() {
        let live = Cookie::build(("token", "x"))
            .max_age(cookie::time::Duration::days(7))
            .build();
        let dead = Cookie::build(("token", ""))
            .max_age(cookie::time::Duration::ZERO)
            .build();
        let session_only = Cookie::new("token", "x");
        assert!(!is_removal(&live));
        assert!(is_removal(&dead));
        assert!(!is_removal(&session_only));
    }
}
