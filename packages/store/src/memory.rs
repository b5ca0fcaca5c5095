use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cookie::Cookie;

use crate::jar::{is_removal, CookieJar};

/// In-memory cookie jar for tests and native builds.
///
/// Clones share the same storage. Every `set` is also kept as the
/// `Set-Cookie` line a server would have sent, so attributes can be checked.
#[derive(Clone, Debug, Default)]
pub struct MemoryJar {
    cookies: Arc<Mutex<HashMap<String, String>>>,
    written: Arc<Mutex<Vec<String>>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded `Set-Cookie` lines in the order they were written.
    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.cookies.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Put a raw value in place without going through [`CookieJar::set`].
    pub fn insert_raw(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl CookieJar for MemoryJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }

    fn set(&self, cookie: Cookie<'static>) {
        self.written
            .lock()
            .unwrap()
            .push(cookie.encoded().to_string());

        let mut cookies = self.cookies.lock().unwrap();
        if is_removal(&cookie) {
            cookies.remove(cookie.name());
        } else {
            cookies.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let jar = MemoryJar::new();
        assert!(jar.is_empty());

        jar.set(Cookie::new("token", "abc"));
        assert_eq!(jar.get("token").as_deref(), Some("abc"));

        jar.set(
            Cookie::build(("token", ""))
                .max_age(cookie::time::Duration::ZERO)
                .build(),
        );
        assert_eq!(jar.get("token"), None);
        assert_eq!(jar.written().len(), 2);
    }

    #[test]
    fn test_clones_share_storage() {
        let jar = MemoryJar::new();
        let other = jar.clone();
        jar.set(Cookie::new("user", "{}"));
        assert_eq!(other.get("user").as_deref(), Some("{}"));
    }
}
