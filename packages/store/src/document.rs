//! # Browser cookie jar
//!
//! [`DocumentJar`] reads and writes `document.cookie`. Writes are the encoded
//! `Set-Cookie` form (`name=value; Path=/; Max-Age=...`), which the browser
//! applies exactly like a response header, including deletion when the
//! max-age is zero.
//!
//! Failures to reach the document are logged and otherwise ignored: without a
//! cookie store the app simply behaves as signed out.

use cookie::Cookie;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::jar::{find_in_header, CookieJar};

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentJar;

impl DocumentJar {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for DocumentJar {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        find_in_header(&header, name)
    }

    fn set(&self, cookie: Cookie<'static>) {
        let Some(document) = Self::document() else {
            tracing::warn!("No document available, cookie {} not written", cookie.name());
            return;
        };
        if let Err(e) = document.set_cookie(&cookie.encoded().to_string()) {
            tracing::error!("Failed to write cookie {}: {:?}", cookie.name(), e);
        }
    }
}
