pub mod jar;
pub mod session;

mod memory;
pub use memory::MemoryJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use document::DocumentJar;

pub use jar::CookieJar;
pub use session::{CookiePolicy, Session, NONCE_COOKIE, TOKEN_COOKIE, USER_COOKIE};
