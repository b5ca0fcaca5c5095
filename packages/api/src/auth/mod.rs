//! Identity-provider sign-in helpers.

mod google;

pub use google::{
    authorize_url, decode_id_token, generate_nonce, parse_callback_fragment, IdentityClaims,
    GOOGLE_AUTH_URL,
};
