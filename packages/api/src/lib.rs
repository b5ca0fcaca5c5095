//! # API crate: typed access to the BlueRoot donation backend
//!
//! Everything the frontend persists or processes goes through an external REST
//! backend under `/api/v1`. This crate owns that boundary: the HTTP client, the
//! wire models, error normalisation, identity-provider helpers and the
//! build-time configuration the other crates read.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Google OpenID Connect implicit flow: authorization URL, callback fragment parsing, ID-token claim decoding |
//! | [`client`] | [`ApiClient`], one method per backend endpoint, bearer-token auth |
//! | [`config`] | [`AppConfig`] captured from the build environment |
//! | [`error`] | [`ApiError`] `{message, status, data}` and structured field errors |
//! | [`models`] | Campaigns, donations, user/session profile, notification settings, dashboard stats |
//!
//! Nothing here keeps state between calls. The session token lives in the
//! `store` crate and is handed to [`ApiClient::with_token`] per call site.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::AppConfig;
pub use error::{ApiError, FieldError};
pub use models::*;
