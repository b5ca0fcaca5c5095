//! # REST client for the donation backend
//!
//! [`ApiClient`] is a thin wrapper over `reqwest`: it prefixes every path with
//! `<base>/api/v1`, attaches `Authorization: Bearer <token>` when the client
//! carries a session token, sends and parses JSON, and turns any failure into
//! an [`ApiError`]. There is no retry and no caching; every call is one
//! request.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`all_campaigns`](ApiClient::all_campaigns) | `GET /all_campaign` |
//! | [`campaigns_by_owner`](ApiClient::campaigns_by_owner) | `GET /all_campaign/:email` |
//! | [`single_campaign`](ApiClient::single_campaign) | `GET /single_campaign/:id` |
//! | [`create_campaign`](ApiClient::create_campaign) | `POST /create_campaign` |
//! | [`update_campaign`](ApiClient::update_campaign) | `PUT /update_campaign/:id` |
//! | [`delete_campaign`](ApiClient::delete_campaign) | `DELETE /delete_campaign/:id` |
//! | [`donate`](ApiClient::donate) | `POST /donate` |
//! | [`auth_login`](ApiClient::auth_login) | `POST /auth_login` |
//! | [`settings`](ApiClient::settings) | `GET /settings/:email` |
//! | [`update_setting`](ApiClient::update_setting) | `PATCH /settings/:email` |
//! | [`total_raised`](ApiClient::total_raised) | `GET /total_raised/:email` |
//! | [`active_campaigns`](ApiClient::active_campaigns) | `GET /active_campaigns/:email` |
//! | [`daily_donations`](ApiClient::daily_donations) | `GET /daily_donation/:email` |
//! | [`campaign_analytics`](ApiClient::campaign_analytics) | `GET /analytics/:email` |
//!
//! The browser's `fetch` has no client-side timeout, so the 10 second limit
//! only applies to native builds (tests and tools).

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    ActiveCampaigns, AuthLoginRequest, AuthLoginResponse, Campaign, CampaignList,
    CampaignPerformance, CampaignUpdate, DailyDonations, DataEnvelope, DonationRequest,
    NewCampaign, NotificationFlag, NotificationSettings, SingleCampaign, TotalRaised,
};

pub const API_PREFIX: &str = "/api/v1";

#[cfg(not(target_arch = "wasm32"))]
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: build_http_client(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Attach a session token. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<impl Into<String>>) -> Self {
        self.token = token.map(Into::into).filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an `/api/v1` relative path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.endpoint(path))
            .header(ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::transport(&e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| ApiError::transport(&e))?;

        if !(200..300).contains(&status) {
            let err = ApiError::from_response(status, &body);
            if err.is_unauthorized() {
                tracing::warn!("Unauthorized access - please log in again");
            } else if err.is_forbidden() {
                tracing::warn!("Forbidden access");
            } else {
                tracing::debug!("Request returned {}: {}", status, err.message);
            }
            return Err(err);
        }

        let body: &[u8] = if body.is_empty() { b"null" } else { &body };
        serde_json::from_slice(body).map_err(|e| ApiError::decode(status, &e))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.with_json(Method::POST, path, body)?).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.with_json(Method::PUT, path, body)?).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.with_json(Method::PATCH, path, body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn with_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder, ApiError> {
        let bytes = serde_json::to_vec(body).map_err(|e| ApiError {
            message: format!("Failed to encode request: {e}"),
            status: None,
            data: None,
        })?;
        Ok(self
            .request(method, path)
            .header(CONTENT_TYPE, "application/json")
            .body(bytes))
    }

    // --- Campaigns ---

    pub async fn all_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let list: CampaignList = self.get("/all_campaign").await?;
        Ok(list.campaigns)
    }

    pub async fn campaigns_by_owner(&self, email: &str) -> Result<Vec<Campaign>, ApiError> {
        let list: CampaignList = self
            .get(&format!("/all_campaign/{}", encode_segment(email)))
            .await?;
        Ok(list.campaigns)
    }

    pub async fn single_campaign(&self, id: u64) -> Result<Campaign, ApiError> {
        let single: SingleCampaign = self.get(&format!("/single_campaign/{id}")).await?;
        Ok(single.campaign)
    }

    pub async fn create_campaign(&self, payload: &NewCampaign) -> Result<Value, ApiError> {
        self.post("/create_campaign", payload).await
    }

    pub async fn update_campaign(&self, id: u64, payload: &CampaignUpdate) -> Result<Value, ApiError> {
        self.put(&format!("/update_campaign/{id}"), payload).await
    }

    pub async fn delete_campaign(&self, id: u64) -> Result<Value, ApiError> {
        self.delete(&format!("/delete_campaign/{id}")).await
    }

    // --- Donations ---

    pub async fn donate(&self, request: &DonationRequest) -> Result<Value, ApiError> {
        self.post("/donate", request).await
    }

    // --- Auth ---

    pub async fn auth_login(&self, request: &AuthLoginRequest) -> Result<AuthLoginResponse, ApiError> {
        self.post("/auth_login", request).await
    }

    // --- Settings ---

    pub async fn settings(&self, email: &str) -> Result<NotificationSettings, ApiError> {
        self.get(&format!("/settings/{}", encode_segment(email))).await
    }

    /// Patch a single notification flag; the body only names that flag.
    pub async fn update_setting(
        &self,
        email: &str,
        flag: NotificationFlag,
        value: bool,
    ) -> Result<Value, ApiError> {
        let mut body = serde_json::Map::new();
        body.insert(flag.key().to_string(), json!(value));
        self.patch(&format!("/settings/{}", encode_segment(email)), &body)
            .await
    }

    // --- Stats ---

    pub async fn total_raised(&self, email: &str) -> Result<TotalRaised, ApiError> {
        let envelope: DataEnvelope<TotalRaised> = self
            .get(&format!("/total_raised/{}", encode_segment(email)))
            .await?;
        Ok(envelope.data)
    }

    pub async fn active_campaigns(&self, email: &str) -> Result<ActiveCampaigns, ApiError> {
        let envelope: DataEnvelope<ActiveCampaigns> = self
            .get(&format!("/active_campaigns/{}", encode_segment(email)))
            .await?;
        Ok(envelope.data)
    }

    pub async fn daily_donations(&self, email: &str) -> Result<DailyDonations, ApiError> {
        self.get(&format!("/daily_donation/{}", encode_segment(email)))
            .await
    }

    pub async fn campaign_analytics(&self, email: &str) -> Result<Vec<CampaignPerformance>, ApiError> {
        self.get(&format!("/analytics/{}", encode_segment(email)))
            .await
    }
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::new()
}
