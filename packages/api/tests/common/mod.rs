//! Fake donation backend for client integration tests.

use std::sync::{Arc, Mutex};

use api::ApiClient;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

pub const OWNER: &str = "owner@example.com";
pub const SESSION_TOKEN: &str = "session-token-1";

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct Backend {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Backend {
    fn record(&self, method: &'static str, path: String, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            method,
            path,
            authorization,
            body,
        });
    }

    pub fn last(&self) -> Recorded {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

fn campaign(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "A campaign",
        "goal": 1000,
        "amount_donated": 250,
        "email": OWNER,
        "supporter": 5,
        "createdAt": "2025-01-10T00:00:00.000Z",
        "end_date": "2025-12-31"
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {SESSION_TOKEN}"))
        .unwrap_or(false)
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route(
            "/api/v1/all_campaign",
            get(|State(b): State<Backend>, headers: HeaderMap| async move {
                b.record("GET", "/all_campaign".into(), &headers, Value::Null);
                Json(json!({ "campaigns": [campaign(1, "Clean Water"), campaign(2, "Ana for Senate")] }))
            }),
        )
        .route(
            "/api/v1/all_campaign/{email}",
            get(
                |State(b): State<Backend>, Path(email): Path<String>, headers: HeaderMap| async move {
                    b.record("GET", format!("/all_campaign/{email}"), &headers, Value::Null);
                    let campaigns = if email == OWNER {
                        vec![campaign(1, "Clean Water")]
                    } else {
                        vec![]
                    };
                    Json(json!({ "campaigns": campaigns }))
                },
            ),
        )
        .route(
            "/api/v1/single_campaign/{id}",
            get(|Path(id): Path<u64>| async move {
                if id == 404 {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Campaign not found" })),
                    );
                }
                (StatusCode::OK, Json(json!({ "campaign": campaign(id, "Clean Water") })))
            }),
        )
        .route(
            "/api/v1/create_campaign",
            post(
                |State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    b.record("POST", "/create_campaign".into(), &headers, body);
                    (StatusCode::CREATED, Json(json!({ "message": "Campaign created" })))
                },
            ),
        )
        .route(
            "/api/v1/update_campaign/{id}",
            put(
                |State(b): State<Backend>,
                 Path(id): Path<u64>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    b.record("PUT", format!("/update_campaign/{id}"), &headers, body);
                    Json(json!({ "message": "updated" }))
                },
            ),
        )
        .route(
            "/api/v1/delete_campaign/{id}",
            delete(
                |State(b): State<Backend>, Path(id): Path<u64>, headers: HeaderMap| async move {
                    b.record("DELETE", format!("/delete_campaign/{id}"), &headers, Value::Null);
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/api/v1/donate",
            post(
                |State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    let declined = body["zip_code"] == "00000";
                    b.record("POST", "/donate".into(), &headers, body);
                    if declined {
                        return (
                            StatusCode::UNPROCESSABLE_ENTITY,
                            Json(json!({
                                "message": "Validation failed",
                                "errors": [{ "field": "zip_code", "message": "Unknown ZIP" }]
                            })),
                        );
                    }
                    (StatusCode::OK, Json(json!({ "message": "Donation successful" })))
                },
            ),
        )
        .route(
            "/api/v1/auth_login",
            post(
                |State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    let email = body["email"].clone();
                    let name = body["name"].clone();
                    b.record("POST", "/auth_login".into(), &headers, body);
                    Json(json!({
                        "token": SESSION_TOKEN,
                        "user": { "email": email, "name": name, "picture": null }
                    }))
                },
            ),
        )
        .route(
            "/api/v1/settings/{email}",
            get(|Path(_email): Path<String>| async move {
                Json(json!({
                    "email_notification": false,
                    "campaign_update": true,
                    "donation_alert": true
                }))
            })
            .patch(
                |State(b): State<Backend>,
                 Path(email): Path<String>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    b.record("PATCH", format!("/settings/{email}"), &headers, body);
                    Json(json!({ "message": "Settings updated" }))
                },
            ),
        )
        .route(
            "/api/v1/total_raised/{email}",
            get(|Path(email): Path<String>, headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "Unauthorized" })),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({ "data": { "email": email, "totalRaised": 4200.5 } })),
                )
            }),
        )
        .route(
            "/api/v1/active_campaigns/{email}",
            get(|Path(email): Path<String>| async move {
                Json(json!({ "data": {
                    "message": "ok", "email": email, "totalCampaigns": 3, "totalDonors": 17
                } }))
            }),
        )
        .route(
            "/api/v1/daily_donation/{_email}",
            get(|| async {
                Json(json!({ "labels": ["Mon", "Tue", "Wed"], "data": [10, 0, 35.5] }))
            }),
        )
        .route(
            "/api/v1/analytics/{_email}",
            get(|| async {
                Json(json!([
                    { "title": "Clean Water", "amount_donated": 250, "goal": 1000 },
                    { "title": "Parks", "amount_donated": 900, "goal": 800 }
                ]))
            }),
        )
        .route("/api/v1/broken", get(|| async { "<html>oops</html>" }))
        .with_state(backend)
}

/// Start the fake backend on an ephemeral port.
pub async fn spawn_backend() -> (Url, Backend) {
    let backend = Backend::default();
    let app = router(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });
    let base = Url::parse(&format!("http://{addr}")).expect("base url");
    (base, backend)
}

pub fn client(base: &Url) -> ApiClient {
    ApiClient::new(base.clone())
}

pub fn signed_in_client(base: &Url) -> ApiClient {
    ApiClient::new(base.clone()).with_token(Some(SESSION_TOKEN))
}
