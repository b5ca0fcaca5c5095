//! ApiClient against a fake backend.

mod common;

use api::auth::IdentityClaims;
use api::{CampaignUpdate, DonationRequest, NewCampaign, NotificationFlag, DEFAULT_CAUSE};
use common::{client, signed_in_client, spawn_backend, OWNER, SESSION_TOKEN};

fn donation(zip: &str) -> DonationRequest {
    DonationRequest {
        campaign_id: Some(1),
        amount: 50.0,
        card_number: "4111111111111111".to_string(),
        expire_month: "09".to_string(),
        expire_year: "2031".to_string(),
        cvv: "123".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "555-123-4567".to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: zip.to_string(),
        occupation: "Engineer".to_string(),
        employer: String::new(),
        cause: DEFAULT_CAUSE.to_string(),
        recurring: true,
    }
}

#[tokio::test]
async fn test_all_campaigns() {
    let (base, backend) = spawn_backend().await;
    let campaigns = client(&base).all_campaigns().await.unwrap();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[1].title, "Ana for Senate");
    assert_eq!(campaigns[0].progress_percent(), Some(25.0));
    assert!(backend.last().authorization.is_none());
}

#[tokio::test]
async fn test_campaigns_by_owner_encodes_email() {
    let (base, backend) = spawn_backend().await;
    let campaigns = signed_in_client(&base)
        .campaigns_by_owner(OWNER)
        .await
        .unwrap();
    assert_eq!(campaigns.len(), 1);
    let recorded = backend.last();
    assert_eq!(recorded.path, format!("/all_campaign/{OWNER}"));
    assert_eq!(
        recorded.authorization.as_deref(),
        Some(format!("Bearer {SESSION_TOKEN}").as_str())
    );
}

#[tokio::test]
async fn test_single_campaign_not_found() {
    let (base, _) = spawn_backend().await;
    let c = client(&base);
    assert_eq!(c.single_campaign(3).await.unwrap().id, 3);

    let err = c.single_campaign(404).await.unwrap_err();
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Campaign not found");
}

#[tokio::test]
async fn test_create_update_delete() {
    let (base, backend) = spawn_backend().await;
    let c = signed_in_client(&base);

    let payload = NewCampaign {
        email: OWNER.to_string(),
        goal: 500.0,
        campaign_type: "basic".to_string(),
        title: Some("Library Fund".to_string()),
        ..Default::default()
    };
    c.create_campaign(&payload).await.unwrap();
    let recorded = backend.last();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.body["title"], "Library Fund");
    assert!(recorded.body.get("EIN").is_none());

    let update = CampaignUpdate {
        title: "Library Fund 2".to_string(),
        description: "More books".to_string(),
        goal: 750.0,
        end_date: "2026-03-01".to_string(),
        photo: String::new(),
        email: OWNER.to_string(),
    };
    c.update_campaign(9, &update).await.unwrap();
    let recorded = backend.last();
    assert_eq!(recorded.path, "/update_campaign/9");
    assert_eq!(recorded.body["end_date"], "2026-03-01");

    // 204 with an empty body still succeeds.
    let value = c.delete_campaign(9).await.unwrap();
    assert!(value.is_null());
    assert_eq!(backend.last().path, "/delete_campaign/9");
}

#[tokio::test]
async fn test_donate_success_and_field_errors() {
    let (base, backend) = spawn_backend().await;
    let c = client(&base);

    c.donate(&donation("62701")).await.unwrap();
    let body = backend.last().body;
    assert_eq!(body["campaignId"], 1);
    assert_eq!(body["cardNumber"], "4111111111111111");
    assert_eq!(body["recurring"], true);

    let err = c.donate(&donation("00000")).await.unwrap_err();
    assert_eq!(err.status, Some(422));
    assert_eq!(err.message, "Validation failed");
    let fields = err.field_errors().unwrap();
    assert_eq!(fields["zip_code"], "Unknown ZIP");
}

#[tokio::test]
async fn test_auth_login() {
    let (base, backend) = spawn_backend().await;
    let claims = IdentityClaims {
        email: OWNER.to_string(),
        name: Some("Olive Owner".to_string()),
        given_name: Some("Olive".to_string()),
        family_name: Some("Owner".to_string()),
        picture: None,
        nonce: None,
    };
    let response = client(&base)
        .auth_login(&claims.into_login_request("raw.jwt.value"))
        .await
        .unwrap();
    assert_eq!(response.token, SESSION_TOKEN);
    assert_eq!(response.user.email, OWNER);
    assert_eq!(response.user.display_name(), "Olive Owner");
    assert_eq!(backend.last().body["token"], "raw.jwt.value");
}

#[tokio::test]
async fn test_settings_roundtrip() {
    let (base, backend) = spawn_backend().await;
    let c = signed_in_client(&base);

    let settings = c.settings(OWNER).await.unwrap();
    assert!(!settings.email_notification);
    assert!(settings.push_donation_alert);

    c.update_setting(OWNER, NotificationFlag::DonationAlert, false)
        .await
        .unwrap();
    let recorded = backend.last();
    assert_eq!(recorded.method, "PATCH");
    let body = recorded.body.as_object().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body["donation_alert"], false);
}

#[tokio::test]
async fn test_stats_require_token() {
    let (base, _) = spawn_backend().await;

    let err = client(&base).total_raised(OWNER).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Unauthorized");

    let total = signed_in_client(&base).total_raised(OWNER).await.unwrap();
    assert_eq!(total.total_raised, 4200.5);
    assert_eq!(total.email, OWNER);
}

#[tokio::test]
async fn test_dashboard_series() {
    let (base, _) = spawn_backend().await;
    let c = signed_in_client(&base);

    let active = c.active_campaigns(OWNER).await.unwrap();
    assert_eq!(active.total_campaigns, 3);
    assert_eq!(active.total_donors, 17);

    let daily = c.daily_donations(OWNER).await.unwrap();
    assert_eq!(daily.points().len(), 3);
    assert_eq!(daily.total(), 45.5);

    let rows = c.campaign_analytics(OWNER).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].amount_donated, 900.0);
}

#[tokio::test]
async fn test_unexpected_body_and_transport_errors() {
    let (base, _) = spawn_backend().await;
    let err = client(&base)
        .get::<serde_json::Value>("/broken")
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(200));
    assert!(err.message.starts_with("Unexpected response"));

    // Nothing listens on port 9 on the loopback interface.
    let dead = url::Url::parse("http://127.0.0.1:9").unwrap();
    let err = client(&dead).all_campaigns().await.unwrap_err();
    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
}
