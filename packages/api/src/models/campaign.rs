//! # Campaign wire models
//!
//! [`Campaign`] mirrors the backend's campaign record. The backend is the only
//! authoritative copy; these values are fetched, displayed and discarded.
//! Nonprofit campaigns (501(c)(3) / 501(c)(4)) carry extra organization
//! fields, which are all optional here because basic campaigns omit them.
//!
//! Request payloads for the create/update endpoints live here as well:
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`NewCampaign`] | `POST /create_campaign` |
//! | [`CampaignUpdate`] | `PUT /update_campaign/:id` |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A fundraising campaign as returned by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount_donated: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supporter: u64,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default, rename = "EIN")]
    pub ein: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mission_statement: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_person_name: Option<String>,
    #[serde(default)]
    pub contact_person_email: Option<String>,
    #[serde(default)]
    pub contact_person_number: Option<String>,
}

impl Campaign {
    /// Percentage of the goal raised so far.
    ///
    /// `None` when the goal is zero, negative or not a number: there is no
    /// meaningful progress to show for such a campaign.
    pub fn progress_percent(&self) -> Option<f64> {
        if !self.goal.is_finite() || self.goal <= 0.0 {
            return None;
        }
        Some(self.amount_donated / self.goal * 100.0)
    }

    /// Progress clamped to `0..=100`, for drawing a bar.
    pub fn progress_bar_width(&self) -> f64 {
        self.progress_percent().unwrap_or(0.0).clamp(0.0, 100.0)
    }

    /// Average gift per supporter, rounded to whole dollars.
    pub fn average_gift(&self) -> Option<f64> {
        if self.supporter == 0 {
            return None;
        }
        Some((self.amount_donated / self.supporter as f64).round())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_api_date)
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_api_timestamp)
    }

    pub fn created_at(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_api_date)
    }

    /// Full creation time in UTC; bare dates count as midnight.
    pub fn created_timestamp(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_api_timestamp)
    }

    /// Title with the organization name appended when one is set.
    pub fn display_title(&self) -> String {
        match self.organization_name.as_deref().map(str::trim) {
            Some(org) if !org.is_empty() && !self.title.contains(org) => {
                if self.title.trim().is_empty() {
                    org.to_string()
                } else {
                    format!("{} {}", self.title, org)
                }
            }
            _ => self.title.clone(),
        }
    }
}

/// Parse the date formats the backend emits: RFC 3339 timestamps, bare
/// `YYYY-MM-DD` dates and `YYYY-MM-DD HH:MM:SS` timestamps.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    parse_api_timestamp(raw).map(|ts| ts.date())
}

/// Same formats as [`parse_api_date`], keeping the time of day (UTC).
pub fn parse_api_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

/// `GET /all_campaign[/:email]` response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CampaignList {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

/// `GET /single_campaign/:id` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleCampaign {
    pub campaign: Campaign,
}

/// Body of `POST /create_campaign`.
///
/// The backend accepts one flat payload for every campaign variant; fields
/// that do not apply to a variant are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewCampaign {
    pub email: String,
    pub goal: f64,
    pub campaign_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(rename = "EIN", skip_serializing_if = "Option::is_none")]
    pub ein: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fec_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasurer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasurer_email: Option<String>,
}

/// Body of `PUT /update_campaign/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignUpdate {
    pub title: String,
    pub description: String,
    pub goal: f64,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub photo: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(goal: f64, donated: f64) -> Campaign {
        Campaign {
            id: 1,
            title: "Clean Water".to_string(),
            goal,
            amount_donated: donated,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(campaign(200.0, 50.0).progress_percent(), Some(25.0));
        assert_eq!(campaign(100.0, 150.0).progress_percent(), Some(150.0));
        assert_eq!(campaign(100.0, 150.0).progress_bar_width(), 100.0);
    }

    #[test]
    fn test_progress_with_zero_goal() {
        let c = campaign(0.0, 500.0);
        assert_eq!(c.progress_percent(), None);
        assert_eq!(c.progress_bar_width(), 0.0);
        assert_eq!(campaign(f64::NAN, 1.0).progress_percent(), None);
    }

    #[test]
    fn test_average_gift() {
        let mut c = campaign(1000.0, 250.0);
        assert_eq!(c.average_gift(), None);
        c.supporter = 3;
        assert_eq!(c.average_gift(), Some(83.0));
    }

    #[test]
    fn test_parse_api_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 4);
        assert_eq!(parse_api_date("2025-11-04"), expected);
        assert_eq!(parse_api_date("2025-11-04T10:30:00.000Z"), expected);
        assert_eq!(parse_api_date("2025-11-04 08:00:00"), expected);
        assert_eq!(parse_api_date(""), None);
        assert_eq!(parse_api_date("next tuesday"), None);
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "id": 7,
            "title": "Save the Parks",
            "description": "Keep parks green",
            "photo": null,
            "end_date": "2026-01-31T00:00:00.000Z",
            "amount_donated": 1200,
            "goal": 5000,
            "email": "owner@example.com",
            "createdAt": "2025-06-01T12:00:00.000Z",
            "updatedAt": "2025-06-02T12:00:00.000Z",
            "supporter": 12,
            "status": "active",
            "EIN": "12-3456789"
        }"#;
        let c: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 7);
        assert_eq!(c.amount_donated, 1200.0);
        assert_eq!(c.ein.as_deref(), Some("12-3456789"));
        assert_eq!(c.end_date(), NaiveDate::from_ymd_opt(2026, 1, 31));
        assert_eq!(c.created_at(), NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_parse_api_timestamp_keeps_time_of_day() {
        let morning = parse_api_timestamp("2025-06-01T08:00:00Z").unwrap();
        let evening = parse_api_timestamp("2025-06-01T20:00:00Z").unwrap();
        assert!(evening > morning);
        assert_eq!(
            parse_api_timestamp("2025-06-01"),
            NaiveDate::from_ymd_opt(2025, 6, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(
            parse_api_timestamp("2025-06-01T22:00:00-04:00"),
            NaiveDate::from_ymd_opt(2025, 6, 2).and_then(|d| d.and_hms_opt(2, 0, 0))
        );
    }

    #[test]
    fn test_null_numbers_decode_as_zero() {
        let json = r#"{"campaigns":[
            {"id":1,"title":"A","goal":100,"supporter":null},
            {"id":2,"title":"B","goal":null,"amount_donated":null}
        ]}"#;
        let list: CampaignList = serde_json::from_str(json).unwrap();
        assert_eq!(list.campaigns.len(), 2);
        assert_eq!(list.campaigns[0].supporter, 0);
        assert_eq!(list.campaigns[0].goal, 100.0);
        assert_eq!(list.campaigns[1].goal, 0.0);
        assert_eq!(list.campaigns[1].amount_donated, 0.0);
        assert_eq!(list.campaigns[1].progress_percent(), None);
    }

    #[test]
    fn test_new_campaign_omits_unused_fields() {
        let payload = NewCampaign {
            email: "owner@example.com".to_string(),
            goal: 1000.0,
            campaign_type: "501(c)(3)".to_string(),
            organization_name: Some("Green Org".to_string()),
            ein: Some("12-3456789".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["EIN"], "12-3456789");
        assert!(value.get("title").is_none());
        assert!(value.get("videos").is_none());
        assert!(value.get("website").is_none());
    }

    #[test]
    fn test_display_title() {
        let mut c = campaign(1.0, 0.0);
        assert_eq!(c.display_title(), "Clean Water");
        c.organization_name = Some("Blue Org".to_string());
        assert_eq!(c.display_title(), "Clean Water Blue Org");
    }
}
