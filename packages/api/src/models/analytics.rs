//! Dashboard statistics and chart payloads.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Several stats endpoints wrap their body in `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `GET /total_raised/:email`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalRaised {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "totalRaised", deserialize_with = "null_as_default")]
    pub total_raised: f64,
}

/// `GET /active_campaigns/:email`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveCampaigns {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "totalCampaigns", deserialize_with = "null_as_default")]
    pub total_campaigns: u64,
    #[serde(default, rename = "totalDonors", deserialize_with = "null_as_default")]
    pub total_donors: u64,
}

/// `GET /daily_donation/:email`: two parallel arrays, one label per day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyDonations {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl DailyDonations {
    /// Pair labels with amounts. A trailing label with no amount is dropped.
    pub fn points(&self) -> Vec<(String, f64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// One row of `GET /analytics/:email`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignPerformance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount_donated: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_raised_envelope() {
        let json = r#"{"data":{"email":"a@b.co","totalRaised":1234.5}}"#;
        let parsed: DataEnvelope<TotalRaised> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.total_raised, 1234.5);
    }

    #[test]
    fn test_active_campaigns_envelope() {
        let json = r#"{"data":{"message":"ok","email":"a@b.co","totalCampaigns":4,"totalDonors":31}}"#;
        let parsed: DataEnvelope<ActiveCampaigns> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.total_campaigns, 4);
        assert_eq!(parsed.data.total_donors, 31);
    }

    #[test]
    fn test_null_stats_decode_as_zero() {
        let json = r#"{"data":{"email":"a@b.co","totalRaised":null}}"#;
        let parsed: DataEnvelope<TotalRaised> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.total_raised, 0.0);

        let json = r#"[{"title":"Parks","amount_donated":null,"goal":500},{"title":null,"goal":null}]"#;
        let rows: Vec<CampaignPerformance> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].amount_donated, 0.0);
        assert_eq!(rows[0].goal, 500.0);
        assert_eq!(rows[1].title, "");
    }

    #[test]
    fn test_daily_points_truncate_to_shorter() {
        let daily = DailyDonations {
            labels: vec!["Mon".into(), "Tue".into(), "Wed".into()],
            data: vec![10.0, 20.0],
        };
        assert_eq!(
            daily.points(),
            vec![("Mon".to_string(), 10.0), ("Tue".to_string(), 20.0)]
        );
        assert_eq!(daily.total(), 30.0);
    }
}
