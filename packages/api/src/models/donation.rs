use serde::{Deserialize, Serialize};

pub const DEFAULT_CAUSE: &str = "General Fund";

/// Body of `POST /donate`.
///
/// Card fields travel as plain JSON: the backend owns payment processing and
/// does not accept a tokenised card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    #[serde(rename = "campaignId")]
    pub campaign_id: Option<u64>,
    pub amount: f64,
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    pub expire_month: String,
    pub expire_year: String,
    pub cvv: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub occupation: String,
    pub employer: String,
    pub cause: String,
    pub recurring: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let request = DonationRequest {
            campaign_id: None,
            amount: 25.0,
            card_number: "4111111111111111".to_string(),
            expire_month: "04".to_string(),
            expire_year: "2030".to_string(),
            cvv: "123".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-123-4567".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            occupation: "Engineer".to_string(),
            employer: String::new(),
            cause: DEFAULT_CAUSE.to_string(),
            recurring: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["campaignId"].is_null());
        assert_eq!(value["cardNumber"], "4111111111111111");
        assert_eq!(value["zip_code"], "62701");
        assert_eq!(value["cause"], "General Fund");
    }
}
