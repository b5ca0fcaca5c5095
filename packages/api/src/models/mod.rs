//! Wire models exchanged with the donation backend.

mod analytics;
mod campaign;
mod donation;
mod settings;
mod user;

pub use analytics::{ActiveCampaigns, CampaignPerformance, DailyDonations, DataEnvelope, TotalRaised};
pub use campaign::{parse_api_date, parse_api_timestamp, Campaign, CampaignList, CampaignUpdate, NewCampaign, SingleCampaign};
pub use donation::{DonationRequest, DEFAULT_CAUSE};
pub use settings::{NotificationFlag, NotificationSettings};
pub use user::{AuthLoginRequest, AuthLoginResponse, UserInfo};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
