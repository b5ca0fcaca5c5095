use serde::{Deserialize, Serialize};

/// Notification flags stored per admin account.
///
/// Missing flags default to enabled, which is what a fresh account gets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "enabled")]
    pub email_notification: bool,
    #[serde(default = "enabled")]
    pub campaign_update: bool,
    #[serde(default = "enabled")]
    pub donation_alert: bool,
    #[serde(default = "enabled")]
    pub push_notification: bool,
    #[serde(default = "enabled")]
    pub push_campaign_update: bool,
    #[serde(default = "enabled")]
    pub push_donation_alert: bool,
}

fn enabled() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notification: true,
            campaign_update: true,
            donation_alert: true,
            push_notification: true,
            push_campaign_update: true,
            push_donation_alert: true,
        }
    }
}

/// One notification flag. Settings are patched a flag at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationFlag {
    EmailNotification,
    CampaignUpdate,
    DonationAlert,
    PushNotification,
    PushCampaignUpdate,
    PushDonationAlert,
}

impl NotificationFlag {
    pub const ALL: [NotificationFlag; 6] = [
        Self::EmailNotification,
        Self::CampaignUpdate,
        Self::DonationAlert,
        Self::PushNotification,
        Self::PushCampaignUpdate,
        Self::PushDonationAlert,
    ];

    /// Field name on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Self::EmailNotification => "email_notification",
            Self::CampaignUpdate => "campaign_update",
            Self::DonationAlert => "donation_alert",
            Self::PushNotification => "push_notification",
            Self::PushCampaignUpdate => "push_campaign_update",
            Self::PushDonationAlert => "push_donation_alert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailNotification => "Email notifications",
            Self::CampaignUpdate => "Campaign updates",
            Self::DonationAlert => "Donation alerts",
            Self::PushNotification => "Push notifications",
            Self::PushCampaignUpdate => "Urgent campaign notifications",
            Self::PushDonationAlert => "Large donation notifications",
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, flag: NotificationFlag) -> bool {
        match flag {
            NotificationFlag::EmailNotification => self.email_notification,
            NotificationFlag::CampaignUpdate => self.campaign_update,
            NotificationFlag::DonationAlert => self.donation_alert,
            NotificationFlag::PushNotification => self.push_notification,
            NotificationFlag::PushCampaignUpdate => self.push_campaign_update,
            NotificationFlag::PushDonationAlert => self.push_donation_alert,
        }
    }

    pub fn set(&mut self, flag: NotificationFlag, value: bool) {
        let slot = match flag {
            NotificationFlag::EmailNotification => &mut self.email_notification,
            NotificationFlag::CampaignUpdate => &mut self.campaign_update,
            NotificationFlag::DonationAlert => &mut self.donation_alert,
            NotificationFlag::PushNotification => &mut self.push_notification,
            NotificationFlag::PushCampaignUpdate => &mut self.push_campaign_update,
            NotificationFlag::PushDonationAlert => &mut self.push_donation_alert,
        };
        *slot = value;
    }
}
