//! This crate contains all shared UI for the workspace: form models and
//! validation, listing logic, and the Dioxus components the web app routes to.

pub mod components;
pub mod forms;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
    pub mod brands {
        pub use dioxus_free_icons::icons::fa_brands_icons::*;
    }
}

pub mod charts;
pub mod format;
pub mod guard;
pub mod listing;

mod session;
pub use session::{api_client, load_config, make_session};

mod auth;
pub use auth::{
    finish_sign_in, redirect_browser, start_sign_in, use_auth, use_config, AuthProvider,
    AuthState, GoogleSignInButton, LogoutButton,
};

mod navbar;
pub use navbar::Navbar;

mod campaign_card;
pub use campaign_card::{CampaignCard, CampaignDetailModal, ProgressBar};

mod campaign_browser;
pub use campaign_browser::CampaignBrowser;

mod featured_causes;
pub use featured_causes::FeaturedCauses;

mod donation_form;
pub use donation_form::DonationFormView;

mod campaign_forms;
pub use campaign_forms::{BasicCampaignFormView, CampaignCreator, NonprofitFormView};

mod campaign_wizard;
pub use campaign_wizard::CampaignWizardView;

mod admin_campaigns;
pub use admin_campaigns::AdminCampaigns;

mod admin_stats;
pub use admin_stats::AdminStats;

mod analytics;
pub use analytics::AnalyticsPanel;

mod settings_panel;
pub use settings_panel::{ProfileCard, SettingsPanel};
