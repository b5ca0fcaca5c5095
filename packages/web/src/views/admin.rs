//! Pages nested under the admin layout.

use dioxus::prelude::*;
use ui::{AdminCampaigns, AdminStats, AnalyticsPanel, CampaignCreator, SettingsPanel};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "space-y-8",
            h1 { class: "text-2xl font-bold", "Campaign Dashboard" }
            AdminStats {}
            div {
                class: "space-y-4",
                h2 { class: "text-xl font-semibold", "Your Campaigns" }
                AdminCampaigns {}
            }
        }
    }
}

#[component]
pub fn AdminCampaignList() -> Element {
    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Campaigns" }
            AdminCampaigns {}
        }
    }
}

#[component]
pub fn CreateCampaign() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto space-y-6",
            h1 { class: "text-2xl font-bold", "Create Campaign" }
            CampaignCreator {}
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        div {
            class: "space-y-6",
            AnalyticsPanel {}
        }
    }
}

#[component]
pub fn AdminSettings() -> Element {
    rsx! {
        div {
            class: "max-w-3xl space-y-6",
            SettingsPanel {}
        }
    }
}
