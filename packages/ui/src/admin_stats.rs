use api::{ActiveCampaigns, TotalRaised};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_config};
use crate::format::{money, thousands};
use crate::icons::{FaCalendar, FaDollarSign, FaUsers};
use crate::session::api_client;
use crate::Icon;

pub const NO_USER: &str = "No signed-in user";

/// One fetch behind a dashboard card: loading until it settles, then data or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
fn StatCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-3",
            div { class: "flex justify-between",
                div { class: "h-4 w-24 bg-gray-200 rounded animate-pulse" }
                div { class: "h-4 w-4 bg-gray-200 rounded animate-pulse" }
            }
            div { class: "h-8 w-16 bg-gray-200 rounded animate-pulse" }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between pb-2 text-gray-500",
                h3 { class: "text-sm font-medium text-gray-900", "{title}" }
                {icon}
            }
            div { class: "text-2xl font-bold", "{value}" }
        }
    }
}

#[component]
fn StatError(message: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-red-200 p-6 text-sm text-red-500",
            "Error: {message}"
        }
    }
}

/// Total raised, active campaigns and donor count for the signed-in admin.
#[component]
pub fn AdminStats() -> Element {
    let config = use_config();
    let auth = use_auth();
    let mut raised = use_signal(|| Fetch::<TotalRaised>::Loading);
    let mut active = use_signal(|| Fetch::<ActiveCampaigns>::Loading);

    let raised_config = config.clone();
    let _raised = use_resource(move || {
        let config = raised_config.clone();
        async move {
            let Some(email) = auth.peek().email() else {
                raised.set(Fetch::Failed(NO_USER.to_string()));
                return;
            };
            match api_client(&config).total_raised(&email).await {
                Ok(data) => raised.set(Fetch::Ready(data)),
                Err(e) => {
                    tracing::error!("Failed to fetch total raised: {}", e);
                    raised.set(Fetch::Failed(e.message));
                }
            }
        }
    });

    let _active = use_resource(move || {
        let config = config.clone();
        async move {
            let Some(email) = auth.peek().email() else {
                active.set(Fetch::Failed(NO_USER.to_string()));
                return;
            };
            match api_client(&config).active_campaigns(&email).await {
                Ok(data) => active.set(Fetch::Ready(data)),
                Err(e) => {
                    tracing::error!("Failed to fetch active campaigns: {}", e);
                    active.set(Fetch::Failed(e.message));
                }
            }
        }
    });

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
            {match raised() {
                Fetch::Loading => rsx! { StatCardSkeleton {} },
                Fetch::Failed(message) => rsx! { StatError { message: message } },
                Fetch::Ready(data) => rsx! {
                    StatCard {
                        title: "Total Raised",
                        value: money(data.total_raised),
                        icon: rsx! { Icon { icon: FaDollarSign, width: 14, height: 14 } },
                    }
                },
            }}
            {match active() {
                Fetch::Loading => rsx! {
                    StatCardSkeleton {}
                    StatCardSkeleton {}
                },
                Fetch::Failed(message) => rsx! { StatError { message: message } },
                Fetch::Ready(data) => rsx! {
                    StatCard {
                        title: "Active Campaigns",
                        value: thousands(data.total_campaigns as f64),
                        icon: rsx! { Icon { icon: FaCalendar, width: 14, height: 14 } },
                    }
                    StatCard {
                        title: "Total Donors",
                        value: thousands(data.total_donors as f64),
                        icon: rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
                    }
                },
            }}
        }
    }
}
