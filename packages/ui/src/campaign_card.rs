//! Campaign cards, the progress bar and the "Learn more" detail modal.

use api::Campaign;
use dioxus::prelude::*;

use crate::auth::use_config;
use crate::components::{use_toast, Button, ButtonVariant, ModalOverlay, ToastOptions};
use crate::format::{end_date_label, money, progress_label, raised_of_goal, thousands};
use crate::icons::{
    FaCheckToSlot, FaGraduationCap, FaHeart, FaHouse, FaLeaf, FaScaleBalanced, FaUsers,
};
use crate::listing::{CampaignKind, Category};
use crate::session::api_client;
use crate::Icon;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let width = percent.clamp(0.0, 100.0);
    rsx! {
        div {
            class: "h-2 w-full rounded-full bg-gray-100 overflow-hidden",
            role: "progressbar",
            "aria-valuenow": "{width:.0}",
            div {
                class: "h-full bg-blue-600 transition-all",
                style: "width: {width}%",
            }
        }
    }
}

#[component]
pub fn CategoryIcon(category: Category) -> Element {
    let icon = match category {
        Category::Climate => rsx! { Icon { icon: FaLeaf, width: 22, height: 22 } },
        Category::Health => rsx! { Icon { icon: FaHeart, width: 22, height: 22 } },
        Category::Education => rsx! { Icon { icon: FaGraduationCap, width: 22, height: 22 } },
        Category::Justice => rsx! { Icon { icon: FaScaleBalanced, width: 22, height: 22 } },
        Category::Housing => rsx! { Icon { icon: FaHouse, width: 22, height: 22 } },
        Category::Voting => rsx! { Icon { icon: FaCheckToSlot, width: 22, height: 22 } },
        Category::Default => rsx! { Icon { icon: FaUsers, width: 22, height: 22 } },
    };
    rsx! {
        div {
            class: "w-12 h-12 bg-gradient-to-r {category.gradient()} rounded-lg flex items-center justify-center text-white",
            {icon}
        }
    }
}

/// Card used by the fundraisers listing.
#[component]
pub fn CampaignCard(campaign: Campaign, loading: bool, on_learn_more: EventHandler<u64>) -> Element {
    let id = campaign.id;
    let kind = CampaignKind::of(&campaign);
    let photo = campaign
        .photo
        .clone()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden flex flex-col hover:shadow-lg transition-shadow",
            div {
                class: "relative h-48 bg-gray-100",
                img { class: "object-cover w-full h-full", src: "{photo}", alt: "{campaign.title}" }
                span {
                    class: "absolute top-2 right-2 rounded-full bg-blue-600 px-2 py-0.5 text-xs text-white",
                    "Active"
                }
            }
            div {
                class: "p-5 flex-1 space-y-3",
                div {
                    class: "flex justify-between items-start gap-2",
                    div {
                        h3 { class: "text-lg font-semibold text-gray-900", "{campaign.display_title()}" }
                        p { class: "text-sm text-gray-600 line-clamp-3", "{campaign.description}" }
                    }
                    span {
                        class: "shrink-0 rounded-full border border-gray-300 px-2 py-0.5 text-xs text-gray-700",
                        "{kind.label()}"
                    }
                }
                div {
                    class: "space-y-2",
                    div {
                        class: "flex justify-between text-sm",
                        span { class: "font-medium", "{money(campaign.amount_donated)} raised" }
                        if campaign.progress_percent().is_some() {
                            span { class: "text-gray-500", "{money(campaign.goal)} goal" }
                        }
                    }
                    ProgressBar { percent: campaign.progress_bar_width() }
                    p { class: "text-xs text-gray-500 text-right", "{progress_label(&campaign)}" }
                }
            }
            div {
                class: "flex justify-between gap-2 px-5 pb-5",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: loading,
                    onclick: move |_| on_learn_more.call(id),
                    if loading { "Loading..." } else { "Learn More" }
                }
                Link {
                    to: "/donate/{id}",
                    class: "inline-flex items-center rounded-md bg-blue-600 hover:bg-blue-700 px-4 py-2 text-sm font-medium text-white",
                    "Donate"
                }
            }
        }
    }
}

/// Handle for fetching one campaign and showing it in a modal.
#[derive(Clone, Copy, PartialEq)]
pub struct CampaignDetails {
    pub selected: Signal<Option<Campaign>>,
    pub loading: Signal<Option<u64>>,
}

impl CampaignDetails {
    pub fn is_loading(&self, id: u64) -> bool {
        (self.loading)() == Some(id)
    }

    pub fn close(&self) {
        let mut selected = self.selected;
        selected.set(None);
    }
}

/// Fetch-on-demand state behind every "Learn more" button.
pub fn use_campaign_details() -> (CampaignDetails, Callback<u64>) {
    let config = use_config();
    let toast = use_toast();
    let details = CampaignDetails {
        selected: use_signal(|| None),
        loading: use_signal(|| None),
    };

    let open = use_callback(move |id: u64| {
        let config = config.clone();
        let CampaignDetails {
            mut selected,
            mut loading,
        } = details;
        if loading().is_some() {
            return;
        }
        loading.set(Some(id));
        spawn(async move {
            match api_client(&config).single_campaign(id).await {
                Ok(campaign) => selected.set(Some(campaign)),
                Err(e) => {
                    tracing::error!("Failed to fetch campaign details: {}", e);
                    toast.error(
                        "Could not load campaign".to_string(),
                        ToastOptions::new().description(e.message),
                    );
                }
            }
            loading.set(None);
        });
    });

    (details, open)
}

#[component]
pub fn CampaignDetailModal(campaign: Campaign, on_close: EventHandler<()>) -> Element {
    let photo = campaign
        .photo
        .clone()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let status = campaign.status.clone().unwrap_or_else(|| "active".to_string());
    let status_class = if status == "urgent" {
        "bg-red-600 text-white"
    } else {
        "bg-blue-600 text-white"
    };
    let about = match campaign.mission_statement.as_deref() {
        Some(mission) if !mission.trim().is_empty() => {
            format!("{} {}", campaign.description, mission).trim().to_string()
        }
        _ => campaign.description.clone(),
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            width: "max-w-2xl",
            div {
                class: "p-6 space-y-4",
                div {
                    class: "flex justify-between items-start",
                    h2 { class: "text-xl font-semibold text-gray-900", "{campaign.display_title()}" }
                    button {
                        class: "text-gray-400 hover:text-gray-600 text-xl leading-none",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    class: "h-64 w-full rounded-lg overflow-hidden bg-gray-100",
                    img { class: "object-cover w-full h-full", src: "{photo}", alt: "{campaign.title}" }
                }
                div {
                    h4 { class: "font-medium mb-2", "Description" }
                    p { class: "text-sm text-gray-600", "{about}" }
                }
                div {
                    class: "grid grid-cols-2 gap-4 text-sm",
                    div {
                        h4 { class: "font-medium mb-2", "Status" }
                        span { class: "rounded-full px-2 py-0.5 text-xs {status_class}", "{status}" }
                    }
                    div {
                        h4 { class: "font-medium mb-2", "Ends" }
                        p { class: "text-gray-600", "{end_date_label(&campaign)}" }
                    }
                    div {
                        h4 { class: "font-medium mb-2", "Raised" }
                        p { class: "text-gray-600", "{raised_of_goal(&campaign)}" }
                    }
                    div {
                        h4 { class: "font-medium mb-2", "Supporters" }
                        p { class: "text-gray-600", "{thousands(campaign.supporter as f64)}" }
                    }
                }
                ProgressBar { percent: campaign.progress_bar_width() }
                div {
                    class: "flex justify-end pt-2",
                    Link {
                        to: "/donate/{campaign.id}",
                        class: "inline-flex items-center rounded-md bg-blue-600 hover:bg-blue-700 px-4 py-2 text-sm font-medium text-white",
                        "Donate to this campaign"
                    }
                }
            }
        }
    }
}
