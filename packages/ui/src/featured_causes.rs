use api::Campaign;
use dioxus::prelude::*;

use crate::auth::use_config;
use crate::campaign_card::{use_campaign_details, CampaignDetailModal, CategoryIcon, ProgressBar};
use crate::format::{money, progress_label, thousands};
use crate::icons::{FaDollarSign, FaUsers};
use crate::listing::{Category, Urgency};
use crate::session::api_client;
use crate::Icon;

pub const FEATURED_COUNT: usize = 6;

/// First six campaigns with category, urgency and supporter stats.
#[component]
pub fn FeaturedCauses() -> Element {
    let config = use_config();
    let mut causes = use_signal(Vec::<Campaign>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let (details, open_details) = use_campaign_details();

    let _loader = use_resource(move || {
        let config = config.clone();
        async move {
            match api_client(&config).all_campaigns().await {
                Ok(list) => causes.set(list.into_iter().take(FEATURED_COUNT).collect()),
                Err(e) => {
                    tracing::error!("Error fetching causes: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for i in 0..FEATURED_COUNT {
                    div {
                        key: "{i}",
                        class: "animate-pulse rounded-lg border border-gray-200 p-6 space-y-4",
                        div { class: "h-12 w-12 bg-gray-200 rounded-lg" }
                        div { class: "h-6 w-3/4 bg-gray-200 rounded" }
                        div { class: "h-4 bg-gray-200 rounded" }
                        div { class: "h-2 bg-gray-200 rounded-full" }
                    }
                }
            }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            div { class: "text-center py-8", p { class: "text-red-500", "{message}" } }
        };
    }

    if causes.read().is_empty() {
        return rsx! {
            div { class: "text-center py-8", p { "No featured causes found" } }
        };
    }

    let today = chrono::Local::now().date_naive();

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for cause in causes() {
                FeaturedCauseCard {
                    key: "{cause.id}",
                    urgency: Urgency::of(&cause, today),
                    loading: details.is_loading(cause.id),
                    on_learn_more: move |id| open_details.call(id),
                    cause: cause.clone(),
                }
            }
        }
        if let Some(selected) = (details.selected)() {
            CampaignDetailModal {
                campaign: selected,
                on_close: move |_| details.close(),
            }
        }
    }
}

#[component]
fn FeaturedCauseCard(
    cause: Campaign,
    urgency: Urgency,
    loading: bool,
    on_learn_more: EventHandler<u64>,
) -> Element {
    let id = cause.id;
    let category = Category::of(&cause.display_title());
    let average = cause
        .average_gift()
        .map(thousands)
        .unwrap_or_else(|| "0".to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-4 hover:shadow-lg transition-all duration-300 hover:-translate-y-1",
            div {
                class: "flex items-center justify-between",
                CategoryIcon { category: category }
                span {
                    class: "text-xs font-medium px-2 py-1 rounded-full {urgency.badge_class()}",
                    "{urgency.label()}"
                }
            }
            div {
                h3 { class: "text-xl font-bold text-gray-900 mb-2", "{cause.display_title()}" }
                p { class: "text-gray-600 text-sm leading-relaxed line-clamp-3", "{cause.description}" }
            }
            div {
                class: "space-y-3",
                div {
                    div {
                        class: "flex justify-between text-sm mb-2",
                        span { class: "text-gray-600", "Progress" }
                        span {
                            class: "font-medium",
                            if cause.progress_percent().is_some() {
                                "{money(cause.amount_donated)} of {money(cause.goal)}"
                            } else {
                                "{money(cause.amount_donated)}"
                            }
                        }
                    }
                    ProgressBar { percent: cause.progress_bar_width() }
                    div { class: "text-right text-xs text-gray-500 mt-1", "{progress_label(&cause)}" }
                }
                div {
                    class: "flex items-center justify-between text-sm text-gray-600",
                    div {
                        class: "flex items-center gap-1",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        "{thousands(cause.supporter as f64)} supporters"
                    }
                    div {
                        class: "flex items-center gap-1",
                        Icon { icon: FaDollarSign, width: 14, height: 14 }
                        "{average} avg"
                    }
                }
            }
            div {
                class: "flex gap-2 pt-2",
                Link {
                    to: "/donate/{id}",
                    class: "flex-1 text-center rounded-md bg-blue-600 hover:bg-blue-700 px-4 py-2 text-sm font-medium text-white",
                    "Donate"
                }
                button {
                    class: "flex-1 rounded-md border border-neutral-300 px-4 py-2 text-sm hover:bg-neutral-50 disabled:opacity-50",
                    disabled: loading,
                    onclick: move |_| on_learn_more.call(id),
                    if loading { "Loading..." } else { "Learn More" }
                }
            }
        }
    }
}
