use api::Campaign;
use dioxus::prelude::*;

use crate::auth::use_config;
use crate::campaign_card::{use_campaign_details, CampaignCard, CampaignDetailModal};
use crate::components::{Button, ButtonVariant, CONTROL_CLASS};
use crate::icons::FaMagnifyingGlass;
use crate::listing::{CampaignQuery, Page, SortOrder, TypeFilter};
use crate::session::api_client;
use crate::Icon;

/// Searchable, sortable, paginated list of every campaign.
#[component]
pub fn CampaignBrowser() -> Element {
    let config = use_config();
    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(CampaignQuery::default);
    let mut page = use_signal(|| 1usize);
    let (details, open_details) = use_campaign_details();

    let _loader = use_resource(move || {
        let config = config.clone();
        async move {
            match api_client(&config).all_campaigns().await {
                Ok(list) => {
                    tracing::info!("Fetched {} campaigns", list.len());
                    campaigns.set(list);
                }
                Err(e) => {
                    tracing::error!("Error fetching campaigns: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    });

    if let Some(message) = error() {
        return rsx! {
            div {
                class: "text-center py-12",
                p { class: "text-red-500", "{message}" }
            }
        };
    }

    let all = campaigns.read();
    let matched: Vec<Campaign> = query.read().apply(&all).into_iter().cloned().collect();
    drop(all);
    let current = Page::of(&matched, page());
    let page_number = current.number;
    let has_previous = current.has_previous();
    let has_next = current.has_next();

    rsx! {
        div {
            class: "bg-gradient-to-r from-blue-50 to-white p-6 rounded-lg mb-8 shadow-md",
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div {
                    class: "relative",
                    span {
                        class: "absolute left-3 top-3 text-gray-400",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    }
                    input {
                        class: "{CONTROL_CLASS} pl-10",
                        r#type: "search",
                        placeholder: "Search campaigns...",
                        disabled: loading(),
                        value: "{query.read().search}",
                        oninput: move |evt: FormEvent| {
                            query.write().search = evt.value();
                            page.set(1);
                        },
                    }
                }
                select {
                    class: CONTROL_CLASS,
                    disabled: loading(),
                    value: query.read().filter.key(),
                    onchange: move |evt| {
                        query.write().filter = TypeFilter::from_key(&evt.value());
                        page.set(1);
                    },
                    for filter in TypeFilter::ALL {
                        option { key: "{filter.key()}", value: filter.key(), "{filter.label()}" }
                    }
                }
                select {
                    class: CONTROL_CLASS,
                    disabled: loading(),
                    value: query.read().sort.key(),
                    onchange: move |evt| query.write().sort = SortOrder::from_key(&evt.value()),
                    for sort in SortOrder::ALL {
                        option { key: "{sort.key()}", value: sort.key(), "{sort.label()}" }
                    }
                }
            }
        }

        if loading() {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for i in 0..6 {
                    div { key: "{i}", class: "animate-pulse h-96 rounded-lg bg-gray-100" }
                }
            }
        } else if current.items.is_empty() {
            div {
                class: "text-center py-12",
                p { "No campaigns found matching your criteria." }
            }
        } else {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for campaign in current.items.clone() {
                    CampaignCard {
                        key: "{campaign.id}",
                        loading: details.is_loading(campaign.id),
                        on_learn_more: move |id| open_details.call(id),
                        campaign: campaign.clone(),
                    }
                }
            }
        }

        if current.total_pages > 1 {
            div {
                class: "flex justify-center mt-8 space-x-2",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !has_previous,
                    onclick: move |_| page.set(page_number.saturating_sub(1).max(1)),
                    "Previous"
                }
                for n in 1..=current.total_pages {
                    Button {
                        key: "{n}",
                        variant: page_button_variant(n, page_number),
                        onclick: move |_| page.set(n),
                        "{n}"
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !has_next,
                    onclick: move |_| page.set(page_number + 1),
                    "Next"
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

fn page_button_variant(n: usize, current: usize) -> ButtonVariant {
    if n == current {
        ButtonVariant::Secondary
    } else {
        ButtonVariant::Outline
    }
}
