use api::Campaign;
use dioxus::prelude::*;
use ui::components::CONTROL_CLASS;
use ui::forms::donation::Party;
use ui::{api_client, use_config, DonationFormView};

/// `/donate`: general fund unless a campaign is picked.
#[component]
pub fn Donate() -> Element {
    rsx! {
        DonatePage { initial: None }
    }
}

/// `/donate/:campaign_id`: the campaign comes preselected.
#[component]
pub fn DonateCampaign(campaign_id: u64) -> Element {
    rsx! {
        DonatePage { key: "{campaign_id}", initial: Some(campaign_id) }
    }
}

#[component]
fn DonatePage(initial: Option<u64>) -> Element {
    let config = use_config();
    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| initial);
    let mut party = use_signal(Party::default);
    let mut attempt = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let config = config.clone();
        let _ = attempt();
        async move {
            loading.set(true);
            match api_client(&config).all_campaigns().await {
                Ok(list) => {
                    error.set(None);
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

    let chosen = selected().and_then(|id| campaigns.read().iter().find(|c| c.id == id).cloned());
    let selected_value = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-3xl mx-auto",
                h1 { class: "text-3xl font-bold text-center mb-2", "Make a Donation" }
                p {
                    class: "text-center text-gray-600 mb-8",
                    "Your contribution helps support important political campaigns and causes."
                }

                if let Some(message) = error() {
                    div {
                        class: "p-4 bg-red-100 text-red-700 rounded-md mb-8 text-center",
                        p { "{message}" }
                        button {
                            class: "mt-2 px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700",
                            onclick: move |_| attempt += 1,
                            "Try Again"
                        }
                    }
                } else if loading() {
                    div { class: "mb-8 h-40 rounded-lg bg-gray-100 animate-pulse" }
                } else {
                    div {
                        class: "mb-8 bg-white rounded-lg shadow-sm border-t-4 border-t-blue-600 p-6 space-y-4",
                        div {
                            h2 { class: "text-lg font-semibold", "Select Campaign" }
                            p { class: "text-sm text-gray-500", "Choose which campaign or cause you'd like to support with your donation." }
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                            div {
                                class: "md:col-span-2 space-y-1.5",
                                label { r#for: "campaign", class: "text-sm font-medium", "Campaign or Fund" }
                                select {
                                    id: "campaign",
                                    class: CONTROL_CLASS,
                                    value: "{selected_value}",
                                    onchange: move |e| selected.set(e.value().parse::<u64>().ok()),
                                    option { value: "", "General Fund" }
                                    for campaign in campaigns() {
                                        option {
                                            key: "{campaign.id}",
                                            value: "{campaign.id}",
                                            "{campaign.display_title()}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "space-y-1.5",
                                label { r#for: "party", class: "text-sm font-medium", "Party" }
                                select {
                                    id: "party",
                                    class: CONTROL_CLASS,
                                    onchange: move |e| party.set(Party::from_query(&e.value())),
                                    option { value: "all", "All" }
                                    option { value: "democratic", "Democratic" }
                                    option { value: "republican", "Republican" }
                                }
                            }
                        }
                        if let Some(campaign) = chosen {
                            div {
                                class: "p-4 bg-blue-50 border border-blue-200 rounded-lg",
                                h4 { class: "font-semibold text-blue-800 mb-2", "{campaign.display_title()}" }
                                p { class: "text-sm text-blue-700", "{campaign.description}" }
                                div {
                                    class: "mt-3 flex items-center gap-4 text-xs text-blue-600",
                                    span {
                                        class: "px-2 py-1 bg-blue-100 rounded-full capitalize",
                                        "{campaign.status.clone().unwrap_or_else(|| \"active\".to_string())} Campaign"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "bg-white rounded-lg shadow-lg border-t-4 border-t-gray-600 p-6 space-y-4",
                    div {
                        h2 { class: "text-lg font-semibold", "Donation Information" }
                        p { class: "text-sm text-gray-500", "Please fill out the form below to complete your donation." }
                    }
                    DonationFormView { campaign_id: selected(), party: party() }
                }

                div {
                    class: "mt-8 text-sm text-gray-500 bg-gray-50 p-4 rounded-md space-y-2",
                    p { "Contributions are not tax deductible. By proceeding with this transaction, you agree to the terms and conditions." }
                    p { "BlueRoot collects and processes donations in accordance with federal election laws and regulations." }
                }
            }
        }
    }
}
