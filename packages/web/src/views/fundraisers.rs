use dioxus::prelude::*;
use ui::CampaignBrowser;

#[component]
pub fn Fundraisers() -> Element {
    rsx! {
        div {
            class: "container mx-auto px-4 py-12",
            div {
                class: "max-w-6xl mx-auto",
                h1 { class: "text-3xl font-bold mb-2", "Active Fundraising Campaigns" }
                p { class: "text-gray-600 mb-8", "Browse and support ongoing political campaigns and causes." }
                CampaignBrowser {}
            }
        }
    }
}
