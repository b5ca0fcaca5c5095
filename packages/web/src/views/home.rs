use dioxus::prelude::*;
use ui::FeaturedCauses;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "bg-gradient-to-r from-blue-700 to-blue-900 text-white",
            div {
                class: "max-w-7xl mx-auto px-4 py-20 text-center space-y-6",
                h1 { class: "text-4xl md:text-5xl font-bold", "Fuel the causes that move you" }
                p {
                    class: "text-lg text-blue-100 max-w-2xl mx-auto",
                    "Support candidates, committees and causes working for change in your community."
                }
                div {
                    class: "flex justify-center gap-4",
                    Link {
                        to: "/donate",
                        class: "rounded-md bg-white text-blue-700 px-6 py-3 font-semibold hover:bg-blue-50",
                        "Donate Now"
                    }
                    Link {
                        to: "/fundraisers",
                        class: "rounded-md border border-white px-6 py-3 font-semibold hover:bg-blue-800",
                        "Browse Fundraisers"
                    }
                }
            }
        }
        section {
            class: "max-w-7xl mx-auto px-4 py-16 space-y-8",
            div {
                class: "text-center space-y-2",
                h2 { class: "text-3xl font-bold", "Featured Causes" }
                p { class: "text-gray-600", "Campaigns that need your support right now." }
            }
            FeaturedCauses {}
        }
    }
}
