use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    AdminCampaignList, AdminLayout, AdminSettings, Analytics, AuthCallback, CreateCampaign,
    Dashboard, Donate, DonateCampaign, Fundraisers, Home, Login, NotFound, PublicLayout, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/fundraisers")]
        Fundraisers {},
        #[route("/donate")]
        Donate {},
        #[route("/donate/:campaign_id")]
        DonateCampaign { campaign_id: u64 },
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[route("/auth/callback")]
    AuthCallback {},
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/campaigns")]
            AdminCampaignList {},
            #[route("/campaigns/create")]
            CreateCampaign {},
            #[route("/analytics")]
            Analytics {},
            #[route("/settings")]
            AdminSettings {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "BlueRoot" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_BROWSER }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
