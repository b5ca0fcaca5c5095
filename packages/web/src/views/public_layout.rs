use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar, page body and footer for every public page.
#[component]
pub fn PublicLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "bg-gray-900 text-gray-400 text-sm",
            div {
                class: "max-w-7xl mx-auto px-4 py-8 flex flex-col md:flex-row justify-between gap-4",
                p {
                    "Blue"
                    span { class: "text-blue-400", "Root" }
                    " connects donors with the campaigns and causes they care about."
                }
                p { "Contributions are not tax deductible." }
            }
        }
    }
}
