use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaBars, FaXmark};
use crate::Icon;

const LINK_CLASS: &str = "text-gray-50 hover:text-blue-400 px-3 py-2 rounded-md font-medium";

/// Public site header. Shows the dashboard link instead of "Sign In" once a
/// session exists.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);
    let signed_in = auth().authenticated;

    rsx! {
        nav {
            class: "bg-gray-900 sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-20",
                Link {
                    to: "/",
                    class: "text-2xl font-bold text-white",
                    "Blue"
                    span { class: "text-blue-400", "Root" }
                }
                div {
                    class: "hidden md:flex items-center space-x-4",
                    Link { to: "/fundraisers", class: "{LINK_CLASS} text-lg", "Fundraisers" }
                    Link { to: "/donate", class: "{LINK_CLASS} text-lg", "Donate" }
                }
                div {
                    class: "hidden md:flex items-center space-x-3",
                    AccountLinks { signed_in: signed_in }
                }
                button {
                    class: "md:hidden text-gray-50 p-2",
                    "aria-label": "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                }
            }
            if menu_open() {
                div {
                    class: "md:hidden px-4 pb-4 space-y-1 border-t border-gray-700",
                    onclick: move |_| menu_open.set(false),
                    Link { to: "/fundraisers", class: "{LINK_CLASS} block", "Fundraisers" }
                    Link { to: "/donate", class: "{LINK_CLASS} block", "Donate" }
                    div {
                        class: "flex gap-3 pt-3",
                        AccountLinks { signed_in: signed_in }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountLinks(signed_in: bool) -> Element {
    rsx! {
        if signed_in {
            Link {
                to: "/admin",
                class: "rounded-md border border-gray-500 px-3 py-1.5 text-sm text-gray-50 hover:bg-gray-800",
                "Admin Dashboard"
            }
        } else {
            Link {
                to: "/login",
                class: "rounded-md border border-gray-500 px-3 py-1.5 text-sm text-gray-50 hover:bg-gray-800",
                "Sign In"
            }
        }
        Link {
            to: "/donate",
            class: "rounded-md bg-blue-600 hover:bg-blue-700 px-3 py-1.5 text-sm text-white",
            "Donate Now"
        }
    }
}
