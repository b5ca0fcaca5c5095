//! Shell for every `/admin` page: sidebar navigation plus the page body.

use dioxus::prelude::*;
use ui::guard::{route_access, Access};
use ui::icons::{FaBullhorn, FaChartLine, FaGauge, FaGear, FaPlus};
use ui::{make_session, use_auth, use_config, Icon, LogoutButton};

use crate::Route;

#[component]
pub fn AdminLayout() -> Element {
    let mut auth = use_auth();
    let config = use_config();
    let nav = use_navigator();
    let path = use_route::<Route>().to_string();

    // Re-read the cookies on every navigation; the token may have expired
    // since the provider mounted.
    use_effect(use_reactive((&path,), move |(path,)| {
        let session = make_session(&config);
        let refreshed = auth.peek().refreshed(&session);
        if let Some(fresh) = refreshed {
            tracing::info!("Session cookies changed, refreshing auth state");
            auth.set(fresh);
        }
        if let Access::Redirect(to) = route_access(&path, session.is_authenticated()) {
            tracing::info!("Redirecting unauthenticated visitor to {}", to);
            nav.replace(to);
        }
    }));

    if !auth().authenticated {
        return rsx! {};
    }

    let name = auth().user.map(|u| u.display_name().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen flex bg-gray-50",
            aside {
                class: "hidden md:flex w-64 flex-col bg-white border-r border-gray-200",
                Link {
                    to: "/",
                    class: "px-6 py-5 text-xl font-bold",
                    "Blue"
                    span { class: "text-blue-600", "Root" }
                }
                nav {
                    class: "flex-1 px-3 space-y-1",
                    NavItem { to: "/admin", label: "Dashboard", current: path.clone(),
                        Icon { icon: FaGauge, width: 14, height: 14 }
                    }
                    NavItem { to: "/admin/campaigns", label: "Campaigns", current: path.clone(),
                        Icon { icon: FaBullhorn, width: 14, height: 14 }
                    }
                    NavItem { to: "/admin/analytics", label: "Analytics", current: path.clone(),
                        Icon { icon: FaChartLine, width: 14, height: 14 }
                    }
                    NavItem { to: "/admin/settings", label: "Settings", current: path.clone(),
                        Icon { icon: FaGear, width: 14, height: 14 }
                    }
                }
                div {
                    class: "p-4 border-t border-gray-200 space-y-3",
                    p { class: "text-sm text-gray-600 truncate", "{name}" }
                    LogoutButton {
                        label: "Sign Out",
                        class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm hover:bg-gray-50",
                    }
                }
            }
            div {
                class: "flex-1 flex flex-col min-w-0",
                header {
                    class: "flex items-center justify-between bg-white border-b border-gray-200 px-6 py-3",
                    nav {
                        class: "flex md:hidden gap-3 text-sm",
                        Link { to: "/admin", "Dashboard" }
                        Link { to: "/admin/campaigns", "Campaigns" }
                        Link { to: "/admin/analytics", "Analytics" }
                        Link { to: "/admin/settings", "Settings" }
                    }
                    div { class: "hidden md:block" }
                    Link {
                        to: "/admin/campaigns/create",
                        class: "inline-flex items-center gap-2 rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700",
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "New Campaign"
                    }
                }
                main {
                    class: "flex-1 p-6",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn nav_item_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium bg-blue-50 text-blue-700"
    } else {
        "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100"
    }
}

#[component]
fn NavItem(to: String, label: String, current: String, children: Element) -> Element {
    let active = current.trim_end_matches('/') == to.trim_end_matches('/');
    rsx! {
        Link {
            to: to,
            class: nav_item_class(active),
            {children}
            "{label}"
        }
    }
}
