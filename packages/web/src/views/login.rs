//! Login page view with the Google sign-in button.

use dioxus::prelude::*;
use ui::guard::{route_access, Access};
use ui::{use_auth, GoogleSignInButton};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    // Signed-in users go home
    use_effect(move || {
        if let Access::Redirect(to) = route_access("/login", auth().authenticated) {
            nav.replace(to);
        }
    });

    rsx! {
        div {
            class: "min-h-[70vh] flex items-center justify-center px-4 py-12",
            div {
                class: "w-full max-w-md bg-white rounded-lg shadow-md p-8 space-y-6",
                div {
                    class: "text-center space-y-1",
                    h1 { class: "text-2xl font-bold", "Welcome back" }
                    p { class: "text-sm text-gray-500", "Sign in to manage your campaigns" }
                }

                if let Some(message) = error() {
                    div { class: "p-3 rounded-md bg-red-50 text-sm text-red-700", "{message}" }
                }

                GoogleSignInButton {
                    label: "Sign in with Google",
                    on_error: move |e: String| error.set(Some(e)),
                }

                p {
                    class: "text-center text-sm text-gray-600",
                    "Don't have an account? "
                    Link { to: "/signup", class: "text-blue-600 hover:underline", "Sign up" }
                }
            }
        }
    }
}
