//! Sign-up page. Accounts are created on first Google sign-in.

use dioxus::prelude::*;
use ui::guard::{route_access, Access};
use ui::{use_auth, GoogleSignInButton};

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut agreed = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if let Access::Redirect(to) = route_access("/signup", auth().authenticated) {
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
                    h1 { class: "text-2xl font-bold", "Create an account" }
                    p { class: "text-sm text-gray-500", "Start raising funds for the causes you care about" }
                }

                if let Some(message) = error() {
                    div { class: "p-3 rounded-md bg-red-50 text-sm text-red-700", "{message}" }
                }

                label {
                    class: "flex items-start gap-2 text-sm text-gray-600",
                    input {
                        r#type: "checkbox",
                        class: "mt-1",
                        checked: agreed(),
                        onchange: move |e: FormEvent| agreed.set(e.checked()),
                    }
                    span { "I agree to the terms of service and privacy policy" }
                }

                GoogleSignInButton {
                    label: "Sign up with Google",
                    disabled: !agreed(),
                    on_error: move |e: String| error.set(Some(e)),
                }

                p {
                    class: "text-center text-sm text-gray-600",
                    "Already have an account? "
                    Link { to: "/login", class: "text-blue-600 hover:underline", "Sign in" }
                }
            }
        }
    }
}
