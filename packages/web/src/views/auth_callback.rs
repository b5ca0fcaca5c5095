//! Landing page for the Google redirect.

use dioxus::prelude::*;
use ui::{api_client, finish_sign_in, make_session, use_auth, use_config, AuthState};

/// Fragment of the current URL, `#id_token=...`.
fn location_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
pub fn AuthCallback() -> Element {
    let config = use_config();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    let _exchange = use_resource(move || {
        let config = config.clone();
        async move {
            let session = make_session(&config);
            match finish_sign_in(&api_client(&config), &session, &location_fragment()).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.email);
                    auth.set(AuthState::from_session(&session));
                    nav.replace("/admin");
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    error.set(Some(e));
                }
            }
        }
    });

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center px-4",
            if let Some(message) = error() {
                div {
                    class: "max-w-md w-full bg-white rounded-lg shadow-md p-8 text-center space-y-4",
                    h1 { class: "text-xl font-semibold text-red-700", "Sign-in failed" }
                    p { class: "text-sm text-gray-600", "{message}" }
                    Link { to: "/login", class: "inline-block text-blue-600 hover:underline", "Back to sign in" }
                }
            } else {
                div {
                    class: "text-center space-y-3",
                    div { class: "mx-auto h-10 w-10 rounded-full border-4 border-blue-200 border-t-blue-600 animate-spin" }
                    p { class: "text-gray-600", "Signing you in..." }
                }
            }
        }
    }
}
