use api::{NotificationFlag, NotificationSettings, UserInfo};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_config};
use crate::components::{use_toast, ToastOptions};
use crate::session::api_client;

const EMAIL_FLAGS: [NotificationFlag; 3] = [
    NotificationFlag::EmailNotification,
    NotificationFlag::CampaignUpdate,
    NotificationFlag::DonationAlert,
];

const PUSH_FLAGS: [NotificationFlag; 3] = [
    NotificationFlag::PushNotification,
    NotificationFlag::PushCampaignUpdate,
    NotificationFlag::PushDonationAlert,
];

/// Flip one flag locally and return the value it had before.
pub fn toggle_flag(settings: &mut NotificationSettings, flag: NotificationFlag, value: bool) -> bool {
    let previous = settings.get(flag);
    settings.set(flag, value);
    previous
}

/// Profile card plus the notification switches.
#[component]
pub fn SettingsPanel() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Settings" }
            if let Some(user) = user {
                ProfileCard { user: user }
            }
            NotificationPreferences {}
        }
    }
}

#[component]
pub fn ProfileCard(user: UserInfo) -> Element {
    let initial = user
        .display_name()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 flex items-center gap-4",
            if let Some(picture) = user.picture.clone().filter(|p| !p.is_empty()) {
                img { class: "w-16 h-16 rounded-full object-cover", src: "{picture}", alt: "{user.display_name()}" }
            } else {
                div {
                    class: "w-16 h-16 rounded-full bg-blue-600 text-white flex items-center justify-center text-2xl font-semibold",
                    "{initial}"
                }
            }
            div {
                h2 { class: "text-lg font-semibold", "{user.display_name()}" }
                p { class: "text-sm text-gray-600", "{user.email}" }
            }
        }
    }
}

#[component]
fn NotificationPreferences() -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let mut settings = use_signal(NotificationSettings::default);
    let mut loading = use_signal(|| true);

    let loader_config = config.clone();
    let _loader = use_resource(move || {
        let config = loader_config.clone();
        async move {
            if let Some(email) = auth.peek().email() {
                match api_client(&config).settings(&email).await {
                    Ok(loaded) => settings.set(loaded),
                    Err(e) => {
                        tracing::error!("Failed to fetch settings: {}", e);
                        toast.error(
                            "Error".to_string(),
                            ToastOptions::new().description("Failed to load notification settings"),
                        );
                    }
                }
            }
            loading.set(false);
        }
    });

    let on_toggle = use_callback(move |(flag, value): (NotificationFlag, bool)| {
        let Some(email) = auth.peek().email() else {
            return;
        };
        toggle_flag(&mut settings.write(), flag, value);
        let config = config.clone();
        spawn(async move {
            match api_client(&config).update_setting(&email, flag, value).await {
                Ok(_) => toast.success(
                    "Success".to_string(),
                    ToastOptions::new().description("Notification settings updated"),
                ),
                Err(e) => {
                    tracing::error!("Failed to update {}: {}", flag.key(), e);
                    toggle_flag(&mut settings.write(), flag, !value);
                    toast.error(
                        "Error".to_string(),
                        ToastOptions::new().description("Failed to update settings"),
                    );
                }
            }
        });
    });

    let current = settings();

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-6",
            div {
                h2 { class: "text-lg font-semibold", "Notification Preferences" }
                p { class: "text-sm text-gray-500", "Choose how you want to be notified about important updates" }
            }
            if loading() {
                div {
                    class: "space-y-4",
                    for i in 0..6 {
                        div { key: "{i}", class: "h-6 rounded bg-gray-100 animate-pulse" }
                    }
                }
            } else {
                FlagGroup { title: "Email Notifications", flags: EMAIL_FLAGS.to_vec(), settings: current, on_toggle: on_toggle }
                FlagGroup { title: "Push Notifications", flags: PUSH_FLAGS.to_vec(), settings: current, on_toggle: on_toggle }
            }
        }
    }
}

#[component]
fn FlagGroup(
    title: String,
    flags: Vec<NotificationFlag>,
    settings: NotificationSettings,
    on_toggle: Callback<(NotificationFlag, bool)>,
) -> Element {
    rsx! {
        div {
            class: "space-y-3",
            h3 { class: "text-sm font-medium", "{title}" }
            for flag in flags {
                label {
                    key: "{flag.key()}",
                    class: "flex items-center justify-between text-sm",
                    r#for: "{flag.key()}",
                    span { "{flag.label()}" }
                    input {
                        r#type: "checkbox",
                        role: "switch",
                        id: "{flag.key()}",
                        checked: settings.get(flag),
                        onchange: move |e| on_toggle.call((flag, e.checked())),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_revert() {
        let mut settings = NotificationSettings::default();
        let before = toggle_flag(&mut settings, NotificationFlag::DonationAlert, false);
        assert!(before);
        assert!(!settings.donation_alert);

        toggle_flag(&mut settings, NotificationFlag::DonationAlert, true);
        assert_eq!(settings, NotificationSettings::default());
    }

    #[test]
    fn test_flag_groups_cover_every_flag() {
        let all: std::collections::HashSet<_> = EMAIL_FLAGS.iter().chain(PUSH_FLAGS.iter()).collect();
        assert_eq!(all.len(), NotificationFlag::ALL.len());
    }
}
