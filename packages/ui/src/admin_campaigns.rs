use api::Campaign;
use dioxus::prelude::*;

use crate::auth::{use_auth, use_config};
use crate::campaign_card::ProgressBar;
use crate::components::{
    use_toast, Button, ButtonVariant, ConfirmDialog, Field, Input, ModalOverlay, Textarea,
    ToastOptions,
};
use crate::format::{end_date_label, money, progress_label};
use crate::forms::campaign::{
    EditCampaignForm, DELETED, DELETE_FAILED, UPDATED, UPDATE_FAILED,
};
use crate::forms::FieldErrors;
use crate::session::api_client;

/// The signed-in admin's campaigns with edit and delete actions.
#[component]
pub fn AdminCampaigns() -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Campaign>::None);
    let mut deleting = use_signal(|| Option::<Campaign>::None);
    let mut busy = use_signal(|| false);
    let mut revision = use_signal(|| 0u32);

    let loader_config = config.clone();
    let _loader = use_resource(move || {
        let config = loader_config.clone();
        let _ = revision();
        async move {
            let Some(email) = auth.peek().email() else {
                loading.set(false);
                return;
            };
            match api_client(&config).campaigns_by_owner(&email).await {
                Ok(list) => {
                    error.set(None);
                    campaigns.set(list);
                }
                Err(e) => {
                    tracing::error!("Error fetching campaigns: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(target) = deleting() else {
            return;
        };
        busy.set(true);
        let config = config.clone();
        spawn(async move {
            match api_client(&config).delete_campaign(target.id).await {
                Ok(_) => {
                    toast.success(DELETED.to_string(), ToastOptions::new());
                    campaigns.write().retain(|c| c.id != target.id);
                }
                Err(e) => {
                    tracing::error!("Error deleting campaign {}: {}", target.id, e);
                    toast.error(DELETE_FAILED.to_string(), ToastOptions::new().description(e.message));
                }
            }
            busy.set(false);
            deleting.set(None);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "space-y-4",
                for i in 0..3 {
                    div { key: "{i}", class: "animate-pulse h-24 rounded-lg bg-gray-100" }
                }
            }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            div {
                class: "text-center py-12 space-y-4",
                p { class: "text-red-500", "{message}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| revision += 1,
                    "Try again"
                }
            }
        };
    }

    rsx! {
        div {
            class: "space-y-4",
            if campaigns.read().is_empty() {
                div {
                    class: "text-center py-12 text-gray-500",
                    p { "You have not created any campaigns yet." }
                    Link { to: "/admin/campaigns/create", class: "text-blue-600 hover:underline", "Create your first campaign" }
                }
            }
            for campaign in campaigns() {
                AdminCampaignRow {
                    key: "{campaign.id}",
                    on_edit: move |c: Campaign| editing.set(Some(c)),
                    on_delete: move |c: Campaign| deleting.set(Some(c)),
                    campaign: campaign.clone(),
                }
            }
        }

        if let Some(campaign) = editing() {
            EditCampaignModal {
                key: "{campaign.id}",
                campaign: campaign,
                on_close: move |_| editing.set(None),
                on_saved: move |_| {
                    editing.set(None);
                    revision += 1;
                },
            }
        }

        if let Some(campaign) = deleting() {
            ConfirmDialog {
                title: "Delete campaign?",
                message: format!("\"{}\" will be removed permanently.", campaign.display_title()),
                busy: busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn AdminCampaignRow(
    campaign: Campaign,
    on_edit: EventHandler<Campaign>,
    on_delete: EventHandler<Campaign>,
) -> Element {
    let for_edit = campaign.clone();
    let for_delete = campaign.clone();
    let kind = campaign.campaign_type.clone().unwrap_or_else(|| "basic".to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-5 flex flex-col md:flex-row md:items-center gap-4",
            div {
                class: "flex-1 space-y-2",
                div {
                    class: "flex items-center gap-2",
                    h3 { class: "font-semibold text-gray-900", "{campaign.display_title()}" }
                    span { class: "rounded-full bg-gray-100 px-2 py-0.5 text-xs text-gray-600", "{kind}" }
                }
                ProgressBar { percent: campaign.progress_bar_width() }
                div {
                    class: "flex flex-wrap gap-4 text-sm text-gray-600",
                    span { "{money(campaign.amount_donated)} raised" }
                    span { "{progress_label(&campaign)}" }
                    span { "Ends {end_date_label(&campaign)}" }
                }
            }
            div {
                class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn EditCampaignModal(campaign: Campaign, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let id = campaign.id;
    let mut form = use_signal(|| EditCampaignForm::from_campaign(&campaign));
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let err = move |key: &str| errors.read().get(key).map(str::to_string);
    let bad = move |key: &str| errors.read().contains(key);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let email = auth().email().unwrap_or_default();
        let payload = match form.read().validate(&email) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        saving.set(true);
        let config = config.clone();
        spawn(async move {
            match api_client(&config).update_campaign(id, &payload).await {
                Ok(_) => {
                    toast.success(UPDATED.to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!("Error updating campaign {}: {}", id, e);
                    toast.error(UPDATE_FAILED.to_string(), ToastOptions::new().description(e.message));
                }
            }
            saving.set(false);
        });
    };

    let current = form();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            width: "max-w-lg",
            form {
                class: "p-6 space-y-4",
                novalidate: true,
                onsubmit: onsubmit,
                h2 { class: "text-lg font-semibold", "Edit Campaign" }
                Field { label: "Title", html_for: "edit-title", required: true, error: err("title"),
                    Input {
                        id: "edit-title",
                        value: "{current.title}",
                        invalid: bad("title"),
                        oninput: move |e: FormEvent| form.write().title = e.value(),
                    }
                }
                Field { label: "Description", html_for: "edit-description", required: true, error: err("description"),
                    Textarea {
                        id: "edit-description",
                        rows: "4",
                        value: "{current.description}",
                        invalid: bad("description"),
                        oninput: move |e: FormEvent| form.write().description = e.value(),
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    Field { label: "Goal ($)", html_for: "edit-goal", required: true, error: err("goal"),
                        Input {
                            id: "edit-goal",
                            r#type: "number",
                            value: "{current.goal}",
                            invalid: bad("goal"),
                            oninput: move |e: FormEvent| form.write().goal = e.value(),
                        }
                    }
                    Field { label: "End Date", html_for: "edit-end-date", required: true, error: err("end_date"),
                        Input {
                            id: "edit-end-date",
                            r#type: "date",
                            value: "{current.end_date}",
                            invalid: bad("end_date"),
                            oninput: move |e: FormEvent| form.write().end_date = e.value(),
                        }
                    }
                }
                Field { label: "Photo URL", html_for: "edit-photo", error: err("photo"),
                    Input {
                        id: "edit-photo",
                        r#type: "url",
                        value: "{current.photo}",
                        oninput: move |e: FormEvent| form.write().photo = e.value(),
                    }
                }
                div {
                    class: "flex justify-end gap-2 pt-2",
                    Button {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
