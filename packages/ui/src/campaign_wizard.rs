use dioxus::prelude::*;

use crate::auth::{use_auth, use_config};
use crate::campaign_forms::submit_campaign;
use crate::components::{
    control_class, use_toast, Button, ButtonVariant, Field, FieldMessage, Input, Textarea,
    ToastOptions,
};
use crate::forms::donation::US_STATES;
use crate::forms::wizard::{
    CampaignWizard, WizardStep, CAMPAIGN_TYPES, CATEGORIES, MAX_VIDEOS, NOT_SPECIFIED,
    SHORT_DESCRIPTION_MAX,
};
use crate::forms::FieldErrors;
use crate::format::money;
use crate::forms::parse_positive_amount;

/// One labelled text input bound to a wizard field.
#[component]
fn WizardInput(
    id: String,
    label: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        Field { label: label, html_for: id.clone(), required: required, error: error,
            Input {
                id: "{id}",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                invalid: invalid,
                oninput: move |e: FormEvent| on_input.call(e.value()),
            }
        }
    }
}

#[component]
fn Toggle(id: String, label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "flex items-center gap-2 text-sm",
            r#for: "{id}",
            input {
                r#type: "checkbox",
                id: "{id}",
                checked: checked,
                onchange: move |e| on_change.call(e.checked()),
            }
            "{label}"
        }
    }
}

/// Five-step political campaign wizard.
#[component]
pub fn CampaignWizardView() -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut wizard = use_signal(CampaignWizard::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut video_url = use_signal(String::new);
    let mut video_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let err = move |key: &str| errors.read().get(key).map(str::to_string);

    let next = move |_: MouseEvent| {
        let advanced = wizard.write().next();
        match advanced {
            Ok(()) => errors.set(FieldErrors::new()),
            Err(found) => errors.set(found),
        }
    };
    let back = move |_: MouseEvent| {
        wizard.write().back();
        errors.set(FieldErrors::new());
    };
    let add_video = move |_: MouseEvent| {
        let url = video_url();
        let added = wizard.write().add_video(&url);
        match added {
            Ok(()) => {
                video_url.set(String::new());
                video_error.set(None);
            }
            Err(message) => video_error.set(Some(message.to_string())),
        }
    };
    let submit = move |_: MouseEvent| {
        let Some(email) = auth().email() else {
            toast.error("You must be signed in to create a campaign".to_string(), ToastOptions::new());
            return;
        };
        let result = wizard.read().to_payload(&email);
        let payload = match result {
            Ok(payload) => payload,
            Err((step, found)) => {
                errors.set(found);
                wizard.write().step = step;
                return;
            }
        };
        submitting.set(true);
        let config = config.clone();
        spawn(async move {
            if submit_campaign(config, payload, toast).await {
                wizard.set(CampaignWizard::default());
                nav.push("/admin");
            }
            submitting.set(false);
        });
    };

    let current = wizard();
    let step = current.step;
    let short_len = current.short_description.chars().count();
    let goal_label = parse_positive_amount(&current.funding_goal)
        .map(money)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let end_label = match current.end_date.trim() {
        "" => NOT_SPECIFIED.to_string(),
        d => d.to_string(),
    };
    let video_count = current.videos.len();

    let body = match step {
        WizardStep::Basics => rsx! {
            WizardInput {
                id: "title",
                label: "Campaign Title",
                required: true,
                value: current.title.clone(),
                error: err("title"),
                on_input: move |v: String| wizard.write().title = v,
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                Field { label: "Campaign Type", html_for: "campaignType", required: true, error: err("campaignType"),
                    select {
                        id: "campaignType",
                        class: control_class(errors.read().contains("campaignType")),
                        value: "{current.campaign_type}",
                        onchange: move |e| wizard.write().campaign_type = e.value(),
                        option { value: "", "Select type" }
                        for (key, label) in CAMPAIGN_TYPES {
                            option { key: "{key}", value: key, "{label}" }
                        }
                    }
                }
                Field { label: "Category", html_for: "category", error: None,
                    select {
                        id: "category",
                        class: control_class(false),
                        value: "{current.category}",
                        onchange: move |e| wizard.write().category = e.value(),
                        option { value: "", "Select category" }
                        for (key, label) in CATEGORIES {
                            option { key: "{key}", value: key, "{label}" }
                        }
                    }
                }
            }
            Field { label: "Short Description", html_for: "shortDescription", required: true, error: err("shortDescription"),
                Input {
                    id: "shortDescription",
                    value: "{current.short_description}",
                    invalid: errors.read().contains("shortDescription"),
                    oninput: move |e: FormEvent| wizard.write().short_description = e.value(),
                }
                p { class: "text-xs text-gray-500 text-right", "{short_len}/{SHORT_DESCRIPTION_MAX}" }
            }
            Field { label: "Full Description", html_for: "description", required: true, error: err("description"),
                Textarea {
                    id: "description",
                    rows: "6",
                    value: "{current.description}",
                    invalid: errors.read().contains("description"),
                    oninput: move |e: FormEvent| wizard.write().description = e.value(),
                }
            }
        },
        WizardStep::Goals => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                WizardInput {
                    id: "fundingGoal",
                    label: "Funding Goal ($)",
                    kind: "number",
                    required: true,
                    value: current.funding_goal.clone(),
                    error: err("fundingGoal"),
                    on_input: move |v: String| wizard.write().funding_goal = v,
                }
                WizardInput {
                    id: "endDate",
                    label: "End Date",
                    kind: "date",
                    value: current.end_date.clone(),
                    error: err("endDate"),
                    on_input: move |v: String| wizard.write().end_date = v,
                }
            }
        },
        WizardStep::Location => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                Field { label: "State", html_for: "state", error: None,
                    select {
                        id: "state",
                        class: control_class(false),
                        value: "{current.state}",
                        onchange: move |e| wizard.write().state = e.value(),
                        option { value: "", "Select state" }
                        for (code, name) in US_STATES {
                            option { key: "{code}", value: code, "{name}" }
                        }
                    }
                }
                WizardInput {
                    id: "district",
                    label: "District",
                    value: current.district.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().district = v,
                }
                WizardInput {
                    id: "city",
                    label: "City",
                    value: current.city.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().city = v,
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                WizardInput {
                    id: "candidateName",
                    label: "Candidate Name",
                    required: true,
                    value: current.candidate_name.clone(),
                    error: err("candidateName"),
                    on_input: move |v: String| wizard.write().candidate_name = v,
                }
                WizardInput {
                    id: "contactEmail",
                    label: "Contact Email",
                    kind: "email",
                    required: true,
                    value: current.contact_email.clone(),
                    error: err("contactEmail"),
                    on_input: move |v: String| wizard.write().contact_email = v,
                }
                WizardInput {
                    id: "contactPhone",
                    label: "Contact Phone",
                    kind: "tel",
                    value: current.contact_phone.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().contact_phone = v,
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                WizardInput {
                    id: "website",
                    label: "Website",
                    kind: "url",
                    placeholder: "https://",
                    value: current.website.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().website = v,
                }
                WizardInput {
                    id: "facebook",
                    label: "Facebook",
                    value: current.facebook.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().facebook = v,
                }
                WizardInput {
                    id: "twitter",
                    label: "Twitter",
                    value: current.twitter.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().twitter = v,
                }
                WizardInput {
                    id: "instagram",
                    label: "Instagram",
                    value: current.instagram.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().instagram = v,
                }
            }
        },
        WizardStep::Media => rsx! {
            div {
                class: "space-y-3",
                h3 { class: "font-medium", "Campaign Videos ({video_count}/{MAX_VIDEOS})" }
                div {
                    class: "flex gap-2",
                    Input {
                        id: "videoUrl",
                        placeholder: "YouTube or Vimeo URL",
                        value: "{video_url}",
                        invalid: video_error().is_some(),
                        oninput: move |e: FormEvent| video_url.set(e.value()),
                    }
                    Button {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        disabled: video_count >= MAX_VIDEOS,
                        onclick: add_video,
                        "Add"
                    }
                }
                FieldMessage { message: video_error() }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for (index, video) in current.videos.iter().enumerate() {
                        div {
                            key: "{video.url}",
                            class: "rounded-lg border border-gray-200 overflow-hidden",
                            img { class: "w-full h-32 object-cover", src: "{video.thumbnail()}", alt: "{video.title()}" }
                            div {
                                class: "flex items-center justify-between p-2 text-sm",
                                span { "{video.title()}" }
                                button {
                                    r#type: "button",
                                    class: "text-red-600 hover:underline",
                                    onclick: move |_| wizard.write().remove_video(index),
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "space-y-2",
                h3 { class: "font-medium", "Settings" }
                Toggle {
                    id: "isPublic",
                    label: "Make campaign public",
                    checked: current.is_public,
                    on_change: move |v: bool| wizard.write().is_public = v,
                }
                Toggle {
                    id: "allowAnonymous",
                    label: "Allow anonymous donations",
                    checked: current.allow_anonymous,
                    on_change: move |v: bool| wizard.write().allow_anonymous = v,
                }
                Toggle {
                    id: "sendUpdates",
                    label: "Send updates to donors",
                    checked: current.send_updates,
                    on_change: move |v: bool| wizard.write().send_updates = v,
                }
            }
        },
        WizardStep::Review => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                WizardInput {
                    id: "fecId",
                    label: "FEC ID",
                    value: current.fec_id.clone(),
                    error: None,
                    on_input: move |v: String| wizard.write().fec_id = v,
                }
                WizardInput {
                    id: "treasurerName",
                    label: "Treasurer Name",
                    required: true,
                    value: current.treasurer_name.clone(),
                    error: err("treasurerName"),
                    on_input: move |v: String| wizard.write().treasurer_name = v,
                }
                WizardInput {
                    id: "treasurerEmail",
                    label: "Treasurer Email",
                    kind: "email",
                    required: true,
                    value: current.treasurer_email.clone(),
                    error: err("treasurerEmail"),
                    on_input: move |v: String| wizard.write().treasurer_email = v,
                }
            }
            div {
                class: "rounded-lg bg-gray-50 p-4 space-y-1 text-sm",
                h3 { class: "font-medium mb-2", "Campaign Summary" }
                p { span { class: "text-gray-500", "Title: " } "{current.title}" }
                p { span { class: "text-gray-500", "Type: " } "{current.campaign_type_label()}" }
                p { span { class: "text-gray-500", "Goal: " } "{goal_label}" }
                p { span { class: "text-gray-500", "End Date: " } "{end_label}" }
                p { span { class: "text-gray-500", "Location: " } "{current.location_summary()}" }
                p { span { class: "text-gray-500", "Videos: " } "{video_count}" }
            }
            div {
                Toggle {
                    id: "agreeToTerms",
                    label: "I certify that this campaign complies with all applicable election laws",
                    checked: current.agree_to_terms,
                    on_change: move |v: bool| wizard.write().agree_to_terms = v,
                }
                FieldMessage { message: err("agreeToTerms") }
            }
        },
    };

    let step_number = step.number();
    let total = WizardStep::ALL.len();
    let progress = step_number as f64 / total as f64 * 100.0;
    let has_previous = step.previous().is_some();
    let is_last = step.is_last();

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-6",
            div {
                class: "space-y-2",
                div {
                    class: "flex justify-between text-sm text-gray-600",
                    span { "Step {step_number} of {total}" }
                    span { class: "font-medium", "{step.title()}" }
                }
                div {
                    class: "h-2 w-full rounded-full bg-gray-100",
                    div { class: "h-full rounded-full bg-blue-600", style: "width: {progress}%" }
                }
            }
            div { class: "space-y-4", {body} }
            div {
                class: "flex justify-between",
                Button {
                    r#type: "button",
                    variant: ButtonVariant::Outline,
                    disabled: !has_previous,
                    onclick: back,
                    "Back"
                }
                if is_last {
                    Button {
                        r#type: "button",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Creating..." } else { "Create Campaign" }
                    }
                } else {
                    Button { r#type: "button", onclick: next, "Next" }
                }
            }
        }
    }
}
