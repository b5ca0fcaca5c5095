//! Campaign creation screens.
//!
//! | Variant            | Form                     | `campaign_type` |
//! |--------------------|--------------------------|-----------------|
//! | Basic Campaign     | [`BasicCampaignFormView`] | `basic`         |
//! | 501(c)(3)          | [`NonprofitFormView`]     | `501(c)(3)`     |
//! | 501(c)(4)          | [`NonprofitFormView`]     | `501(c)(4)`     |
//! | Political Campaign | [`CampaignWizardView`]    | picked in step 1 |
//!
//! Every form posts to `POST /create_campaign` and returns to the dashboard on success.

use api::{AppConfig, NewCampaign};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_config};
use crate::campaign_card::ProgressBar;
use crate::campaign_wizard::CampaignWizardView;
use crate::components::{
    use_toast, Button, ButtonVariant, Field, Input, Textarea, ToastOptions, Toasts, CONTROL_CLASS,
};
use crate::forms::campaign::{
    BasicCampaignForm, CreateVariant, NonprofitForm, NonprofitType, CREATED, CREATE_FAILED,
};
use crate::forms::FieldErrors;
use crate::format::money;
use crate::session::api_client;

/// Post a new campaign. Returns whether it was accepted.
pub async fn submit_campaign(config: AppConfig, payload: NewCampaign, toast: Toasts) -> bool {
    match api_client(&config).create_campaign(&payload).await {
        Ok(_) => {
            tracing::info!("Created {} campaign", payload.campaign_type);
            toast.success(CREATED.to_string(), ToastOptions::new());
            true
        }
        Err(e) => {
            tracing::error!("Error creating campaign: {}", e);
            toast.error(CREATE_FAILED.to_string(), ToastOptions::new().description(e.message));
            false
        }
    }
}

/// Variant picker above the selected create form.
#[component]
pub fn CampaignCreator() -> Element {
    let mut variant = use_signal(CreateVariant::default);

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "max-w-xs space-y-1.5",
                label { r#for: "campaign-variant", class: "block text-sm font-medium", "Campaign type" }
                select {
                    id: "campaign-variant",
                    class: CONTROL_CLASS,
                    value: variant().key(),
                    onchange: move |e| {
                        if let Some(picked) = CreateVariant::from_key(&e.value()) {
                            variant.set(picked);
                        }
                    },
                    for choice in CreateVariant::ALL {
                        option { key: "{choice.key()}", value: choice.key(), "{choice.label()}" }
                    }
                }
            }
            {match variant() {
                CreateVariant::Basic => rsx! { BasicCampaignFormView {} },
                CreateVariant::Nonprofit(kind) => rsx! {
                    NonprofitFormView { key: "{kind.campaign_type()}", kind: kind }
                },
                CreateVariant::Wizard => rsx! { CampaignWizardView {} },
            }}
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum BasicTab {
    Edit,
    Preview,
}

#[component]
pub fn BasicCampaignFormView() -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(BasicCampaignForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut tab = use_signal(|| BasicTab::Edit);
    let mut submitting = use_signal(|| false);

    let err = move |key: &str| errors.read().get(key).map(str::to_string);
    let bad = move |key: &str| errors.read().contains(key);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(email) = auth().email() else {
            toast.error("You must be signed in to create a campaign".to_string(), ToastOptions::new());
            return;
        };
        let payload = match form.read().validate(&email) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                tab.set(BasicTab::Edit);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);
        let config = config.clone();
        spawn(async move {
            if submit_campaign(config, payload, toast).await {
                form.set(BasicCampaignForm::default());
                nav.push("/admin");
            }
            submitting.set(false);
        });
    };

    let current = form();
    let edit_variant = tab_variant(tab() == BasicTab::Edit);
    let preview_variant = tab_variant(tab() == BasicTab::Preview);

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-6",
            div {
                class: "flex gap-2",
                Button { variant: edit_variant, onclick: move |_| tab.set(BasicTab::Edit), "Edit" }
                Button { variant: preview_variant, onclick: move |_| tab.set(BasicTab::Preview), "Preview" }
            }

            if tab() == BasicTab::Preview {
                div {
                    class: "rounded-lg border border-gray-200 overflow-hidden",
                    if !current.photo.trim().is_empty() {
                        img { class: "w-full h-48 object-cover", src: "{current.photo}", alt: "Campaign photo" }
                    }
                    div {
                        class: "p-5 space-y-3",
                        h3 { class: "text-xl font-semibold", "{current.preview_title()}" }
                        p { class: "text-sm text-gray-600", "{current.preview_description()}" }
                        ProgressBar { percent: 0.0 }
                        p { class: "text-sm text-gray-500", "{money(0.0)} raised of {money(current.preview_goal())} goal" }
                    }
                }
            } else {
                form {
                    class: "space-y-4",
                    novalidate: true,
                    onsubmit: onsubmit,
                    Field { label: "Title", html_for: "title", required: true, error: err("title"),
                        Input {
                            id: "title",
                            value: "{current.title}",
                            invalid: bad("title"),
                            oninput: move |e: FormEvent| {
                                form.write().title = e.value();
                                errors.write().clear("title");
                            },
                        }
                    }
                    Field { label: "Description", html_for: "description", required: true, error: err("description"),
                        Textarea {
                            id: "description",
                            rows: "5",
                            value: "{current.description}",
                            invalid: bad("description"),
                            oninput: move |e: FormEvent| {
                                form.write().description = e.value();
                                errors.write().clear("description");
                            },
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        Field { label: "Goal ($)", html_for: "goal", required: true, error: err("goal"),
                            Input {
                                id: "goal",
                                r#type: "number",
                                min: "1",
                                value: "{current.goal}",
                                invalid: bad("goal"),
                                oninput: move |e: FormEvent| {
                                    form.write().goal = e.value();
                                    errors.write().clear("goal");
                                },
                            }
                        }
                        Field { label: "End Date", html_for: "end_date", error: err("end_date"),
                            Input {
                                id: "end_date",
                                r#type: "date",
                                value: "{current.end_date}",
                                invalid: bad("end_date"),
                                oninput: move |e: FormEvent| {
                                    form.write().end_date = e.value();
                                    errors.write().clear("end_date");
                                },
                            }
                        }
                    }
                    Field { label: "Photo URL", html_for: "photo", error: err("photo"),
                        Input {
                            id: "photo",
                            r#type: "url",
                            placeholder: "https://",
                            value: "{current.photo}",
                            oninput: move |e: FormEvent| form.write().photo = e.value(),
                        }
                    }
                    div {
                        class: "flex justify-end gap-2",
                        Button {
                            r#type: "button",
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                form.set(BasicCampaignForm::default());
                                errors.set(FieldErrors::new());
                            },
                            "Reset"
                        }
                        Button {
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Creating..." } else { "Create Campaign" }
                        }
                    }
                }
            }
        }
    }
}

fn tab_variant(active: bool) -> ButtonVariant {
    if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    }
}

/// Registration form for 501(c)(3) and 501(c)(4) organizations.
#[component]
pub fn NonprofitFormView(kind: NonprofitType) -> Element {
    let config = use_config();
    let auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(NonprofitForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let err = move |key: &str| errors.read().get(key).map(str::to_string);
    let bad = move |key: &str| errors.read().contains(key);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(email) = auth().email() else {
            toast.error("You must be signed in to create a campaign".to_string(), ToastOptions::new());
            return;
        };
        let payload = match form.read().validate(kind, &email) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);
        let config = config.clone();
        spawn(async move {
            if submit_campaign(config, payload, toast).await {
                form.set(NonprofitForm::default());
                nav.push("/admin");
            }
            submitting.set(false);
        });
    };

    let current = form();
    let heading = match kind {
        NonprofitType::ThreeC => "501(c)(3) Nonprofit Registration",
        NonprofitType::FourC => "501(c)(4) Social Welfare Registration",
    };

    rsx! {
        form {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-4",
            novalidate: true,
            onsubmit: onsubmit,
            h2 { class: "text-xl font-semibold", "{heading}" }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                Field { label: "Organization Name", html_for: "organization_name", required: true, error: err("organization_name"),
                    Input {
                        id: "organization_name",
                        value: "{current.organization_name}",
                        invalid: bad("organization_name"),
                        oninput: move |e: FormEvent| {
                            form.write().organization_name = e.value();
                            errors.write().clear("organization_name");
                        },
                    }
                }
                Field { label: "EIN", html_for: "EIN", required: true, error: err("EIN"),
                    Input {
                        id: "EIN",
                        placeholder: "XX-XXXXXXX",
                        value: "{current.ein}",
                        invalid: bad("EIN"),
                        oninput: move |e: FormEvent| {
                            form.write().ein = e.value();
                            errors.write().clear("EIN");
                        },
                    }
                }
            }
            Field { label: "Address", html_for: "address", required: true, error: err("address"),
                Input {
                    id: "address",
                    value: "{current.address}",
                    invalid: bad("address"),
                    oninput: move |e: FormEvent| {
                        form.write().address = e.value();
                        errors.write().clear("address");
                    },
                }
            }
            Field { label: "Mission Statement", html_for: "mission_statement", required: true, error: err("mission_statement"),
                Textarea {
                    id: "mission_statement",
                    rows: "4",
                    value: "{current.mission_statement}",
                    invalid: bad("mission_statement"),
                    oninput: move |e: FormEvent| {
                        form.write().mission_statement = e.value();
                        errors.write().clear("mission_statement");
                    },
                }
            }
            Field { label: "Website", html_for: "website", error: err("website"),
                Input {
                    id: "website",
                    r#type: "url",
                    placeholder: "https://",
                    value: "{current.website}",
                    oninput: move |e: FormEvent| form.write().website = e.value(),
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                Field { label: "Contact Name", html_for: "contact_person_name", required: true, error: err("contact_person_name"),
                    Input {
                        id: "contact_person_name",
                        value: "{current.contact_person_name}",
                        invalid: bad("contact_person_name"),
                        oninput: move |e: FormEvent| {
                            form.write().contact_person_name = e.value();
                            errors.write().clear("contact_person_name");
                        },
                    }
                }
                Field { label: "Contact Email", html_for: "contact_person_email", required: true, error: err("contact_person_email"),
                    Input {
                        id: "contact_person_email",
                        r#type: "email",
                        value: "{current.contact_person_email}",
                        invalid: bad("contact_person_email"),
                        oninput: move |e: FormEvent| {
                            form.write().contact_person_email = e.value();
                            errors.write().clear("contact_person_email");
                        },
                    }
                }
                Field { label: "Contact Phone", html_for: "contact_person_number", required: true, error: err("contact_person_number"),
                    Input {
                        id: "contact_person_number",
                        r#type: "tel",
                        placeholder: "11 digits",
                        value: "{current.contact_person_number}",
                        invalid: bad("contact_person_number"),
                        oninput: move |e: FormEvent| {
                            form.write().contact_person_number = e.value();
                            errors.write().clear("contact_person_number");
                        },
                    }
                }
            }
            Field { label: "Fundraising Goal ($)", html_for: "goal", required: true, error: err("goal"),
                Input {
                    id: "goal",
                    r#type: "number",
                    min: "1",
                    value: "{current.goal}",
                    invalid: bad("goal"),
                    oninput: move |e: FormEvent| {
                        form.write().goal = e.value();
                        errors.write().clear("goal");
                    },
                }
            }
            div {
                class: "flex justify-end",
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Create Campaign" }
                }
            }
        }
    }
}
