use dioxus::prelude::*;

use crate::auth::use_config;
use crate::components::{control_class, use_toast, Field, FieldMessage, Input, ToastOptions};
use crate::forms::donation::{
    expiry_months, expiry_years_from_today, success_message, Cause, DonationForm, Party,
    SubmitFailure, AMOUNT_PRESETS, CUSTOM_AMOUNT, US_STATES,
};
use crate::forms::patterns::format_card_number;
use crate::forms::FieldErrors;
use crate::session::api_client;

const SECTION_TITLE: &str = "text-lg font-semibold";

/// Public donation form. Submits to `POST /donate`, optionally for one campaign.
#[component]
pub fn DonationFormView(
    campaign_id: Option<u64>,
    #[props(default)] party: Party,
) -> Element {
    let config = use_config();
    let toast = use_toast();
    let mut form = use_signal(DonationForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut banner = use_signal(|| Option::<(bool, String)>::None);
    let mut submitting = use_signal(|| false);

    let err = move |key: &str| errors.read().get(key).map(str::to_string);
    let bad = move |key: &str| errors.read().contains(key);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        banner.set(None);

        let request = match form.read().validate(campaign_id) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);

        let config = config.clone();
        spawn(async move {
            tracing::info!("Submitting donation of {}", request.amount);
            match api_client(&config).donate(&request).await {
                Ok(_) => {
                    let message = success_message(request.amount, request.campaign_id);
                    toast.success(message.clone(), ToastOptions::new());
                    banner.set(Some((true, message)));
                    form.set(DonationForm::default());
                }
                Err(e) => {
                    tracing::error!("Donation error: {}", e);
                    let failure = SubmitFailure::from_api_error(&e);
                    if !failure.fields.is_empty() {
                        errors.set(failure.fields);
                    }
                    toast.error(failure.banner.clone(), ToastOptions::new());
                    banner.set(Some((false, failure.banner)));
                }
            }
            submitting.set(false);
        });
    };

    let years = expiry_years_from_today();
    let current = form();

    rsx! {
        form {
            class: "space-y-6",
            novalidate: true,
            onsubmit: onsubmit,

            if let Some((ok, message)) = banner() {
                div {
                    class: "p-4 rounded-lg border {banner_class(ok)}",
                    "{message}"
                }
            }

            if let Some(id) = campaign_id {
                div {
                    class: "p-4 bg-blue-50 border border-blue-200 rounded-lg",
                    p { class: "text-sm font-medium text-blue-800", "Donating to Campaign ID: {id}" }
                    p { class: "text-xs text-blue-600 mt-1", "Your contribution will be directed to this specific campaign." }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Personal Information" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    Field { label: "First Name", html_for: "firstName", required: true, error: err("firstName"),
                        Input {
                            id: "firstName",
                            value: "{current.first_name}",
                            invalid: bad("firstName"),
                            oninput: move |e: FormEvent| {
                                form.write().first_name = e.value();
                                errors.write().clear("firstName");
                            },
                        }
                    }
                    Field { label: "Last Name", html_for: "lastName", required: true, error: err("lastName"),
                        Input {
                            id: "lastName",
                            value: "{current.last_name}",
                            invalid: bad("lastName"),
                            oninput: move |e: FormEvent| {
                                form.write().last_name = e.value();
                                errors.write().clear("lastName");
                            },
                        }
                    }
                    Field { label: "Email", html_for: "email", required: true, error: err("email"),
                        Input {
                            id: "email",
                            r#type: "email",
                            value: "{current.email}",
                            invalid: bad("email"),
                            oninput: move |e: FormEvent| {
                                form.write().email = e.value();
                                errors.write().clear("email");
                            },
                        }
                    }
                    Field { label: "Phone", html_for: "phone", required: true, error: err("phone"),
                        Input {
                            id: "phone",
                            r#type: "tel",
                            placeholder: "555-123-4567",
                            value: "{current.phone}",
                            invalid: bad("phone"),
                            oninput: move |e: FormEvent| {
                                form.write().phone = e.value();
                                errors.write().clear("phone");
                            },
                        }
                    }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Address Information" }
                Field { label: "Street Address", html_for: "address", required: true, error: err("address"),
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
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    Field { label: "City", html_for: "city", required: true, error: err("city"),
                        Input {
                            id: "city",
                            value: "{current.city}",
                            invalid: bad("city"),
                            oninput: move |e: FormEvent| {
                                form.write().city = e.value();
                                errors.write().clear("city");
                            },
                        }
                    }
                    Field { label: "State", html_for: "state", required: true, error: err("state"),
                        select {
                            id: "state",
                            class: control_class(bad("state")),
                            value: "{current.state}",
                            onchange: move |e| {
                                form.write().state = e.value();
                                errors.write().clear("state");
                            },
                            option { value: "", "Select state" }
                            for (code, name) in US_STATES {
                                option { key: "{code}", value: code, "{name}" }
                            }
                        }
                    }
                    Field { label: "ZIP Code", html_for: "zip", required: true, error: err("zip"),
                        Input {
                            id: "zip",
                            value: "{current.zip}",
                            invalid: bad("zip"),
                            oninput: move |e: FormEvent| {
                                form.write().zip = e.value();
                                errors.write().clear("zip");
                            },
                        }
                    }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Employment Information" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    Field { label: "Occupation", html_for: "occupation", required: true, error: err("occupation"),
                        Input {
                            id: "occupation",
                            value: "{current.occupation}",
                            invalid: bad("occupation"),
                            oninput: move |e: FormEvent| {
                                form.write().occupation = e.value();
                                errors.write().clear("occupation");
                            },
                        }
                    }
                    Field { label: "Employer", html_for: "employer", error: err("employer"),
                        Input {
                            id: "employer",
                            value: "{current.employer}",
                            oninput: move |e: FormEvent| form.write().employer = e.value(),
                        }
                    }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Donation Amount" }
                div {
                    class: "grid grid-cols-3 md:grid-cols-6 gap-3",
                    for preset in AMOUNT_PRESETS {
                        AmountOption {
                            key: "{preset}",
                            value: preset.to_string(),
                            label: format!("${preset}"),
                            selected: current.donation_amount == preset.to_string(),
                            on_select: move |value: String| {
                                form.write().donation_amount = value;
                                errors.write().clear("donationAmount");
                            },
                        }
                    }
                    AmountOption {
                        value: CUSTOM_AMOUNT.to_string(),
                        label: "Other".to_string(),
                        selected: current.is_custom_amount(),
                        on_select: move |value: String| {
                            form.write().donation_amount = value;
                            errors.write().clear("donationAmount");
                        },
                    }
                }
                FieldMessage { message: err("donationAmount") }
                if current.is_custom_amount() {
                    Field { label: "Custom Amount ($)", html_for: "customAmount", required: true, error: err("customAmount"),
                        Input {
                            id: "customAmount",
                            r#type: "number",
                            min: "1",
                            step: "0.01",
                            value: "{current.custom_amount}",
                            invalid: bad("customAmount"),
                            oninput: move |e: FormEvent| {
                                form.write().custom_amount = e.value();
                                errors.write().clear("customAmount");
                            },
                        }
                    }
                }
                label {
                    class: "flex items-start gap-2",
                    input {
                        r#type: "checkbox",
                        id: "recurring",
                        checked: current.recurring,
                        onchange: move |e| form.write().recurring = e.checked(),
                    }
                    span {
                        span { class: "text-sm font-medium", "Make this a monthly recurring donation" }
                        p { class: "text-xs text-gray-500", "You can cancel your recurring donation at any time." }
                    }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Select Causes to Support" }
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                    for cause in Cause::ALL {
                        label {
                            key: "{cause.id()}",
                            class: "flex items-center gap-2 text-sm",
                            input {
                                r#type: "checkbox",
                                id: "cause-{cause.id()}",
                                checked: current.causes.contains(&cause),
                                onchange: move |_| form.write().toggle_cause(cause),
                            }
                            "{cause.label()}"
                        }
                    }
                }
            }

            section {
                class: "space-y-4",
                h3 { class: SECTION_TITLE, "Payment Information" }
                Field { label: "Card Number", html_for: "cardNumber", required: true, error: err("cardNumber"),
                    Input {
                        id: "cardNumber",
                        placeholder: "1234 5678 9012 3456",
                        maxlength: "19",
                        value: "{current.card_number}",
                        invalid: bad("cardNumber"),
                        oninput: move |e: FormEvent| {
                            form.write().card_number = format_card_number(&e.value());
                            errors.write().clear("cardNumber");
                        },
                    }
                }
                div {
                    class: "grid grid-cols-3 gap-4",
                    Field { label: "Month", html_for: "expiryMonth", required: true, error: err("expiryMonth"),
                        select {
                            id: "expiryMonth",
                            class: control_class(bad("expiryMonth")),
                            value: "{current.expiry_month}",
                            onchange: move |e| {
                                form.write().expiry_month = e.value();
                                errors.write().clear("expiryMonth");
                            },
                            option { value: "", "MM" }
                            for month in expiry_months() {
                                option { key: "{month}", value: "{month}", "{month}" }
                            }
                        }
                    }
                    Field { label: "Year", html_for: "expiryYear", required: true, error: err("expiryYear"),
                        select {
                            id: "expiryYear",
                            class: control_class(bad("expiryYear")),
                            value: "{current.expiry_year}",
                            onchange: move |e| {
                                form.write().expiry_year = e.value();
                                errors.write().clear("expiryYear");
                            },
                            option { value: "", "YYYY" }
                            for year in years {
                                option { key: "{year}", value: "{year}", "{year}" }
                            }
                        }
                    }
                    Field { label: "CVV", html_for: "cvv", required: true, error: err("cvv"),
                        Input {
                            id: "cvv",
                            maxlength: "4",
                            value: "{current.cvv}",
                            invalid: bad("cvv"),
                            oninput: move |e: FormEvent| {
                                form.write().cvv = e.value();
                                errors.write().clear("cvv");
                            },
                        }
                    }
                }
            }

            div {
                label {
                    class: "flex items-start gap-2",
                    input {
                        r#type: "checkbox",
                        id: "terms",
                        checked: current.terms_agreed,
                        onchange: move |e| {
                            form.write().terms_agreed = e.checked();
                            errors.write().clear("termsAgreed");
                        },
                    }
                    span {
                        class: "text-sm font-medium",
                        "I confirm that I am a U.S. citizen or lawful permanent resident, and this contribution is from my own funds."
                    }
                }
                FieldMessage { message: err("termsAgreed") }
            }

            button {
                r#type: "submit",
                class: "w-full rounded-md px-4 py-3 text-base font-semibold disabled:opacity-50 {party.button_class()}",
                disabled: submitting(),
                if submitting() { "Processing..." } else { "Complete Donation" }
            }
        }
    }
}

fn banner_class(ok: bool) -> &'static str {
    if ok {
        "bg-green-50 border-green-200 text-green-800"
    } else {
        "bg-red-50 border-red-200 text-red-800"
    }
}

#[component]
fn AmountOption(value: String, label: String, selected: bool, on_select: EventHandler<String>) -> Element {
    let class = if selected {
        "border-blue-600 bg-blue-50 text-blue-700"
    } else {
        "border-gray-300 hover:border-gray-400"
    };
    rsx! {
        button {
            r#type: "button",
            class: "rounded-md border px-3 py-2 text-sm font-medium {class}",
            onclick: move |_| on_select.call(value.clone()),
            "{label}"
        }
    }
}
