use dioxus::prelude::*;

pub const CONTROL_CLASS: &str = "w-full bg-white border border-neutral-300 rounded-md px-3 py-2 text-sm text-neutral-800 outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500";

pub const INVALID_CLASS: &str = "border-red-500";

/// Class for a native control, red-bordered when it holds an error.
pub fn control_class(invalid: bool) -> String {
    if invalid {
        format!("{CONTROL_CLASS} {INVALID_CLASS}")
    } else {
        CONTROL_CLASS.to_string()
    }
}

#[component]
pub fn Input(
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let class = control_class(invalid);
    rsx! {
        input {
            class: "{class}",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    let class = control_class(invalid);
    rsx! {
        textarea {
            class: "{class}",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "block text-sm font-medium text-neutral-700",
            {children}
        }
    }
}

/// Inline validation message under a control.
#[component]
pub fn FieldMessage(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "mt-1 text-xs text-red-600", "{message}" }
        },
        None => rsx! {},
    }
}

/// Label, control and error message stacked together.
#[component]
pub fn Field(
    label: String,
    html_for: String,
    #[props(default)] required: bool,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "space-y-1.5",
            Label {
                html_for: html_for.clone(),
                "{label}"
                if required {
                    span { class: "text-red-500", " *" }
                }
            }
            {children}
            FieldMessage { message: error }
        }
    }
}
