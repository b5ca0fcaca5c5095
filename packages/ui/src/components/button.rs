use dioxus::prelude::*;

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ButtonVariant::Secondary => "bg-neutral-100 hover:bg-neutral-200 text-neutral-800",
            ButtonVariant::Outline => {
                "border border-neutral-300 bg-white hover:bg-neutral-50 text-neutral-800"
            }
            ButtonVariant::Destructive => "bg-red-600 hover:bg-red-700 text-white",
            ButtonVariant::Ghost => "bg-transparent hover:bg-neutral-100 text-neutral-700",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-medium transition-colors disabled:opacity-50 disabled:pointer-events-none {variant.class()}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}
