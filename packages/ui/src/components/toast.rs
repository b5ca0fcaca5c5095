//! Transient notifications shown in the corner of the screen.
//!
//! [`ToastProvider`] owns the queue; any component below it calls
//! [`use_toast`] and pushes a message. On the web a toast dismisses itself
//! after its duration; clicking one dismisses it immediately.

use std::time::Duration;

use dioxus::prelude::*;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "border-green-500 bg-green-50 text-green-800",
            ToastKind::Error => "border-red-500 bg-red-50 text-red-800",
            ToastKind::Info => "border-blue-500 bg-blue-50 text-blue-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    pub description: Option<String>,
    pub duration: Duration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            description: None,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Handle for pushing toasts. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, title: String, options: ToastOptions) {
        self.push(ToastKind::Success, title, options);
    }

    pub fn error(&self, title: String, options: ToastOptions) {
        self.push(ToastKind::Error, title, options);
    }

    pub fn info(&self, title: String, options: ToastOptions) {
        self.push(ToastKind::Info, title, options);
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }

    pub fn current(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    fn push(&self, kind: ToastKind, title: String, options: ToastOptions) {
        let mut next_id = self.next_id;
        let mut items = self.items;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast {
            id,
            kind,
            title,
            description: options.description,
        });

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = *self;
            let duration = options.duration;
            spawn(async move {
                gloo_timers::future::sleep(duration).await;
                toasts.dismiss(id);
            });
        }
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div {
            class: "fixed bottom-4 right-4 flex flex-col gap-2 w-80",
            style: "z-index: 3000",
            for toast in toasts.current() {
                div {
                    key: "{toast.id}",
                    class: "border-l-4 rounded-md shadow-md px-4 py-3 cursor-pointer {toast.kind.class()}",
                    role: "status",
                    onclick: move |_| toasts.dismiss(toast.id),
                    p { class: "text-sm font-semibold", "{toast.title}" }
                    if let Some(description) = &toast.description {
                        p { class: "text-sm mt-0.5", "{description}" }
                    }
                }
            }
        }
    }
}
