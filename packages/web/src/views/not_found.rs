use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "min-h-[60vh] flex flex-col items-center justify-center gap-4 px-4 text-center",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "text-gray-600", "No page at /{path}" }
            Link { to: "/", class: "text-blue-600 hover:underline", "Return home" }
        }
    }
}
