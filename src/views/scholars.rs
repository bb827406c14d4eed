use dioxus::prelude::*;

#[component]
pub fn Scholars() -> Element {
    rsx! {
        div { id: "scholars-page",
            h1 { "Scholars" }
        }
    }
}
