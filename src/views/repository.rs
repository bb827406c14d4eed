use dioxus::prelude::*;

#[component]
pub fn Repository() -> Element {
    rsx! {
        div { id: "repository-page",
            h1 { "Repository" }
        }
    }
}
