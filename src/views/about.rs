use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { id: "about-page",
            h1 { "About Globe Scholars" }
        }
    }
}
