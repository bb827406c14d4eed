use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { id: "landing-page",
            h1 { "Globe Scholars" }
            p { "A home for the scholarly work of our university." }
        }
    }
}
