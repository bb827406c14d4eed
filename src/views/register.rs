use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        div { id: "register-page",
            h1 { "Create an account" }
        }
    }
}
