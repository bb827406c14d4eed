use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { id: "login-page",
            h1 { "Sign in" }
        }
    }
}
