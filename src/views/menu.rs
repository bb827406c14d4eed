use crate::navigation::{Navigator, NavigatorHandle};
use dioxus::prelude::*;

/// A labelled link to one of the portal's locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    pub path: String,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        MenuLink {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Links shown by the menu unless told otherwise
pub fn default_links() -> Vec<MenuLink> {
    vec![
        MenuLink::new("Home", "/"),
        MenuLink::new("About", "/about"),
        MenuLink::new("Scholars", "/scholars"),
        MenuLink::new("Repository", "/repository"),
        MenuLink::new("Login", "/login"),
        MenuLink::new("Register", "/register"),
    ]
}

/// Forwards a link activation to the router.
///
/// The outcome is not tracked here; an unknown path is for the router to deal with.
pub fn activate(navigator: &dyn Navigator, link: &MenuLink) {
    log::debug!("Menu link {:?} activated, navigating to {}", link.label, link.path);
    navigator.navigate(&link.path);
}

#[component]
pub fn Menu(#[props(default = default_links())] links: Vec<MenuLink>) -> Element {
    rsx! {
        header { class: "menu-bar",
            div { class: "logo", "Globe Scholars" }
            nav { class: "menu",
                for link in links {
                    MenuItem { key: "{link.path}", link: link.clone() }
                }
            }
        }
    }
}

#[component]
fn MenuItem(link: MenuLink) -> Element {
    let navigator = use_context::<NavigatorHandle>();
    let href = link.path.clone();
    let marker = link.path.clone();
    let label = link.label.clone();

    rsx! {
        a {
            class: "menu-link",
            href: "{href}",
            "router-link": "{marker}",
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                activate(&*navigator, &link);
            },
            "{label}"
        }
    }
}
