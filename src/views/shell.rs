use crate::Route;
use crate::navigation::{Navigator, NavigatorHandle};
use crate::views::Menu;
use dioxus::prelude::*;

/// [`Navigator`] backed by the Dioxus router of the running application
///
/// Unknown paths are pushed as-is; the router sends them to the not-found view.
struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        report_push_failure(path, navigator().push(path.to_string()));
    }

    fn current_location(&self) -> String {
        router().current::<Route>().to_string()
    }
}

/// Logs a push the router refused. Returns whether there was one.
fn report_push_failure<F: std::fmt::Debug>(path: &str, failure: Option<F>) -> bool {
    match failure {
        Some(failure) => {
            log::warn!("Navigation to {:?} failed: {:?}", path, failure);
            true
        }
        None => false,
    }
}

/// Layout shared by every page: the menu, then the routed view
#[component]
pub fn Shell() -> Element {
    use_context_provider(|| NavigatorHandle::new(RouterNavigator));

    rsx! {
        div { class: "app-container",
            Menu {}
            main { class: "page", Outlet::<Route> {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::report_push_failure;

    #[test]
    fn test_refused_push_is_reported() {
        assert!(report_push_failure("https://elsewhere.example", Some("external")));
    }

    #[test]
    fn test_accepted_push_is_silent() {
        assert!(!report_push_failure::<()>("/about", None));
    }
}
