use crate::Route;
use dioxus::prelude::*;

/// Fallback for locations missing from the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| report_missing_route(&segments));

    rsx! {
        div { id: "not-found-page",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Landing {}, "Back to the home page" }
        }
    }
}

/// Logs the unmatched location once per mount and returns it
fn report_missing_route(segments: &[String]) -> String {
    let location = format!("/{}", segments.join("/"));
    log::warn!("No route for {}", location);
    location
}
