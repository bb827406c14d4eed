//! Globe Scholars web portal
//!
//! A Dioxus fullstack application. The server build hosts the app through
//! axum; the web build runs the client in the browser.

#[cfg(feature = "server")]
pub mod config;
pub mod navigation;
pub mod routes;
pub mod views;

use dioxus::prelude::*;
use views::{About, Landing, Login, NotFound, Register, Repository, Scholars, Shell};

/// Router of the portal. Mirrors [`routes::RouteTable::standard`].
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/register")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/about")]
        About {},
        #[route("/scholars")]
        Scholars {},
        #[route("/repository")]
        Repository {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::routes::RouteTable;

    #[test]
    fn test_route_table_matches_router() {
        for entry in RouteTable::standard().entries() {
            let location = entry.location();
            let route = location
                .parse::<Route>()
                .unwrap_or_else(|_| panic!("{location} does not parse"));
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{location} falls through to not-found"
            );
            assert_eq!(route.to_string(), location);
        }
    }

    #[test]
    fn test_unknown_location_is_not_found() {
        let route = "/nowhere".parse::<Route>();
        assert!(matches!(route, Ok(Route::NotFound { .. })));
    }
}
