//! Router capability injected into the menu
//!
//! The menu only needs to request a navigation and, occasionally, read where
//! the router currently is. Both are expressed by the [`Navigator`] trait and
//! handed to components through Dioxus context as a [`NavigatorHandle`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::routes::RouteTable;

/// What a component may ask of the router
pub trait Navigator {
    /// Requests a transition to `path`. Returns before the transition happens.
    fn navigate(&self, path: &str);

    /// Location of the latest completed navigation
    fn current_location(&self) -> String;
}

/// Shared handle placed in the component context
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        NavigatorHandle(Rc::new(navigator))
    }
}

impl std::ops::Deref for NavigatorHandle {
    type Target = dyn Navigator;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Failures reported by a router once navigation settles
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no route registered for {path:?}")]
    Unregistered { path: String },
}

#[derive(Debug)]
struct MemoryRouterState {
    location: String,
    pending: VecDeque<String>,
}

/// Headless router over a [`RouteTable`]
///
/// Requests are queued by [`Navigator::navigate`] and applied in order by
/// [`MemoryRouter::when_stable`]. Clones share the same state.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    table: Rc<RouteTable>,
    state: Rc<RefCell<MemoryRouterState>>,
}

impl MemoryRouter {
    /// Creates a router positioned at the root
    pub fn new(table: RouteTable) -> Self {
        MemoryRouter {
            table: Rc::new(table),
            state: Rc::new(RefCell::new(MemoryRouterState {
                location: "/".to_string(),
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Number of requests not yet applied
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Waits until every pending navigation has been applied.
    ///
    /// Unregistered paths leave the location untouched and are returned.
    pub async fn when_stable(&self) -> Vec<NavigationError> {
        let mut failures = Vec::new();
        loop {
            let next = self.state.borrow_mut().pending.pop_front();
            let Some(path) = next else {
                break;
            };
            match self.table.resolve(&path) {
                Some(entry) => {
                    let location = entry.location();
                    log::debug!("Navigated to {} ({:?})", location, entry.target);
                    self.state.borrow_mut().location = location;
                }
                None => {
                    log::warn!("Navigation to unregistered path {:?} ignored", path);
                    failures.push(NavigationError::Unregistered { path });
                }
            }
        }
        failures
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, path: &str) {
        self.state.borrow_mut().pending.push_back(path.to_string());
    }

    fn current_location(&self) -> String {
        self.state.borrow().location.clone()
    }
}
