//! Static route table of the portal
//!
//! The table maps a path segment to the view rendered for it. It is built once
//! at start-up and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a destination view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Landing,
    Register,
    Login,
    About,
    Scholars,
    Repository,
}

/// A single `path -> view` mapping
///
/// `path` is a bare segment without slashes; the empty string is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub target: ViewId,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, target: ViewId) -> Self {
        RouteEntry {
            path: path.into(),
            target,
        }
    }

    /// Absolute location of the entry, `/` for the root
    pub fn location(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Errors raised while building a route table
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),
    #[error("route table has no root entry")]
    MissingRoot,
    #[error("route path {0:?} is not a URL-safe segment")]
    InvalidPath(String),
}

/// Ordered, validated list of routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, checking that paths are valid segments, unique, and
    /// that exactly one of them is the root.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !is_segment(&entry.path) {
                return Err(RouteError::InvalidPath(entry.path.clone()));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
        }
        if !seen.contains("") {
            return Err(RouteError::MissingRoot);
        }
        Ok(RouteTable { entries })
    }

    /// The portal's routes, in declaration order
    pub fn standard() -> Self {
        RouteTable {
            entries: vec![
                RouteEntry::new("", ViewId::Landing),
                RouteEntry::new("register", ViewId::Register),
                RouteEntry::new("login", ViewId::Login),
                RouteEntry::new("about", ViewId::About),
                RouteEntry::new("scholars", ViewId::Scholars),
                RouteEntry::new("repository", ViewId::Repository),
            ],
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Finds the entry a requested location points at.
    ///
    /// Leading and trailing slashes are ignored, as are the query string and
    /// fragment, so `/about`, `about/` and `/about?x=1` all resolve to `about`.
    pub fn resolve(&self, location: &str) -> Option<&RouteEntry> {
        let segment = normalize(location);
        self.entries.iter().find(|entry| entry.path == segment)
    }
}

/// Strips query, fragment and surrounding slashes from a location
pub fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    location[..end].trim_matches('/')
}

fn is_segment(path: &str) -> bool {
    path.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let standard = RouteTable::standard();
        let rebuilt = RouteTable::new(standard.entries().to_vec());
        assert_eq!(rebuilt, Ok(standard));
    }

    #[test]
    fn test_standard_table_order() {
        let table = RouteTable::standard();
        let paths: Vec<&str> = table
            .entries()
            .iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec!["", "register", "login", "about", "scholars", "repository"]
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("", ViewId::Landing),
            RouteEntry::new("login", ViewId::Login),
            RouteEntry::new("login", ViewId::Register),
        ]);
        assert_eq!(result, Err(RouteError::DuplicatePath("login".to_string())));
    }

    #[test]
    fn test_second_root_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("", ViewId::Landing),
            RouteEntry::new("", ViewId::About),
        ]);
        assert_eq!(result, Err(RouteError::DuplicatePath(String::new())));
    }

    #[test]
    fn test_missing_root_rejected() {
        let result = RouteTable::new(vec![RouteEntry::new("about", ViewId::About)]);
        assert_eq!(result, Err(RouteError::MissingRoot));
    }

    #[test]
    fn test_invalid_segment_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("", ViewId::Landing),
            RouteEntry::new("scholars/list", ViewId::Scholars),
        ]);
        assert_eq!(
            result,
            Err(RouteError::InvalidPath("scholars/list".to_string()))
        );
    }

    #[test]
    fn test_resolve() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/").map(|e| e.target), Some(ViewId::Landing));
        assert_eq!(table.resolve("").map(|e| e.target), Some(ViewId::Landing));
        assert_eq!(table.resolve("/about").map(|e| e.target), Some(ViewId::About));
        assert_eq!(
            table.resolve("scholars/").map(|e| e.target),
            Some(ViewId::Scholars)
        );
        assert_eq!(
            table.resolve("/repository?page=2#top").map(|e| e.target),
            Some(ViewId::Repository)
        );
        assert!(table.resolve("/missing").is_none());
    }

    #[test]
    fn test_entry_location() {
        assert_eq!(RouteEntry::new("", ViewId::Landing).location(), "/");
        assert_eq!(RouteEntry::new("login", ViewId::Login).location(), "/login");
    }
}
