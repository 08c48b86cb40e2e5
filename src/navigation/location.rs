//! Navigation targets.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::navigation::error::ResolveError;

/// Origin used only to split targets into path, query and fragment.
const PARSE_ORIGIN: &str = "http://localhost";

/// A parsed in-app location: path plus optional query and hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    /// Parse an absolute in-app target such as `/match/42?tab=stats#events`.
    ///
    /// Dot segments are normalized the way the address bar would.
    pub fn parse(target: &str) -> Result<Self, ResolveError> {
        let invalid = |reason: &str| ResolveError::InvalidTarget {
            target: target.to_string(),
            reason: reason.to_string(),
        };

        if !target.starts_with('/') {
            return Err(invalid("target must start with '/'"));
        }
        if target.starts_with("//") {
            return Err(invalid("target must not name a host"));
        }

        let url = Url::parse(PARSE_ORIGIN)
            .and_then(|origin| origin.join(target))
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
            hash: url.fragment().filter(|h| !h.is_empty()).map(str::to_string),
        })
    }

    /// The part used for route matching.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Path with query and hash re-attached.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_query_and_hash() {
        let location = Location::parse("/match/42?tab=stats#events").unwrap();
        assert_eq!(location.path(), "/match/42");
        assert_eq!(location.query(), Some("tab=stats"));
        assert_eq!(location.hash(), Some("events"));
        assert_eq!(location.full_path(), "/match/42?tab=stats#events");
    }

    #[test]
    fn test_parse_plain_path() {
        let location = Location::parse("/history/").unwrap();
        assert_eq!(location.path(), "/history/");
        assert_eq!(location.query(), None);
        assert_eq!(location.hash(), None);
        assert_eq!(Location::parse("/?").unwrap().query(), None);
    }

    #[test]
    fn test_parse_normalizes_dot_segments() {
        assert_eq!(Location::parse("/history/../match/7").unwrap().path(), "/match/7");
    }

    #[test]
    fn test_parse_rejects_relative_and_host_targets() {
        assert!(matches!(
            Location::parse("match/42"),
            Err(ResolveError::InvalidTarget { .. })
        ));
        assert!(matches!(
            Location::parse("//evil.example/match/1"),
            Err(ResolveError::InvalidTarget { .. })
        ));
    }
}
