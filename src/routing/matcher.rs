//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse patterns such as `/match/:id` into literal and capture segments
//! - Match a request path segment by segment, binding captures
//! - Build a concrete path from a pattern and parameter values
//!
//! # Design Decisions
//! - Literal segments are compared byte for byte (case-sensitive)
//! - A capture matches exactly one non-empty segment
//! - Captured values are percent-decoded; built paths are percent-encoded
//! - One trailing slash is tolerated unless matching is strict
//! - No regex and no string substitution: O(segments) per pattern

use std::collections::BTreeMap;

use crate::routing::error::RouteError;

/// Captured path parameters, keyed by capture name.
pub type Params = BTreeMap<String, String>;

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Binds any non-empty request segment to the given name.
    Param(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern. It must start with `/`, have no empty segments and
    /// use each capture name at most once.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| invalid("pattern must start with '/'"))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(invalid("empty path segment"));
                }
                match part.strip_prefix(':') {
                    Some("") => return Err(invalid("capture without a name")),
                    Some(name) => {
                        let taken = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                        if taken {
                            return Err(invalid("capture name used twice"));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the captures, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// True if both patterns accept exactly the same paths.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Match a request path, returning the bound captures on success.
    pub fn matches(&self, path: &str, strict: bool) -> Option<Params> {
        let parts = split_path(path, strict)?;
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    // Invalid UTF-8 after decoding is unmatched.
                    let value = urlencoding::decode(part).ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Build a concrete path. `route` is only used for error reporting.
    pub fn build(&self, route: &str, params: &Params) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RouteError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(RouteError::InvalidParam {
                            route: route.to_string(),
                            param: name.clone(),
                            value: value.clone(),
                        });
                    }
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

/// Split a request path into segments. Returns `None` for relative paths.
fn split_path(path: &str, strict: bool) -> Option<Vec<&str>> {
    let mut rest = path.strip_prefix('/')?;
    if !strict {
        if let Some(trimmed) = rest.strip_suffix('/') {
            if !trimmed.is_empty() {
                rest = trimmed;
            }
        }
    }

    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_segments() {
        let pattern = PathPattern::parse("/match/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("match".into()),
                Segment::Param("id".into())
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);

        let root = PathPattern::parse("/").unwrap();
        assert!(root.segments().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["match/:id", "/match//x", "/match/:", "/a/:id/b/:id", "/history/"] {
            assert!(
                matches!(PathPattern::parse(raw), Err(RouteError::InvalidPattern { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_literal_match() {
        let pattern = PathPattern::parse("/history").unwrap();
        assert_eq!(pattern.matches("/history", false), Some(Params::new()));
        assert_eq!(pattern.matches("/History", false), None);
        assert_eq!(pattern.matches("/history/x", false), None);
        assert_eq!(pattern.matches("history", false), None);
    }

    #[test]
    fn test_root_match() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.matches("/", false), Some(Params::new()));
        assert_eq!(pattern.matches("/", true), Some(Params::new()));
        assert_eq!(pattern.matches("//", false), None);
        assert_eq!(pattern.matches("", false), None);
    }

    #[test]
    fn test_capture_binds_single_segment() {
        let pattern = PathPattern::parse("/match/:id").unwrap();
        assert_eq!(pattern.matches("/match/42", false), Some(params(&[("id", "42")])));
        assert_eq!(
            pattern.matches("/match/final-2024", true),
            Some(params(&[("id", "final-2024")]))
        );
        assert_eq!(pattern.matches("/match/", false), None);
        assert_eq!(pattern.matches("/match/", true), None);
        assert_eq!(pattern.matches("/match//", false), None);
        assert_eq!(pattern.matches("/match/a/b", false), None);
        assert_eq!(pattern.matches("/match", false), None);
    }

    #[test]
    fn test_trailing_slash() {
        let pattern = PathPattern::parse("/history").unwrap();
        assert!(pattern.matches("/history/", false).is_some());
        assert!(pattern.matches("/history/", true).is_none());
        assert!(pattern.matches("/history//", false).is_none());

        let capture = PathPattern::parse("/match/:id").unwrap();
        assert_eq!(capture.matches("/match/7/", false), Some(params(&[("id", "7")])));
        assert_eq!(capture.matches("/match/7/", true), None);
    }

    #[test]
    fn test_same_shape() {
        let a = PathPattern::parse("/user/:id").unwrap();
        let b = PathPattern::parse("/user/:uid").unwrap();
        let c = PathPattern::parse("/match/:id").unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }

    #[test]
    fn test_build() {
        let pattern = PathPattern::parse("/match/:id").unwrap();
        assert_eq!(pattern.build("match", &params(&[("id", "42")])).unwrap(), "/match/42");
        assert_eq!(
            pattern.build("match", &Params::new()),
            Err(RouteError::MissingParam {
                route: "match".into(),
                param: "id".into()
            })
        );
        assert!(matches!(
            pattern.build("match", &params(&[("id", "")])),
            Err(RouteError::InvalidParam { .. })
        ));
        assert_eq!(PathPattern::parse("/").unwrap().build("home", &Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_capture_is_percent_decoded() {
        let pattern = PathPattern::parse("/match/:id").unwrap();
        assert_eq!(pattern.matches("/match/a%20b", false), Some(params(&[("id", "a b")])));
        assert_eq!(pattern.matches("/match/a b", false), Some(params(&[("id", "a b")])));
        assert_eq!(
            pattern.matches("/match/%C3%A9quipe", false),
            Some(params(&[("id", "équipe")]))
        );
        assert_eq!(pattern.matches("/match/a%2Fb", false), Some(params(&[("id", "a/b")])));
        assert_eq!(pattern.matches("/match/%FF", false), None);
    }

    #[test]
    fn test_build_percent_encodes_values() {
        let pattern = PathPattern::parse("/match/:id").unwrap();
        let cases = [
            ("a b", "/match/a%20b"),
            ("a?b", "/match/a%3Fb"),
            ("x#y", "/match/x%23y"),
            ("50%", "/match/50%25"),
            ("a/b", "/match/a%2Fb"),
            ("équipe", "/match/%C3%A9quipe"),
        ];
        for (value, expected) in cases {
            let path = pattern.build("match", &params(&[("id", value)])).unwrap();
            assert_eq!(path, expected);
            assert_eq!(pattern.matches(&path, true), Some(params(&[("id", value)])));
        }
    }
}
