//! Stand-in views for the match viewer.

use crate::views::{Props, View};

/// Landing page.
#[derive(Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn render(&self, _props: &Props) -> String {
        "Home".to_string()
    }
}

/// Detail page for a single match. Expects an `id` prop.
#[derive(Debug, Default)]
pub struct MatchDetailView;

impl View for MatchDetailView {
    fn name(&self) -> &'static str {
        "MatchDetail"
    }

    fn render(&self, props: &Props) -> String {
        match props.get("id") {
            Some(id) => format!("MatchDetail(id={})", id),
            None => "MatchDetail(id=?)".to_string(),
        }
    }
}

/// Past matches.
#[derive(Debug, Default)]
pub struct HistoryView;

impl View for HistoryView {
    fn name(&self) -> &'static str {
        "History"
    }

    fn render(&self, _props: &Props) -> String {
        "History".to_string()
    }
}

/// About page. Its route is disabled by default.
#[derive(Debug, Default)]
pub struct AboutView;

impl View for AboutView {
    fn name(&self) -> &'static str {
        "About"
    }

    fn render(&self, _props: &Props) -> String {
        "About".to_string()
    }
}

/// User profile. Expects an `id` prop; its route is disabled by default.
#[derive(Debug, Default)]
pub struct UserView;

impl View for UserView {
    fn name(&self) -> &'static str {
        "User"
    }

    fn render(&self, props: &Props) -> String {
        match props.get("id") {
            Some(id) => format!("User(id={})", id),
            None => "User(id=?)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_detail_renders_id_prop() {
        let mut props = Props::new();
        props.insert("id".into(), "42".into());
        assert_eq!(MatchDetailView.render(&props), "MatchDetail(id=42)");
        assert_eq!(MatchDetailView.render(&Props::new()), "MatchDetail(id=?)");
    }
}
