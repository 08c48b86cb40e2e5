//! Session history strategies.
//!
//! # Responsibilities
//! - Keep the ordered list of settled locations and a cursor into it
//! - Push (dropping forward entries), replace, traverse by offset
//! - Render a location as the address-bar URL
//!
//! # Design Decisions
//! - Only settled navigations are written to history
//! - `peek` lets the router resolve a back/forward target before moving
//! - Web history prefixes a base path; memory history does not

use std::fmt;

use crate::config::{HistoryConfig, HistoryMode};
use crate::navigation::location::Location;

/// A history strategy the router is wired to.
pub trait History: Send + Sync + fmt::Debug {
    fn mode(&self) -> HistoryMode;

    /// Append an entry after the cursor, discarding forward entries.
    fn push(&mut self, location: Location);

    /// Overwrite the entry at the cursor (or push if empty).
    fn replace(&mut self, location: Location);

    /// Entry at `delta` from the cursor, without moving.
    fn peek(&self, delta: isize) -> Option<&Location>;

    /// Move the cursor by `delta`. Returns `None` and stays put if out of range.
    fn go(&mut self, delta: isize) -> Option<&Location>;

    fn current(&self) -> Option<&Location> {
        self.peek(0)
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Address-bar URL for an in-app path (with query and hash).
    fn url(&self, full_path: &str) -> String;

    /// Strip any base prefix from an address-bar URL, giving an in-app target.
    fn target_from_url<'a>(&self, url: &'a str) -> Option<&'a str>;
}

/// Build the strategy selected by configuration.
pub fn from_config(config: &HistoryConfig) -> Box<dyn History> {
    match config.mode {
        HistoryMode::Web => Box::new(WebHistory::new(&config.base)),
        HistoryMode::Memory => Box::new(MemoryHistory::new()),
    }
}

/// Entries plus cursor, shared by both strategies.
#[derive(Debug, Default, Clone)]
struct Entries {
    entries: Vec<Location>,
    cursor: usize,
}

impl Entries {
    fn push(&mut self, location: Location) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: Location) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = location,
            None => self.push(location),
        }
    }

    fn index(&self, delta: isize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let index = self.cursor.checked_add_signed(delta)?;
        (index < self.entries.len()).then_some(index)
    }

    fn peek(&self, delta: isize) -> Option<&Location> {
        self.index(delta).map(|i| &self.entries[i])
    }

    fn go(&mut self, delta: isize) -> Option<&Location> {
        let index = self.index(delta)?;
        self.cursor = index;
        Some(&self.entries[index])
    }
}

/// Address-bar history with a base path (e.g. `/app`).
#[derive(Debug, Clone)]
pub struct WebHistory {
    base: String,
    entries: Entries,
}

impl WebHistory {
    /// `base` is normalized: no trailing slash, `/` becomes empty.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            entries: Entries::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl History for WebHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Web
    }

    fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    fn replace(&mut self, location: Location) {
        self.entries.replace(location);
    }

    fn peek(&self, delta: isize) -> Option<&Location> {
        self.entries.peek(delta)
    }

    fn go(&mut self, delta: isize) -> Option<&Location> {
        self.entries.go(delta)
    }

    fn len(&self) -> usize {
        self.entries.entries.len()
    }

    fn url(&self, full_path: &str) -> String {
        format!("{}{}", self.base, full_path)
    }

    fn target_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(url);
        }
        match url.strip_prefix(self.base.as_str())? {
            "" => Some("/"),
            rest if rest.starts_with(['/', '?', '#']) => Some(rest),
            _ => None,
        }
    }
}

/// In-process history with no address bar.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Entries,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl History for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Memory
    }

    fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    fn replace(&mut self, location: Location) {
        self.entries.replace(location);
    }

    fn peek(&self, delta: isize) -> Option<&Location> {
        self.entries.peek(delta)
    }

    fn go(&mut self, delta: isize) -> Option<&Location> {
        self.entries.go(delta)
    }

    fn len(&self) -> usize {
        self.entries.entries.len()
    }

    fn url(&self, full_path: &str) -> String {
        full_path.to_string()
    }

    fn target_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        Some(url)
    }
}
