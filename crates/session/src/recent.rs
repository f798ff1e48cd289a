use std::collections::VecDeque;

use serde::Serialize;

/// How many names the tracker keeps.
pub const RECENTLY_VIEWED_CAPACITY: usize = 5;

/// Bounded, deduplicated list of item names, newest first.
///
/// A name that is already tracked keeps its position: viewing it again does
/// not move it to the front.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    names: VecDeque<String>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `name`. Returns `false` when it was already tracked.
    pub fn record(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push_front(name.to_string());
        self.names.truncate(RECENTLY_VIEWED_CAPACITY);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}
