//! Link registry: range → target bookkeeping for the navigation collaborator.
//!
//! Link candidates ride the same recompute pass as decorations and are
//! subject to the same code-block and selection exclusion, but take a
//! parallel path out of the pipeline: they are republished wholesale every
//! recompute rather than diffed.

use serde::{Deserialize, Serialize};

use crate::text::{ByteSpan, Range};

/// A pre-filter link match in byte coordinates.
///
/// `range` covers the visible link-text portion; `parent` the full construct
/// (used by the exclusion filters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    pub range: ByteSpan,
    pub parent: ByteSpan,
    pub target: String,
}

/// A navigable range → target mapping handed to the host.
///
/// `target` is the raw string from the match, unvalidated beyond the
/// scheme-prefix shape the matcher required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub range: Range,
    pub target: String,
}

/// Navigation collaborator: exposes entries as clickable targets and
/// invalidates any cached list downstream on change.
pub trait LinkNavigator {
    fn set_links(&mut self, entries: &[LinkEntry]);
    fn links_changed(&mut self);
}

/// Republishes the filtered link list every recompute.
///
/// The change notification fires unconditionally, even when the list is
/// unchanged; a spurious notification is cheaper than diffing.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    last_published: Vec<LinkEntry>,
}

impl LinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, entries: Vec<LinkEntry>, navigator: &mut dyn LinkNavigator) {
        navigator.set_links(&entries);
        navigator.links_changed();
        self.last_published = entries;
    }

    #[must_use]
    pub fn last_published(&self) -> &[LinkEntry] {
        &self.last_published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Position;

    #[derive(Default)]
    struct RecordingNavigator {
        lists: Vec<Vec<LinkEntry>>,
        change_notifications: usize,
    }

    impl LinkNavigator for RecordingNavigator {
        fn set_links(&mut self, entries: &[LinkEntry]) {
            self.lists.push(entries.to_vec());
        }

        fn links_changed(&mut self) {
            self.change_notifications += 1;
        }
    }

    fn entry(target: &str) -> LinkEntry {
        let pos = Position { line: 0, column: 0 };
        LinkEntry {
            range: Range::new(pos, pos),
            target: target.to_string(),
        }
    }

    #[test]
    fn publish_notifies_even_when_unchanged() {
        let mut registry = LinkRegistry::new();
        let mut navigator = RecordingNavigator::default();
        registry.publish(vec![entry("https://a")], &mut navigator);
        registry.publish(vec![entry("https://a")], &mut navigator);
        assert_eq!(navigator.change_notifications, 2);
        assert_eq!(navigator.lists.len(), 2);
        assert_eq!(registry.last_published().len(), 1);
    }
}
