use std::fmt;

use indexmap::IndexSet;

// ── ItemId ──────────────────────────────────────────────────────────

/// Remote identifier of an item (the openHAB item `name`).
///
/// Unique within one fetch; used verbatim in REST paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── TagSet ──────────────────────────────────────────────────────────

/// Tags attached to an item.
///
/// A set: inserting a tag that is already present is a no-op. Iteration
/// follows first-insertion order so menus and logs stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Remove a tag, keeping the order of the rest. Returns `false` if absent.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.shift_remove(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ── Item ────────────────────────────────────────────────────────────

/// A remote automation entity as shown in the tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Metadata name, else remote label, else the id itself.
    pub display_name: String,
    pub tags: TagSet,
}

impl Item {
    /// An untagged item whose display name is its id.
    pub fn new(id: impl Into<ItemId>) -> Self {
        let id = id.into();
        Self {
            display_name: id.to_string(),
            id,
            tags: TagSet::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tag_insert_is_noop() {
        let mut tags = TagSet::new();
        assert!(tags.insert("QuickHAB"));
        assert!(!tags.insert("QuickHAB"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn duplicates_collapse_when_collected() {
        let tags: TagSet = ["Living", "QuickHAB", "Living"].into_iter().collect();
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Living", "QuickHAB"]);
    }

    #[test]
    fn remove_keeps_order_of_remaining_tags() {
        let mut tags: TagSet = ["a", "b", "c"].into_iter().collect();
        assert!(tags.remove("a"));
        assert!(!tags.remove("a"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn item_defaults_display_name_to_id() {
        let item = Item::new("Light1").with_tags(["QuickHAB"]);
        assert_eq!(item.display_name, "Light1");
        assert!(item.has_tag("QuickHAB"));
        assert!(!item.has_tag("quickhab"));
    }
}
