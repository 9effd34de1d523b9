use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::model::{Item, ItemId};

/// Direction of an optimistic tag flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagChange {
    Added,
    Removed,
}

/// Point-in-time view of an [`ItemStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Items from the last successful fetch, in fetch order.
    pub items: Arc<Vec<Item>>,
    /// Message of the last failed fetch; empty after a success.
    pub error: String,
}

impl StoreSnapshot {
    pub fn filtered_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Item> {
        filter_by_tag(&self.items, tag)
    }
}

/// Items carrying `tag`, in their original order.
pub fn filter_by_tag<'a>(items: &'a [Item], tag: &'a str) -> impl Iterator<Item = &'a Item> {
    items.iter().filter(move |item| item.has_tag(tag))
}

/// Most recently fetched items plus the most recent fetch error.
///
/// A successful fetch replaces the collection wholesale and clears the
/// error. A failed fetch only records the error: the previous items stay
/// available so the menu keeps working against a flaky server.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Arc<Vec<Item>>,
    error: String,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched collection and clear any stored error.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn replace(&mut self, items: impl IntoIterator<Item = Item>) {
        let mut seen = HashSet::new();
        let items: Vec<Item> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    warn!(item = %item.id, "duplicate item id in fetch, keeping first");
                }
                fresh
            })
            .collect();

        self.items = Arc::new(items);
        self.error.clear();
    }

    /// Record a fetch failure, leaving the held items untouched.
    pub fn mark_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: Arc::clone(&self.items),
            error: self.error.clone(),
        }
    }

    /// Flip `tag` on the held item `id` in place.
    ///
    /// Returns the applied change, or `None` if the item is not held.
    /// Snapshots taken earlier keep their own copy.
    pub fn toggle_tag(&mut self, id: &ItemId, tag: &str) -> Option<TagChange> {
        let items = Arc::make_mut(&mut self.items);
        let item = items.iter_mut().find(|item| &item.id == id)?;

        if item.tags.remove(tag) {
            Some(TagChange::Removed)
        } else {
            item.tags.insert(tag);
            Some(TagChange::Added)
        }
    }
}
