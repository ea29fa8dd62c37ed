//! Ordered collection of media items.

use crate::MediaItem;
use serde::{Deserialize, Serialize};

/// An ordered sequence of media items.
///
/// Order is page-arrival order. It carries no business meaning but keeps
/// iteration reproducible. Filtering and limiting never mutate the receiver;
/// they return a new collection.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_core::MediaItems;
///
/// let mut all = MediaItems::default();
/// all.extend(MediaItems::default());
/// assert!(all.is_empty());
/// assert!(all.limit(5).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItems {
    items: Vec<MediaItem>,
}

impl MediaItems {
    /// Wrap items in arrival order.
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Borrow the items as a slice.
    pub fn as_slice(&self) -> &[MediaItem] {
        &self.items
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    /// New collection with the items for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&MediaItem) -> bool,
    {
        Self {
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }

    /// Apply `f` to every item, preserving order.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&MediaItem) -> T,
    {
        self.items.iter().map(f).collect()
    }

    /// Append every item of `other`, taking ownership of them.
    pub fn extend(&mut self, other: MediaItems) {
        self.items.extend(other.items);
    }

    /// New collection holding at most the first `count` items.
    pub fn limit(&self, count: usize) -> Self {
        Self {
            items: self.items.iter().take(count).cloned().collect(),
        }
    }
}

impl From<Vec<MediaItem>> for MediaItems {
    fn from(items: Vec<MediaItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<MediaItem> for MediaItems {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MediaItems {
    type Item = MediaItem;
    type IntoIter = std::vec::IntoIter<MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MediaItems {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
