//! The ordered list of item identifiers currently known to be loaded.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// ItemId
// ============================================================================

/// Opaque, stable identifier of a displayable entry.
///
/// Cheap to clone: render keys and lookups share one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// DisplayList
// ============================================================================

/// Ordered item ids in display order.
///
/// Grows by page appends. Order is the canonical sequence used for
/// index-to-position mapping; ids are unique.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ids: Vec<ItemId>,
    seen: HashSet<ItemId>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from ids, dropping repeats after their first occurrence.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut list = Self::new();
        list.append_page(ids);
        list
    }

    /// Appends a page of ids, skipping any already present.
    ///
    /// Returns how many ids were actually appended. Membership is a hash
    /// lookup, so appending stays linear in the page size.
    pub fn append_page(&mut self, ids: impl IntoIterator<Item = ItemId>) -> usize {
        let before = self.ids.len();
        for id in ids {
            if self.seen.insert(id.clone()) {
                self.ids.push(id);
            }
        }
        self.ids.len() - before
    }

    /// Replaces the contents (initial listing or folder change).
    pub fn reset(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.ids.clear();
        self.seen.clear();
        self.append_page(ids);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }
}

impl Deref for DisplayList {
    type Target = [ItemId];

    fn deref(&self) -> &Self::Target {
        &self.ids
    }
}

impl PartialEq for DisplayList {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for DisplayList {}
