//! Item definitions the codecs consult.

use std::collections::BTreeSet;

/// Answers whether an item id stacks.
///
/// Inventory lists only carry an amount for stackable items, so decoding one
/// needs the catalog the server used when encoding it.
pub trait ItemCatalog {
    fn is_stackable(&self, id: u16) -> bool;
}

/// A catalog backed by the set of stackable ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StackableItems {
    ids: BTreeSet<u16>,
}

impl StackableItems {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u16) -> bool {
        self.ids.insert(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ItemCatalog for StackableItems {
    fn is_stackable(&self, id: u16) -> bool {
        self.ids.contains(&id)
    }
}

impl FromIterator<u16> for StackableItems {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let catalog: StackableItems = [10, 31, 33].into_iter().collect();
        assert!(catalog.is_stackable(10));
        assert!(!catalog.is_stackable(11));
        assert_eq!(catalog.len(), 3);
        assert!(StackableItems::new().is_empty());
    }
}
