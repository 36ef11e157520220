use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use super::item::{GalleryItem, ItemId};
use super::RegistryError;

/// Ordered, fixed collection of items bound to one gallery.
///
/// Order defines next/previous adjacency. Clones share the same backing
/// slice, so handing a registry to a controller is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    items: Arc<[GalleryItem]>,
}

impl Registry {
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(RegistryError::DuplicateId(item.id));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Linear scan; registries hold tens of items.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Registry {
    type Target = [GalleryItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::testing::artwork;

    #[test]
    fn test_rejects_duplicate_ids() {
        let res = Registry::new(vec![artwork(1), artwork(2), artwork(1)]);
        assert_eq!(res, Err(RegistryError::DuplicateId(ItemId(1))));
    }

    #[test]
    fn test_position_and_order() {
        let registry = Registry::new(vec![artwork(10), artwork(3), artwork(7)])
            .expect("ids are unique");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.position(ItemId(3)), Some(1));
        assert_eq!(registry.position(ItemId(99)), None);
        let ids = registry.iter().map(|i| i.id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![10, 3, 7]);
    }

    #[test]
    fn test_clone_shares_items() {
        let registry = Registry::new(vec![artwork(1)]).expect("ids are unique");
        let other = registry.clone();
        assert!(std::ptr::eq(registry.items().as_ptr(), other.items().as_ptr()));
        assert!(Registry::empty().is_empty());
    }
}
