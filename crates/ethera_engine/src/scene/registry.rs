//! Ordered handle-addressed lists

use slotmap::{Key, SlotMap};

/// List of items that keeps insertion order and hands out removal handles
pub struct Registry<K: Key, T> {
    keys: SlotMap<K, ()>,
    items: Vec<(K, T)>,
}

impl<K: Key, T> Registry<K, T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            keys: SlotMap::with_key(),
            items: Vec::new(),
        }
    }

    /// Append an item
    pub fn insert(&mut self, item: T) -> K {
        let key = self.keys.insert(());
        self.items.push((key, item));
        key
    }

    /// Remove an item by handle
    pub fn remove(&mut self, key: K) -> Option<T> {
        self.keys.remove(key)?;
        let position = self.items.iter().position(|(k, _)| *k == key)?;
        Some(self.items.remove(position).1)
    }

    /// Whether the handle is still registered
    pub fn contains(&self, key: K) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.keys.clear();
        self.items.clear();
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.items.iter().map(|(k, item)| (*k, item))
    }

    /// Mutable items in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut T)> {
        self.items.iter_mut().map(|(k, item)| (*k, item))
    }
}

impl<K: Key, T> Default for Registry<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::SystemId;

    #[test]
    fn test_order_survives_removal() {
        let mut registry: Registry<SystemId, &str> = Registry::new();
        let a = registry.insert("a");
        let b = registry.insert("b");
        registry.insert("c");

        assert_eq!(registry.remove(b), Some("b"));
        assert_eq!(registry.remove(b), None);
        let d = registry.insert("d");

        let items: Vec<_> = registry.iter().map(|(_, item)| *item).collect();
        assert_eq!(items, vec!["a", "c", "d"]);
        assert!(registry.contains(a) && registry.contains(d));
        assert!(!registry.contains(b));
    }
}
