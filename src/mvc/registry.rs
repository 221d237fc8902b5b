//! # Keyed Registry
//!
//! Integer-keyed, exclusively-owning storage used by the facade for views
//! and models. Lookups never insert; replacing an entry drops the previous
//! occupant before the new one goes in.

use std::collections::BTreeMap;

/// Key type for views and models
pub type RegistryKey = i32;

/// Owning map from integer key to a single value
#[derive(Debug)]
pub struct KeyedRegistry<T> {
    entries: BTreeMap<RegistryKey, T>,
}

impl<T> KeyedRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Install `value` under `key`, dropping whatever was there first
    ///
    /// Returns `true` when an earlier occupant was replaced.
    pub fn install(&mut self, key: RegistryKey, value: T) -> bool {
        let replaced = match self.entries.remove(&key) {
            Some(previous) => {
                drop(previous);
                true
            }
            None => false,
        };
        self.entries.insert(key, value);
        replaced
    }

    pub fn get(&self, key: RegistryKey) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: RegistryKey) -> Option<&mut T> {
        self.entries.get_mut(&key)
    }

    /// Take the entry out, handing ownership to the caller
    pub fn remove(&mut self, key: RegistryKey) -> Option<T> {
        self.entries.remove(&key)
    }

    pub fn contains(&self, key: RegistryKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = RegistryKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegistryKey, &T)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (RegistryKey, &mut T)> + '_ {
        self.entries.iter_mut().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry in ascending key order
    pub fn clear(&mut self) {
        while let Some((_, value)) = self.entries.pop_first() {
            drop(value);
        }
    }
}

impl<T> Default for KeyedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
