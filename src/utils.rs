use std::collections::HashMap;
use std::hash::Hash;

/// Keyed storage with O(1) insertion, lookup and removal.
///
/// Values live in a dense vector. Removal swaps the last value into the freed
/// slot, so iteration order is not insertion order.
#[derive(Debug, Clone)]
pub struct DenseCollection<K, V> {
  dense: Vec<(K, V)>,
  slots: HashMap<K, usize>,
}

impl<K, V> DenseCollection<K, V>
where
  K: Hash + Eq + Copy,
{
  pub fn with_capacity(capacity: usize) -> DenseCollection<K, V> {
    DenseCollection {
      dense: Vec::with_capacity(capacity),
      slots: HashMap::with_capacity(capacity),
    }
  }

  pub fn len(&self) -> usize {
    self.dense.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dense.is_empty()
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.slots.contains_key(key)
  }

  /// Returns `false` and leaves the collection untouched if `key` is taken.
  pub fn insert(&mut self, key: K, value: V) -> bool {
    if self.slots.contains_key(&key) {
      return false;
    }
    self.slots.insert(key, self.dense.len());
    self.dense.push((key, value));
    true
  }

  // Swap the entry for 'key' with the last entry.
  // Update the slot of the swapped entry to point to its new index.
  pub fn remove(&mut self, key: &K) -> Option<V> {
    let idx = self.slots.remove(key)?;
    let (_, value) = self.dense.swap_remove(idx);
    if let Some((moved, _)) = self.dense.get(idx) {
      self.slots.insert(*moved, idx);
    }
    Some(value)
  }

  pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
    self.dense.iter().map(|(_, value)| value)
  }
}
