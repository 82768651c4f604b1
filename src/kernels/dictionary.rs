//! This module contains the accumulation state for low-cardinality (dictionary)
//! string encoding.
//!
//! Values are deduplicated into a dictionary of distinct strings, kept in
//! first-insertion order, while every submission appends the resolved index to
//! a key sequence. Nothing here touches the output buffer: the encoder decides
//! the index width and serializes the dictionary only once all values are in.

use hashbrown::hash_map::EntryRef;
use hashbrown::HashMap;

use crate::format::IndexWidth;

/// Per-encoder dictionary of distinct strings plus the index sequence of
/// every value submitted since the last reset.
#[derive(Debug, Default)]
pub struct LowCardinalityDictionary {
    /// Value -> first-seen index. Dropped on reset and rebuilt lazily.
    map: Option<HashMap<String, u64>>,
    /// Distinct values; a value's position is its index.
    values: Vec<String>,
    /// One entry per submission, duplicates included.
    keys: Vec<u64>,
    active: bool,
    map_capacity: usize,
}

impl LowCardinalityDictionary {
    /// Creates an empty dictionary. `dictionary_capacity` is reserved for the
    /// map and the distinct values whenever the map is (re)built, and
    /// `index_capacity` for the key sequence.
    pub fn with_capacity(dictionary_capacity: usize, index_capacity: usize) -> Self {
        Self {
            map: None,
            values: Vec::with_capacity(dictionary_capacity),
            keys: Vec::with_capacity(index_capacity),
            active: false,
            map_capacity: dictionary_capacity,
        }
    }

    /// Records one submission of `value` and returns its dictionary index.
    ///
    /// A value seen for the first time gets the next sequential index; a
    /// repeated value reuses its existing index without allocating.
    pub fn insert(&mut self, value: &str) -> u64 {
        self.active = true;
        let capacity = self.map_capacity;
        let map = self
            .map
            .get_or_insert_with(|| HashMap::with_capacity(capacity));

        let index = match map.entry_ref(value) {
            EntryRef::Occupied(entry) => *entry.get(),
            EntryRef::Vacant(entry) => {
                let next_index = self.values.len() as u64;
                entry.insert(next_index);
                self.values.push(value.to_owned());
                next_index
            }
        };
        self.keys.push(index);
        index
    }

    /// Looks up the index already assigned to `value`, if any.
    pub fn index_of(&self, value: &str) -> Option<u64> {
        self.map.as_ref()?.get(value).copied()
    }

    /// The distinct values, in first-insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The index sequence, one entry per submission.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once any value has been submitted since the last reset.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The packed index width the current dictionary size calls for.
    pub fn index_width(&self) -> IndexWidth {
        IndexWidth::for_dictionary_len(self.values.len())
    }

    /// Returns to the empty state. The value and key vectors keep their
    /// capacity; the map is released and rebuilt on the next insert.
    pub fn reset(&mut self) {
        self.map = None;
        self.values.clear();
        self.keys.clear();
        self.active = false;
    }
}
