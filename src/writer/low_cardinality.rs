//! Two-phase low-cardinality string encoding.
//!
//! Phase 1 (`add_string_low_cardinality`) only records values in the
//! dictionary. Phase 2 (`flush_string_low_cardinality`) picks the index width
//! from the final distinct count and writes the column:
//!
//! ```text
//! i64  SERIALIZATION_TYPE | width selector
//! i64  distinct count
//! ...  distinct values, each as varint length + bytes, first-insertion order
//! i64  index count
//! ...  one index per submission, packed as u8 / u16 / u32 / u64
//! ```

use super::Encoder;
use crate::format::IndexWidth;
use crate::kernels::leb128;
use crate::traits::LeBytes;

impl Encoder {
    /// Records `value` for the pending low-cardinality column and returns its
    /// dictionary index. Nothing is written to the output buffer.
    pub fn add_string_low_cardinality(&mut self, value: &str) -> u64 {
        self.dictionary.insert(value)
    }

    /// Writes the dictionary and packed index sequence accumulated so far.
    ///
    /// Dictionary state is kept; only `reset` clears it. Index values are
    /// narrowed to the selected width, which always fits the distinct count.
    pub fn flush_string_low_cardinality(&mut self) {
        let width = self.dictionary.index_width();
        let Self {
            output, dictionary, ..
        } = self;

        log::debug!(
            "flushing low-cardinality column: {} distinct, {} indices, {:?} keys",
            dictionary.len(),
            dictionary.keys().len(),
            width
        );

        (width.header() as i64).append_le(output);
        (dictionary.len() as i64).append_le(output);
        for value in dictionary.values() {
            leb128::encode_one(value.len() as u64, output);
            output.extend_from_slice(value.as_bytes());
        }

        let keys = dictionary.keys();
        (keys.len() as i64).append_le(output);
        output.reserve(keys.len() * width.byte_width());
        match width {
            IndexWidth::U8 => keys.iter().for_each(|&k| output.push(k as u8)),
            IndexWidth::U16 => keys.iter().for_each(|&k| (k as u16).append_le(output)),
            IndexWidth::U32 => keys.iter().for_each(|&k| (k as u32).append_le(output)),
            IndexWidth::U64 => keys.iter().for_each(|&k| k.append_le(output)),
        }
    }

    /// Number of distinct values in the pending dictionary.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Number of low-cardinality submissions since the last reset.
    pub fn index_count(&self) -> usize {
        self.dictionary.keys().len()
    }

    /// True once a low-cardinality value has been submitted since the last reset.
    pub fn is_low_cardinality(&self) -> bool {
        self.dictionary.is_active()
    }
}
