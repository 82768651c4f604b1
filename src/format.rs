// In: src/format.rs

//! Defines the wire-level constants of the native block format that the
//! encoder has to agree on with the server, most importantly the header of a
//! low-cardinality (dictionary encoded) string column.

//==================================================================================
// I. Low-Cardinality Key Serialization Flags
//==================================================================================

/// The column carries its own dictionary keys in addition to any global dictionary.
pub const HAS_ADDITIONAL_KEYS_BIT: u64 = 1 << 9;
/// The receiver must replace its dictionary with the one sent in this block.
pub const NEED_UPDATE_DICTIONARY: u64 = 1 << 10;

/// Format tag written in front of every low-cardinality string column.
/// The index width selector is OR-ed into its low bits.
pub const SERIALIZATION_TYPE: u64 = HAS_ADDITIONAL_KEYS_BIT | NEED_UPDATE_DICTIONARY;

//==================================================================================
// II. Index Width Selection
//==================================================================================

/// The fixed integer width used for the packed dictionary indices of a
/// low-cardinality column. The discriminant is the selector sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IndexWidth {
    U8 = 0,
    U16 = 1,
    U32 = 2,
    U64 = 3,
}

impl IndexWidth {
    /// Picks the index width for a dictionary holding `distinct` values.
    ///
    /// The selector is `floor(log2(distinct) / 8)`, computed with exact integer
    /// arithmetic. A dictionary with 0 or 1 entries selects `U8`; anything at or
    /// beyond 2^32 entries, where the formula runs past the last class, is
    /// clamped to `U64`.
    ///
    /// Note the boundaries sit on powers of 256, so exactly 256 distinct values
    /// already select `U16`.
    pub fn for_dictionary_len(distinct: usize) -> Self {
        if distinct <= 1 {
            return IndexWidth::U8;
        }
        match distinct.ilog2() / 8 {
            0 => IndexWidth::U8,
            1 => IndexWidth::U16,
            2 => IndexWidth::U32,
            _ => IndexWidth::U64,
        }
    }

    /// The selector value OR-ed into the column header.
    pub fn selector(self) -> u64 {
        self as u64
    }

    /// Bytes occupied by one packed index.
    pub fn byte_width(self) -> usize {
        1 << (self as usize)
    }

    /// The full header word for a low-cardinality column using this width.
    pub fn header(self) -> u64 {
        SERIALIZATION_TYPE | self.selector()
    }
}
