//! Test-only decoder for the bytes the `Encoder` produces.
//!
//! The crate itself is encode-only. This reader exists so tests can check that
//! written values come back bit-for-bit; it panics on malformed input.

use crate::format::{IndexWidth, SERIALIZATION_TYPE};

/// A decoded low-cardinality string column.
#[derive(Debug, PartialEq, Eq)]
pub struct LowCardinalityColumn {
    pub header: u64,
    pub width: IndexWidth,
    pub dictionary: Vec<String>,
    pub keys: Vec<u64>,
}

impl LowCardinalityColumn {
    /// Maps every key back through the dictionary.
    pub fn materialize(&self) -> Vec<&str> {
        self.keys
            .iter()
            .map(|&k| self.dictionary[k as usize].as_str())
            .collect()
    }
}

pub struct WireReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn read_raw(&mut self, len: usize) -> &'a [u8] {
        let out = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        out
    }

    fn read_array<const N: usize>(&mut self) -> [u8; N] {
        self.read_raw(N).try_into().unwrap()
    }

    pub fn read_u8(&mut self) -> u8 {
        self.read_array::<1>()[0]
    }

    pub fn read_u16(&mut self) -> u16 {
        u16::from_le_bytes(self.read_array())
    }

    pub fn read_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.read_array())
    }

    pub fn read_u64(&mut self) -> u64 {
        u64::from_le_bytes(self.read_array())
    }

    pub fn read_i8(&mut self) -> i8 {
        self.read_u8() as i8
    }

    pub fn read_i16(&mut self) -> i16 {
        self.read_u16() as i16
    }

    pub fn read_i32(&mut self) -> i32 {
        self.read_u32() as i32
    }

    pub fn read_i64(&mut self) -> i64 {
        self.read_u64() as i64
    }

    pub fn read_f32(&mut self) -> f32 {
        f32::from_bits(self.read_u32())
    }

    pub fn read_f64(&mut self) -> f64 {
        f64::from_bits(self.read_u64())
    }

    pub fn read_bool(&mut self) -> bool {
        match self.read_u8() {
            0 => false,
            1 => true,
            other => panic!("invalid bool byte {}", other),
        }
    }

    pub fn read_uvarint(&mut self) -> u64 {
        let mut result = 0u64;
        let mut shift = 0;
        loop {
            let byte = self.read_u8();
            assert!(shift < 64, "varint longer than 10 bytes");
            result |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return result;
            }
            shift += 7;
        }
    }

    pub fn read_bytes(&mut self) -> &'a [u8] {
        let len = self.read_uvarint() as usize;
        self.read_raw(len)
    }

    pub fn read_string(&mut self) -> String {
        String::from_utf8(self.read_bytes().to_vec()).unwrap()
    }

    pub fn read_low_cardinality(&mut self) -> LowCardinalityColumn {
        let header = self.read_i64() as u64;
        assert_eq!(header & !0xFF, SERIALIZATION_TYPE, "unexpected format tag");
        let width = match header & 0xFF {
            0 => IndexWidth::U8,
            1 => IndexWidth::U16,
            2 => IndexWidth::U32,
            3 => IndexWidth::U64,
            other => panic!("invalid index width selector {}", other),
        };

        let distinct = self.read_i64() as usize;
        let dictionary = (0..distinct).map(|_| self.read_string()).collect();

        let count = self.read_i64() as usize;
        let keys = (0..count)
            .map(|_| match width {
                IndexWidth::U8 => u64::from(self.read_u8()),
                IndexWidth::U16 => u64::from(self.read_u16()),
                IndexWidth::U32 => u64::from(self.read_u32()),
                IndexWidth::U64 => self.read_u64(),
            })
            .collect();

        LowCardinalityColumn {
            header,
            width,
            dictionary,
            keys,
        }
    }
}
