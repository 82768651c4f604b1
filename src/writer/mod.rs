// In: src/writer/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Encoder
// ====================================================================================
//
// The `Encoder` is the only stateful object in the crate. It owns:
//
//   * `output`     - the growable byte buffer every write appends to;
//   * `offset`     - the running total behind `add_len` (cumulative offsets);
//   * `dictionary` - the low-cardinality accumulation state (see `low_cardinality`).
//
// Lifecycle:
//
//   new / with_config -> write_* ... -> write_to(sink) -> (keep appending) -> reset
//
// `write_to` and `reset` are independent. Draining the buffer into a sink leaves
// the offset accumulator and the dictionary untouched; only `reset` starts a
// fresh session.
// ====================================================================================

mod low_cardinality;

use std::io::{self, Write};

use bytemuck::Pod;

use crate::config::EncoderConfig;
use crate::error::WireError;
use crate::kernels::dictionary::LowCardinalityDictionary;
use crate::kernels::leb128;
use crate::traits::LeBytes;

/// Encode-only writer for the native block wire format. Little-endian throughout.
///
/// Every `write_*` call is an infallible append. The encoder is not meant to
/// be shared between producers without external synchronization.
#[derive(Debug)]
pub struct Encoder {
    output: Vec<u8>,
    offset: u64,
    dictionary: LowCardinalityDictionary,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an empty encoder with the default `EncoderConfig`.
    pub fn new() -> Self {
        Self::with_config(&EncoderConfig::default())
    }

    /// Creates an empty encoder whose buffers are pre-sized from `config`.
    pub fn with_config(config: &EncoderConfig) -> Self {
        Self {
            output: Vec::with_capacity(config.output_capacity),
            offset: 0,
            dictionary: LowCardinalityDictionary::with_capacity(
                config.dictionary_capacity,
                config.index_capacity,
            ),
        }
    }

    //==============================================================================
    // 1. Fixed-Width Writers
    //==============================================================================

    /// Appends any fixed-width scalar in its little-endian wire form.
    #[inline]
    pub fn write<T: LeBytes>(&mut self, value: T) {
        value.append_le(&mut self.output);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write(v);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.output.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.write(v);
    }

    pub fn write_u32(&mut self, v: u32) {
        self.write(v);
    }

    pub fn write_u64(&mut self, v: u64) {
        self.write(v);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.write_u8(v as u8);
    }

    pub fn write_i16(&mut self, v: i16) {
        self.write_u16(v as u16);
    }

    pub fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32);
    }

    pub fn write_i64(&mut self, v: i64) {
        self.write_u64(v as u64);
    }

    /// Writes the IEEE-754 bit pattern; NaN payloads and infinities are kept as-is.
    pub fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    pub fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    /// Appends a whole column of fixed-width values back to back.
    ///
    /// Produces the same bytes as calling `write` for each element.
    pub fn write_slice<T: LeBytes + Pod>(&mut self, values: &[T]) {
        #[cfg(target_endian = "little")]
        {
            self.output.extend_from_slice(bytemuck::cast_slice(values));
        }
        #[cfg(not(target_endian = "little"))]
        {
            self.output.reserve(values.len() * T::WIDTH);
            for &value in values {
                value.append_le(&mut self.output);
            }
        }
    }

    //==============================================================================
    // 2. Variable-Length Writers
    //==============================================================================

    /// Writes `v` as an unsigned LEB128 varint.
    pub fn write_uvarint(&mut self, v: u64) {
        leb128::encode_one(v, &mut self.output);
    }

    /// Writes a varint byte length followed by the UTF-8 bytes of `v`.
    pub fn write_string(&mut self, v: &str) {
        self.write_bytes(v.as_bytes());
    }

    /// Writes a varint byte length followed by `v` verbatim.
    pub fn write_bytes(&mut self, v: &[u8]) {
        self.write_uvarint(v.len() as u64);
        self.write_raw(v);
    }

    /// Appends `v` with no framing.
    pub fn write_raw(&mut self, v: &[u8]) {
        self.output.extend_from_slice(v);
    }

    //==============================================================================
    // 3. Cumulative Offsets
    //==============================================================================

    /// Adds `len` to the running offset and writes the new total as a `u64`.
    ///
    /// Used for the offsets array of variable-length columns, which stores
    /// end positions rather than per-element lengths. Overflow wraps silently.
    pub fn add_len(&mut self, len: u64) {
        self.offset = self.offset.wrapping_add(len);
        self.write_u64(self.offset);
    }

    /// The current value of the cumulative offset accumulator.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    //==============================================================================
    // 4. Buffer Lifecycle
    //==============================================================================

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Allocated capacity of the output buffer.
    pub fn capacity(&self) -> usize {
        self.output.capacity()
    }

    /// Consumes the encoder and returns the output buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }

    /// Hands the accumulated bytes to `sink` and returns how many were written.
    ///
    /// Bytes the sink accepted are drained from the buffer, including when the
    /// sink fails part way through. The offset accumulator and the
    /// low-cardinality dictionary are left alone; call `reset` to start a new
    /// session.
    pub fn write_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64, WireError> {
        let mut written = 0;
        let result = loop {
            if written == self.output.len() {
                break Ok(());
            }
            match sink.write(&self.output[written..]) {
                Ok(0) => {
                    break Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted no bytes",
                    ))
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };

        self.output.drain(..written);
        log::trace!(
            "encoder drained {} bytes to sink ({} left)",
            written,
            self.output.len()
        );
        result?;
        Ok(written as u64)
    }

    /// Returns the encoder to its freshly constructed state.
    ///
    /// The output buffer, distinct-value list and index sequence keep their
    /// allocations; the dictionary's value map is released and rebuilt on the
    /// next low-cardinality write.
    pub fn reset(&mut self) {
        log::trace!(
            "encoder reset ({} bytes, {} distinct values discarded)",
            self.output.len(),
            self.dictionary.len()
        );
        self.output.clear();
        self.offset = 0;
        self.dictionary.reset();
    }
}
