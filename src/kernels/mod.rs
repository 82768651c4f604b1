//! This module contains the pure encoding kernels the `Encoder` is built on.
//!
//! Kernels never own the output buffer; they append into a `Vec<u8>` or hold
//! intermediate state that the encoder serializes later.

pub mod dictionary;
pub mod leb128;
