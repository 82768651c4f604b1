// In: src/error.rs

//! This module defines the single, unified error type for the chwire crate.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Encoding itself never fails: every `write_*` call on the `Encoder` is an
//! infallible append. Errors only surface at the edges, when the finished
//! buffer is handed to a sink or when configuration is loaded.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    #[error("Invalid encoder configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error raised by the byte sink while draining the output buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while parsing an `EncoderConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
