//! This file is the root of the `chwire` Rust crate.
//!
//! `chwire` is an encode-only writer for the ClickHouse native block wire
//! format. Its one stateful type, [`Encoder`], appends little-endian scalars,
//! varint-prefixed strings and cumulative offsets to a reusable buffer, and
//! implements two-phase low-cardinality (dictionary) string encoding.
//!
//! ```
//! use chwire::Encoder;
//!
//! let mut encoder = Encoder::new();
//! for region in ["eu", "us", "eu", "eu"] {
//!     encoder.add_string_low_cardinality(region);
//! }
//! encoder.flush_string_low_cardinality();
//!
//! let mut sink: Vec<u8> = Vec::new();
//! encoder.write_to(&mut sink).unwrap();
//! encoder.reset();
//! assert!(!sink.is_empty());
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod format;
pub mod kernels;
pub mod observability;
pub mod traits;
pub mod writer;

#[cfg(test)]
mod testing;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::EncoderConfig;
pub use error::WireError;
pub use format::IndexWidth;
pub use observability::init_logging;
pub use writer::Encoder;
