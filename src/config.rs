// In: src/config.rs

//! The single source of truth for `Encoder` configuration.
//!
//! The settings only control how much memory an encoder reserves up front. They
//! never change the bytes it produces, so two encoders built from different
//! configs emit identical output for identical write sequences.

use serde::{Deserialize, Serialize};

use crate::error::WireError;

/// Upper bound accepted for any capacity setting (1 GiB worth of elements).
pub const MAX_CAPACITY: usize = 1 << 30;

/// Buffer reservation settings for an `Encoder`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// Initial capacity of the output byte buffer.
    #[serde(default = "default_output_capacity")]
    pub output_capacity: usize,

    /// Capacity reserved for the low-cardinality dictionary (the value map and
    /// the distinct-value list) every time it is rebuilt after a reset.
    #[serde(default = "default_dictionary_capacity")]
    pub dictionary_capacity: usize,

    /// Initial capacity of the low-cardinality index sequence.
    #[serde(default = "default_index_capacity")]
    pub index_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            output_capacity: default_output_capacity(),
            dictionary_capacity: default_dictionary_capacity(),
            index_capacity: default_index_capacity(),
        }
    }
}

impl EncoderConfig {
    /// Parses and validates a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, WireError> {
        let config: EncoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every capacity is within `MAX_CAPACITY`.
    pub fn validate(&self) -> Result<(), WireError> {
        let fields = [
            ("output_capacity", self.output_capacity),
            ("dictionary_capacity", self.dictionary_capacity),
            ("index_capacity", self.index_capacity),
        ];
        for (name, value) in fields {
            if value > MAX_CAPACITY {
                return Err(WireError::InvalidConfig(format!(
                    "{} = {} exceeds the maximum of {}",
                    name, value, MAX_CAPACITY
                )));
            }
        }
        Ok(())
    }
}

/// Helper for `serde` to provide a default for `output_capacity`.
fn default_output_capacity() -> usize {
    4096
}

/// Helper for `serde` to provide a default for `dictionary_capacity`.
fn default_dictionary_capacity() -> usize {
    256
}

/// Helper for `serde` to provide a default for `index_capacity`.
fn default_index_capacity() -> usize {
    1024
}
