//! Error types for OxiPack operations.
//!
//! This module provides the error type shared by the packing codecs,
//! covering out-of-range access, value-range exhaustion, codec selection
//! errors, and malformed compressed streams.

use thiserror::Error;

/// The main error type for OxiPack operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// Random access with an index outside the compressed array.
    #[error("Index {index} out of bounds [0, {len})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of elements in the compressed array.
        len: usize,
    },

    /// The value set cannot be represented within the 32-bit word size.
    #[error("Value range requires {bits} bits, exceeding the 32-bit word size")]
    WidthOverflow {
        /// Bits the value set would need.
        bits: u32,
    },

    /// Unrecognized packing kind passed to the factory.
    #[error(
        "Unknown packing kind: {name} (expected one of: consecutive, non_consecutive, \
         overflow_consecutive, overflow_non_consecutive)"
    )]
    UnknownKind {
        /// The unrecognized kind string.
        name: String,
    },

    /// No valid metadata trailer was found in a compressed stream.
    #[error("No valid metadata trailer found in compressed stream of {words} words")]
    MissingTrailer {
        /// Length of the scanned stream in words.
        words: usize,
    },

    /// A compressed handle was presented to a codec of a different scheme.
    #[error("Compressed handle was produced by the {found} codec, expected {expected}")]
    SchemeMismatch {
        /// Scheme the codec expected.
        expected: &'static str,
        /// Scheme the handle was produced by.
        found: &'static str,
    },
}

/// Result type alias for OxiPack operations.
pub type Result<T> = std::result::Result<T, PackError>;

impl PackError {
    /// Create an index out of bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create a width overflow error.
    pub fn width_overflow(bits: u32) -> Self {
        Self::WidthOverflow { bits }
    }

    /// Create an unknown kind error.
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind { name: name.into() }
    }

    /// Create a missing trailer error.
    pub fn missing_trailer(words: usize) -> Self {
        Self::MissingTrailer { words }
    }

    /// Create a scheme mismatch error.
    pub fn scheme_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::SchemeMismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PackError::out_of_bounds(7, 5);
        assert_eq!(err.to_string(), "Index 7 out of bounds [0, 5)");

        let err = PackError::width_overflow(33);
        assert!(err.to_string().contains("33 bits"));

        let err = PackError::unknown_kind("zigzag");
        assert!(err.to_string().contains("zigzag"));
        assert!(err.to_string().contains("overflow_non_consecutive"));
    }

    #[test]
    fn test_missing_trailer_display() {
        let err = PackError::missing_trailer(3);
        assert!(err.to_string().contains("3 words"));
    }
}
