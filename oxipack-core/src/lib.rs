//! # OxiPack Core
//!
//! Core components for the OxiPack bit-packing compression library.
//!
//! This crate provides the fundamental building blocks for packing ordered
//! integer sequences into dense 32-bit word streams:
//!
//! - [`bitview`]: extract/set bit-runs in words, `WordWriter`/`WordReader`
//! - [`width`]: minimum bit-width calculation and signed offset coding
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! OxiPack is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Factory                                             │
//! │     PackingKind tags, closed Packer variant set         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codecs (oxipack-codec)                              │
//! │     Consecutive, NonConsecutive, Overflow packing       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitView (this crate)                                │
//! │     WordWriter/WordReader, width calculation            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipack_core::bitview::{WordReader, WordWriter};
//! use oxipack_core::width;
//!
//! let values = [1i32, 2, 3, 4, 5];
//! let bits = width::bits_needed(&values).unwrap();
//! assert_eq!(bits, 3);
//!
//! let mut writer = WordWriter::new();
//! for &v in &values {
//!     writer.write_bits(v as u32, bits);
//! }
//! let words = writer.finish();
//! assert_eq!(words.len(), 1);
//!
//! let mut reader = WordReader::new(&words);
//! assert_eq!(reader.read_bits(bits), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitview;
pub mod error;
pub mod width;

// Re-exports for convenience
pub use bitview::{WORD_BITS, WordReader, WordWriter, extract_bits, set_bits};
pub use error::{PackError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitview::{WORD_BITS, WordReader, WordWriter};
    pub use crate::error::{PackError, Result};
    pub use crate::width;
}
