//! # OxiPack Codec: Bit-Packing Integer Compression
//!
//! This crate packs ordered `i32` sequences into dense 32-bit word streams
//! using the minimum bit-width that represents every value, with full
//! decompression and random-access single-element retrieval.
//!
//! ## Codec variants
//!
//! - **Consecutive**: fixed-width elements packed back to back; elements
//!   may straddle word boundaries. Densest layout.
//! - **Non-consecutive**: fixed-width elements that never straddle; padding
//!   at word ends buys pure-arithmetic O(1) random access.
//! - **Overflow consecutive / non-consecutive**: statistical outliers are
//!   routed to a side area and referenced through a per-element flag bit,
//!   so the common case uses fewer bits per element. The compressed stream
//!   ends in a self-describing metadata trailer, letting a fresh codec
//!   instance decode it with no shared state.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_codec::{IntPacker, PackingKind, factory};
//!
//! let packer = factory::create(PackingKind::Consecutive);
//! let packed = packer.compress(&[1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(packed.bits_per_element(), 3);
//! assert_eq!(packed.words().len(), 1);
//!
//! let mut out = Vec::new();
//! packer.decompress(&packed, &mut out).unwrap();
//! assert_eq!(out, vec![1, 2, 3, 4, 5]);
//! assert_eq!(packer.get(&packed, 3).unwrap(), 4);
//! ```
//!
//! ## Overflow areas
//!
//! ```rust
//! use oxipack_codec::{IntPacker, OverflowPacker};
//!
//! let packer = OverflowPacker::consecutive();
//! let packed = packer.compress(&[1, 2, 3, 1024, 4, 5, 2048]).unwrap();
//! // The two wide values live in the overflow area...
//! assert_eq!(packed.overflow_values(), &[1024, 2048]);
//! // ...and the regular values pack at 3 bits instead of 12.
//! assert_eq!(packed.bits_per_element(), 3);
//!
//! // The embedded trailer is sufficient for a fresh instance.
//! let fresh = OverflowPacker::consecutive();
//! let parsed = fresh.parse(packed.words().to_vec()).unwrap();
//! let mut out = Vec::new();
//! fresh.decompress(&parsed, &mut out).unwrap();
//! assert_eq!(out, vec![1, 2, 3, 1024, 4, 5, 2048]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod classify;
mod consecutive;
pub mod factory;
mod non_consecutive;
mod overflow;
mod packed;
mod traits;
mod trailer;

pub use consecutive::ConsecutivePacker;
pub use factory::{Packer, PackingKind};
pub use non_consecutive::NonConsecutivePacker;
pub use overflow::OverflowPacker;
pub use packed::{Layout, Packed};
pub use traits::IntPacker;

// Shared error surface from the core crate.
pub use oxipack_core::{PackError, Result};

/// Compress `values` with the codec named by `kind` (convenience function).
///
/// # Example
///
/// ```rust
/// use oxipack_codec::PackingKind;
///
/// let packed = oxipack_codec::compress(&[7, -3, 9], PackingKind::NonConsecutive).unwrap();
/// let out = oxipack_codec::decompress(&packed).unwrap();
/// assert_eq!(out, vec![7, -3, 9]);
/// ```
pub fn compress(values: &[i32], kind: PackingKind) -> Result<Packed> {
    factory::create(kind).compress(values)
}

/// Decompress a handle with the codec that produced it (convenience
/// function).
pub fn decompress(packed: &Packed) -> Result<Vec<i32>> {
    let mut out = Vec::new();
    factory::create(packed.kind()).decompress(packed, &mut out)?;
    Ok(out)
}

/// Retrieve one element from a handle without full decompression
/// (convenience function).
///
/// # Example
///
/// ```rust
/// use oxipack_codec::PackingKind;
///
/// let packed = oxipack_codec::compress(&[5, 10, 15], PackingKind::Consecutive).unwrap();
/// assert_eq!(oxipack_codec::get(&packed, 1).unwrap(), 10);
/// ```
pub fn get(packed: &Packed, index: usize) -> Result<i32> {
    factory::create(packed.kind()).get(packed, index)
}
