//! The capability set shared by all packing codecs.

use crate::packed::Packed;
use oxipack_core::Result;

/// A bit-packing integer codec.
///
/// All four codec variants expose the same three operations. `compress` is
/// the only producer of state: it returns a [`Packed`] handle owning the
/// word stream and decode metadata, and the codec itself stays stateless.
pub trait IntPacker {
    /// Compress an ordered integer sequence into a packed word stream.
    ///
    /// Never fails on empty input (an empty handle is returned); fails only
    /// when the value range cannot be represented in 32-bit words.
    fn compress(&self, values: &[i32]) -> Result<Packed>;

    /// Decompress a handle back into `out`.
    ///
    /// `out` is cleared first. Decompressing an empty handle is a no-op.
    fn decompress(&self, packed: &Packed, out: &mut Vec<i32>) -> Result<()>;

    /// Retrieve the `index`-th element without full decompression.
    ///
    /// Fails when `index` is outside `[0, packed.len())`.
    fn get(&self, packed: &Packed, index: usize) -> Result<i32>;
}
