//! Fixed-width packing where elements may straddle word boundaries.
//!
//! Every element is written as exactly `bits_per_element` bits, back to
//! back with no padding; an element whose bits do not fit in the current
//! word continues in the next one, most-significant chunk first. This is
//! the densest of the fixed-width layouts: `n` elements occupy exactly
//! `ceil(n * bits / 32)` words.

use crate::packed::{FixedMeta, Layout, Packed};
use crate::traits::IntPacker;
use oxipack_core::bitview::{WORD_BITS, WordReader, WordWriter};
use oxipack_core::{PackError, Result, width};

/// Codec packing fixed-width elements that may straddle word boundaries.
///
/// # Example
///
/// ```
/// use oxipack_codec::{ConsecutivePacker, IntPacker};
///
/// let packer = ConsecutivePacker::new();
/// let packed = packer.compress(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(packed.bits_per_element(), 3);
/// assert_eq!(packed.words().len(), 1);
/// assert_eq!(packer.get(&packed, 3).unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsecutivePacker;

impl ConsecutivePacker {
    /// Create the codec.
    pub fn new() -> Self {
        Self
    }
}

impl IntPacker for ConsecutivePacker {
    fn compress(&self, values: &[i32]) -> Result<Packed> {
        if values.is_empty() {
            return Ok(Packed::new_fixed(
                Vec::new(),
                FixedMeta {
                    len: 0,
                    bits: 0,
                    has_negatives: false,
                    layout: Layout::Consecutive,
                },
            ));
        }

        let meta = FixedMeta {
            len: values.len(),
            bits: width::bits_needed(values)?,
            has_negatives: width::has_negatives(values),
            layout: Layout::Consecutive,
        };

        let total_bits = values.len() as u64 * u64::from(meta.bits);
        let mut writer = WordWriter::with_capacity(total_bits.div_ceil(u64::from(WORD_BITS)) as usize);
        for &value in values {
            writer.write_bits(meta.encode(value), meta.bits);
        }

        Ok(Packed::new_fixed(writer.finish(), meta))
    }

    fn decompress(&self, packed: &Packed, out: &mut Vec<i32>) -> Result<()> {
        let meta = packed.fixed_meta(Layout::Consecutive)?;
        out.clear();
        if packed.words().is_empty() || meta.len == 0 {
            return Ok(());
        }

        out.reserve(meta.len);
        let mut reader = WordReader::new(packed.words());
        for _ in 0..meta.len {
            let raw = reader.read_bits(meta.bits);
            out.push(meta.decode(raw));
        }
        Ok(())
    }

    fn get(&self, packed: &Packed, index: usize) -> Result<i32> {
        let meta = packed.fixed_meta(Layout::Consecutive)?;
        if index >= meta.len {
            return Err(PackError::out_of_bounds(index, meta.len));
        }

        let start_bit = index as u64 * u64::from(meta.bits);
        let mut reader = WordReader::at_bit(packed.words(), start_bit);
        Ok(meta.decode(reader.read_bits(meta.bits)))
    }
}
