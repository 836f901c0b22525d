//! Fixed-width packing where elements never straddle word boundaries.
//!
//! A word holds `floor(32 / bits_per_element)` elements; whatever bits are
//! left over stay zero and the next element starts a fresh word. The
//! padding costs space over the consecutive layout, but random access
//! becomes pure index arithmetic with no dependency on neighboring words.

use crate::packed::{FixedMeta, Layout, Packed};
use crate::traits::IntPacker;
use oxipack_core::bitview::{WORD_BITS, WordReader, WordWriter, extract_bits};
use oxipack_core::{PackError, Result, width};

/// Codec packing fixed-width elements that never straddle word boundaries.
///
/// # Example
///
/// ```
/// use oxipack_codec::{IntPacker, NonConsecutivePacker};
///
/// let packer = NonConsecutivePacker::new();
/// let packed = packer.compress(&[10, 20, 30, 40]).unwrap();
/// assert_eq!(packed.bits_per_element(), 6);
/// assert_eq!(packer.get(&packed, 2).unwrap(), 30);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NonConsecutivePacker;

impl NonConsecutivePacker {
    /// Create the codec.
    pub fn new() -> Self {
        Self
    }
}

impl IntPacker for NonConsecutivePacker {
    fn compress(&self, values: &[i32]) -> Result<Packed> {
        if values.is_empty() {
            return Ok(Packed::new_fixed(
                Vec::new(),
                FixedMeta {
                    len: 0,
                    bits: 0,
                    has_negatives: false,
                    layout: Layout::NonConsecutive,
                },
            ));
        }

        let meta = FixedMeta {
            len: values.len(),
            bits: width::bits_needed(values)?,
            has_negatives: width::has_negatives(values),
            layout: Layout::NonConsecutive,
        };

        let per_word = (WORD_BITS / meta.bits) as usize;
        let mut writer = WordWriter::with_capacity(values.len().div_ceil(per_word));
        for &value in values {
            writer.align_for(meta.bits);
            writer.write_bits(meta.encode(value), meta.bits);
        }

        Ok(Packed::new_fixed(writer.finish(), meta))
    }

    fn decompress(&self, packed: &Packed, out: &mut Vec<i32>) -> Result<()> {
        let meta = packed.fixed_meta(Layout::NonConsecutive)?;
        out.clear();
        if packed.words().is_empty() || meta.len == 0 {
            return Ok(());
        }

        out.reserve(meta.len);
        let mut reader = WordReader::new(packed.words());
        for _ in 0..meta.len {
            reader.align_for(meta.bits);
            let raw = reader.read_bits(meta.bits);
            out.push(meta.decode(raw));
        }
        Ok(())
    }

    fn get(&self, packed: &Packed, index: usize) -> Result<i32> {
        let meta = packed.fixed_meta(Layout::NonConsecutive)?;
        if index >= meta.len {
            return Err(PackError::out_of_bounds(index, meta.len));
        }

        let per_word = (WORD_BITS / meta.bits) as usize;
        let word = packed.words()[index / per_word];
        let offset = (index % per_word) as u32 * meta.bits;
        Ok(meta.decode(extract_bits(word, offset, meta.bits)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let values = vec![10, 20, 30, 40, 50, 60, 70];
        let packer = NonConsecutivePacker::new();
        let packed = packer.compress(&values).unwrap();

        // 7 bits per element, 4 elements per word.
        assert_eq!(packed.bits_per_element(), 7);
        assert_eq!(packed.words().len(), 2);

        let mut out = Vec::new();
        packer.decompress(&packed, &mut out).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn test_word_count_formula() {
        // 5-bit elements: 6 per word, the trailing 2 bits padded.
        let values: Vec<i32> = (0..25).map(|i| (i * 7) % 31).collect();
        let packer = NonConsecutivePacker::new();
        let packed = packer.compress(&values).unwrap();

        assert_eq!(packed.bits_per_element(), 5);
        // ceil(25 / 6) words
        assert_eq!(packed.words().len(), 5);
    }

    #[test]
    fn test_random_access() {
        let values: Vec<i32> = (0..100).map(|i| (i * 31 + 17) % 1000).collect();
        let packer = NonConsecutivePacker::new();
        let packed = packer.compress(&values).unwrap();

        for (i, &v) in values.iter().enumerate() {
            assert_eq!(packer.get(&packed, i).unwrap(), v);
        }
        assert!(packer.get(&packed, values.len()).is_err());
    }

    #[test]
    fn test_negative_round_trip() {
        let values = vec![-100, 0, 100, -1, 1, -64];
        let packer = NonConsecutivePacker::new();
        let packed = packer.compress(&values).unwrap();

        // max|v| = 100 -> ceil(log2(101)) + 1 = 8
        assert_eq!(packed.bits_per_element(), 8);

        let mut out = Vec::new();
        packer.decompress(&packed, &mut out).unwrap();
        assert_eq!(out, values);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(packer.get(&packed, i).unwrap(), v);
        }
    }

    #[test]
    fn test_empty_and_all_zero() {
        let packer = NonConsecutivePacker::new();

        let packed = packer.compress(&[]).unwrap();
        assert!(packed.words().is_empty());

        let packed = packer.compress(&[0, 0, 0]).unwrap();
        assert_eq!(packed.bits_per_element(), 1);
        let mut out = Vec::new();
        packer.decompress(&packed, &mut out).unwrap();
        assert_eq!(out, vec![0, 0, 0]);
    }

    #[test]
    fn test_full_width_elements() {
        // 32-bit elements: one per word.
        let values = vec![-(i32::MAX), i32::MAX, 0];
        let packer = NonConsecutivePacker::new();
        let packed = packer.compress(&values).unwrap();

        assert_eq!(packed.bits_per_element(), 32);
        assert_eq!(packed.words().len(), 3);

        let mut out = Vec::new();
        packer.decompress(&packed, &mut out).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn test_never_shorter_than_consecutive() {
        use crate::consecutive::ConsecutivePacker;

        let values: Vec<i32> = (0..40).map(|i| (i * 13) % 29).collect();
        let packed_nc = NonConsecutivePacker::new().compress(&values).unwrap();
        let packed_c = ConsecutivePacker::new().compress(&values).unwrap();
        assert!(packed_nc.words().len() >= packed_c.words().len());
    }
}
