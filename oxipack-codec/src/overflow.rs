//! Bit packing with an overflow area for outlier values.
//!
//! Each element starts with a flag bit. Flag 0: the payload is the value
//! itself, `value_bits` wide (offset-encoded when the regular population
//! contains negatives). Flag 1: the payload is an `index_bits`-wide slot
//! number into the overflow area, where the outlier is stored as a whole
//! word. Elements are variable width - each uses its actual payload size.
//!
//! The placement policy is chosen at construction: [`Layout::Consecutive`]
//! lets elements straddle word boundaries, [`Layout::NonConsecutive`]
//! starts a fresh word whenever the widest possible element
//! (`1 + max(value_bits, index_bits)` bits) would not fit in the current
//! one. Keying the fresh-word rule on the widest element rather than the
//! actual one keeps the walk decodable: the reader applies the same rule
//! before looking at a flag bit, so padding can never be mistaken for an
//! element.
//!
//! The compressed stream ends with the self-describing trailer from
//! [`crate::trailer`], which is what [`parse`](OverflowPacker::parse)
//! consumes to rebuild a handle with no shared state.

use crate::classify::classify;
use crate::packed::{Layout, OverflowMeta, Packed};
use crate::traits::IntPacker;
use crate::trailer;
use oxipack_core::bitview::{WORD_BITS, WordReader, WordWriter};
use oxipack_core::{PackError, Result, width};

/// Codec routing outlier values to a side area, keyed by a per-element
/// flag bit.
///
/// # Example
///
/// ```
/// use oxipack_codec::{IntPacker, OverflowPacker};
///
/// let packer = OverflowPacker::consecutive();
/// let packed = packer.compress(&[1, 2, 3, 1024, 4, 5, 2048]).unwrap();
/// assert_eq!(packed.overflow_values(), &[1024, 2048]);
/// assert_eq!(packed.overflow_positions(), &[3, 6]);
///
/// let mut out = Vec::new();
/// packer.decompress(&packed, &mut out).unwrap();
/// assert_eq!(out, vec![1, 2, 3, 1024, 4, 5, 2048]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OverflowPacker {
    layout: Layout,
}

impl OverflowPacker {
    /// Create an overflow codec with the given placement policy.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Overflow codec whose elements may straddle word boundaries.
    pub fn consecutive() -> Self {
        Self::new(Layout::Consecutive)
    }

    /// Overflow codec whose elements never straddle word boundaries.
    pub fn non_consecutive() -> Self {
        Self::new(Layout::NonConsecutive)
    }

    /// The placement policy this codec was created with.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Rebuild a handle from a bare compressed word stream.
    ///
    /// This is the format-driven decode path: the metadata trailer embedded
    /// in `words` supplies everything a freshly constructed codec needs, so
    /// no state from the compressing instance is required. The element
    /// positions and the overflow index map are reconstructed by walking
    /// the flag bits once.
    ///
    /// # Errors
    ///
    /// Fails with [`PackError::MissingTrailer`] when no valid trailer is
    /// found in the stream.
    pub fn parse(&self, words: Vec<u32>) -> Result<Packed> {
        if words.is_empty() {
            return Ok(Packed::new_overflow(words, OverflowMeta::empty(self.layout)));
        }

        let trailer = trailer::scan(&words)
            .ok_or_else(|| PackError::missing_trailer(words.len()))?;

        let mut meta = OverflowMeta {
            len: trailer.len,
            value_bits: trailer.value_bits,
            index_bits: trailer.index_bits,
            has_negatives: trailer.has_negatives,
            layout: self.layout,
            data_words: trailer.data_words,
            overflow: trailer.overflow,
            positions: Vec::new(),
            starts: Vec::with_capacity(trailer.len),
        };
        if self.layout == Layout::NonConsecutive && meta.max_element_bits() > WORD_BITS {
            return Err(PackError::width_overflow(meta.max_element_bits()));
        }

        let data = &words[..meta.data_words];
        let mut reader = WordReader::new(data);
        for i in 0..meta.len {
            if self.layout == Layout::NonConsecutive {
                reader.align_for(meta.max_element_bits());
            }
            meta.starts.push(reader.bit_position());
            if reader.read_bit() {
                meta.positions.push(i);
                reader.read_bits(meta.index_bits);
            } else {
                reader.read_bits(meta.value_bits);
            }
        }

        Ok(Packed::new_overflow(words, meta))
    }
}

impl IntPacker for OverflowPacker {
    fn compress(&self, values: &[i32]) -> Result<Packed> {
        if values.is_empty() {
            return Ok(Packed::new_overflow(
                Vec::new(),
                OverflowMeta::empty(self.layout),
            ));
        }

        let partition = classify(values);
        let (value_bits, has_negatives) = if partition.regular.is_empty() {
            // Everything overflowed: only the flag bit matters inline.
            (1, width::has_negatives(values))
        } else {
            (
                width::bits_needed(&partition.regular)?,
                width::has_negatives(&partition.regular),
            )
        };
        let index_bits = width::index_bits(partition.overflow.len());

        let mut meta = OverflowMeta {
            len: values.len(),
            value_bits,
            index_bits,
            has_negatives,
            layout: self.layout,
            data_words: 0,
            overflow: partition.overflow,
            positions: partition.positions,
            starts: Vec::with_capacity(values.len()),
        };
        if self.layout == Layout::NonConsecutive && meta.max_element_bits() > WORD_BITS {
            // A flag plus a full-width payload cannot fit any word without
            // straddling.
            return Err(PackError::width_overflow(meta.max_element_bits()));
        }

        let mut writer = WordWriter::new();
        let mut next_overflow = 0usize;
        for (i, &value) in values.iter().enumerate() {
            if self.layout == Layout::NonConsecutive {
                writer.align_for(meta.max_element_bits());
            }
            meta.starts.push(writer.bit_position());

            let is_overflow =
                next_overflow < meta.positions.len() && meta.positions[next_overflow] == i;
            if is_overflow {
                writer.write_bit(true);
                writer.write_bits(next_overflow as u32, meta.index_bits);
                next_overflow += 1;
            } else {
                writer.write_bit(false);
                let raw = if meta.has_negatives {
                    width::encode_signed(value, meta.value_bits)
                } else {
                    value as u32
                };
                writer.write_bits(raw, meta.value_bits);
            }
        }

        let mut words = writer.finish();
        meta.data_words = words.len();
        trailer::append(
            &mut words,
            meta.len,
            meta.value_bits,
            meta.index_bits,
            meta.has_negatives,
            &meta.overflow,
        );

        Ok(Packed::new_overflow(words, meta))
    }

    fn decompress(&self, packed: &Packed, out: &mut Vec<i32>) -> Result<()> {
        let meta = packed.overflow_meta(self.layout)?;
        out.clear();
        if meta.len == 0 {
            return Ok(());
        }

        out.reserve(meta.len);
        let data = &packed.words()[..meta.data_words];
        let mut reader = WordReader::new(data);
        for _ in 0..meta.len {
            if meta.layout == Layout::NonConsecutive {
                reader.align_for(meta.max_element_bits());
            }
            out.push(read_element(&mut reader, meta));
        }
        Ok(())
    }

    fn get(&self, packed: &Packed, index: usize) -> Result<i32> {
        let meta = packed.overflow_meta(self.layout)?;
        if index >= meta.len {
            return Err(PackError::out_of_bounds(index, meta.len));
        }

        let data = &packed.words()[..meta.data_words];
        let mut reader = WordReader::at_bit(data, meta.starts[index]);
        Ok(read_element(&mut reader, meta))
    }
}

/// Read one flag-prefixed element at the reader's position.
fn read_element(reader: &mut WordReader<'_>, meta: &OverflowMeta) -> i32 {
    if reader.read_bit() {
        let slot = reader.read_bits(meta.index_bits) as usize;
        // An index past the area means corruption; fall back to zero.
        meta.overflow.get(slot).copied().unwrap_or(0)
    } else {
        meta.decode(reader.read_bits(meta.value_bits))
    }
}
