//! The compressed handle returned by every codec.
//!
//! [`Packed`] owns the flat word stream plus the metadata needed to decode
//! it. Handing this state back explicitly (instead of keeping it in mutable
//! codec fields) is what makes the codecs themselves stateless: a handle is
//! only readable, and the codec that produced it must be presented with it
//! again for `decompress`/`get`.
//!
//! For the two fixed-width codecs the metadata lives *only* in the handle -
//! the word stream alone is not self-describing. The overflow codec also
//! embeds a trailer in the words themselves, so a handle can additionally be
//! reconstructed from a bare word stream via
//! [`OverflowPacker::parse`](crate::OverflowPacker::parse).

use crate::factory::PackingKind;
use oxipack_core::width;

/// Element placement policy within the packed word stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Elements may straddle the boundary between two packed words.
    Consecutive,
    /// Elements never straddle a word boundary; leftover bits at the end
    /// of a word stay zero and the next element starts a fresh word.
    NonConsecutive,
}

/// Decode metadata for the fixed-width codecs.
#[derive(Debug, Clone)]
pub(crate) struct FixedMeta {
    /// Number of elements in the original array.
    pub(crate) len: usize,
    /// Width of every element.
    pub(crate) bits: u32,
    /// Whether offset encoding was applied.
    pub(crate) has_negatives: bool,
    /// Placement policy used at compress time.
    pub(crate) layout: Layout,
}

impl FixedMeta {
    pub(crate) fn encode(&self, value: i32) -> u32 {
        if self.has_negatives {
            width::encode_signed(value, self.bits)
        } else {
            value as u32
        }
    }

    pub(crate) fn decode(&self, raw: u32) -> i32 {
        if self.has_negatives {
            width::decode_signed(raw, self.bits)
        } else {
            raw as i32
        }
    }
}

/// Decode metadata for the overflow codec.
#[derive(Debug, Clone)]
pub(crate) struct OverflowMeta {
    /// Number of elements in the original array.
    pub(crate) len: usize,
    /// Payload width of a regular element.
    pub(crate) value_bits: u32,
    /// Payload width of an overflow reference.
    pub(crate) index_bits: u32,
    /// Whether regular values are offset encoded.
    pub(crate) has_negatives: bool,
    /// Placement policy used at compress time.
    pub(crate) layout: Layout,
    /// Words of packed elements before the metadata trailer.
    pub(crate) data_words: usize,
    /// Raw outlier values, referenced by index from the packed stream.
    pub(crate) overflow: Vec<i32>,
    /// Original-array positions of the overflow elements.
    pub(crate) positions: Vec<usize>,
    /// Start bit of each element, memoized for O(1) random access.
    pub(crate) starts: Vec<u64>,
}

impl OverflowMeta {
    pub(crate) fn empty(layout: Layout) -> Self {
        Self {
            len: 0,
            value_bits: 0,
            index_bits: 0,
            has_negatives: false,
            layout,
            data_words: 0,
            overflow: Vec::new(),
            positions: Vec::new(),
            starts: Vec::new(),
        }
    }

    /// Widest possible element: flag bit plus the larger payload.
    pub(crate) fn max_element_bits(&self) -> u32 {
        1 + self.value_bits.max(self.index_bits)
    }

    pub(crate) fn decode(&self, raw: u32) -> i32 {
        if self.has_negatives {
            width::decode_signed(raw, self.value_bits)
        } else {
            raw as i32
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Meta {
    Fixed(FixedMeta),
    Overflow(OverflowMeta),
}

/// A compressed integer array: the packed word stream plus everything
/// needed to decompress it or answer random-access queries.
///
/// Produced by [`IntPacker::compress`](crate::IntPacker::compress); handed
/// back to the same codec kind for `decompress`/`get`. Presenting a handle
/// to a codec of a different kind fails with
/// [`PackError::SchemeMismatch`](oxipack_core::PackError::SchemeMismatch).
#[derive(Debug, Clone)]
pub struct Packed {
    words: Vec<u32>,
    meta: Meta,
}

impl Packed {
    pub(crate) fn new_fixed(words: Vec<u32>, meta: FixedMeta) -> Self {
        Self {
            words,
            meta: Meta::Fixed(meta),
        }
    }

    pub(crate) fn new_overflow(words: Vec<u32>, meta: OverflowMeta) -> Self {
        Self {
            words,
            meta: Meta::Overflow(meta),
        }
    }

    /// Retrieve the fixed-width metadata, verifying the handle was produced
    /// under the given placement policy.
    pub(crate) fn fixed_meta(&self, layout: Layout) -> oxipack_core::Result<&FixedMeta> {
        match &self.meta {
            Meta::Fixed(meta) if meta.layout == layout => Ok(meta),
            _ => Err(oxipack_core::PackError::scheme_mismatch(
                PackingKind::fixed(layout).as_str(),
                self.kind().as_str(),
            )),
        }
    }

    /// Retrieve the overflow metadata, verifying the handle was produced
    /// under the given placement policy.
    pub(crate) fn overflow_meta(&self, layout: Layout) -> oxipack_core::Result<&OverflowMeta> {
        match &self.meta {
            Meta::Overflow(meta) if meta.layout == layout => Ok(meta),
            _ => Err(oxipack_core::PackError::scheme_mismatch(
                PackingKind::overflow(layout).as_str(),
                self.kind().as_str(),
            )),
        }
    }

    /// The packed word stream. For overflow handles this includes the
    /// metadata trailer - it is the complete wire format.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Consume the handle, returning the packed word stream.
    pub fn into_words(self) -> Vec<u32> {
        self.words
    }

    /// Number of elements in the original array.
    pub fn len(&self) -> usize {
        match &self.meta {
            Meta::Fixed(meta) => meta.len,
            Meta::Overflow(meta) => meta.len,
        }
    }

    /// Whether the original array was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which codec produced this handle.
    pub fn kind(&self) -> PackingKind {
        match &self.meta {
            Meta::Fixed(meta) => PackingKind::fixed(meta.layout),
            Meta::Overflow(meta) => PackingKind::overflow(meta.layout),
        }
    }

    /// Element payload width: the fixed element width for the fixed-width
    /// codecs, the regular-value width (excluding the flag bit) for the
    /// overflow codec.
    pub fn bits_per_element(&self) -> u32 {
        match &self.meta {
            Meta::Fixed(meta) => meta.bits,
            Meta::Overflow(meta) => meta.value_bits,
        }
    }

    /// Whether offset encoding was applied to the encoded values.
    pub fn has_negatives(&self) -> bool {
        match &self.meta {
            Meta::Fixed(meta) => meta.has_negatives,
            Meta::Overflow(meta) => meta.has_negatives,
        }
    }

    /// The raw outlier values held in the overflow area. Empty for the
    /// fixed-width codecs.
    pub fn overflow_values(&self) -> &[i32] {
        match &self.meta {
            Meta::Fixed(_) => &[],
            Meta::Overflow(meta) => &meta.overflow,
        }
    }

    /// Original-array positions of the overflow elements. Empty for the
    /// fixed-width codecs.
    pub fn overflow_positions(&self) -> &[usize] {
        match &self.meta {
            Meta::Fixed(_) => &[],
            Meta::Overflow(meta) => &meta.positions,
        }
    }
}
