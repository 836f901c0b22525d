//! Self-describing metadata trailer for the overflow codec.
//!
//! The trailer rides in-band at the end of the compressed word stream and
//! is what lets a freshly constructed codec decode the stream with no
//! shared state:
//!
//! ```text
//! [packed elements...]
//! [0xFFFFFFFF]            sentinel
//! [original length]
//! [overflow-area size]
//! [value_bits | sign flag in bit 31]
//! [index_bits]
//! [overflow-index count]
//! [overflow values...]    raw two's-complement words
//! ```
//!
//! Decoding scans backward over at most the last 100 words for a sentinel
//! whose following metadata passes the sanity bounds. The sentinel can in
//! principle collide with packed data, so the bounds are the safety net:
//! a candidate that fails them is skipped and the scan continues.

/// Marker word introducing the metadata trailer.
pub(crate) const SENTINEL: u32 = 0xFFFF_FFFF;

/// Sign-encoding flag carried in the top bit of the `value_bits` word.
const SIGN_FLAG: u32 = 1 << 31;

/// Metadata words between the sentinel and the overflow area.
const METADATA_WORDS: usize = 5;

/// How far from the end the backward sentinel scan reaches.
const SCAN_WINDOW: usize = 100;

/// Sanity bound on element and overflow counts.
const MAX_COUNT: u32 = 1_000_000;

/// Decoded trailer contents.
#[derive(Debug)]
pub(crate) struct Trailer {
    /// Number of elements in the original array.
    pub(crate) len: usize,
    /// Payload width of a regular element.
    pub(crate) value_bits: u32,
    /// Payload width of an overflow reference.
    pub(crate) index_bits: u32,
    /// Whether regular values are offset encoded.
    pub(crate) has_negatives: bool,
    /// The overflow-area values.
    pub(crate) overflow: Vec<i32>,
    /// Words of packed elements preceding the sentinel.
    pub(crate) data_words: usize,
}

/// Append a trailer describing the given compression to `words`.
pub(crate) fn append(
    words: &mut Vec<u32>,
    len: usize,
    value_bits: u32,
    index_bits: u32,
    has_negatives: bool,
    overflow: &[i32],
) {
    let sign = if has_negatives { SIGN_FLAG } else { 0 };
    words.push(SENTINEL);
    words.push(len as u32);
    words.push(overflow.len() as u32);
    words.push(value_bits | sign);
    words.push(index_bits);
    words.push(overflow.len() as u32);
    words.extend(overflow.iter().map(|&v| v as u32));
}

/// Scan `words` backward for a valid trailer.
///
/// Returns `None` when no sentinel within the scan window is followed by
/// metadata passing the sanity bounds.
pub(crate) fn scan(words: &[u32]) -> Option<Trailer> {
    if words.len() < 1 + METADATA_WORDS {
        return None;
    }

    let window_start = words.len().saturating_sub(SCAN_WINDOW);
    for i in (window_start..words.len()).rev() {
        if words[i] != SENTINEL || i + METADATA_WORDS >= words.len() {
            continue;
        }

        let len = words[i + 1];
        let overflow_size = words[i + 2];
        let value_word = words[i + 3];
        let value_bits = value_word & !SIGN_FLAG;
        let index_bits = words[i + 4];
        let index_count = words[i + 5];

        let area_start = i + 1 + METADATA_WORDS;
        let valid = len > 0
            && len < MAX_COUNT
            && overflow_size < MAX_COUNT
            && value_bits > 0
            && value_bits <= 32
            && index_bits <= 32
            && (overflow_size == 0 || index_count <= overflow_size)
            && area_start + overflow_size as usize <= words.len();
        if !valid {
            continue;
        }

        let overflow = words[area_start..area_start + overflow_size as usize]
            .iter()
            .map(|&w| w as i32)
            .collect();
        return Some(Trailer {
            len: len as usize,
            value_bits,
            index_bits,
            has_negatives: value_word & SIGN_FLAG != 0,
            overflow,
            data_words: i,
        });
    }

    None
}
