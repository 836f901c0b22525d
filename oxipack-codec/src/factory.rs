//! Codec selection by type tag.
//!
//! The four codec configurations form a closed set, so selection is a pure
//! function from [`PackingKind`] to a [`Packer`] variant - no registry or
//! dynamic lookup. String tags (the external configuration surface) parse
//! case-insensitively and ignore surrounding whitespace.

use crate::consecutive::ConsecutivePacker;
use crate::non_consecutive::NonConsecutivePacker;
use crate::overflow::OverflowPacker;
use crate::packed::{Layout, Packed};
use crate::traits::IntPacker;
use oxipack_core::{PackError, Result};
use std::fmt;
use std::str::FromStr;

/// Tag identifying one of the four codec configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackingKind {
    /// Fixed-width packing, elements may straddle word boundaries.
    Consecutive,
    /// Fixed-width packing, elements never straddle word boundaries.
    NonConsecutive,
    /// Overflow packing, elements may straddle word boundaries.
    OverflowConsecutive,
    /// Overflow packing, elements never straddle word boundaries.
    OverflowNonConsecutive,
}

impl PackingKind {
    /// All available packing kinds.
    pub const ALL: [PackingKind; 4] = [
        PackingKind::Consecutive,
        PackingKind::NonConsecutive,
        PackingKind::OverflowConsecutive,
        PackingKind::OverflowNonConsecutive,
    ];

    /// The string tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackingKind::Consecutive => "consecutive",
            PackingKind::NonConsecutive => "non_consecutive",
            PackingKind::OverflowConsecutive => "overflow_consecutive",
            PackingKind::OverflowNonConsecutive => "overflow_non_consecutive",
        }
    }

    /// The fixed-width kind using the given placement policy.
    pub fn fixed(layout: Layout) -> Self {
        match layout {
            Layout::Consecutive => PackingKind::Consecutive,
            Layout::NonConsecutive => PackingKind::NonConsecutive,
        }
    }

    /// The overflow kind using the given placement policy.
    pub fn overflow(layout: Layout) -> Self {
        match layout {
            Layout::Consecutive => PackingKind::OverflowConsecutive,
            Layout::NonConsecutive => PackingKind::OverflowNonConsecutive,
        }
    }
}

impl fmt::Display for PackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackingKind {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consecutive" => Ok(PackingKind::Consecutive),
            "non_consecutive" => Ok(PackingKind::NonConsecutive),
            "overflow_consecutive" => Ok(PackingKind::OverflowConsecutive),
            "overflow_non_consecutive" => Ok(PackingKind::OverflowNonConsecutive),
            _ => Err(PackError::unknown_kind(s.trim())),
        }
    }
}

/// The closed set of codec implementations.
///
/// Obtained from [`create`] (or [`Packer::from_tag`]); dispatches the
/// [`IntPacker`] operations to the selected codec.
#[derive(Debug, Clone, Copy)]
pub enum Packer {
    /// Fixed-width, straddling.
    Consecutive(ConsecutivePacker),
    /// Fixed-width, non-straddling.
    NonConsecutive(NonConsecutivePacker),
    /// Overflow, straddling.
    OverflowConsecutive(OverflowPacker),
    /// Overflow, non-straddling.
    OverflowNonConsecutive(OverflowPacker),
}

/// Create the codec for a packing kind.
///
/// # Example
///
/// ```
/// use oxipack_codec::factory::{self, PackingKind};
/// use oxipack_codec::IntPacker;
///
/// let kind: PackingKind = "overflow_consecutive".parse().unwrap();
/// let packer = factory::create(kind);
/// let packed = packer.compress(&[1, 2, 3]).unwrap();
/// assert_eq!(packed.len(), 3);
///
/// assert!("zigzag".parse::<PackingKind>().is_err());
/// ```
pub fn create(kind: PackingKind) -> Packer {
    match kind {
        PackingKind::Consecutive => Packer::Consecutive(ConsecutivePacker::new()),
        PackingKind::NonConsecutive => Packer::NonConsecutive(NonConsecutivePacker::new()),
        PackingKind::OverflowConsecutive => {
            Packer::OverflowConsecutive(OverflowPacker::consecutive())
        }
        PackingKind::OverflowNonConsecutive => {
            Packer::OverflowNonConsecutive(OverflowPacker::non_consecutive())
        }
    }
}

impl Packer {
    /// Create the codec named by a string tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().map(create)
    }

    /// The kind of this codec.
    pub fn kind(&self) -> PackingKind {
        match self {
            Packer::Consecutive(_) => PackingKind::Consecutive,
            Packer::NonConsecutive(_) => PackingKind::NonConsecutive,
            Packer::OverflowConsecutive(_) => PackingKind::OverflowConsecutive,
            Packer::OverflowNonConsecutive(_) => PackingKind::OverflowNonConsecutive,
        }
    }
}

impl IntPacker for Packer {
    fn compress(&self, values: &[i32]) -> Result<Packed> {
        match self {
            Packer::Consecutive(p) => p.compress(values),
            Packer::NonConsecutive(p) => p.compress(values),
            Packer::OverflowConsecutive(p) | Packer::OverflowNonConsecutive(p) => {
                p.compress(values)
            }
        }
    }

    fn decompress(&self, packed: &Packed, out: &mut Vec<i32>) -> Result<()> {
        match self {
            Packer::Consecutive(p) => p.decompress(packed, out),
            Packer::NonConsecutive(p) => p.decompress(packed, out),
            Packer::OverflowConsecutive(p) | Packer::OverflowNonConsecutive(p) => {
                p.decompress(packed, out)
            }
        }
    }

    fn get(&self, packed: &Packed, index: usize) -> Result<i32> {
        match self {
            Packer::Consecutive(p) => p.get(packed, index),
            Packer::NonConsecutive(p) => p.get(packed, index),
            Packer::OverflowConsecutive(p) | Packer::OverflowNonConsecutive(p) => {
                p.get(packed, index)
            }
        }
    }
}
