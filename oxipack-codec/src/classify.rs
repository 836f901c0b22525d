//! Outlier classification for the overflow codec.
//!
//! The classifier ranks values by the bits their magnitude needs and
//! routes statistical outliers to the overflow area so the main stream
//! can use a narrower element width. The constants below are part of the
//! compressed format's contract: the same input must always produce the
//! same partition.

use oxipack_core::width;

/// Result of splitting an input array into regular and overflow values.
#[derive(Debug, Default)]
pub(crate) struct Partition {
    /// Values encoded inline in the main stream, in input order.
    pub(crate) regular: Vec<i32>,
    /// Outlier values routed to the overflow area, in input order.
    pub(crate) overflow: Vec<i32>,
    /// Original-array positions of the overflow values, ascending.
    pub(crate) positions: Vec<usize>,
}

/// Split `values` into regular and overflow partitions.
///
/// A value is a provisional outlier when its magnitude width exceeds
/// `median + max(3, median / 2)`. The split is then kept only if it saves
/// space or the outliers stay a small slice of the array: when the full
/// overflow cost (`(regular_width + 1) * n` inline bits plus one whole
/// word per overflow entry) exceeds the no-overflow cost and outliers are
/// more than 30% of the input, everything is classified regular.
pub(crate) fn classify(values: &[i32]) -> Partition {
    if values.is_empty() {
        return Partition::default();
    }

    let widths: Vec<u32> = values.iter().map(|&v| width::magnitude_bits(v)).collect();
    let mut sorted = widths.clone();
    sorted.sort_unstable();
    let median = sorted[sorted.len() / 2];
    let cutoff = median + (median / 2).max(3);

    let mut partition = Partition::default();
    for (i, (&value, &bits)) in values.iter().zip(&widths).enumerate() {
        if bits > cutoff {
            partition.overflow.push(value);
            partition.positions.push(i);
        } else {
            partition.regular.push(value);
        }
    }

    if !partition.overflow.is_empty() {
        let max_width = sorted[sorted.len() - 1];
        let regular_width = partition
            .regular
            .iter()
            .map(|&v| width::magnitude_bits(v))
            .max()
            .unwrap_or(1);

        let n = values.len() as u64;
        let bits_without = u64::from(max_width) * n;
        let bits_with = u64::from(regular_width + 1) * n + partition.overflow.len() as u64 * 32;

        // Abandon the split when it wastes space AND outliers exceed 30%.
        let too_many = partition.overflow.len() * 10 > values.len() * 3;
        if bits_with > bits_without && too_many {
            return Partition {
                regular: values.to_vec(),
                overflow: Vec::new(),
                positions: Vec::new(),
            };
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outliers_detected() {
        // widths [1,2,2,11,3,3,12], median 3, cutoff 6
        let part = classify(&[1, 2, 3, 1024, 4, 5, 2048]);
        assert_eq!(part.regular, vec![1, 2, 3, 4, 5]);
        assert_eq!(part.overflow, vec![1024, 2048]);
        assert_eq!(part.positions, vec![3, 6]);
    }

    #[test]
    fn test_uniform_input_has_no_overflow() {
        let part = classify(&[5, 6, 7, 8, 9]);
        assert!(part.overflow.is_empty());
        assert_eq!(part.regular, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_split_abandoned_when_wasteful() {
        // Three of seven values (43%) are outliers and the split costs
        // more bits than packing everything at the widest width.
        let values = [1, 1, 1, 1, 1000, 2000, 4000];
        let part = classify(&values);
        assert!(part.overflow.is_empty());
        assert_eq!(part.regular, values.to_vec());
    }

    #[test]
    fn test_split_kept_when_it_saves_space() {
        // Two outliers out of 22: the narrow inline width pays for the
        // overflow words many times over.
        let mut values = vec![5; 20];
        values.push(100_000);
        values.push(70_000);
        let part = classify(&values);
        assert_eq!(part.overflow, vec![100_000, 70_000]);
        assert_eq!(part.positions, vec![20, 21]);
        assert_eq!(part.regular.len(), 20);
    }

    #[test]
    fn test_deterministic() {
        let values: Vec<i32> = (0..50)
            .map(|i| if i % 9 == 0 { 1 << 20 } else { i % 16 })
            .collect();
        let a = classify(&values);
        let b = classify(&values);
        assert_eq!(a.overflow, b.overflow);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.regular, b.regular);
    }

    #[test]
    fn test_negative_outliers_ranked_by_magnitude() {
        let part = classify(&[-1, 2, -3, -50_000, 1, 2]);
        assert_eq!(part.overflow, vec![-50_000]);
        assert_eq!(part.positions, vec![3]);
    }
}
