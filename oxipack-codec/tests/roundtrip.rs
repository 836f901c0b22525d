//! Cross-codec round-trip and random-access tests.

use oxipack_codec::{IntPacker, PackingKind, factory};

/// Deterministic pseudo-random values in `[-max, max]`.
fn mixed_values(count: usize, max: i32) -> Vec<i32> {
    (0..count as i64)
        .map(|i| {
            let v = ((i * 31 + 17) % i64::from(max)) as i32;
            if i % 3 == 0 { -v } else { v }
        })
        .collect()
}

fn assert_round_trip(values: &[i32]) {
    for kind in PackingKind::ALL {
        let packer = factory::create(kind);
        let packed = packer.compress(values).expect("compression failed");

        let mut out = Vec::new();
        packer.decompress(&packed, &mut out).expect("decompression failed");
        assert_eq!(out, values, "round trip failed for {kind}");

        for (i, &v) in values.iter().enumerate() {
            assert_eq!(
                packer.get(&packed, i).expect("get failed"),
                v,
                "get({i}) mismatch for {kind}"
            );
        }
        assert!(packer.get(&packed, values.len()).is_err());
    }
}

#[test]
fn test_round_trip_basic() {
    assert_round_trip(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_round_trip_empty() {
    assert_round_trip(&[]);
}

#[test]
fn test_round_trip_single_element() {
    assert_round_trip(&[42]);
    assert_round_trip(&[-42]);
    assert_round_trip(&[0]);
}

#[test]
fn test_round_trip_all_zero() {
    assert_round_trip(&[0; 100]);
}

#[test]
fn test_round_trip_mixed_sign() {
    assert_round_trip(&[-5, -3, -1, 0, 1, 3, 5]);
    assert_round_trip(&mixed_values(500, 1000));
}

#[test]
fn test_round_trip_outliers() {
    assert_round_trip(&[1, 2, 3, 1024, 4, 5, 2048]);
}

#[test]
fn test_round_trip_wide_range() {
    assert_round_trip(&[i32::MAX, 0, 1, i32::MAX - 1]);
    // Signed full-width values need 32-bit payloads: the widest mixed-sign
    // set every codec can carry (a 33-bit flag+payload element would not
    // fit a word in the no-straddle overflow layout).
    assert_round_trip(&[-((1 << 30) - 1), (1 << 30) - 1]);
}

#[test]
fn test_signed_full_width_rejected_by_no_straddle_overflow() {
    use oxipack_codec::{OverflowPacker, PackError};

    // 32-bit signed payloads round-trip where straddling is allowed...
    let values = [-(i32::MAX), i32::MAX];
    let packer = OverflowPacker::consecutive();
    let packed = packer.compress(&values).unwrap();
    let mut out = Vec::new();
    packer.decompress(&packed, &mut out).unwrap();
    assert_eq!(out, values);

    // ...but exhaust the representable range of the no-straddle layout.
    let err = OverflowPacker::non_consecutive()
        .compress(&values)
        .unwrap_err();
    assert!(matches!(err, PackError::WidthOverflow { bits: 33 }));
}

#[test]
fn test_round_trip_multiple_sizes() {
    // Sweep sizes around word-boundary multiples to catch fencepost bugs.
    for size in [1, 2, 5, 6, 7, 31, 32, 33, 63, 64, 65, 100, 1000] {
        let values = mixed_values(size, 100);
        assert_round_trip(&values);
    }
}

#[test]
fn test_concrete_consecutive_scenario() {
    let packer = factory::create(PackingKind::Consecutive);
    let packed = packer.compress(&[1, 2, 3, 4, 5]).unwrap();

    // Value 5 needs 3 bits; 5 elements fit in a single word.
    assert_eq!(packed.bits_per_element(), 3);
    assert_eq!(packed.words().len(), 1);

    let mut out = Vec::new();
    packer.decompress(&packed, &mut out).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
    assert_eq!(packer.get(&packed, 3).unwrap(), 4);
}

#[test]
fn test_word_count_formulas() {
    // 5-bit elements do not divide 32 evenly.
    let values: Vec<i32> = (0..25).map(|i| (i * 7) % 31).collect();

    let consecutive = factory::create(PackingKind::Consecutive)
        .compress(&values)
        .unwrap();
    let non_consecutive = factory::create(PackingKind::NonConsecutive)
        .compress(&values)
        .unwrap();

    let n = values.len();
    let bits = consecutive.bits_per_element() as usize;
    assert_eq!(bits, 5);
    assert_eq!(consecutive.words().len(), (n * bits).div_ceil(32));
    assert_eq!(non_consecutive.words().len(), n.div_ceil(32 / bits));
    assert!(non_consecutive.words().len() >= consecutive.words().len());
}

#[test]
fn test_width_minimality() {
    let cases: [&[i32]; 5] = [
        &[1, 2, 3, 4, 5],
        &[255],
        &[256],
        &[-5, -3, -1, 0, 1, 3, 5],
        &[-1],
    ];
    for values in cases {
        let packed = factory::create(PackingKind::Consecutive)
            .compress(values)
            .unwrap();
        let k = packed.bits_per_element();

        // Every value fits in k bits after encoding...
        let limit = 1u64 << k;
        for &v in values {
            let raw = if packed.has_negatives() && v < 0 {
                (1u64 << (k - 1)) + u64::from(v.unsigned_abs())
            } else {
                u64::from(v.unsigned_abs())
            };
            assert!(raw < limit, "{v} does not fit in {k} bits");
        }

        // ...and k-1 bits would lose at least one value: some magnitude
        // must reach the halved range of the same encoding scheme.
        if k > 1 {
            let floor = if packed.has_negatives() {
                1u64 << (k - 2)
            } else {
                1u64 << (k - 1)
            };
            let needed = values
                .iter()
                .any(|&v| u64::from(v.unsigned_abs()) >= floor);
            assert!(needed, "width {k} is not minimal for {values:?}");
        }
    }
}

#[test]
fn test_decompress_overwrites_output() {
    let packer = factory::create(PackingKind::NonConsecutive);
    let packed = packer.compress(&[1, 2, 3]).unwrap();

    let mut out = vec![9, 9, 9, 9, 9, 9];
    packer.decompress(&packed, &mut out).unwrap();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn test_compress_rejects_unrepresentable_range() {
    for kind in PackingKind::ALL {
        let err = factory::create(kind).compress(&[0, i32::MIN]).unwrap_err();
        assert!(
            matches!(err, oxipack_codec::PackError::WidthOverflow { .. }),
            "{kind} accepted i32::MIN"
        );
    }
}

#[test]
fn test_recompression_is_independent() {
    // Codecs are stateless: interleaved compressions do not disturb
    // earlier handles.
    let packer = factory::create(PackingKind::Consecutive);
    let first = packer.compress(&[1, 2, 3]).unwrap();
    let second = packer.compress(&[100_000, 200_000]).unwrap();

    let mut out = Vec::new();
    packer.decompress(&first, &mut out).unwrap();
    assert_eq!(out, vec![1, 2, 3]);
    packer.decompress(&second, &mut out).unwrap();
    assert_eq!(out, vec![100_000, 200_000]);
}
