use fixdt::{FixedFormat, FixedPoint, FixedPointBuffer};

// Determinism tests for fixed-point quantization and extraction.
// These use rational values exactly representable in binary to avoid
// any cross-platform rounding ambiguity.

#[test]
fn test_q8_23_encoding_rationals() {
    let format = FixedFormat::q8_23();
    let q: i64 = 1 << 23;

    let cases: [(f64, i64); 11] = [
        (0.0, 0),
        (1.0, q),
        (-1.0, -q),
        (0.5, q / 2),
        (-0.5, -q / 2),
        (0.25, q / 4),
        (0.75, (3 * q) / 4),
        (1.25, q + q / 4),
        (-1.25, -q - q / 4),
        (127.0, 127 * q),
        (-128.0, -128 * q),
    ];

    for &(value, expected) in &cases {
        let x = FixedPoint::from_f64(value, format).expect("value is in range");
        assert_eq!(x.raw(), expected, "encoding mismatch for {value}");
        assert_eq!(x.to_f64(), value, "round-trip mismatch for {value}");
    }
}

#[test]
fn test_pi_scenario_unsigned_16_14() {
    let format = FixedFormat::new(false, 16, 14).unwrap();
    let x = FixedPoint::from_f64(3.14159265, format).unwrap();

    assert_eq!(x.raw(), 51472);
    assert_eq!(x.to_f64(), 3.1416015625);
    assert_eq!(x.to_i64(), 3);
    assert_eq!(x.to_string(), "3.1416015625 (UQ2.14)");
}

#[test]
fn test_pi_scenario_signed_16_13() {
    let format = FixedFormat::new(true, 16, 13).unwrap();
    let x = FixedPoint::from_f64(-3.14159265, format).unwrap();

    assert_eq!(x.raw(), -25736);
    assert_eq!(x.to_f64(), -3.1416015625);
    // Arithmetic shift floors toward negative infinity.
    assert_eq!(x.to_i64(), -4);
}

#[test]
fn test_quantization_is_bit_identical_across_calls() {
    let format = FixedFormat::new(true, 32, 20).unwrap();
    let values = [3.14159265, -2.71828183, 0.1, -0.1, 1e-6, 1000.0];

    for &value in &values {
        let a = FixedPoint::from_f64(value, format).unwrap();
        let b = FixedPoint::from_f64(value, format).unwrap();
        assert_eq!(a.raw(), b.raw(), "non-deterministic encoding for {value}");
    }
}

#[test]
fn test_integer_construction_matches_shift() {
    let format = FixedFormat::new(true, 32, 16).unwrap();
    for n in [-32768i64, -100, -1, 0, 1, 100, 32767] {
        let x = FixedPoint::from_i64(n, format).unwrap();
        assert_eq!(x.raw(), n << 16);
        assert_eq!(x.to_i64(), n);
        assert_eq!(x.to_f64(), n as f64);
    }
}

#[test]
fn test_byte_codec_is_bit_exact() {
    let format = FixedFormat::new(false, 16, 14).unwrap();
    let buffer = FixedPointBuffer::from_f64_slice(&[3.14159265], format).unwrap();

    // 51472 = 0xC910, little endian in an 8-byte word.
    let bytes = buffer.to_le_bytes();
    assert_eq!(bytes, vec![0x10, 0xC9, 0, 0, 0, 0, 0, 0]);

    let decoded = FixedPointBuffer::from_le_bytes(&bytes, format).unwrap();
    assert_eq!(decoded.raw_words(), buffer.raw_words());
}
