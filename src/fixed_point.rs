use crate::error::{FixedPointError, Result};
use crate::format::FixedFormat;

/// A fixed-point scalar: a raw scaled integer together with its word
/// geometry. The represented real value is always
/// `raw / 2^fraction_length`.
///
/// Values are immutable after construction and `Copy`; they can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    raw: i64,
    format: FixedFormat,
}

impl FixedPoint {
    /// Quantize a real value into the format.
    ///
    /// Fails with [`FixedPointError::OutOfRange`] when `value` lies outside
    /// `[min_representable, max_representable]`; NaN never passes. Rounding
    /// is deterministic round-half-away-from-zero, so at fraction length 0
    /// the tie `2.5` quantizes to `3` and `-2.5` to `-3`.
    pub fn from_f64(value: f64, format: FixedFormat) -> Result<Self> {
        let min = format.min_representable();
        let max = format.max_representable();
        if !(value >= min && value <= max) {
            return Err(FixedPointError::OutOfRange { value, min, max });
        }

        // value is a finite f64 and the scale a power of two, so the product
        // is exact and the only rounding happens in round() itself.
        let quantized = (value * format.scale()).round() as i128;
        // For words wider than f64's 53-bit mantissa the range check above
        // runs at f64 resolution; pin the quantized word to the exact raw
        // bounds so such inputs cannot escape the format.
        let raw = quantized.clamp(format.min_raw(), format.max_raw()) as i64;
        Ok(Self { raw, format })
    }

    /// Convert an integer into the format. The shift is exact — no rounding
    /// is involved — and the shifted word is validated against the same
    /// representable range as [`FixedPoint::from_f64`].
    pub fn from_i64(value: i64, format: FixedFormat) -> Result<Self> {
        let raw = (value as i128) << format.fraction_length();
        if raw < format.min_raw() || raw > format.max_raw() {
            return Err(FixedPointError::OutOfRange {
                value: value as f64,
                min: format.min_representable(),
                max: format.max_representable(),
            });
        }
        Ok(Self {
            raw: raw as i64,
            format,
        })
    }

    /// Wrap a pre-scaled raw word verbatim.
    ///
    /// The word is not range-checked; [`FixedPoint::to_i64`] saturates, so an
    /// out-of-band raw still extracts as an in-format integer.
    pub fn from_raw(raw: i64, format: FixedFormat) -> Self {
        Self { raw, format }
    }

    /// The raw scaled integer.
    pub fn raw(&self) -> i64 {
        self.raw
    }

    /// The word geometry.
    pub fn format(&self) -> FixedFormat {
        self.format
    }

    /// The represented real value, `raw / 2^fraction_length` as true
    /// division.
    pub fn to_f64(&self) -> f64 {
        self.raw as f64 / self.format.scale()
    }

    /// The integer part, floored toward negative infinity.
    ///
    /// The raw word is first clamped into the format's declared range, then
    /// arithmetically shifted right by the fraction length.
    pub fn to_i64(&self) -> i64 {
        let clamped = (self.raw as i128).clamp(self.format.min_raw(), self.format.max_raw());
        (clamped >> self.format.fraction_length()) as i64
    }
}

impl std::fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.to_f64(), self.format)
    }
}
