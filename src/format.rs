use serde::{Deserialize, Serialize};

use crate::error::{FixedPointError, Result};

/// Largest supported word length in bits.
///
/// Keeps every raw word and every `1 << fraction_length` scale factor inside
/// `i64`/`u64` without overflow.
pub const MAX_WORD_LENGTH: u8 = 63;

/// Word geometry of a fixed-point format: signedness, total bit width, and
/// the number of bits below the binary point.
///
/// The geometry is a property of the format, never of a particular value —
/// a signed format keeps its sign bit even while holding `0.0`. Construction
/// goes through [`FixedFormat::new`], which validates the geometry eagerly so
/// that every downstream shift and range computation is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedFormat {
    signed: bool,
    word_length: u8,
    fraction_length: u8,
}

impl FixedFormat {
    /// Validated constructor.
    ///
    /// Rejects zero-width and wider-than-[`MAX_WORD_LENGTH`] words, and
    /// fraction lengths exceeding the word length.
    pub fn new(signed: bool, word_length: u8, fraction_length: u8) -> Result<Self> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(FixedPointError::WordLengthOutOfRange(word_length));
        }
        if fraction_length > word_length {
            return Err(FixedPointError::FractionTooWide {
                word_length,
                fraction_length,
            });
        }
        Ok(Self {
            signed,
            word_length,
            fraction_length,
        })
    }

    /// Signed 32-bit word, 23 fractional bits.
    /// Range ~[-256, 256), precision 2^-23 (~1.2e-7).
    pub const fn q8_23() -> Self {
        Self {
            signed: true,
            word_length: 32,
            fraction_length: 23,
        }
    }

    /// Signed 16-bit word, 15 fractional bits — the classic [-1, 1) DSP
    /// sample format.
    pub const fn q15() -> Self {
        Self {
            signed: true,
            word_length: 16,
            fraction_length: 15,
        }
    }

    /// Signed 32-bit word, 31 fractional bits.
    pub const fn q31() -> Self {
        Self {
            signed: true,
            word_length: 32,
            fraction_length: 31,
        }
    }

    /// Unsigned 32-bit word, 16 fractional bits.
    pub const fn uq16_16() -> Self {
        Self {
            signed: false,
            word_length: 32,
            fraction_length: 16,
        }
    }

    /// Whether the format reserves a sign bit (two's-complement reading).
    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Total bits the format occupies.
    pub fn word_length(&self) -> u8 {
        self.word_length
    }

    /// Bits below the binary point.
    pub fn fraction_length(&self) -> u8 {
        self.fraction_length
    }

    /// Bits above the binary point, sign bit included for signed formats.
    pub fn integer_length(&self) -> u8 {
        self.word_length - self.fraction_length
    }

    /// Scale factor `2^fraction_length` as an exact float.
    pub(crate) fn scale(&self) -> f64 {
        (1u64 << self.fraction_length) as f64
    }

    /// Smallest raw word of the format.
    pub(crate) fn min_raw(&self) -> i128 {
        if self.signed {
            -(1i128 << (self.word_length - 1))
        } else {
            0
        }
    }

    /// Largest raw word of the format.
    pub(crate) fn max_raw(&self) -> i128 {
        let magnitude_bits = self.word_length - u8::from(self.signed);
        (1i128 << magnitude_bits) - 1
    }

    /// Largest representable real value: `(2^(w − s) − 1) × 2^(−f)`.
    ///
    /// The power-of-two term is computed in exact integer arithmetic; the
    /// only rounding is the final scale to `f64`.
    pub fn max_representable(&self) -> f64 {
        self.max_raw() as f64 / self.scale()
    }

    /// Smallest representable real value: `−2^(w − 1) × 2^(−f)` for signed
    /// formats, `0` for unsigned ones.
    pub fn min_representable(&self) -> f64 {
        self.min_raw() as f64 / self.scale()
    }
}

/// Q-notation with the sign bit counted into the integer part, so the
/// 16-bit signed format with 13 fractional bits prints as `Q3.13` and its
/// unsigned counterpart as `UQ3.13`.
impl std::fmt::Display for FixedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.signed { "Q" } else { "UQ" };
        write!(
            f,
            "{}{}.{}",
            prefix,
            self.integer_length(),
            self.fraction_length
        )
    }
}
