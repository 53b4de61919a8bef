//! # fixdt
//!
//! Deterministic fixed-point scalars with explicit word geometry.
//!
//! A [`FixedPoint`] stores a real number as a raw integer scaled by
//! `2^fraction_length`, together with a [`FixedFormat`] describing the
//! signedness, total word length, and fraction length of the encoding.
//! Construction validates against the representable range of the format,
//! and quantization uses round-half-away-from-zero, so the same inputs
//! produce bit-identical raw words across platforms and runs.
//!
//! [`FixedPointBuffer`] carries a vector of raw words sharing one format,
//! with bulk slice conversion and a little-endian byte codec.

pub mod buffer;
pub mod error;
pub mod fixed_point;
pub mod format;

pub use buffer::FixedPointBuffer;
pub use error::{FixedPointError, Result};
pub use fixed_point::FixedPoint;
pub use format::{FixedFormat, MAX_WORD_LENGTH};
