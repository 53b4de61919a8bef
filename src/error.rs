use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixedPointError {
    #[error("{value} is outside the representable range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("fraction length {fraction_length} exceeds word length {word_length}")]
    FractionTooWide { word_length: u8, fraction_length: u8 },

    #[error("word length {0} is outside the supported range 1-63")]
    WordLengthOutOfRange(u8),

    #[error("byte stream length {0} is not a multiple of 8")]
    MisalignedBytes(usize),
}

pub type Result<T> = std::result::Result<T, FixedPointError>;
