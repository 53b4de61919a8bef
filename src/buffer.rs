use crate::error::{FixedPointError, Result};
use crate::fixed_point::FixedPoint;
use crate::format::FixedFormat;

/// A vector of raw fixed-point words sharing one format.
///
/// Storage and conversion only: bulk quantization of float slices and a
/// little-endian byte codec. Element-wise arithmetic is not part of the
/// datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPointBuffer {
    data: Vec<i64>,
    format: FixedFormat,
}

impl FixedPointBuffer {
    /// A zero-filled buffer of the given length.
    pub fn zeros(len: usize, format: FixedFormat) -> Self {
        Self {
            data: vec![0; len],
            format,
        }
    }

    /// Quantize a float slice through the validating scalar path.
    ///
    /// The first out-of-range element aborts the conversion with its error.
    pub fn from_f64_slice(values: &[f64], format: FixedFormat) -> Result<Self> {
        let mut data = Vec::with_capacity(values.len());
        for &value in values {
            data.push(FixedPoint::from_f64(value, format)?.raw());
        }
        Ok(Self { data, format })
    }

    /// Convert every element back to a float.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data
            .iter()
            .map(|&raw| FixedPoint::from_raw(raw, self.format).to_f64())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The shared word geometry.
    pub fn format(&self) -> FixedFormat {
        self.format
    }

    /// The raw words.
    pub fn raw_words(&self) -> &[i64] {
        &self.data
    }

    /// Scalar view of the element at `index`.
    pub fn get(&self, index: usize) -> Option<FixedPoint> {
        self.data
            .get(index)
            .map(|&raw| FixedPoint::from_raw(raw, self.format))
    }

    /// Raw words as little-endian bytes, 8 per element.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 8);
        for &raw in &self.data {
            bytes.extend_from_slice(&raw.to_le_bytes());
        }
        bytes
    }

    /// Decode a byte stream produced by [`FixedPointBuffer::to_le_bytes`].
    pub fn from_le_bytes(bytes: &[u8], format: FixedFormat) -> Result<Self> {
        if bytes.len() % 8 != 0 {
            return Err(FixedPointError::MisalignedBytes(bytes.len()));
        }

        let data = bytes
            .chunks_exact(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                i64::from_le_bytes(word)
            })
            .collect();

        Ok(Self { data, format })
    }
}
