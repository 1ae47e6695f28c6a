//! Position-based description of a contiguous bit field.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit of the holder word.

use crate::{bit_field::BitField, errors::MaskError};

/// Width of the holder word every [BitField] operates on.
pub const WORD_BITS: u32 = u32::BITS;

/// A run of `len_bits` bits starting at `offset_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSpan {
    /// Position of the lowest bit of the field.
    pub offset_bits: u32,
    /// Number of bits in the field.
    pub len_bits: u32,
}

impl BitSpan {
    pub const fn new(offset_bits: u32, len_bits: u32) -> Self {
        BitSpan {
            offset_bits,
            len_bits,
        }
    }

    /// Builds the mask covering this span. Fails if the span is empty or leaves the word.
    pub const fn to_mask(self) -> Result<u32, MaskError> {
        if self.len_bits == 0 {
            return Err(MaskError::EmptySpan);
        }

        match self.offset_bits.checked_add(self.len_bits) {
            Some(end) if end <= WORD_BITS => {}
            _ => return Err(MaskError::SpanOutOfRange),
        }

        Ok((u32::MAX >> (WORD_BITS - self.len_bits)) << self.offset_bits)
    }
}

impl TryFrom<BitSpan> for BitField {
    type Error = MaskError;

    fn try_from(span: BitSpan) -> Result<Self, Self::Error> {
        BitField::from_span(span)
    }
}
