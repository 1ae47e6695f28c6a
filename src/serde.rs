//! JSON‑deserializable bit field descriptions.
//!
//! A field can be described either by its raw mask or by the position of a contiguous run of
//! bits. Descriptions are converted into [BitField]s with [TryFrom]; only the span form can
//! fail.

use serde::{Deserialize, Serialize};

use crate::{bit_field::BitField, errors::MaskError, span::BitSpan};

/// Description of a single bit field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub enum BitFieldDef {
    /// Any mask, taken as is.
    Mask {
        /// Bits selected by the field.
        mask: u32,
    },
    /// Contiguous run of bits.
    Span {
        /// Position of the lowest bit of the field.
        offset_bits: u32,
        /// Number of bits in the field.
        len_bits: u32,
    },
}

impl TryFrom<BitFieldDef> for BitField {
    type Error = MaskError;

    fn try_from(value: BitFieldDef) -> Result<Self, Self::Error> {
        match value {
            BitFieldDef::Mask { mask } => Ok(BitField::new(mask)),
            BitFieldDef::Span {
                offset_bits,
                len_bits,
            } => BitField::from_span(BitSpan::new(offset_bits, len_bits)),
        }
    }
}

impl From<BitField> for BitFieldDef {
    fn from(value: BitField) -> Self {
        BitFieldDef::Mask { mask: value.mask() }
    }
}
