//! Single-mask accessor for a packed field inside a 32-bit holder word.
//!
//! A [BitField] is built once from a mask (usually as a `const`) and then used to read and
//! rewrite that field in any number of words. The 16-bit and 8-bit variants zero-extend their
//! operands to 32 bits, apply the same mask, and truncate the result back to their width.

use crate::{errors::MaskError, span::BitSpan};

/// Immutable descriptor of a bit field: the mask and its trailing-zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    mask: u32,
    shift: u32,
}

impl BitField {
    /// Creates a descriptor for `mask`. Any mask is accepted, including zero and
    /// non-contiguous ones.
    pub const fn new(mask: u32) -> Self {
        BitField {
            mask,
            // 32 for a zero mask
            shift: mask.trailing_zeros(),
        }
    }

    /// Creates a descriptor covering a contiguous [BitSpan].
    pub const fn from_span(span: BitSpan) -> Result<Self, MaskError> {
        match span.to_mask() {
            Ok(mask) => Ok(BitField::new(mask)),
            Err(err) => Err(err),
        }
    }

    pub const fn mask(self) -> u32 {
        self.mask
    }

    /// Distance from bit 0 to the lowest mask bit. 32 when the mask is zero.
    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Number of bits selected by the mask.
    pub const fn width(self) -> u32 {
        self.mask.count_ones()
    }

    /// True when the mask is a single non-empty run of ones.
    pub const fn is_contiguous(self) -> bool {
        if self.mask == 0 {
            return false;
        }
        let run = self.mask >> self.shift;
        run & run.wrapping_add(1) == 0
    }

    /// Position and length of the field, if the mask is contiguous.
    pub const fn span(self) -> Option<BitSpan> {
        if self.is_contiguous() {
            Some(BitSpan::new(self.shift, self.width()))
        } else {
            None
        }
    }

    /// Masked bits left in place.
    pub const fn get_raw_value(self, holder: u32) -> u32 {
        holder & self.mask
    }

    /// Masked bits shifted down to bit 0.
    pub const fn get_value(self, holder: u32) -> u32 {
        // A zero mask leaves nothing to shift, so the wrapped shift amount does not matter.
        self.get_raw_value(holder).wrapping_shr(self.shift)
    }

    /// True if any masked bit is 1.
    pub const fn is_set(self, holder: u32) -> bool {
        holder & self.mask != 0
    }

    /// True if every masked bit is 1. Always true for a zero mask.
    pub const fn is_all_set(self, holder: u32) -> bool {
        holder & self.mask == self.mask
    }

    pub const fn set(self, holder: u32) -> u32 {
        holder | self.mask
    }

    pub const fn clear(self, holder: u32) -> u32 {
        holder & !self.mask
    }

    /// Replaces the masked bits with `value`. Bits of `value` that do not fit the mask are
    /// dropped.
    pub const fn set_value(self, holder: u32, value: u32) -> u32 {
        (holder & !self.mask) | (value.wrapping_shl(self.shift) & self.mask)
    }

    pub const fn set_boolean(self, holder: u32, flag: bool) -> u32 {
        if flag {
            self.set(holder)
        } else {
            self.clear(holder)
        }
    }

    pub const fn get_short_value(self, holder: u16) -> u16 {
        self.get_value(holder as u32) as u16
    }

    pub const fn get_short_raw_value(self, holder: u16) -> u16 {
        self.get_raw_value(holder as u32) as u16
    }

    pub const fn set_short_value(self, holder: u16, value: u16) -> u16 {
        self.set_value(holder as u32, value as u32) as u16
    }

    pub const fn set_short(self, holder: u16) -> u16 {
        self.set(holder as u32) as u16
    }

    pub const fn clear_short(self, holder: u16) -> u16 {
        self.clear(holder as u32) as u16
    }

    pub const fn set_short_boolean(self, holder: u16, flag: bool) -> u16 {
        self.set_boolean(holder as u32, flag) as u16
    }

    pub const fn get_byte_value(self, holder: u8) -> u8 {
        self.get_value(holder as u32) as u8
    }

    pub const fn get_byte_raw_value(self, holder: u8) -> u8 {
        self.get_raw_value(holder as u32) as u8
    }

    pub const fn set_byte_value(self, holder: u8, value: u8) -> u8 {
        self.set_value(holder as u32, value as u32) as u8
    }

    pub const fn set_byte(self, holder: u8) -> u8 {
        self.set(holder as u32) as u8
    }

    pub const fn clear_byte(self, holder: u8) -> u8 {
        self.clear(holder as u32) as u8
    }

    pub const fn set_byte_boolean(self, holder: u8, flag: bool) -> u8 {
        self.set_boolean(holder as u32, flag) as u8
    }
}

impl From<u32> for BitField {
    fn from(mask: u32) -> Self {
        BitField::new(mask)
    }
}
