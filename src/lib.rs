//! # maskfield
//!
//! Immutable descriptors for packed bit fields inside flag words, protocol headers and record
//! formats where several logical fields share one integer.
//!
//! A [BitField] holds a mask and the shift that moves the masked bits down to bit 0. It reads
//! and rewrites that field in 32-bit words, with `short` (16-bit) and `byte` (8-bit) variants
//! that zero-extend their operands and truncate the result. Every operation is a total `const fn`.
//!
//! ## Example
//!
//! ```
//! use maskfield::BitField;
//!
//! const KIND: BitField = BitField::new(0x0E);
//! const READY: BitField = BitField::new(0x01);
//!
//! let word = KIND.set_value(0, 5);
//! let word = READY.set_boolean(word, true);
//! assert_eq!(word, 0x0B);
//! assert_eq!(KIND.get_value(word), 5);
//! assert!(READY.is_set(word));
//! ```
//!
//! Fields can also be built from a bit position:
//!
//! ```
//! use maskfield::{BitField, BitSpan, MaskError};
//!
//! let nibble = BitField::try_from(BitSpan::new(4, 4)).unwrap();
//! assert_eq!(nibble.mask(), 0xF0);
//! assert_eq!(BitField::from_span(BitSpan::new(30, 4)), Err(MaskError::SpanOutOfRange));
//! ```

pub mod bit_field;
pub mod errors;
#[cfg(feature = "serde")]
pub mod serde;
pub mod span;

pub use bit_field::BitField;
pub use errors::MaskError;
pub use span::BitSpan;
