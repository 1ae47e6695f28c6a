//! Error types for building a [crate::bit_field::BitField] from a bit position.

/// Errors produced when converting a [crate::span::BitSpan] into a [crate::bit_field::BitField].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Span covers zero bits.
    EmptySpan,
    /// Span extends past bit 31 of the holder word.
    SpanOutOfRange,
}
