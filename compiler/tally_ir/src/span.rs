//! Source ranges attached to instructions.
//!
//! The runtime never reads source text. A span only travels from an
//! instruction into a diagnostic so the reporting layer can point at the
//! offending expression.

use std::fmt;

/// Half-open byte range `start..end` into the program source.
///
/// 8 bytes, `Copy`. `Span::DUMMY` marks instructions synthesized without a
/// source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for synthesized code.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
