//! Tally IR - types shared by the runtime crates.
//!
//! - [`Span`]: source range carried by every instruction
//! - [`ArithmeticOp`] / [`ComparisonOp`]: operator kinds with their display symbols

mod operators;
mod span;

pub use operators::{ArithmeticOp, ComparisonOp};
pub use span::Span;
