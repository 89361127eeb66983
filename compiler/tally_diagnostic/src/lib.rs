//! Diagnostics for the Tally runtime.
//!
//! A run that fails ends with exactly one [`Diagnostic`]: an [`ErrorCode`]
//! for searchability, the span of the failing instruction, and the format
//! arguments the reporting layer renders into a message. This crate does
//! not render to a terminal; it only builds and inspects the values.

mod diagnostic;
mod error_code;

pub use diagnostic::{
    call_depth_exceeded, cannot_divide_by_zero, cannot_use_operator_with_a_string,
    cannot_use_operator_with_an_array, evaluation_stack_overflow, step_budget_exceeded,
    Diagnostic, Label,
};
pub use error_code::ErrorCode;
