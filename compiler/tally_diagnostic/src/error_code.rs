//! Error codes for runtime diagnostics.
//!
//! Each code has a stable identifier (e.g. `E6001`) used for documentation
//! lookups. All runtime codes live in the `E6xxx` range.

use std::fmt;

/// Error codes the runtime can terminate a program with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Operator errors
    /// Right-hand operand of `/` evaluated to zero
    CannotDivideByZero,
    /// Operator is not defined for a non-numeric string operand
    CannotUseOperatorWithAString,
    /// Operator is not defined for an array operand
    CannotUseOperatorWithAnArray,

    // Resource limits
    /// Nested calls exceeded the configured depth
    CallDepthExceeded,
    /// Evaluation stack exceeded the configured size
    EvaluationStackOverflow,
    /// Program executed more instructions than the configured budget
    StepBudgetExceeded,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::CannotDivideByZero,
        ErrorCode::CannotUseOperatorWithAString,
        ErrorCode::CannotUseOperatorWithAnArray,
        ErrorCode::CallDepthExceeded,
        ErrorCode::EvaluationStackOverflow,
        ErrorCode::StepBudgetExceeded,
    ];

    /// Get the numeric code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CannotDivideByZero => "E6001",
            ErrorCode::CannotUseOperatorWithAString => "E6010",
            ErrorCode::CannotUseOperatorWithAnArray => "E6011",
            ErrorCode::CallDepthExceeded => "E6031",
            ErrorCode::EvaluationStackOverflow => "E6032",
            ErrorCode::StepBudgetExceeded => "E6070",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
