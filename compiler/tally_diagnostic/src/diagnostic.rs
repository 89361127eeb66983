//! The diagnostic value a terminated run carries.
//!
//! A [`Diagnostic`] is immutable once built: an [`ErrorCode`], the span of
//! the instruction that failed, and the format arguments the reporting
//! layer substitutes into the code's message template. A default English
//! `message` is filled in by the constructor helpers so a host without a
//! message catalogue can still print something useful.

use std::fmt;

use tally_ir::{ArithmeticOp, Span};

use crate::ErrorCode;

/// A span highlighted with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub span: Span,
    /// The label text explaining this location.
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A runtime error report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Source range of the failing instruction.
    pub span: Span,
    /// Format arguments for the code's message template, in order.
    pub args: Vec<String>,
    /// Default rendered message.
    pub message: String,
    /// Labeled spans showing where the error occurred.
    pub labels: Vec<Label>,
}

impl Diagnostic {
    /// Create a new diagnostic for `code` at `span`.
    #[cold]
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            span,
            args: Vec::new(),
            message: String::new(),
            labels: Vec::new(),
        }
    }

    /// Append a format argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Label a location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// First format argument, if any. For operator errors this is the
    /// operator symbol.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        if self.labels.is_empty() {
            write!(f, "\n  --> {:?}", self.span)?;
        }
        for label in &self.labels {
            write!(f, "\n  --> {:?}: {}", label.span, label.message)?;
        }

        Ok(())
    }
}

/// Create a "cannot use operator with a string" diagnostic.
pub fn cannot_use_operator_with_a_string(span: Span, op: ArithmeticOp) -> Diagnostic {
    let symbol = op.as_symbol();
    Diagnostic::error(ErrorCode::CannotUseOperatorWithAString, span)
        .with_arg(symbol)
        .with_message(format!(
            "cannot use the operator `{symbol}` with a non-numeric string value"
        ))
        .with_label(span, "this operand is a string")
}

/// Create a "cannot use operator with an array" diagnostic.
pub fn cannot_use_operator_with_an_array(span: Span, op: ArithmeticOp) -> Diagnostic {
    let symbol = op.as_symbol();
    Diagnostic::error(ErrorCode::CannotUseOperatorWithAnArray, span)
        .with_arg(symbol)
        .with_message(format!("cannot use the operator `{symbol}` with an array value"))
        .with_label(span, "this operand is an array")
}

/// Create a "cannot divide by zero" diagnostic.
pub fn cannot_divide_by_zero(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::CannotDivideByZero, span)
        .with_message("cannot divide by zero")
        .with_label(span, "the divisor evaluates to zero")
}

/// Create a "call depth exceeded" diagnostic.
pub fn call_depth_exceeded(span: Span, limit: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::CallDepthExceeded, span)
        .with_arg(limit.to_string())
        .with_message(format!("maximum call depth exceeded (limit: {limit})"))
        .with_label(span, "this call exceeds the limit")
}

/// Create an "evaluation stack overflow" diagnostic.
pub fn evaluation_stack_overflow(span: Span, limit: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::EvaluationStackOverflow, span)
        .with_arg(limit.to_string())
        .with_message(format!("evaluation stack overflow (limit: {limit} values)"))
        .with_label(span, "this instruction pushes past the limit")
}

/// Create a "step budget exceeded" diagnostic.
pub fn step_budget_exceeded(span: Span, budget: u64) -> Diagnostic {
    Diagnostic::error(ErrorCode::StepBudgetExceeded, span)
        .with_arg(budget.to_string())
        .with_message(format!("program exceeded its budget of {budget} instructions"))
        .with_label(span, "execution stopped here")
}
