//! Faults in the program itself rather than in the values it computes.
//!
//! A language error (a string in `-`, a zero divisor) ends the run with a
//! [`Diagnostic`](tally_diagnostic::Diagnostic). An [`EngineError`] means the
//! bytecode is malformed: the compiler that produced it has a bug, and the
//! host gets it back through `?` instead of a terminated run.

use thiserror::Error;

use crate::bytecode::RoutineId;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("evaluation stack underflow in {routine} at instruction {counter}")]
    StackUnderflow { routine: RoutineId, counter: usize },
    #[error("call to unknown {0}")]
    UnknownRoutine(RoutineId),
    #[error("jump target {target} is outside {routine}")]
    JumpOutOfBounds { routine: RoutineId, target: usize },
}
