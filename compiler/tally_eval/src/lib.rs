#![deny(clippy::arithmetic_side_effects)]
//! Tally Eval - value model and bytecode engine for the Tally runtime.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values and their coercions
//! - `operators`: pure arithmetic and comparison tables returning
//!   `Result<Value, Diagnostic>`
//! - [`Engine`]: evaluation stack, execution stack, run state, and the
//!   dispatch loop that turns operator results into push/advance or
//!   terminate
//! - [`EngineConfig`]: optional limits on call depth, steps, and stack size
//!
//! Language errors end a run with a [`Diagnostic`]; malformed bytecode is an
//! [`EngineError`].
//!
//! ```text
//! let program = Program::single(vec![
//!     InstructionKind::Push(Value::number(5.0)).into(),
//!     InstructionKind::Push(Value::string("x")).into(),
//!     InstructionKind::Arithmetic(ArithmeticOp::Add).into(),
//! ]);
//! let outcome = Engine::new(&program).run()?;
//! // RunOutcome::Completed([Str("5x")])
//! ```

pub mod bytecode;
mod compare;
mod config;
mod engine;
pub mod errors;
mod operators;
mod value;

use std::sync::Once;

pub use bytecode::{Instruction, InstructionKind, Program, Routine, RoutineId};
pub use config::EngineConfig;
pub use engine::{Engine, Frame, RunOutcome, RunState};
pub use errors::{EngineError, EngineResult};
pub use operators::{evaluate_arithmetic, evaluate_comparison, OpResult};
pub use value::{
    format_number, parse_numeric_prefix, Heap, Value, ValueKind, FALSE_TEXT, TRUE_TEXT,
};

pub use tally_diagnostic::{Diagnostic, ErrorCode};
pub use tally_ir::{ArithmeticOp, ComparisonOp, Span};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the engine.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tally_eval=debug` or `RUST_LOG=tally_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
