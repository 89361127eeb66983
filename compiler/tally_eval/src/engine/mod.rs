//! The execution engine: stacks, run state, and the success/failure
//! contract every operator instruction goes through.
//!
//! An operator instruction either succeeds, pushing exactly one value and
//! advancing the frame that was on top when it ran by exactly one, or fails,
//! doing neither and terminating the run. [`Engine::apply_binary`] and
//! [`Engine::apply_comparison`] are the only places that contract is
//! implemented; the dispatch loop in `dispatch.rs` resolves operands and
//! calls them.
//!
//! Termination is one-way and single-shot. The first diagnostic is kept and
//! every later [`Engine::terminate`] is dropped.

mod dispatch;

use tally_diagnostic::{evaluation_stack_overflow, Diagnostic};
use tally_ir::{ArithmeticOp, ComparisonOp, Span};
use tracing::debug;

use crate::bytecode::{Program, RoutineId};
use crate::config::{Budget, EngineConfig};
use crate::operators::{evaluate_arithmetic, evaluate_comparison};
use crate::value::Value;

/// One entry on the execution stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Routine this frame executes.
    pub routine: RoutineId,
    /// Index of the next instruction to execute.
    pub instruction_counter: usize,
}

impl Frame {
    /// Frame positioned at the start of `routine`.
    pub const fn new(routine: RoutineId) -> Self {
        Frame {
            routine,
            instruction_counter: 0,
        }
    }
}

/// Where a run is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// The execution stack emptied without a failure.
    Completed,
    /// A diagnostic ended the run.
    Terminated(Diagnostic),
}

/// How a finished run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// Whatever was left on the evaluation stack, bottom first.
    Completed(Vec<Value>),
    Terminated(Diagnostic),
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            RunOutcome::Terminated(diagnostic) => Some(diagnostic),
            RunOutcome::Completed(_) => None,
        }
    }
}

/// Executes one [`Program`]. Build a new engine per run.
pub struct Engine<'p> {
    program: &'p Program,
    config: EngineConfig,
    evaluation_stack: Vec<Value>,
    execution_stack: Vec<Frame>,
    state: RunState,
    budget: Budget,
}

impl<'p> Engine<'p> {
    /// Engine with no limits, positioned at the program's entry routine.
    pub fn new(program: &'p Program) -> Self {
        Self::with_config(program, EngineConfig::default())
    }

    pub fn with_config(program: &'p Program, config: EngineConfig) -> Self {
        let budget = Budget::new(&config);
        Engine {
            program,
            config,
            evaluation_stack: Vec::new(),
            execution_stack: vec![Frame::new(RoutineId::ENTRY)],
            state: RunState::Running,
            budget,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// The recorded failure, once terminated.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.state {
            RunState::Terminated(diagnostic) => Some(diagnostic),
            RunState::Running | RunState::Completed => None,
        }
    }

    pub fn evaluation_stack(&self) -> &[Value] {
        &self.evaluation_stack
    }

    pub fn execution_stack(&self) -> &[Frame] {
        &self.execution_stack
    }

    /// The frame instructions currently execute in.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.execution_stack.last()
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.budget.steps()
    }

    /// Stop the run with `diagnostic`.
    ///
    /// Only the first call has an effect. A run that already completed or
    /// terminated keeps its state.
    pub fn terminate(&mut self, diagnostic: Diagnostic) {
        match &self.state {
            RunState::Running => {}
            RunState::Terminated(first) => {
                debug!(
                    kept = %first.code,
                    ignored = %diagnostic.code,
                    "ignoring termination of a stopped run"
                );
                return;
            }
            RunState::Completed => {
                debug!(ignored = %diagnostic.code, "ignoring termination of a completed run");
                return;
            }
        }
        debug!(
            code = %diagnostic.code,
            span = %diagnostic.span,
            steps = self.budget.steps(),
            "run terminated"
        );
        self.state = RunState::Terminated(diagnostic);
    }

    /// Apply an arithmetic operator to already resolved operands.
    ///
    /// On success the result is pushed and the current frame advances by
    /// one. On failure the engine terminates and neither stack changes.
    pub fn apply_binary(&mut self, left: &Value, op: ArithmeticOp, right: &Value, span: Span) {
        if !self.is_running() {
            return;
        }
        match evaluate_arithmetic(left, op, right, span) {
            Ok(value) => self.push_and_advance(value, span),
            Err(diagnostic) => self.terminate(diagnostic),
        }
    }

    /// Apply a comparison to already resolved operands. Comparisons cannot
    /// fail on their own; only the stack limit can stop them.
    pub fn apply_comparison(&mut self, left: &Value, op: ComparisonOp, right: &Value, span: Span) {
        if !self.is_running() {
            return;
        }
        self.push_and_advance(evaluate_comparison(left, op, right), span);
    }

    /// Push `value` and advance the top frame, or terminate when the stack
    /// is full.
    fn push_and_advance(&mut self, value: Value, span: Span) {
        if let Some(limit) = self.config.max_evaluation_stack {
            if self.evaluation_stack.len() >= limit {
                self.terminate(evaluation_stack_overflow(span, limit));
                return;
            }
        }
        self.evaluation_stack.push(value);
        self.advance();
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(frame) = self.execution_stack.last_mut() {
            frame.instruction_counter = frame.instruction_counter.saturating_add(1);
        }
    }

    fn complete(&mut self) {
        debug!(
            results = self.evaluation_stack.len(),
            steps = self.budget.steps(),
            "run completed"
        );
        self.state = RunState::Completed;
    }

    fn outcome(&self) -> RunOutcome {
        match &self.state {
            RunState::Terminated(diagnostic) => RunOutcome::Terminated(diagnostic.clone()),
            RunState::Running | RunState::Completed => {
                RunOutcome::Completed(self.evaluation_stack.clone())
            }
        }
    }
}
