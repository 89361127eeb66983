//! The dispatch loop.
//!
//! Each step fetches the instruction under the top frame's counter and
//! executes it. Operands are popped here, right first, before the operator
//! is applied. A frame whose counter runs past its routine returns without
//! an explicit `Return`.

use tally_diagnostic::{call_depth_exceeded, step_budget_exceeded};
use tracing::{debug, trace};

use super::{Engine, Frame, RunOutcome};
use crate::bytecode::{Instruction, InstructionKind};
use crate::config::BudgetExceeded;
use crate::errors::{EngineError, EngineResult};
use crate::value::Value;

impl Engine<'_> {
    /// Run until the program completes or terminates.
    ///
    /// A language error ends the run with [`RunOutcome::Terminated`].
    /// Malformed bytecode is returned as an [`EngineError`] and leaves the
    /// engine where it stopped.
    #[tracing::instrument(level = "debug", skip(self), fields(routines = self.program.routines().len()))]
    pub fn run(&mut self) -> EngineResult<RunOutcome> {
        while self.step()? {}
        Ok(self.outcome())
    }

    /// Execute a single instruction (or an implicit return).
    ///
    /// Returns whether the run can continue.
    pub fn step(&mut self) -> EngineResult<bool> {
        if !self.is_running() {
            return Ok(false);
        }
        let Some(frame) = self.execution_stack.last().copied() else {
            self.complete();
            return Ok(false);
        };

        let program = self.program;
        let routine = program
            .routine(frame.routine)
            .ok_or(EngineError::UnknownRoutine(frame.routine))?;
        let Some(instruction) = routine.get(frame.instruction_counter) else {
            trace!(routine = %frame.routine, "implicit return");
            self.execution_stack.pop();
            return Ok(true);
        };

        if let Err(BudgetExceeded { budget }) = self.budget.charge() {
            self.terminate(step_budget_exceeded(instruction.span, budget));
            return Ok(false);
        }

        trace!(
            routine = %frame.routine,
            counter = frame.instruction_counter,
            kind = ?instruction.kind,
            depth = self.evaluation_stack.len(),
            "execute"
        );
        self.execute(frame, instruction, routine.len())?;
        Ok(self.is_running())
    }

    fn execute(
        &mut self,
        frame: Frame,
        instruction: &Instruction,
        routine_len: usize,
    ) -> EngineResult<()> {
        // Checked up front so a short stack is never partially consumed.
        if self.evaluation_stack.len() < instruction.operands() {
            return Err(underflow(frame));
        }
        let span = instruction.span;

        match &instruction.kind {
            InstructionKind::Push(value) => self.push_and_advance(value.clone(), span),
            InstructionKind::Pop => {
                self.pop_operand(frame)?;
                self.advance();
            }
            InstructionKind::Dup => {
                let top = self.evaluation_stack.last().cloned().ok_or(underflow(frame))?;
                self.push_and_advance(top, span);
            }
            InstructionKind::Arithmetic(op) => {
                let right = self.pop_operand(frame)?;
                let left = self.pop_operand(frame)?;
                self.apply_binary(&left, *op, &right, span);
            }
            InstructionKind::Compare(op) => {
                let right = self.pop_operand(frame)?;
                let left = self.pop_operand(frame)?;
                self.apply_comparison(&left, *op, &right, span);
            }
            InstructionKind::Jump(target) => {
                check_jump_target(routine_len, frame, *target)?;
                self.jump(*target);
            }
            InstructionKind::JumpIfFalse(target) => {
                // Validated before the condition is popped.
                check_jump_target(routine_len, frame, *target)?;
                if self.pop_operand(frame)?.to_boolean() {
                    self.advance();
                } else {
                    self.jump(*target);
                }
            }
            InstructionKind::Call(callee) => {
                if self.program.routine(*callee).is_none() {
                    return Err(EngineError::UnknownRoutine(*callee));
                }
                if let Some(limit) = self.config.max_call_depth {
                    if self.execution_stack.len() >= limit {
                        self.terminate(call_depth_exceeded(span, limit));
                        return Ok(());
                    }
                }
                self.advance();
                self.execution_stack.push(Frame::new(*callee));
                debug!(callee = %callee, depth = self.execution_stack.len(), "call");
            }
            InstructionKind::Return => {
                self.execution_stack.pop();
            }
        }
        Ok(())
    }

    fn pop_operand(&mut self, frame: Frame) -> EngineResult<Value> {
        self.evaluation_stack.pop().ok_or(underflow(frame))
    }

    /// Move the top frame's counter to `target`.
    fn jump(&mut self, target: usize) {
        if let Some(top) = self.execution_stack.last_mut() {
            top.instruction_counter = target;
        }
    }
}

/// The end of the routine is a valid target and returns on the next step.
fn check_jump_target(routine_len: usize, frame: Frame, target: usize) -> EngineResult<()> {
    if target > routine_len {
        return Err(EngineError::JumpOutOfBounds {
            routine: frame.routine,
            target,
        });
    }
    Ok(())
}

fn underflow(frame: Frame) -> EngineError {
    EngineError::StackUnderflow {
        routine: frame.routine,
        counter: frame.instruction_counter,
    }
}
