//! Bytecode the engine executes.
//!
//! A [`Program`] is a flat list of [`Routine`]s addressed by [`RoutineId`].
//! Routine 0 is the entry point. Jump targets are indices into the owning
//! routine's instruction list; the engine validates them when it jumps, not
//! when the program is built.

use std::fmt;

use tally_ir::{ArithmeticOp, ComparisonOp, Span};

use crate::value::Value;

/// Index of a routine within its [`Program`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RoutineId(u32);

impl RoutineId {
    /// The routine a run starts in.
    pub const ENTRY: RoutineId = RoutineId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        RoutineId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routine#{}", self.0)
    }
}

/// What an instruction does.
#[derive(Clone, Debug)]
pub enum InstructionKind {
    /// Push a constant.
    Push(Value),
    /// Discard the top of the evaluation stack.
    Pop,
    /// Push a copy of the top of the evaluation stack.
    Dup,
    /// Pop `right`, then `left`, push `left <op> right`.
    Arithmetic(ArithmeticOp),
    /// Pop `right`, then `left`, push `"True"` or `"False"`.
    Compare(ComparisonOp),
    /// Continue at the given index of the current routine.
    Jump(usize),
    /// Pop a value; when it is not truthy continue at the given index.
    JumpIfFalse(usize),
    /// Enter a routine with a fresh frame.
    Call(RoutineId),
    /// Leave the current routine.
    Return,
}

/// One instruction plus the source range it was compiled from.
#[derive(Clone, Debug)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub span: Span,
}

impl Instruction {
    #[inline]
    pub fn new(kind: InstructionKind, span: Span) -> Self {
        Instruction { kind, span }
    }

    /// Instruction with no source location.
    #[inline]
    pub fn synthetic(kind: InstructionKind) -> Self {
        Instruction {
            kind,
            span: Span::DUMMY,
        }
    }

    /// Number of values this instruction needs on the evaluation stack.
    pub fn operands(&self) -> usize {
        match self.kind {
            InstructionKind::Arithmetic(_) | InstructionKind::Compare(_) => 2,
            InstructionKind::Pop | InstructionKind::Dup | InstructionKind::JumpIfFalse(_) => 1,
            InstructionKind::Push(_)
            | InstructionKind::Jump(_)
            | InstructionKind::Call(_)
            | InstructionKind::Return => 0,
        }
    }
}

impl From<InstructionKind> for Instruction {
    fn from(kind: InstructionKind) -> Self {
        Instruction::synthetic(kind)
    }
}

/// A named instruction sequence.
#[derive(Clone, Debug, Default)]
pub struct Routine {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

impl Routine {
    pub fn new(name: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        Routine {
            name: name.into(),
            instructions,
        }
    }

    #[inline]
    pub fn get(&self, counter: usize) -> Option<&Instruction> {
        self.instructions.get(counter)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A complete program: routine 0 runs first.
#[derive(Clone, Debug, Default)]
pub struct Program {
    routines: Vec<Routine>,
}

impl Program {
    pub fn new(routines: Vec<Routine>) -> Self {
        Program { routines }
    }

    /// Program made of a single entry routine.
    pub fn single(instructions: Vec<Instruction>) -> Self {
        Program::new(vec![Routine::new("main", instructions)])
    }

    /// Append a routine and return its id.
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn add_routine(&mut self, routine: Routine) -> Option<RoutineId> {
        let id = RoutineId::new(u32::try_from(self.routines.len()).ok()?);
        self.routines.push(routine);
        Some(id)
    }

    #[inline]
    pub fn routine(&self, id: RoutineId) -> Option<&Routine> {
        self.routines.get(id.index())
    }

    #[inline]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }
}

#[cfg(test)]
mod tests;
