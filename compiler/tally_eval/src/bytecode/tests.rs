use pretty_assertions::assert_eq;
use tally_ir::{ArithmeticOp, ComparisonOp, Span};

use super::*;

#[test]
fn test_routine_id_display_and_index() {
    assert_eq!(RoutineId::ENTRY.index(), 0);
    assert_eq!(RoutineId::new(3).index(), 3);
    assert_eq!(RoutineId::new(3).to_string(), "routine#3");
}

#[test]
fn test_add_routine_assigns_sequential_ids() {
    let mut program = Program::default();
    assert_eq!(program.add_routine(Routine::new("main", vec![])), Some(RoutineId::ENTRY));
    assert_eq!(program.add_routine(Routine::new("helper", vec![])), Some(RoutineId::new(1)));
    assert_eq!(program.routines().len(), 2);
    assert_eq!(program.routine(RoutineId::new(1)).map(|r| r.name.as_str()), Some("helper"));
    assert!(program.routine(RoutineId::new(2)).is_none());
}

#[test]
fn test_single_builds_entry_routine() {
    let program = Program::single(vec![InstructionKind::Pop.into()]);
    let Some(main) = program.routine(RoutineId::ENTRY) else {
        panic!("entry routine missing");
    };
    assert_eq!(main.name, "main");
    assert_eq!(main.len(), 1);
    assert!(!main.is_empty());
    assert!(main.get(1).is_none());
}

#[test]
fn test_instruction_span() {
    let span = Span::new(4, 9);
    let instr = Instruction::new(InstructionKind::Return, span);
    assert_eq!(instr.span, span);
    assert_eq!(Instruction::synthetic(InstructionKind::Return).span, Span::DUMMY);
}

#[test]
fn test_operand_counts() {
    let cases = [
        (InstructionKind::Push(Value::number(1.0)), 0),
        (InstructionKind::Pop, 1),
        (InstructionKind::Dup, 1),
        (InstructionKind::Arithmetic(ArithmeticOp::Add), 2),
        (InstructionKind::Compare(ComparisonOp::Lt), 2),
        (InstructionKind::Jump(0), 0),
        (InstructionKind::JumpIfFalse(0), 1),
        (InstructionKind::Call(RoutineId::ENTRY), 0),
        (InstructionKind::Return, 0),
    ];
    for (kind, operands) in cases {
        assert_eq!(Instruction::from(kind.clone()).operands(), operands, "{kind:?}");
    }
}
