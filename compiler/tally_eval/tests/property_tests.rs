//! Property-based tests for the engine's operator contract.
//!
//! For any operands:
//! 1. A successful operator pushes exactly one value and advances the top
//!    frame by exactly one; a failing one does neither and terminates.
//! 2. Once terminated, further operators and terminations change nothing.

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tally_eval::{
    evaluate_arithmetic, ArithmeticOp, ComparisonOp, Engine, ErrorCode, Program, RunState, Span,
    Value,
};

const SPAN: Span = Span::new(0, 1);

// -- Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<f64>().prop_map(Value::number),
        (-100i32..100).prop_map(|n| Value::number(f64::from(n))),
        Just(Value::number(0.0)),
        "[a-z ]{0,6}".prop_map(Value::string),
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?[a-z]{0,2}".prop_map(Value::string),
        Just(Value::string("0")),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => scalar_strategy(),
        1 => prop::collection::vec(scalar_strategy(), 0..3).prop_map(Value::array),
    ]
}

fn arithmetic_strategy() -> impl Strategy<Value = ArithmeticOp> {
    prop::sample::select(ArithmeticOp::ALL.to_vec())
}

fn comparison_strategy() -> impl Strategy<Value = ComparisonOp> {
    prop::sample::select(ComparisonOp::ALL.to_vec())
}

fn top_counter(engine: &Engine<'_>) -> usize {
    engine.current_frame().map_or(0, |f| f.instruction_counter)
}

proptest! {
    #[test]
    fn arithmetic_either_progresses_or_terminates(
        left in value_strategy(),
        op in arithmetic_strategy(),
        right in value_strategy(),
    ) {
        let program = Program::default();
        let mut engine = Engine::new(&program);
        let expected = evaluate_arithmetic(&left, op, &right, SPAN);

        engine.apply_binary(&left, op, &right, SPAN);

        match expected {
            Ok(_) => {
                prop_assert_eq!(engine.evaluation_stack().len(), 1);
                prop_assert_eq!(top_counter(&engine), 1);
                prop_assert!(engine.is_running());
            }
            Err(diag) => {
                prop_assert!(engine.evaluation_stack().is_empty());
                prop_assert_eq!(top_counter(&engine), 0);
                prop_assert_eq!(engine.state(), &RunState::Terminated(diag));
            }
        }
    }

    #[test]
    fn comparisons_always_progress(
        left in value_strategy(),
        op in comparison_strategy(),
        right in value_strategy(),
    ) {
        let program = Program::default();
        let mut engine = Engine::new(&program);

        engine.apply_comparison(&left, op, &right, SPAN);

        prop_assert_eq!(engine.evaluation_stack().len(), 1);
        prop_assert_eq!(top_counter(&engine), 1);
        let text = engine.evaluation_stack()[0].to_display_string();
        prop_assert!(text == "True" || text == "False", "{}", text);
    }

    #[test]
    fn first_diagnostic_is_final(
        operands in prop::collection::vec((value_strategy(), arithmetic_strategy(), value_strategy()), 1..8),
    ) {
        let program = Program::default();
        let mut engine = Engine::new(&program);
        // 1 / 0 always fails first.
        engine.apply_binary(&Value::number(1.0), ArithmeticOp::Div, &Value::number(0.0), SPAN);
        let recorded = engine.state().clone();

        for (left, op, right) in &operands {
            engine.apply_binary(left, *op, right, SPAN);
            engine.apply_comparison(left, ComparisonOp::Eq, right, SPAN);
        }

        prop_assert_eq!(engine.state(), &recorded);
        prop_assert_eq!(engine.diagnostic().map(|d| d.code), Some(ErrorCode::CannotDivideByZero));
        prop_assert!(engine.evaluation_stack().is_empty());
        prop_assert_eq!(top_counter(&engine), 0);
    }

    /// 5 op array always fails with the array error; 5 compared to an
    /// array is never equal, less or greater.
    #[test]
    fn arrays_are_opaque(items in prop::collection::vec(scalar_strategy(), 0..4), op in arithmetic_strategy()) {
        let array = Value::array(items);
        let five = Value::number(5.0);
        let result = evaluate_arithmetic(&five, op, &array, SPAN);
        prop_assert_eq!(result.err().map(|d| d.code), Some(ErrorCode::CannotUseOperatorWithAnArray));
        prop_assert!(!five.is_equal_to(&array));
        prop_assert!(!five.is_less_than(&array));
        prop_assert!(!five.is_greater_than(&array));
    }
}
