use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_is_unbounded() {
    assert_eq!(EngineConfig::default(), EngineConfig::unbounded());
    assert!(!EngineConfig::unbounded().is_bounded());
}

#[test]
fn test_sandboxed_preset() {
    let config = EngineConfig::sandboxed();
    assert_eq!(config.max_call_depth, Some(200));
    assert_eq!(config.step_budget, Some(1_000_000));
    assert_eq!(config.max_evaluation_stack, Some(10_000));
    assert!(config.is_bounded());
}

#[test]
fn test_builder_sets_each_limit() {
    let config = EngineConfig::unbounded()
        .with_max_call_depth(4)
        .with_step_budget(10)
        .with_max_evaluation_stack(2);
    assert_eq!(
        config,
        EngineConfig {
            max_call_depth: Some(4),
            step_budget: Some(10),
            max_evaluation_stack: Some(2),
        }
    );
}

#[test]
fn test_budget_allows_exactly_limit_steps() {
    let mut budget = Budget::new(&EngineConfig::unbounded().with_step_budget(2));
    assert_eq!(budget.charge(), Ok(()));
    assert_eq!(budget.charge(), Ok(()));
    assert_eq!(budget.charge(), Err(BudgetExceeded { budget: 2 }));
    assert_eq!(budget.steps(), 2);
    // Refused again, still not counted.
    assert_eq!(budget.charge(), Err(BudgetExceeded { budget: 2 }));
    assert_eq!(budget.steps(), 2);
}

#[test]
fn test_unlimited_budget_only_counts() {
    let mut budget = Budget::new(&EngineConfig::unbounded());
    for _ in 0..100 {
        assert_eq!(budget.charge(), Ok(()));
    }
    assert_eq!(budget.steps(), 100);
}

#[test]
fn test_zero_budget_refuses_first_step() {
    let mut budget = Budget::new(&EngineConfig::unbounded().with_step_budget(0));
    assert_eq!(budget.charge(), Err(BudgetExceeded { budget: 0 }));
    assert_eq!(budget.steps(), 0);
}
