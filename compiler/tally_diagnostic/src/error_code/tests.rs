use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::CannotDivideByZero.to_string(), "E6001");
    assert_eq!(ErrorCode::CannotUseOperatorWithAString.as_str(), "E6010");
    assert_eq!(ErrorCode::CannotUseOperatorWithAnArray.as_str(), "E6011");
}

#[test]
fn test_codes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
}

#[test]
fn test_codes_stay_in_runtime_range() {
    for code in ErrorCode::ALL {
        assert!(code.as_str().starts_with("E6"), "{code:?}");
    }
}
