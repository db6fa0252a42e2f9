//! Input validation for interactive field edits.
//!
//! The shell forwards dialog text verbatim; validation happens here so every
//! entry path applies the same rules.

use graphboard_core::{GraphError, GraphResult};

/// Maximum digits accepted in a weight entry.
const WEIGHT_MAX_DIGITS: usize = 3;

/// Validates a weight entry: 1 to 3 decimal digits, nonzero value.
///
/// Zero fits the digit pattern but is rejected anyway: the matrix file uses
/// 0 for "no edge", so a 0-weight edge would vanish on the next save.
pub fn validate_weight(input: &str) -> GraphResult<u32> {
    if input.is_empty()
        || input.len() > WEIGHT_MAX_DIGITS
        || !input.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(GraphError::invalid_input(format!(
            "weight must be 1 to 3 decimal digits, got {input:?}"
        )));
    }
    let value: u32 = input
        .parse()
        .map_err(|_| GraphError::invalid_input(format!("weight {input:?} is not a number")))?;
    if value == 0 {
        return Err(GraphError::invalid_input(
            "weight 0 would erase the edge on save",
        ));
    }
    Ok(value)
}

/// Validates a tooltip entry: non-empty, single line.
///
/// The annotations file is line-oriented, so embedded line breaks would shift
/// every node after this one on reload.
pub fn validate_tooltip(input: &str) -> GraphResult<&str> {
    if input.is_empty() {
        return Err(GraphError::invalid_input("tooltip must not be empty"));
    }
    if input.contains('\n') || input.contains('\r') {
        return Err(GraphError::invalid_input("tooltip must be a single line"));
    }
    Ok(input)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_to_three_digit_weights() {
        assert_eq!(validate_weight("5").unwrap(), 5);
        assert_eq!(validate_weight("42").unwrap(), 42);
        assert_eq!(validate_weight("123").unwrap(), 123);
        assert_eq!(validate_weight("999").unwrap(), 999);
    }

    #[test]
    fn rejects_malformed_weights() {
        for input in ["", "1234", "-1", "abc", "12a", " 5", "1.5"] {
            let err = validate_weight(input).unwrap_err();
            assert!(
                matches!(err, GraphError::InvalidInput { .. }),
                "{input:?} should be invalid input, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_weight_zero() {
        assert!(matches!(
            validate_weight("0").unwrap_err(),
            GraphError::InvalidInput { .. }
        ));
        assert!(matches!(
            validate_weight("000").unwrap_err(),
            GraphError::InvalidInput { .. }
        ));
    }

    #[test]
    fn tooltip_must_be_a_non_empty_single_line() {
        assert_eq!(validate_tooltip("depot A").unwrap(), "depot A");
        assert!(validate_tooltip("").is_err());
        assert!(validate_tooltip("two\nlines").is_err());
        assert!(validate_tooltip("carriage\rreturn").is_err());
    }
}
