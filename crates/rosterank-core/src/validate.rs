//! Entity validation - the only construction path for student records

use crate::error::ValidationError;
use crate::record::StudentRecord;

/// Lowest admissible score.
pub const SCORE_MIN: f64 = 0.0;
/// Highest admissible score.
pub const SCORE_MAX: f64 = 100.0;

/// Validates raw form input into a well-formed [`StudentRecord`].
///
/// The name is trimmed and must be non-empty; the score text must parse as a
/// finite number within [0, 100]. On success the record receives a fresh
/// unique id and the current timestamp. No side effects on failure.
///
/// # Errors
///
/// - [`ValidationError::EmptyName`] when the trimmed name is empty
/// - [`ValidationError::NotANumber`] when the score text is not a finite number
/// - [`ValidationError::OutOfRange`] when the score is below 0 or above 100
///
/// # Examples
///
/// ```
/// use rosterank_core::{validate, ValidationError};
///
/// let record = validate("  Grace Hopper  ", "85.5").unwrap();
/// assert_eq!(record.name(), "Grace Hopper");
/// assert_eq!(record.score(), 85.5);
///
/// assert_eq!(validate("   ", "85").unwrap_err(), ValidationError::EmptyName);
/// ```
pub fn validate(raw_name: &str, raw_score: &str) -> Result<StudentRecord, ValidationError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let score = validate_score(raw_score)?;
    Ok(StudentRecord::new(name.to_string(), score))
}

/// Parses and range-checks a raw score string.
///
/// This is the explicit parse-and-validate step: dynamic coercion never leaks
/// past the validator boundary.
pub fn validate_score(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let score: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        raw: trimmed.to_string(),
    })?;

    // "inf" and "NaN" parse successfully but are not admissible scores.
    if !score.is_finite() {
        return Err(ValidationError::NotANumber {
            raw: trimmed.to_string(),
        });
    }

    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(ValidationError::OutOfRange { score });
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let record = validate("Alice", "90").unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.score(), 90.0);
    }

    #[test]
    fn test_name_is_trimmed() {
        let record = validate("  Bob  ", "70").unwrap();
        assert_eq!(record.name(), "Bob");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(validate("", "50").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(
            validate(" \t ", "50").unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let err = validate("Alice", "ninety").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                raw: "ninety".to_string()
            }
        );
    }

    #[test]
    fn test_empty_score_rejected() {
        assert!(matches!(
            validate("Alice", "").unwrap_err(),
            ValidationError::NotANumber { .. }
        ));
    }

    #[test]
    fn test_non_finite_score_rejected() {
        assert!(matches!(
            validate("Alice", "NaN").unwrap_err(),
            ValidationError::NotANumber { .. }
        ));
        assert!(matches!(
            validate("Alice", "inf").unwrap_err(),
            ValidationError::NotANumber { .. }
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            validate("Alice", "-0.5").unwrap_err(),
            ValidationError::OutOfRange { score: -0.5 }
        );
        assert_eq!(
            validate("Alice", "100.5").unwrap_err(),
            ValidationError::OutOfRange { score: 100.5 }
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert_eq!(validate("Min", "0").unwrap().score(), 0.0);
        assert_eq!(validate("Max", "100").unwrap().score(), 100.0);
    }

    #[test]
    fn test_score_text_is_trimmed() {
        assert_eq!(validate_score("  42.5  ").unwrap(), 42.5);
    }

    #[test]
    fn test_fresh_ids_per_call() {
        let a = validate("Same", "10").unwrap();
        let b = validate("Same", "10").unwrap();
        let c = validate("Same", "10").unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(a.id(), c.id());
    }
}
