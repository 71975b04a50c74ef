//! Validation helper functions for configuration types.

use std::collections::HashSet;

use crate::core::errors::{HarmonizerError, Result};
use crate::naming::VerbDefinition;

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(HarmonizerError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that an f64 value is finite and non-negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HarmonizerError::validation_field(
            format!("{} must be a finite non-negative number, got {}", field, value),
            field,
        ));
    }
    Ok(())
}

/// Validate configured naming verbs: single lowercase-able words, no repeats.
pub fn validate_verb_definitions(verbs: &[VerbDefinition], field: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for definition in verbs {
        let verb = definition.verb.trim().to_lowercase();
        if verb.is_empty() || verb.contains(char::is_whitespace) {
            return Err(HarmonizerError::validation_field(
                format!("{} entry '{}' must be a single word", field, definition.verb),
                field,
            ));
        }
        if !seen.insert(verb.clone()) {
            return Err(HarmonizerError::validation_field(
                format!("{} lists '{}' more than once", field, verb),
                field,
            ));
        }
        if definition.coordinates.is_zero() {
            return Err(HarmonizerError::validation_field(
                format!("{} entry '{}' has a zero coordinate", field, verb),
                field,
            ));
        }
    }
    Ok(())
}
