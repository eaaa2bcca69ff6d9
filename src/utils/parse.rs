use crate::utils::error::{CrunchError, Result};

/// Parses an operand, ignoring surrounding whitespace.
pub fn parse_operand(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|source| CrunchError::InvalidNumber {
            input: input.to_string(),
            source,
        })
}
