//! Input validation for assignment / ground-truth pairs.
//!
//! Slices of `usize` already rule out non-sequence and non-integer input at
//! compile time. What remains to check at runtime is that both sides describe
//! the same, non-empty set of points. Label lists that arrive as text (command
//! line, config files) go through [`parse_labels`] first.
//!
//! # Example
//!
//! ```rust
//! use concord::validate::{parse_labels, validate};
//!
//! let pred = parse_labels("0, 0, 1, 1").unwrap();
//! let truth = parse_labels("0 1 1 1").unwrap();
//! assert!(validate(&pred, &truth).is_ok());
//!
//! assert!(parse_labels("0, 1.5").is_err());
//! ```

use crate::error::{Error, Result};

/// Check that `assignments` and `truth` can be compared point by point.
pub fn validate(assignments: &[usize], truth: &[usize]) -> Result<()> {
    if assignments.len() != truth.len() {
        return Err(Error::LengthMismatch {
            assignments: assignments.len(),
            truth: truth.len(),
        });
    }
    if assignments.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Parse a list of labels separated by commas and/or whitespace.
///
/// Every token must be a non-negative integer; `"1.5"`, `"a"` and `"-2"` are
/// rejected with [`Error::InvalidLabel`] naming the token's position.
pub fn parse_labels(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(position, tok)| {
            tok.parse::<usize>().map_err(|_| Error::InvalidLabel {
                position,
                token: tok.to_string(),
            })
        })
        .collect()
}
