//! Catalog name validation pipeline.
//!
//! # Responsibility
//! - Provide the predicate checks every catalog-bound name must pass.
//! - Aggregate failures across request fields into field-addressed issues.
//!
//! # Invariants
//! - Checks run in a fixed order and short-circuit per candidate:
//!   non-blank, then minimum length, then not purely numeric.
//! - Validation never mutates the candidate; names are persisted exactly as
//!   submitted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum number of characters in a catalog-bound name.
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum entries accepted per bulk-create list.
pub const BULK_LIST_MAX: usize = 1000;

static NUMBERS_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid numbers-only regex"));

/// Single-candidate validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    /// Name is empty or whitespace-only.
    Blank,
    /// Name is shorter than [`NAME_MIN_CHARS`].
    TooShort { min: usize, actual: usize },
    /// Name consists exclusively of ASCII digits.
    NumbersOnly,
}

impl Display for NameValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "name cannot be blank"),
            Self::TooShort { min, actual } => {
                write!(f, "name must have at least {min} characters, got {actual}")
            }
            Self::NumbersOnly => write!(f, "name cannot consist only of numbers"),
        }
    }
}

impl Error for NameValidationError {}

/// One field-addressed validation failure inside a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIssue {
    /// Request field the candidate came from, e.g. `authors[2]`.
    pub field: String,
    /// The rejected candidate, verbatim.
    pub name: String,
    pub error: NameValidationError,
}

impl Display for NameIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Validates one candidate name, short-circuiting on the first failed check.
pub fn validate_name(name: &str) -> Result<(), NameValidationError> {
    if name.trim().is_empty() {
        return Err(NameValidationError::Blank);
    }

    let actual = name.chars().count();
    if actual < NAME_MIN_CHARS {
        return Err(NameValidationError::TooShort {
            min: NAME_MIN_CHARS,
            actual,
        });
    }

    if NUMBERS_ONLY_RE.is_match(name) {
        return Err(NameValidationError::NumbersOnly);
    }

    Ok(())
}

/// Runs [`validate_name`] over a candidate list, collecting every failure.
///
/// Issues are addressed as `field[index]` in input order, so callers can
/// aggregate across several fields into one whole-request report.
pub fn validate_candidates<'a>(
    field: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Vec<NameIssue> {
    let mut issues = Vec::new();
    for (index, name) in names.into_iter().enumerate() {
        if let Err(error) = validate_name(name) {
            issues.push(NameIssue {
                field: format!("{field}[{index}]"),
                name: name.to_string(),
                error,
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::{validate_candidates, validate_name, NameValidationError, NAME_MIN_CHARS};

    #[test]
    fn accepts_ordinary_names() {
        assert_eq!(validate_name("Steve"), Ok(()));
        assert_eq!(validate_name("Dark Oak"), Ok(()));
        assert_eq!(validate_name("4towers"), Ok(()));
    }

    #[test]
    fn rejects_blank_before_other_checks() {
        assert_eq!(validate_name(""), Err(NameValidationError::Blank));
        assert_eq!(validate_name("   "), Err(NameValidationError::Blank));
    }

    #[test]
    fn rejects_names_below_minimum_length() {
        assert_eq!(
            validate_name("a"),
            Err(NameValidationError::TooShort {
                min: NAME_MIN_CHARS,
                actual: 1,
            })
        );
    }

    #[test]
    fn rejects_numbers_only_names_with_stable_message() {
        let err = validate_name("123").expect_err("numeric name must fail");
        assert_eq!(err, NameValidationError::NumbersOnly);
        assert_eq!(err.to_string(), "name cannot consist only of numbers");
    }

    #[test]
    fn mixed_alphanumeric_names_pass_the_numeric_check() {
        assert_eq!(validate_name("12a"), Ok(()));
    }

    #[test]
    fn candidate_issues_are_field_addressed_in_input_order() {
        let issues = validate_candidates("authors", ["Steve", "", "7"]);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "authors[1]");
        assert_eq!(issues[0].error, NameValidationError::Blank);
        assert_eq!(issues[1].field, "authors[2]");
        assert_eq!(
            issues[1].error,
            NameValidationError::TooShort {
                min: NAME_MIN_CHARS,
                actual: 1,
            }
        );
    }
}
