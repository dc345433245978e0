//! Client-side form validation.
//!
//! Validation is a pure function from form values to a structured error set.
//! It runs before any submission is attempted, so invalid input never
//! reaches the network; the errors are rendered inline next to each field.

use core::fmt;

use serde::Serialize;

/// Message shown under a required field that was left empty.
pub const REQUIRED_MESSAGE: &str = "String must contain at least 1 character(s)";

/// A validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field (e.g. `imageUrl`).
    pub field: &'static str,
    /// Human-readable message rendered under the field.
    pub message: String,
}

/// Ordered set of field errors, in the order the fields appear on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record an error for `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record a "required" error if `value` is empty.
    ///
    /// Mirrors a `min(1)` string rule: only the empty string fails,
    /// whitespace counts as content.
    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.is_empty() {
            self.add(field, REQUIRED_MESSAGE);
        }
    }

    /// First error message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Convert into a `Result`, `Ok` when no errors were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one field error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Form values that can be checked before submission.
pub trait Validate {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns all field errors found, in form order.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
