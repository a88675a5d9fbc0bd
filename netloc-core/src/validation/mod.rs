//! This module provides functionality to validate problem definition before optimization starts.
//!
//! The solver itself assumes valid input and rejects only degenerate clustering requests, so callers
//! are expected to run [`validate_problem`] first.

use crate::models::problem::Problem;
use std::fmt;

mod costs;
use self::costs::validate_costs;

mod demand;
use self::demand::validate_demand;

mod network;
use self::network::validate_network;

mod search;
use self::search::validate_search;

/// A validation error.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;
        if let Some(details) = &self.details {
            write!(f, " details: '{details}'")?;
        }

        Ok(())
    }
}

/// Keeps data needed for validation.
pub struct ValidationContext<'a> {
    /// A problem definition.
    pub problem: &'a Problem,
    /// Candidate amounts of centers.
    pub k_values: &'a [usize],
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem, k_values: &'a [usize]) -> Self {
        Self { problem, k_values }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), Vec<FormatError>> {
        let errors = [validate_demand(self), validate_network(self), validate_costs(self), validate_search(self)]
            .into_iter()
            .flat_map(|result| result.err().unwrap_or_default())
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Validates problem and candidate amounts of centers.
pub fn validate_problem(problem: &Problem, k_values: &[usize]) -> Result<(), Vec<FormatError>> {
    ValidationContext::new(problem, k_values).validate()
}

fn combine_error_results(results: &[Result<(), FormatError>]) -> Result<(), Vec<FormatError>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
