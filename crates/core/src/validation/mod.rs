//! Report form validation.
//!
//! Provides the field / rule / result types and a pure-logic evaluator that
//! stops at the first violated rule, so the page can surface one error at a
//! time.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, validate, validate_on};
pub use rules::{Check, FormField, FormKind, FormValues, Rule, ValidationResult};
