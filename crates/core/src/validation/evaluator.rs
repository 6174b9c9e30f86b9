//! Rule evaluator: pure logic, no page access.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{Check, FormKind, FormValues, Rule, ValidationResult};
use crate::types::{local_today, parse_iso_date, Date};

/// Campus e-mail addresses only.
pub const TAYLORS_EMAIL_PATTERN: &str = r"(?i)@taylors\.edu\.my$";

/// Optional leading `+`, then 10-15 digits, whitespace, or hyphens.
pub const PHONE_PATTERN: &str = r"^\+?[0-9\s-]{10,15}$";

static TAYLORS_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAYLORS_EMAIL_PATTERN).expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Validate a form against its rule set, judging dates by the local calendar.
pub fn validate(kind: FormKind, values: &FormValues) -> ValidationResult {
    validate_on(kind, values, local_today())
}

/// Validate a form with an explicit "today".
pub fn validate_on(kind: FormKind, values: &FormValues, today: Date) -> ValidationResult {
    evaluate_rules(kind.rules(), values, today)
}

/// Evaluate rules in order and report the first one that fails.
pub fn evaluate_rules(rules: &[Rule], values: &FormValues, today: Date) -> ValidationResult {
    rules
        .iter()
        .find(|rule| !check_passes(rule.check, values.get(rule.field), today))
        .map_or_else(ValidationResult::passed, ValidationResult::failed)
}

fn check_passes(check: Check, value: &str, today: Date) -> bool {
    match check {
        Check::Required | Check::Selected => !value.trim().is_empty(),
        Check::CalendarDate => value.trim().is_empty() || parse_iso_date(value).is_some(),
        Check::NotInFuture => match parse_iso_date(value) {
            Some(date) => date <= today,
            None => true,
        },
        Check::TaylorsEmail => TAYLORS_EMAIL_RE.is_match(value),
        Check::PhoneNumber => PHONE_RE.is_match(value),
    }
}
