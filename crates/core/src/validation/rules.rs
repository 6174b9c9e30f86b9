//! Validation rule, field, and result types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_ITEM_NAME_REQUIRED: &str = "Item Name is required.";
pub const MSG_CATEGORY_REQUIRED: &str = "Please select a Category.";
pub const MSG_DATE_LOST_INVALID: &str = "Date Lost is not a valid date.";
pub const MSG_DATE_LOST_IN_FUTURE: &str = "Date Lost cannot be in the future.";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_EMAIL_DOMAIN: &str = "Please use a valid Taylor's email (@taylors.edu.my).";
pub const MSG_PHONE_REQUIRED: &str = "Phone number is required.";
pub const MSG_PHONE_FORMAT: &str = "Invalid phone number format.";

// ---------------------------------------------------------------------------
// Form kinds
// ---------------------------------------------------------------------------

/// Which report form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Lost,
    Found,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Lost => "lost",
            FormKind::Found => "found",
        }
    }

    /// Ordered rule set for this form. Evaluation stops at the first failure.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            FormKind::Lost => LOST_ITEM_RULES,
            FormKind::Found => FOUND_ITEM_RULES,
        }
    }

    /// Confirmation shown once the form passes and is about to submit.
    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Lost => "Success: Lost Item Report is valid! Submitting...",
            FormKind::Found => "Success: Found Item Report is valid! Submitting...",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(FormKind::Lost),
            "found" => Ok(FormKind::Found),
            _ => Err(CoreError::InvalidValue {
                kind: "form kind",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Canonical report form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    ItemName,
    Category,
    DateLost,
    Email,
    Phone,
}

impl FormField {
    /// The field's name in `FormValues` and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::ItemName => "itemName",
            FormField::Category => "category",
            FormField::DateLost => "dateLost",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// The kind of check a rule applies to one field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Non-empty after trimming.
    Required,
    /// A real option was picked, not the empty placeholder.
    Selected,
    /// Empty, or a real `YYYY-MM-DD` calendar date.
    CalendarDate,
    /// Empty, unparsable, or not later than today.
    NotInFuture,
    /// Ends with `@taylors.edu.my`, any case.
    TaylorsEmail,
    /// Optional `+`, then 10-15 digits, spaces, or hyphens.
    PhoneNumber,
}

/// One ordered validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: FormField,
    pub check: Check,
    pub message: &'static str,
}

const fn rule(field: FormField, check: Check, message: &'static str) -> Rule {
    Rule {
        field,
        check,
        message,
    }
}

const LOST_ITEM_RULES: &[Rule] = &[
    rule(FormField::ItemName, Check::Required, MSG_ITEM_NAME_REQUIRED),
    rule(FormField::Category, Check::Selected, MSG_CATEGORY_REQUIRED),
    rule(FormField::DateLost, Check::CalendarDate, MSG_DATE_LOST_INVALID),
    rule(FormField::DateLost, Check::NotInFuture, MSG_DATE_LOST_IN_FUTURE),
    rule(FormField::Email, Check::Required, MSG_EMAIL_REQUIRED),
    rule(FormField::Email, Check::TaylorsEmail, MSG_EMAIL_DOMAIN),
    rule(FormField::Phone, Check::Required, MSG_PHONE_REQUIRED),
    rule(FormField::Phone, Check::PhoneNumber, MSG_PHONE_FORMAT),
];

const FOUND_ITEM_RULES: &[Rule] = &[
    rule(FormField::ItemName, Check::Required, MSG_ITEM_NAME_REQUIRED),
    rule(FormField::Category, Check::Selected, MSG_CATEGORY_REQUIRED),
    rule(FormField::Email, Check::Required, MSG_EMAIL_REQUIRED),
    rule(FormField::Email, Check::TaylorsEmail, MSG_EMAIL_DOMAIN),
];

// ---------------------------------------------------------------------------
// Inputs and results
// ---------------------------------------------------------------------------

/// Raw string input keyed by field name. Missing fields read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value of a canonical field, `""` when absent.
    pub fn get(&self, field: FormField) -> &str {
        self.0.get(field.as_str()).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Outcome of validating one form submission.
///
/// Carries at most one failure: the first rule that did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_field: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn passed() -> Self {
        Self {
            ok: true,
            failed_field: None,
            message: None,
        }
    }

    pub fn failed(rule: &Rule) -> Self {
        Self {
            ok: false,
            failed_field: Some(rule.field),
            message: Some(rule.message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn form_kind_parses_case_insensitively() {
        assert_eq!("Lost".parse::<FormKind>().unwrap(), FormKind::Lost);
        assert_eq!(" found ".parse::<FormKind>().unwrap(), FormKind::Found);
    }

    #[test]
    fn form_kind_rejects_unknown() {
        assert_matches!(
            "stolen".parse::<FormKind>(),
            Err(CoreError::InvalidValue { kind: "form kind", .. })
        );
    }

    #[test]
    fn found_rules_skip_date_and_phone() {
        let fields: Vec<FormField> = FormKind::Found.rules().iter().map(|r| r.field).collect();
        assert!(!fields.contains(&FormField::DateLost));
        assert!(!fields.contains(&FormField::Phone));
    }

    #[test]
    fn email_messages_shared_between_forms() {
        let messages = |kind: FormKind| -> Vec<&str> {
            kind.rules()
                .iter()
                .filter(|r| r.field == FormField::Email)
                .map(|r| r.message)
                .collect()
        };
        assert_eq!(messages(FormKind::Lost), messages(FormKind::Found));
    }

    #[test]
    fn absent_field_reads_as_empty() {
        let values = FormValues::new().with("itemName", "Umbrella");
        assert_eq!(values.get(FormField::ItemName), "Umbrella");
        assert_eq!(values.get(FormField::Phone), "");
    }

    #[test]
    fn passed_result_omits_failure_keys() {
        let json = serde_json::to_value(ValidationResult::passed()).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn failed_result_uses_camel_case_field() {
        let rule = FormKind::Lost.rules()[0];
        let json = serde_json::to_value(ValidationResult::failed(&rule)).unwrap();
        assert_eq!(json["failedField"], "itemName");
        assert_eq!(json["message"], MSG_ITEM_NAME_REQUIRED);
    }
}
