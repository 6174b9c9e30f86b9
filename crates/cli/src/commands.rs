//! Command bodies, kept free of argument parsing and printing so they can be
//! exercised directly from tests.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use lostfound_core::contact::{contact_action, ContactAction};
use lostfound_core::report::ReportSummary;
use lostfound_core::session::display_name;
use lostfound_core::types::Date;
use lostfound_core::{
    filter_items_on, validate_on, FilterCriteria, FormKind, FormValues, ItemRecord, TimePeriod,
    ValidationResult,
};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

// ---------------------------------------------------------------------------
// Input loading
// ---------------------------------------------------------------------------

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Split a `name=value` form field assignment. The value may be empty.
pub fn parse_field_assignment(raw: &str) -> CliResult<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::BadRequest(format!(
            "expected name=value, got {raw:?}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Criteria flags given on the command line. Set flags override the file.
#[derive(Debug, Clone, Default)]
pub struct CriteriaOverrides {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub time_period: Option<TimePeriod>,
}

impl CriteriaOverrides {
    pub fn apply(self, base: FilterCriteria) -> FilterCriteria {
        FilterCriteria {
            keyword: self.keyword.unwrap_or(base.keyword),
            category: self.category.unwrap_or(base.category),
            location: self.location.unwrap_or(base.location),
            date_from: self.date_from.or(base.date_from),
            date_to: self.date_to.or(base.date_to),
            time_period: self.time_period.unwrap_or(base.time_period),
        }
    }
}

/// Run one filter pass and shape it as `{visible, count, label}`.
pub fn run_filter(items: &[ItemRecord], criteria: &FilterCriteria, today: Date) -> Value {
    let outcome = filter_items_on(items, criteria, today);
    tracing::info!(
        total = items.len(),
        visible = outcome.count,
        %today,
        "Filter pass complete",
    );
    json!({
        "visible": outcome.visible,
        "count": outcome.count,
        "label": outcome.label(),
    })
}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

/// Validate a report, logging the first failure if any.
pub fn run_validate(kind: FormKind, values: &FormValues, today: Date) -> ValidationResult {
    let result = validate_on(kind, values, today);
    match (&result.failed_field, &result.message) {
        (Some(field), Some(message)) => {
            tracing::info!(%kind, %field, message = %message, "Report rejected");
        }
        _ => tracing::info!(%kind, "{}", kind.success_message()),
    }
    result
}

// ---------------------------------------------------------------------------
// Session-dependent helpers
// ---------------------------------------------------------------------------

pub fn run_whoami(config: &CliConfig) -> Value {
    json!({ "label": display_name(config.student_id.as_deref()) })
}

pub fn run_contact(config: &CliConfig) -> ContactAction {
    let action = contact_action(config.student_id.as_deref());
    tracing::debug!(logged_in = config.student_id.is_some(), ?action, "Contact action");
    action
}

pub fn run_report(query: &str) -> Value {
    let summary = ReportSummary::from_query(query);
    json!({
        "summary": summary,
        "dateTime": summary.date_time_line(),
        "emailLink": summary.email_link(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn field_assignment_keeps_empty_value() {
        assert_eq!(
            parse_field_assignment("dateLost=").unwrap(),
            ("dateLost".to_string(), String::new())
        );
    }

    #[test]
    fn field_assignment_keeps_equals_in_value() {
        assert_eq!(
            parse_field_assignment("itemName=a=b").unwrap(),
            ("itemName".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn field_assignment_requires_name() {
        assert_matches!(parse_field_assignment("=x"), Err(CliError::BadRequest(_)));
        assert_matches!(parse_field_assignment("itemName"), Err(CliError::BadRequest(_)));
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let base = FilterCriteria::default()
            .with_keyword("bottle")
            .with_location("Library");
        let merged = CriteriaOverrides {
            keyword: Some("wallet".into()),
            time_period: Some(TimePeriod::Today),
            ..Default::default()
        }
        .apply(base);
        assert_eq!(merged.keyword, "wallet");
        assert_eq!(merged.location, "Library");
        assert_eq!(merged.time_period, TimePeriod::Today);
    }

    #[test]
    fn report_includes_derived_lines() {
        let value = run_report("email=a%40taylors.edu.my&dateLost=2024-05-01");
        assert_eq!(value["emailLink"], "mailto:a@taylors.edu.my");
        assert_eq!(value["dateTime"], "2024-05-01");
        assert_eq!(value["summary"]["date"], "2024-05-01");
    }

    #[test]
    fn whoami_for_guest() {
        let value = run_whoami(&CliConfig::default());
        assert_eq!(value["label"], "\u{1F464} Guest");
    }
}
