//! Confirmation summary of a submitted report.
//!
//! Report forms submit with GET, so the confirmation page only has the query
//! string to work with. Lost and found forms name their date/time fields
//! differently; the summary folds them into one `date` / `time` pair.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Everything the confirmation page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub item_name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl ReportSummary {
    /// Build a summary from `application/x-www-form-urlencoded` input.
    ///
    /// A leading `?` is optional. Missing keys read as empty; when a key
    /// repeats, the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let params = parse_query(query);
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        let first_non_empty = |a: &str, b: &str| {
            let value = get(a);
            if value.is_empty() {
                get(b)
            } else {
                value
            }
        };

        Self {
            item_name: get("itemName"),
            category: get("category"),
            description: get("description"),
            location: get("location"),
            contact_name: get("contactName"),
            email: get("email"),
            phone: get("phone"),
            date: first_non_empty("dateFound", "dateLost"),
            time: first_non_empty("timeFound", "timeLost"),
        }
    }

    /// `"<date> at <time>"`, just the date, or empty when no date was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use lostfound_core::report::ReportSummary;
    ///
    /// let summary = ReportSummary::from_query("?dateLost=2024-05-01&timeLost=14%3A30");
    /// assert_eq!(summary.date_time_line(), "2024-05-01 at 14:30");
    ///
    /// let summary = ReportSummary::from_query("timeFound=09:00");
    /// assert_eq!(summary.date_time_line(), "");
    /// ```
    pub fn date_time_line(&self) -> String {
        match (self.date.is_empty(), self.time.is_empty()) {
            (true, _) => String::new(),
            (false, true) => self.date.clone(),
            (false, false) => format!("{} at {}", self.date, self.time),
        }
    }

    /// Link that opens a mail to the reporter.
    pub fn email_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Decode a query string into a key -> value map (first occurrence wins).
fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(decode_component(key))
            .or_insert_with(|| decode_component(value));
    }
    params
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
