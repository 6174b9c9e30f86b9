//! Filter criteria and relative time periods.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// Generic "no constraint" option.
pub const ALL: &str = "All";

/// "No constraint" option of the category dropdown.
pub const ALL_CATEGORIES: &str = "All Categories";

/// "No constraint" option of the location dropdown.
pub const ALL_LOCATIONS: &str = "All Locations";

// ---------------------------------------------------------------------------
// Time periods
// ---------------------------------------------------------------------------

/// Relative date shortcut, applied on top of any explicit date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePeriod {
    #[default]
    #[serde(alias = "")]
    None,
    Today,
    #[serde(alias = "week")]
    LastWeek,
    #[serde(alias = "month")]
    LastMonth,
}

impl TimePeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::None => "none",
            TimePeriod::Today => "today",
            TimePeriod::LastWeek => "lastWeek",
            TimePeriod::LastMonth => "lastMonth",
        }
    }

    /// Earliest date still inside the period, or `None` when inactive.
    ///
    /// `LastMonth` steps back one calendar month, clamping to the end of a
    /// shorter month (March 31 -> February 28/29).
    ///
    /// # Examples
    ///
    /// ```
    /// use lostfound_core::filter::TimePeriod;
    /// use lostfound_core::types::Date;
    ///
    /// let today = Date::from_ymd_opt(2024, 3, 31).unwrap();
    /// assert_eq!(TimePeriod::None.start(today), None);
    /// assert_eq!(TimePeriod::Today.start(today), Some(today));
    /// assert_eq!(TimePeriod::LastWeek.start(today), Date::from_ymd_opt(2024, 3, 24));
    /// assert_eq!(TimePeriod::LastMonth.start(today), Date::from_ymd_opt(2024, 2, 29));
    /// ```
    pub fn start(self, today: Date) -> Option<Date> {
        match self {
            TimePeriod::None => None,
            TimePeriod::Today => Some(today),
            TimePeriod::LastWeek => Some(today.checked_sub_days(Days::new(7)).unwrap_or(Date::MIN)),
            TimePeriod::LastMonth => {
                Some(today.checked_sub_months(Months::new(1)).unwrap_or(Date::MIN))
            }
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = CoreError;

    /// Accepts the canonical names plus the dropdown's `week` / `month`
    /// values; empty input means no period.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(TimePeriod::None),
            "today" => Ok(TimePeriod::Today),
            "lastWeek" | "week" => Ok(TimePeriod::LastWeek),
            "lastMonth" | "month" => Ok(TimePeriod::LastMonth),
            _ => Err(CoreError::InvalidValue {
                kind: "time period",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Everything the filter form can constrain. `Default` matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub keyword: String,
    pub category: String,
    pub location: String,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub time_period: TimePeriod,
}

impl FilterCriteria {
    pub fn with_keyword(self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self
        }
    }

    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    pub fn with_date_from(self, date_from: impl Into<String>) -> Self {
        Self {
            date_from: Some(date_from.into()),
            ..self
        }
    }

    pub fn with_date_to(self, date_to: impl Into<String>) -> Self {
        Self {
            date_to: Some(date_to.into()),
            ..self
        }
    }

    pub fn with_time_period(self, time_period: TimePeriod) -> Self {
        Self {
            time_period,
            ..self
        }
    }

    /// The category to match exactly, if the dropdown constrains it.
    pub fn category_constraint(&self) -> Option<&str> {
        dropdown_constraint(&self.category, ALL_CATEGORIES)
    }

    /// The location to match exactly, if the dropdown constrains it.
    pub fn location_constraint(&self) -> Option<&str> {
        dropdown_constraint(&self.location, ALL_LOCATIONS)
    }

    /// Lower bound as typed, ignoring a blank input.
    pub fn date_from_bound(&self) -> Option<&str> {
        non_blank(self.date_from.as_deref())
    }

    /// Upper bound as typed, ignoring a blank input.
    pub fn date_to_bound(&self) -> Option<&str> {
        non_blank(self.date_to.as_deref())
    }
}

fn dropdown_constraint<'a>(value: &'a str, sentinel: &str) -> Option<&'a str> {
    if value.is_empty() || value == ALL || value == sentinel {
        None
    } else {
        Some(value)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    // -- time periods --------------------------------------------------------

    #[test]
    fn parses_dropdown_values() {
        assert_eq!("".parse::<TimePeriod>().unwrap(), TimePeriod::None);
        assert_eq!("today".parse::<TimePeriod>().unwrap(), TimePeriod::Today);
        assert_eq!("week".parse::<TimePeriod>().unwrap(), TimePeriod::LastWeek);
        assert_eq!("month".parse::<TimePeriod>().unwrap(), TimePeriod::LastMonth);
        assert_eq!(
            "lastMonth".parse::<TimePeriod>().unwrap(),
            TimePeriod::LastMonth
        );
    }

    #[test]
    fn rejects_unknown_period() {
        assert_matches!(
            "fortnight".parse::<TimePeriod>(),
            Err(CoreError::InvalidValue { kind: "time period", .. })
        );
    }

    #[test]
    fn last_week_crosses_month_boundary() {
        assert_eq!(TimePeriod::LastWeek.start(day(2024, 3, 3)), Some(day(2024, 2, 25)));
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        assert_eq!(TimePeriod::LastMonth.start(day(2024, 1, 15)), Some(day(2023, 12, 15)));
    }

    // -- criteria ------------------------------------------------------------

    #[test]
    fn sentinels_are_not_constraints() {
        let criteria = FilterCriteria::default()
            .with_category(ALL_CATEGORIES)
            .with_location(ALL);
        assert_eq!(criteria.category_constraint(), None);
        assert_eq!(criteria.location_constraint(), None);

        let criteria = criteria.with_category("Wallet").with_location("Library");
        assert_eq!(criteria.category_constraint(), Some("Wallet"));
        assert_eq!(criteria.location_constraint(), Some("Library"));
    }

    #[test]
    fn blank_bounds_are_ignored() {
        let criteria = FilterCriteria::default().with_date_from("  ").with_date_to("");
        assert_eq!(criteria.date_from_bound(), None);
        assert_eq!(criteria.date_to_bound(), None);
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "keyword": "blue",
            "dateFrom": "2024-03-01",
            "timePeriod": "week",
        }))
        .unwrap();
        assert_eq!(criteria.keyword, "blue");
        assert_eq!(criteria.date_from.as_deref(), Some("2024-03-01"));
        assert_eq!(criteria.date_to, None);
        assert_eq!(criteria.time_period, TimePeriod::LastWeek);
    }

    #[test]
    fn empty_period_string_deserializes_to_none() {
        let criteria: FilterCriteria =
            serde_json::from_value(json!({ "timePeriod": "" })).unwrap();
        assert_eq!(criteria.time_period, TimePeriod::None);
    }
}
