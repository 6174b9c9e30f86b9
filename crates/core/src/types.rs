/// All calendar dates are naive local dates (no time-of-day, no zone).
pub type Date = chrono::NaiveDate;

/// Wire format for every date field: `YYYY-MM-DD`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local calendar, truncated to midnight.
pub fn local_today() -> Date {
    chrono::Local::now().date_naive()
}

/// Parse a strict ISO `YYYY-MM-DD` date.
///
/// Surrounding whitespace is ignored; anything else that is not exactly ten
/// characters of a real calendar date yields `None`.
///
/// # Examples
///
/// ```
/// use lostfound_core::types::parse_iso_date;
///
/// assert!(parse_iso_date("2024-03-15").is_some());
/// assert!(parse_iso_date("2024-02-30").is_none());
/// assert!(parse_iso_date("2024-3-5").is_none());
/// assert!(parse_iso_date("").is_none());
/// ```
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.len() != 10 {
        return None;
    }
    Date::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}
