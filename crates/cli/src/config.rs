use lostfound_core::types::{local_today, parse_iso_date, Date};

/// Harness configuration loaded from environment variables.
///
/// Both values stand in for browser state the page layer would normally
/// supply: the session's student id and the wall-clock date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Logged-in student id; `None` means a guest.
    pub student_id: Option<String>,
    /// Pinned "today" for date rules; `None` uses the local calendar.
    pub today: Option<Date>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `LOSTFOUND_STUDENT_ID` | unset   |
    /// | `LOSTFOUND_TODAY`      | unset   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let student_id = lookup("LOSTFOUND_STUDENT_ID")
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let today = lookup("LOSTFOUND_TODAY").and_then(|raw| {
            let parsed = parse_iso_date(&raw);
            if parsed.is_none() {
                tracing::warn!(value = %raw, "LOSTFOUND_TODAY is not a YYYY-MM-DD date, ignoring");
            }
            parsed
        });

        Self { student_id, today }
    }

    /// The date every relative rule is judged against.
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(local_today)
    }
}
