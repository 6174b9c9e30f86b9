//! Lost / found item postings as read off the listing page.

use serde::{Deserialize, Serialize};

use crate::types::{parse_iso_date, Date};

/// One lost or found posting.
///
/// Fields are private so a record cannot change after construction; the
/// filter engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    title: String,
    category: String,
    location: String,
    /// `YYYY-MM-DD`, possibly empty when the card carries no date.
    #[serde(default)]
    posted_date: String,
}

impl ItemRecord {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        posted_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            location: location.into(),
            posted_date: posted_date.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn posted_date(&self) -> &str {
        &self.posted_date
    }

    /// The posting date, or `None` when missing or not a real ISO date.
    pub fn posted_on(&self) -> Option<Date> {
        parse_iso_date(&self.posted_date)
    }
}
