//! Filter engine: pure logic, no page access.

use serde::Serialize;

use super::criteria::FilterCriteria;
use crate::items::ItemRecord;
use crate::types::{local_today, parse_iso_date, Date};

/// Items left visible after a filter pass, in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a ItemRecord>,
    pub count: usize,
}

impl FilterOutcome<'_> {
    /// Label for the listing header, e.g. `Showing 3 items`.
    pub fn label(&self) -> String {
        items_count_label(self.count)
    }
}

/// # Examples
///
/// ```
/// use lostfound_core::filter::items_count_label;
/// assert_eq!(items_count_label(0), "Showing 0 items");
/// assert_eq!(items_count_label(12), "Showing 12 items");
/// ```
pub fn items_count_label(count: usize) -> String {
    format!("Showing {count} items")
}

/// One side of the explicit date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Open,
    At(Date),
    /// Typed but not a date; nothing can satisfy it.
    Unusable,
}

impl Bound {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Bound::Open,
            Some(raw) => parse_iso_date(raw).map_or(Bound::Unusable, Bound::At),
        }
    }
}

/// Criteria resolved once per pass against a fixed "today".
#[derive(Debug, Clone)]
pub struct ItemPredicate<'c> {
    keyword: Option<String>,
    category: Option<&'c str>,
    location: Option<&'c str>,
    from: Bound,
    to: Bound,
    period_start: Option<Date>,
}

impl<'c> ItemPredicate<'c> {
    pub fn new(criteria: &'c FilterCriteria, today: Date) -> Self {
        Self {
            keyword: (!criteria.keyword.is_empty()).then(|| criteria.keyword.to_lowercase()),
            category: criteria.category_constraint(),
            location: criteria.location_constraint(),
            from: Bound::parse(criteria.date_from_bound()),
            to: Bound::parse(criteria.date_to_bound()),
            period_start: criteria.time_period.start(today),
        }
    }

    /// Whether the item satisfies every active constraint.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        self.matches_keyword(item)
            && self.category.map_or(true, |c| item.category() == c)
            && self.location.map_or(true, |l| item.location() == l)
            && self.matches_date_range(item)
            && self.matches_period(item)
    }

    fn matches_keyword(&self, item: &ItemRecord) -> bool {
        match &self.keyword {
            Some(keyword) => item.title().to_lowercase().contains(keyword.as_str()),
            None => true,
        }
    }

    fn matches_date_range(&self, item: &ItemRecord) -> bool {
        if self.from == Bound::Open && self.to == Bound::Open {
            return true;
        }
        let Some(posted) = item.posted_on() else {
            return false;
        };
        let after_from = match self.from {
            Bound::Open => true,
            Bound::At(from) => posted >= from,
            Bound::Unusable => false,
        };
        let before_to = match self.to {
            Bound::Open => true,
            Bound::At(to) => posted <= to,
            Bound::Unusable => false,
        };
        after_from && before_to
    }

    fn matches_period(&self, item: &ItemRecord) -> bool {
        match self.period_start {
            Some(start) => item.posted_on().is_some_and(|posted| posted >= start),
            None => true,
        }
    }
}

/// Check a single item against the criteria.
pub fn matches(item: &ItemRecord, criteria: &FilterCriteria, today: Date) -> bool {
    ItemPredicate::new(criteria, today).matches(item)
}

/// Filter items, judging relative periods by the local calendar.
pub fn filter_items<'a>(items: &'a [ItemRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    filter_items_on(items, criteria, local_today())
}

/// Filter items with an explicit "today".
pub fn filter_items_on<'a>(
    items: &'a [ItemRecord],
    criteria: &FilterCriteria,
    today: Date,
) -> FilterOutcome<'a> {
    let predicate = ItemPredicate::new(criteria, today);
    let visible: Vec<&ItemRecord> = items.iter().filter(|item| predicate.matches(item)).collect();
    FilterOutcome {
        count: visible.len(),
        visible,
    }
}
