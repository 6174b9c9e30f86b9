//! Listing-page search and filter.
//!
//! [`criteria`] holds what the user picked; [`engine`] decides which item
//! cards stay visible. Both are pure: the page hides and shows cards itself.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, TimePeriod, ALL, ALL_CATEGORIES, ALL_LOCATIONS};
pub use engine::{
    filter_items, filter_items_on, items_count_label, matches, FilterOutcome, ItemPredicate,
};
