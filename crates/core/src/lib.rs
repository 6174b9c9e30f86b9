//! Pure logic behind the campus Lost & Found pages.
//!
//! Everything here takes plain data and returns plain data: the page layer
//! reads form fields and item cards, calls into this crate, and applies the
//! result (error highlight, card visibility, labels, navigation) itself.

pub mod contact;
pub mod error;
pub mod filter;
pub mod items;
pub mod report;
pub mod session;
pub mod types;
pub mod validation;

pub use filter::{filter_items, filter_items_on, FilterCriteria, FilterOutcome, TimePeriod};
pub use items::ItemRecord;
pub use validation::{validate, validate_on, FormKind, FormValues, ValidationResult};
