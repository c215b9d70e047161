mod summary;
pub mod views;

pub use summary::{format_percent, ReviewSummary};
pub use views::{CounterEntry, ReviewView};
