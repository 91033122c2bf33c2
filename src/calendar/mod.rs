// Declare modules
pub mod feed;
pub mod recurrence;
pub mod window;

pub use feed::export_feed;
pub use recurrence::{occurrences_within, Recurrence};
pub use window::{events_on_day, in_reference_month, is_today, month_grid};
