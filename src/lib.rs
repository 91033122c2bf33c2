// Calvault Library
// Per-user calendar event store: CRUD + filtered listing, month-grid
// computation, and iCalendar feed export. Transport and auth live outside.

pub mod calendar;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use calendar::{export_feed, events_on_day, month_grid, occurrences_within, Recurrence};
pub use config::AppConfig;
pub use database::Database;
pub use error::{AppError, AppResult};
pub use models::{EventFilter, EventPatch, EventRecord, NewEvent};
