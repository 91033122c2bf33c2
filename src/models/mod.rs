// Declare modules
pub mod event;
pub mod filter;

// Re-export the public types so imports like `use calvault::EventRecord`
// keep working for external callers.
pub use event::{EventPatch, EventRecord, NewEvent};
pub use filter::EventFilter;
