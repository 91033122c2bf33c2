// file: src/calendar/feed.rs
//! iCalendar feed generation for an event listing.
//!
//! Start and end instants are floating local datetimes built from the
//! event's `date` plus `start_time`/`end_time` exactly as stored; no
//! timezone conversion happens. Consumers must interpret the times against
//! the event's `timezone` label, which rides along as `X-TIMEZONE`.

use crate::error::{AppError, AppResult};
use crate::models::EventRecord;
use icalendar::{Calendar, Component, EventLike, Property};

pub const FEED_NAME: &str = "My Calendar";
pub const ORGANIZER_NAME: &str = "Calendar App";
pub const ORGANIZER_EMAIL: &str = "noreply@calendar.app";

/// Serializes the listing into a `text/calendar` body, one VEVENT per input
/// event, in listing order. Deterministic: DTSTAMP comes from the record's
/// `updated_at`, so identical input produces identical output. An empty
/// listing yields a valid zero-event calendar.
pub fn export_feed(events: &[EventRecord]) -> AppResult<String> {
    let mut calendar = Calendar::new();
    calendar.name(FEED_NAME);

    for event in events {
        let mut component = icalendar::Event::new();
        component.uid(&event.id);
        component.summary(&event.title);
        component.description(&event.description);
        component.location(&event.location);

        // DTSTAMP is required by RFC 5545; the record's own update time
        // keeps repeated exports byte-identical
        component.add_property(
            "DTSTAMP",
            &event.updated_at.format("%Y%m%dT%H%M%SZ").to_string(),
        );

        component.add_property("DTSTART", &floating_datetime(event, &event.start_time)?);
        component.add_property("DTEND", &floating_datetime(event, &event.end_time)?);

        // Display metadata only; not a TZID, no conversion implied
        component.add_property("X-TIMEZONE", &event.timezone);

        let mut organizer = Property::new("ORGANIZER", &format!("mailto:{ORGANIZER_EMAIL}"));
        organizer.add_parameter("CN", ORGANIZER_NAME);
        component.append_property(organizer);

        calendar.push(component.done());
    }

    Ok(calendar.done().to_string())
}

/// `YYYYMMDDTHHMMSS` with no `Z` suffix and no TZID parameter.
fn floating_datetime(event: &EventRecord, wall_clock: &str) -> AppResult<String> {
    let time = chrono::NaiveTime::parse_from_str(wall_clock, "%H:%M")
        .map_err(|_| AppError::validation(format!("malformed wall-clock time {wall_clock:?}")))?;
    Ok(event.date.and_time(time).format("%Y%m%dT%H%M%S").to_string())
}
