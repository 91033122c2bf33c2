// file: src/calendar/recurrence.rs
//! Recurrence metadata and opt-in occurrence expansion.
//!
//! The CRUD engine stores the recurrence fields verbatim and never expands
//! them; listing and export operate on the base date only. Consumers that
//! want concrete occurrences call [`occurrences_within`] themselves.

use crate::models::EventRecord;
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    /// Reads the stored metadata. A pattern on a non-recurring event is
    /// ignored, as is a recurring flag without a recognized pattern.
    pub fn of(event: &EventRecord) -> Self {
        if !event.is_recurring {
            return Self::None;
        }
        match event.recurrence_pattern.as_deref() {
            Some("daily") => Self::Daily,
            Some("weekly") => Self::Weekly,
            Some("monthly") => Self::Monthly,
            Some("yearly") => Self::Yearly,
            _ => Self::None,
        }
    }
}

/// Concrete occurrence dates of `event` inside `[from, to]` (inclusive),
/// clamped by the event's `recurrence_end_date` when present. The base date
/// itself counts as an occurrence. Calendar-invalid instances (Jan 31
/// monthly in February, Feb 29 yearly off leap years) are skipped.
pub fn occurrences_within(event: &EventRecord, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    if from > to {
        return Vec::new();
    }

    let until = match event.recurrence_end_date {
        Some(end) => to.min(end),
        None => to,
    };

    let in_range = |date: NaiveDate| date >= from && date <= until;

    match Recurrence::of(event) {
        Recurrence::None => {
            if event.date >= from && event.date <= to {
                vec![event.date]
            } else {
                Vec::new()
            }
        }
        Recurrence::Daily => step_by_days(event.date, until, 1)
            .filter(|d| in_range(*d))
            .collect(),
        Recurrence::Weekly => step_by_days(event.date, until, 7)
            .filter(|d| in_range(*d))
            .collect(),
        Recurrence::Monthly => {
            let mut dates = Vec::new();
            let mut year = event.date.year();
            let mut month = event.date.month();
            loop {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, event.date.day()) {
                    if date > until {
                        break;
                    }
                    if in_range(date) {
                        dates.push(date);
                    }
                } else if NaiveDate::from_ymd_opt(year, month, 1).map_or(true, |d| d > until) {
                    break;
                }
                if month == 12 {
                    year += 1;
                    month = 1;
                } else {
                    month += 1;
                }
            }
            dates
        }
        Recurrence::Yearly => {
            let mut dates = Vec::new();
            for year in event.date.year()..=until.year() {
                if let Some(date) =
                    NaiveDate::from_ymd_opt(year, event.date.month(), event.date.day())
                {
                    if in_range(date) {
                        dates.push(date);
                    }
                }
            }
            dates
        }
    }
}

fn step_by_days(
    start: NaiveDate,
    until: NaiveDate,
    step: i64,
) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), move |d| {
        let next = *d + Duration::days(step);
        (next <= until).then_some(next)
    })
}
