// file: src/calendar/window.rs
//! Month-view day grid and per-day bucketing.
//!
//! Pure functions over an already-fetched listing; nothing here touches the
//! store, so results are re-computable any number of times.

use crate::models::EventRecord;
use chrono::{Datelike, Duration, NaiveDate};

/// The contiguous day sequence a month view renders: from the Sunday of the
/// week containing the 1st of `reference`'s month through the Saturday of
/// the week containing its last day. Always a whole number of weeks.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let month_start = reference.with_day(1).unwrap();
    let month_end = last_day_of_month(reference);

    let grid_start = month_start
        - Duration::days(i64::from(month_start.weekday().num_days_from_sunday()));
    let grid_end =
        month_end + Duration::days(i64::from(6 - month_end.weekday().num_days_from_sunday()));

    let mut days = Vec::new();
    let mut day = grid_start;
    while day <= grid_end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// Events dated exactly `day`, in the listing's order.
pub fn events_on_day(events: &[EventRecord], day: NaiveDate) -> Vec<&EventRecord> {
    events.iter().filter(|event| event.date == day).collect()
}

/// Whether a grid day falls inside the reference month (as opposed to the
/// leading/trailing days padding the first and last weeks).
pub fn in_reference_month(day: NaiveDate, reference: NaiveDate) -> bool {
    day.year() == reference.year() && day.month() == reference.month()
}

pub fn is_today(day: NaiveDate) -> bool {
    day == chrono::Local::now().date_naive()
}

fn last_day_of_month(reference: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}
