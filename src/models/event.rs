use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

lazy_static! {
    /// 24h wall-clock time, optionally zero-padded ("9:00" and "09:00" both pass).
    static ref TIME_RE: Regex = Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

pub const RECURRENCE_PATTERNS: [&str; 4] = ["daily", "weekly", "monthly", "yearly"];

pub const DEFAULT_CATEGORY: &str = "personal";
pub const DEFAULT_COLOR: &str = "#3b82f6";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// One calendar entry owned by a single user.
///
/// `id` and `user_id` are immutable after creation. `start_time`/`end_time`
/// are normalized to zero-padded `HH:MM` before persisting, so lexicographic
/// ordering of stored values matches chronological ordering. Start before
/// end is deliberately not enforced, matching the stored data this schema is
/// compatible with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: String,
    pub color: String,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub recurrence_end_date: Option<NaiveDate>,
    pub reminder_minutes: Option<i64>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input. Optional fields fall back to the documented defaults,
/// both when deserialized from the API layer and when built in code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_minutes: Option<i64>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl NewEvent {
    pub fn new(title: &str, date: NaiveDate, start_time: &str, end_time: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            location: String::new(),
            category: default_category(),
            color: default_color(),
            is_recurring: false,
            recurrence_pattern: None,
            recurrence_end_date: None,
            reminder_minutes: None,
            timezone: default_timezone(),
        }
    }

    /// Checks the creation invariants, naming the offending field.
    /// `date` and `recurrence_end_date` are typed `NaiveDate`, so calendar
    /// validity is already guaranteed by parsing at the boundary.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title must not be empty"));
        }
        if !is_valid_time(&self.start_time) {
            return Err(AppError::validation("startTime must match HH:MM"));
        }
        if !is_valid_time(&self.end_time) {
            return Err(AppError::validation("endTime must match HH:MM"));
        }
        if let Some(pattern) = &self.recurrence_pattern {
            if !RECURRENCE_PATTERNS.contains(&pattern.as_str()) {
                return Err(AppError::validation(
                    "recurrencePattern must be one of daily, weekly, monthly, yearly",
                ));
            }
        }
        if let Some(minutes) = self.reminder_minutes {
            if minutes < 0 {
                return Err(AppError::validation("reminderMinutes must not be negative"));
            }
        }
        Ok(())
    }
}

/// Partial update for a stored event. A `None` at the outer level means
/// "leave the field untouched"; the nullable fields use a second `Option`
/// so clearing a value is distinguishable from not mentioning it.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub is_recurring: Option<bool>,
    pub recurrence_pattern: Option<Option<String>>,
    pub recurrence_end_date: Option<Option<NaiveDate>>,
    pub reminder_minutes: Option<Option<i64>>,
    pub timezone: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.color.is_none()
            && self.is_recurring.is_none()
            && self.recurrence_pattern.is_none()
            && self.recurrence_end_date.is_none()
            && self.reminder_minutes.is_none()
            && self.timezone.is_none()
    }

    /// Same field rules as creation, applied only to the fields present.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title must not be empty"));
            }
        }
        if let Some(start) = &self.start_time {
            if !is_valid_time(start) {
                return Err(AppError::validation("startTime must match HH:MM"));
            }
        }
        if let Some(end) = &self.end_time {
            if !is_valid_time(end) {
                return Err(AppError::validation("endTime must match HH:MM"));
            }
        }
        if let Some(Some(pattern)) = &self.recurrence_pattern {
            if !RECURRENCE_PATTERNS.contains(&pattern.as_str()) {
                return Err(AppError::validation(
                    "recurrencePattern must be one of daily, weekly, monthly, yearly",
                ));
            }
        }
        if let Some(Some(minutes)) = self.reminder_minutes {
            if minutes < 0 {
                return Err(AppError::validation("reminderMinutes must not be negative"));
            }
        }
        Ok(())
    }
}

pub fn is_valid_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

/// Zero-pads an already-validated wall-clock time ("9:00" -> "09:00").
/// Listing order relies on stored times being fixed-width, so every write
/// path runs accepted values through this.
pub fn normalize_time(value: &str) -> String {
    match value.split_once(':') {
        Some((hour, _)) if hour.len() == 1 => format!("0{value}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_fifth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_new_event_defaults() {
        let event = NewEvent::new("Standup", march_fifth(), "09:00", "09:15");

        assert_eq!(event.category, "personal");
        assert_eq!(event.color, "#3b82f6");
        assert_eq!(event.timezone, "UTC");
        assert!(!event.is_recurring);
        assert!(event.recurrence_pattern.is_none());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let event = NewEvent::new("   ", march_fifth(), "09:00", "09:15");
        let err = event.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_validate_rejects_malformed_times() {
        let bad_start = NewEvent::new("Standup", march_fifth(), "9am", "09:15");
        assert!(bad_start.validate().is_err());

        let bad_end = NewEvent::new("Standup", march_fifth(), "09:00", "24:00");
        assert!(bad_end.validate().is_err());

        let unpadded = NewEvent::new("Standup", march_fifth(), "9:00", "9:15");
        assert!(unpadded.validate().is_ok());
    }

    #[test]
    fn test_normalize_time_zero_pads_hours() {
        assert_eq!(normalize_time("9:00"), "09:00");
        assert_eq!(normalize_time("09:00"), "09:00");
        assert_eq!(normalize_time("14:05"), "14:05");
    }

    #[test]
    fn test_validate_rejects_unknown_recurrence_pattern() {
        let mut event = NewEvent::new("Standup", march_fifth(), "09:00", "09:15");
        event.recurrence_pattern = Some("fortnightly".to_string());
        assert!(event.validate().is_err());

        event.recurrence_pattern = Some("weekly".to_string());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_reminder() {
        let mut event = NewEvent::new("Standup", march_fifth(), "09:00", "09:15");
        event.reminder_minutes = Some(-5);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_cleared() {
        let untouched = EventPatch::default();
        assert!(untouched.is_empty());
        assert!(untouched.recurrence_pattern.is_none());

        let cleared = EventPatch {
            recurrence_pattern: Some(None),
            ..Default::default()
        };
        assert!(!cleared.is_empty());
        assert_eq!(cleared.recurrence_pattern, Some(None));
    }

    #[test]
    fn test_patch_validates_present_fields_only() {
        let patch = EventPatch {
            start_time: Some("25:00".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = EventPatch {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_event_record_serializes_camel_case() {
        let record = EventRecord {
            id: "evt-1".to_string(),
            user_id: "user-1".to_string(),
            title: "Standup".to_string(),
            description: String::new(),
            date: march_fifth(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
            location: String::new(),
            category: "work".to_string(),
            color: "#3b82f6".to_string(),
            is_recurring: false,
            recurrence_pattern: None,
            recurrence_end_date: None,
            reminder_minutes: None,
            timezone: "UTC".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["isRecurring"], false);
        assert_eq!(json["date"], "2024-03-05");
    }
}
