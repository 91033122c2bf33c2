use chrono::NaiveDate;
use serde::Deserialize;

/// Optional constraints for a per-user listing query. Every present option
/// narrows the result; absent options leave that dimension unconstrained.
/// All options combine with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    /// Inclusive lower bound on the event date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the event date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Exact category match.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring match on title or description.
    #[serde(default)]
    pub search: Option<String>,
}

impl EventFilter {
    pub fn date_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_filter() {
        let filter: EventFilter =
            serde_json::from_str(r#"{"startDate":"2024-03-01","search":"standup"}"#).unwrap();

        assert_eq!(
            filter.start_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(filter.end_date.is_none());
        assert!(filter.category.is_none());
        assert_eq!(filter.search.as_deref(), Some("standup"));
    }
}
