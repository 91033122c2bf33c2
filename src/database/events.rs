// file: src/database/events.rs
use crate::error::{AppError, AppResult};
use crate::models::event::normalize_time;
use crate::models::{EventFilter, EventPatch, EventRecord, NewEvent};
use crate::utils::log_repository_operation;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const EVENT_COLUMNS: &str = "id, user_id, title, description, date, start_time, end_time, \
     location, category, color, is_recurring, recurrence_pattern, \
     recurrence_end_date, reminder_minutes, timezone, created_at, updated_at";

pub async fn create(pool: &SqlitePool, user_id: &str, event: &NewEvent) -> AppResult<EventRecord> {
    event.validate()?;

    let event_id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO events (
            id, user_id, title, description, date, start_time, end_time,
            location, category, color, is_recurring, recurrence_pattern,
            recurrence_end_date, reminder_minutes, timezone, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&event_id)
    .bind(user_id)
    .bind(&event.title)
    .bind(&event.description)
    .bind(event.date)
    .bind(normalize_time(&event.start_time))
    .bind(normalize_time(&event.end_time))
    .bind(&event.location)
    .bind(&event.category)
    .bind(&event.color)
    .bind(event.is_recurring)
    .bind(&event.recurrence_pattern)
    .bind(event.recurrence_end_date)
    .bind(event.reminder_minutes)
    .bind(&event.timezone)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    log_repository_operation("create", &event_id, 1);

    // Re-read the stored row so the caller sees exactly what was persisted
    find_by_id(pool, &event_id)
        .await?
        .ok_or(AppError::Storage(sqlx::Error::RowNotFound))
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<EventRecord>> {
    let event = sqlx::query_as::<_, EventRecord>(&format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event)
}

/// Ownership check used by callers before exposing a record. `find_by_id`
/// itself never filters by owner.
pub async fn belongs_to_user(pool: &SqlitePool, id: &str, user_id: &str) -> AppResult<bool> {
    let event = find_by_id(pool, id).await?;
    Ok(event.map(|e| e.user_id == user_id).unwrap_or(false))
}

/// Filtered listing for one user. Every supplied filter option narrows the
/// result (logical AND); ordering is by date then start time, both ascending.
pub async fn list_by_user(
    pool: &SqlitePool,
    user_id: &str,
    filter: &EventFilter,
) -> AppResult<Vec<EventRecord>> {
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events WHERE user_id = "));
    query.push_bind(user_id);

    if let Some(start_date) = filter.start_date {
        query.push(" AND date >= ");
        query.push_bind(start_date);
    }

    if let Some(end_date) = filter.end_date {
        query.push(" AND date <= ");
        query.push_bind(end_date);
    }

    if let Some(category) = &filter.category {
        query.push(" AND category = ");
        query.push_bind(category);
    }

    if let Some(search) = &filter.search {
        // SQLite LIKE is case-insensitive for ASCII
        let pattern = format!("%{search}%");
        query.push(" AND (title LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description LIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    query.push(" ORDER BY date, start_time");

    let events = query
        .build_query_as::<EventRecord>()
        .fetch_all(pool)
        .await?;

    Ok(events)
}

/// Applies only the fields present in the patch. An empty patch is a no-op
/// that returns the current record without touching `updated_at`.
pub async fn update(pool: &SqlitePool, id: &str, patch: &EventPatch) -> AppResult<EventRecord> {
    patch.validate()?;

    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("event {id}")))?;

    if patch.is_empty() {
        return Ok(current);
    }

    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE events SET ");
    let mut assignments = query.separated(", ");

    if let Some(title) = &patch.title {
        assignments.push("title = ").push_bind_unseparated(title);
    }
    if let Some(description) = &patch.description {
        assignments
            .push("description = ")
            .push_bind_unseparated(description);
    }
    if let Some(date) = patch.date {
        assignments.push("date = ").push_bind_unseparated(date);
    }
    if let Some(start_time) = &patch.start_time {
        assignments
            .push("start_time = ")
            .push_bind_unseparated(normalize_time(start_time));
    }
    if let Some(end_time) = &patch.end_time {
        assignments
            .push("end_time = ")
            .push_bind_unseparated(normalize_time(end_time));
    }
    if let Some(location) = &patch.location {
        assignments
            .push("location = ")
            .push_bind_unseparated(location);
    }
    if let Some(category) = &patch.category {
        assignments
            .push("category = ")
            .push_bind_unseparated(category);
    }
    if let Some(color) = &patch.color {
        assignments.push("color = ").push_bind_unseparated(color);
    }
    if let Some(is_recurring) = patch.is_recurring {
        assignments
            .push("is_recurring = ")
            .push_bind_unseparated(is_recurring);
    }
    if let Some(recurrence_pattern) = &patch.recurrence_pattern {
        assignments
            .push("recurrence_pattern = ")
            .push_bind_unseparated(recurrence_pattern.clone());
    }
    if let Some(recurrence_end_date) = patch.recurrence_end_date {
        assignments
            .push("recurrence_end_date = ")
            .push_bind_unseparated(recurrence_end_date);
    }
    if let Some(reminder_minutes) = patch.reminder_minutes {
        assignments
            .push("reminder_minutes = ")
            .push_bind_unseparated(reminder_minutes);
    }
    if let Some(timezone) = &patch.timezone {
        assignments
            .push("timezone = ")
            .push_bind_unseparated(timezone);
    }

    let now = chrono::Utc::now();
    assignments.push("updated_at = ").push_bind_unseparated(now);

    query.push(" WHERE id = ");
    query.push_bind(id);

    let result = query.build().execute(pool).await?;

    log_repository_operation("update", id, result.rows_affected());

    find_by_id(pool, id)
        .await?
        .ok_or(AppError::Storage(sqlx::Error::RowNotFound))
}

/// Hard delete. Deleting an id that does not exist is not an error.
pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    log_repository_operation("delete", id, result.rows_affected());

    Ok(())
}
