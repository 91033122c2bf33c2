// file: src/database/users.rs
// Owner rows only. Credential verification lives outside this crate; the
// password column stores whatever opaque hash the auth layer supplies.
use crate::error::AppResult;
use sqlx::SqlitePool;

pub async fn insert(
    pool: &SqlitePool,
    id: &str,
    username: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<()> {
    sqlx::query("INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(())
}

/// Removes a user. The schema cascades the delete over the user's events.
pub async fn remove(pool: &SqlitePool, id: &str) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    crate::utils::log_repository_operation("remove user", id, result.rows_affected());

    Ok(())
}
