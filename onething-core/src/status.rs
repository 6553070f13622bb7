//! Status-check log — append and list, nothing else.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::StatusCheck;

/// Reads are capped; there is no pagination cursor.
const LIST_LIMIT: i64 = 1000;

/// Generates an id and timestamp, persists the record, returns it.
pub async fn create_status_check(
    pool: &PgPool,
    client_name: &str,
) -> Result<StatusCheck, sqlx::Error> {
    let check = StatusCheck {
        id: Uuid::new_v4(),
        client_name: client_name.to_string(),
        timestamp: Utc::now(),
    };

    sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)")
        .bind(check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(pool)
        .await?;

    Ok(check)
}

/// Returns up to 1000 records in insertion order.
pub async fn list_status_checks(pool: &PgPool) -> Result<Vec<StatusCheck>, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>(
        "SELECT id, client_name, timestamp FROM status_checks ORDER BY seq LIMIT $1",
    )
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await
}
