use crate::models::DbBooking;
use chrono::{DateTime, NaiveDate, Utc};
use eyre::Result;
use slotbook_core::{calendar, models::booking::booking_key};
use sqlx::{PgConnection, Pool, Postgres};

/// Inserts a booking unless `(date, time)` is already taken.
///
/// Returns `true` when this call created the row. Runs on a connection so the
/// caller can group several inserts in one transaction.
pub async fn insert_booking_if_absent(
    conn: &mut PgConnection,
    date: NaiveDate,
    time: &str,
    actor_id: &str,
    actor_name: &str,
    booked_at: DateTime<Utc>,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO bookings (id, date, time, actor_id, actor_name, booked_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(booking_key(date, time))
    .bind(calendar::format_date(date))
    .bind(time)
    .bind(actor_id)
    .bind(actor_name)
    .bind(booked_at)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn get_booked_times_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<String>> {
    let times = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time
        FROM bookings
        WHERE date = $1
        ORDER BY time ASC
        "#,
    )
    .bind(calendar::format_date(date))
    .fetch_all(pool)
    .await?;

    Ok(times)
}

pub async fn get_bookings_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, date, time, actor_id, actor_name, booked_at
        FROM bookings
        WHERE date = $1
        ORDER BY time ASC
        "#,
    )
    .bind(calendar::format_date(date))
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn delete_booking(pool: &Pool<Postgres>, date: NaiveDate, time: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(booking_key(date, time))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
