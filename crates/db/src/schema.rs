use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per (date, time); the id is the `YYYY-MM-DD_HH-MM` booking key
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id VARCHAR(32) PRIMARY KEY,
            date VARCHAR(10) NOT NULL,
            time VARCHAR(5) NOT NULL,
            actor_id VARCHAR(255) NOT NULL,
            actor_name VARCHAR(255) NOT NULL,
            booked_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_booking_slot UNIQUE (date, time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings(date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
