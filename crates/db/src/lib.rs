//! # SlotBook storage
//!
//! Backends for [`slotbook_core::store::BookingStore`]:
//!
//! - [`PgBookingStore`] persists bookings in PostgreSQL
//! - [`MemoryBookingStore`] keeps them in process memory
//!
//! Both key every booking by `YYYY-MM-DD_HH-MM`, so at most one booking can
//! exist per date and time.

pub mod memory;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

pub use memory::MemoryBookingStore;
pub use store::PgBookingStore;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
