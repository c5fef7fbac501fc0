//! # SlotBook API
//!
//! HTTP server for SlotBook: browse the hourly slots of a day, book some of
//! them, and (for administrators) list or remove bookings.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint paths, one module per area
//! - **Handlers**: parse the request, call the [`BookingEngine`], shape the response
//! - **Middleware**: admin password guard and error-to-HTTP mapping
//! - **Config**: environment configuration
//!
//! The store behind the engine is chosen once at startup by [`connect_store`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Admin guard and error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use slotbook_core::{engine::BookingEngine, store::BookingStore};
use slotbook_db::{create_pool, schema::initialize_database, MemoryBookingStore, PgBookingStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Scheduling engine over the configured store
    pub engine: BookingEngine,
    /// Global message returned with the schedule configuration
    pub announcement: Option<String>,
    /// Argon2 hash of the admin password; admin routes are closed when `None`
    pub admin_password_hash: Option<String>,
    /// Backend name reported by the health check
    pub store_kind: &'static str,
}

impl ApiState {
    pub fn new(
        config: &config::ApiConfig,
        store: Arc<dyn BookingStore>,
        store_kind: &'static str,
    ) -> Self {
        Self {
            engine: BookingEngine::new(config.schedule, store),
            announcement: config.announcement.clone(),
            admin_password_hash: config.admin_password_hash.clone(),
            store_kind,
        }
    }
}

/// Installs the global tracing subscriber
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Opens the booking store selected by the configuration
///
/// PostgreSQL when `DATABASE_URL` is set (the schema is created if missing),
/// otherwise an in-memory store whose bookings are lost on restart.
pub async fn connect_store(
    config: &config::ApiConfig,
) -> Result<(Arc<dyn BookingStore>, &'static str)> {
    match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).await?;
            initialize_database(&pool).await?;
            info!("Using PostgreSQL booking store");
            Ok((Arc::new(PgBookingStore::new(pool)), "postgres"))
        }
        None => {
            warn!("DATABASE_URL is not set, bookings are kept in memory only");
            Ok((Arc::new(MemoryBookingStore::new()), "memory"))
        }
    }
}

/// Builds the application router with all routes and the shared state
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Configuration, weeks and slot grids
        .merge(routes::slots::routes())
        // Booking commits
        .merge(routes::bookings::routes())
        // Administrative endpoints
        .merge(routes::admin::routes())
        .with_state(state)
}

/// Starts the API server
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use slotbook_api::{config::ApiConfig, connect_store, start_server};
///
/// let config = ApiConfig::from_env()?;
/// let (store, kind) = connect_store(&config).await?;
/// start_server(config, store, kind).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn BookingStore>,
    store_kind: &'static str,
) -> Result<()> {
    let state = Arc::new(ApiState::new(&config, store, store_kind));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::HeaderName::from_static(middleware::auth::ADMIN_PASSWORD_HEADER),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (slots {:02}:00-{:02}:00)",
        addr,
        config.schedule.start_hour(),
        config.schedule.end_hour()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
