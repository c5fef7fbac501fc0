use std::sync::Arc;

use axum_test::TestServer;
use slotbook_api::{app, config::ApiConfig, middleware::auth::hash_password, ApiState};
use slotbook_core::store::BookingStore;
use slotbook_db::MemoryBookingStore;

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const DATE: &str = "2024-05-02";

pub struct TestContext {
    pub store: Arc<MemoryBookingStore>,
    pub server: TestServer,
}

impl TestContext {
    /// Server over an in-memory store with admin routes enabled
    pub fn new() -> Self {
        let config = ApiConfig {
            announcement: Some("Closed on public holidays".to_string()),
            admin_password_hash: Some(hash_password(ADMIN_PASSWORD).unwrap()),
            ..ApiConfig::default()
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let store = Arc::new(MemoryBookingStore::new());
        let server = build_server(&config, store.clone());
        Self { store, server }
    }
}

/// Server over an arbitrary store, e.g. a mock
pub fn build_server(config: &ApiConfig, store: Arc<dyn BookingStore>) -> TestServer {
    let state = Arc::new(ApiState::new(config, store, "memory"));
    TestServer::new(app(state)).unwrap()
}
