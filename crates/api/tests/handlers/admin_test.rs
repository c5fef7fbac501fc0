use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use slotbook_api::{config::ApiConfig, middleware::auth::ADMIN_PASSWORD_HEADER};
use slotbook_core::{
    models::{
        booking::{Actor, Booking, RemoveResult},
        time_slot::SlotStatus,
    },
    store::BookingStore,
};

use crate::test_utils::{TestContext, ADMIN_PASSWORD, DATE};

fn day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

fn admin_header(password: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(ADMIN_PASSWORD_HEADER),
        HeaderValue::from_str(password).unwrap(),
    )
}

async fn book(ctx: &TestContext, labels: &[&str], actor: Actor) {
    ctx.store
        .commit_bookings(
            day(),
            &labels.iter().map(|l| l.to_string()).collect(),
            &actor,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_bookings() {
    let ctx = TestContext::new();
    book(&ctx, &["12:00"], Actor::new("user-2", "Grace")).await;
    book(&ctx, &["09:00"], Actor::new("user-1", "Ada")).await;

    let (name, value) = admin_header(ADMIN_PASSWORD);
    let response = ctx
        .server
        .get(&format!("/api/admin/dates/{}/bookings", DATE))
        .add_header(name, value)
        .await;
    response.assert_status_ok();

    let bookings = response.json::<Vec<Booking>>();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].time, "09:00");
    assert_eq!(bookings[0].actor_name, "Ada");
    assert_eq!(bookings[1].time, "12:00");
    assert_eq!(bookings[1].actor_id, "user-2");
}

#[tokio::test]
async fn test_remove_booking_reverts_break() {
    let ctx = TestContext::new();
    book(&ctx, &["10:00"], Actor::new("user-1", "Ada")).await;

    let (name, value) = admin_header(ADMIN_PASSWORD);
    let response = ctx
        .server
        .delete(&format!("/api/admin/dates/{}/bookings/10:00", DATE))
        .add_header(name, value)
        .await;
    response.assert_status_ok();

    let result = response.json::<RemoveResult>();
    assert!(result.removed);
    assert_eq!(result.time, "10:00");
    assert!(result.slots.iter().all(|s| s.status == SlotStatus::Available));
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_remove_missing_booking_is_a_no_op() {
    let ctx = TestContext::new();

    let (name, value) = admin_header(ADMIN_PASSWORD);
    let response = ctx
        .server
        .delete(&format!("/api/admin/dates/{}/bookings/13:00", DATE))
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    assert!(!response.json::<RemoveResult>().removed);
}

#[tokio::test]
async fn test_remove_rejects_malformed_label() {
    let ctx = TestContext::new();

    let (name, value) = admin_header(ADMIN_PASSWORD);
    let response = ctx
        .server
        .delete(&format!("/api/admin/dates/{}/bookings/noon", DATE))
        .add_header(name, value)
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_requires_password() {
    let ctx = TestContext::new();
    book(&ctx, &["10:00"], Actor::new("user-1", "Ada")).await;

    let response = ctx
        .server
        .delete(&format!("/api/admin/dates/{}/bookings/10:00", DATE))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = admin_header("wrong password");
    let response = ctx
        .server
        .delete(&format!("/api/admin/dates/{}/bookings/10:00", DATE))
        .add_header(name, value)
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Nothing was removed
    assert_eq!(ctx.store.len().await, 1);
}

#[tokio::test]
async fn test_admin_disabled_without_hash() {
    let ctx = TestContext::with_config(ApiConfig::default());

    let (name, value) = admin_header(ADMIN_PASSWORD);
    let response = ctx
        .server
        .get(&format!("/api/admin/dates/{}/bookings", DATE))
        .add_header(name, value)
        .expect_failure()
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("Authorization error"));
}
