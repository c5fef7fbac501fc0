use std::{collections::BTreeSet, sync::Arc};

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_api::config::ApiConfig;
use slotbook_core::{
    models::{
        booking::CommitBookingsResponse,
        time_slot::{DisabledReason, TimeSlot},
    },
    store::BookingStore,
};
use slotbook_db::mock::MockStore;

use crate::test_utils::{build_server, TestContext, DATE};

fn day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

fn commit_body(labels: &[&str]) -> Value {
    json!({
        "labels": labels,
        "actor": { "id": "user-1", "display_name": "Ada" },
    })
}

fn bookings_url() -> String {
    format!("/api/dates/{}/bookings", DATE)
}

#[tokio::test]
async fn test_commit_books_slots() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&bookings_url())
        .json(&commit_body(&["10:00", "13:00"]))
        .await;
    response.assert_status_ok();

    let body = response.json::<CommitBookingsResponse>();
    assert_eq!(body.requested, 2);
    assert_eq!(body.committed, vec!["10:00", "13:00"]);
    assert!(body.dropped.is_empty());
    assert_eq!(body.message, "Booking confirmed for 2 slots");

    let find = |label: &str| body.slots.iter().find(|s| s.label == label).unwrap().clone();
    assert_eq!(find("10:00").reason, Some(DisabledReason::Booked));
    assert_eq!(find("11:00").reason, Some(DisabledReason::Break));
    assert_eq!(find("14:00").reason, Some(DisabledReason::Break));

    let booked = ctx.store.read_booked_labels(day()).await.unwrap();
    assert_eq!(booked, BTreeSet::from(["10:00".to_string(), "13:00".to_string()]));
}

#[tokio::test]
async fn test_double_submission_books_once() {
    let ctx = TestContext::new();

    ctx.server
        .post(&bookings_url())
        .json(&commit_body(&["10:00"]))
        .await
        .assert_status_ok();
    let second = ctx
        .server
        .post(&bookings_url())
        .json(&commit_body(&["10:00"]))
        .await;
    second.assert_status_ok();

    let body = second.json::<CommitBookingsResponse>();
    assert!(body.committed.is_empty());
    assert_eq!(body.dropped, vec!["10:00"]);
    assert_eq!(body.message, "No slot was booked");
    assert_eq!(ctx.store.len().await, 1);
}

#[tokio::test]
async fn test_commit_rejects_empty_selection() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&bookings_url())
        .json(&commit_body(&[]))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_commit_rejects_malformed_label() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&bookings_url())
        .json(&commit_body(&["10h00"]))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_is_not_confirmed() {
    let mut store = MockStore::new();
    store
        .expect_read_booked_labels()
        .returning(|_| Ok(BTreeSet::new()));
    store
        .expect_commit_bookings()
        .times(1)
        .returning(|_, _, _| Err(eyre::eyre!("connection reset")));
    let server = build_server(&ApiConfig::default(), Arc::new(store));

    let response = server
        .post(&bookings_url())
        .json(&commit_body(&["09:00"]))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<Value>();
    assert!(body.get("message").is_none());
    assert!(body["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_commit_response_grid_matches_fresh_read() {
    let ctx = TestContext::new();

    let committed = ctx
        .server
        .post(&bookings_url())
        .json(&commit_body(&["14:00"]))
        .await
        .json::<CommitBookingsResponse>();
    let fresh = ctx
        .server
        .get(&format!("/api/dates/{}/slots", DATE))
        .await
        .json::<Vec<TimeSlot>>();

    assert_eq!(committed.slots, fresh);
    assert_eq!(fresh.len(), 6);
}
