use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_api::config::ApiConfig;
use slotbook_core::{
    models::{
        booking::Actor,
        time_slot::{DisabledReason, SlotStatus, TimeSlot},
    },
    store::BookingStore,
};

use crate::test_utils::{TestContext, DATE};

fn day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

#[tokio::test]
async fn test_health_reports_store() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok", "store": "memory" }));
}

#[tokio::test]
async fn test_get_config() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/config").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "start_hour": 9,
            "end_hour": 15,
            "announcement": "Closed on public holidays",
        })
    );
}

#[tokio::test]
async fn test_get_week() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/weeks/2024-05-05").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["start"], "2024-04-29");
    assert_eq!(body["days"].as_array().unwrap().len(), 7);
    assert_eq!(body["previous"], "2024-04-22");
    assert_eq!(body["next"], "2024-05-06");
}

#[tokio::test]
async fn test_get_slots_for_empty_day() {
    let ctx = TestContext::new();

    let response = ctx.server.get(&format!("/api/dates/{}/slots", DATE)).await;
    response.assert_status_ok();

    let slots = response.json::<Vec<TimeSlot>>();
    let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00"]);
    assert!(slots.iter().all(TimeSlot::is_available));
}

#[tokio::test]
async fn test_get_slots_projects_selection_over_bookings() {
    let ctx = TestContext::new();
    ctx.store
        .commit_bookings(
            day(),
            &["10:00".to_string()].into_iter().collect(),
            &Actor::new("user-1", "Ada"),
        )
        .await
        .unwrap();

    let response = ctx
        .server
        .get(&format!("/api/dates/{}/slots", DATE))
        .add_query_param("selected", "09:00,10:00")
        .await;
    response.assert_status_ok();

    let slots = response.json::<Vec<TimeSlot>>();
    assert_eq!(slots[0].status, SlotStatus::Selected);
    assert_eq!(slots[1].status, SlotStatus::Disabled);
    assert_eq!(slots[1].reason, Some(DisabledReason::Booked));
    assert_eq!(slots[2].reason, Some(DisabledReason::Break));
}

#[tokio::test]
async fn test_get_slots_uses_configured_window() {
    let config = ApiConfig {
        schedule: slotbook_core::config::ScheduleConfig::new(20, 24).unwrap(),
        ..ApiConfig::default()
    };
    let ctx = TestContext::with_config(config);

    let slots = ctx
        .server
        .get(&format!("/api/dates/{}/slots", DATE))
        .await
        .json::<Vec<TimeSlot>>();
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[3].label, "23:00");
}

#[tokio::test]
async fn test_get_slots_rejects_bad_date() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/dates/02-05-2024/slots")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("Invalid date"));
}
