#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests driving the REST router in-process.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Days, NaiveDate};
use room_reservation::RoomReservationModule;
use room_reservation::config::{AdminAccountConfig, RoomReservationConfig};
use room_reservation::domain::ports::FixedClock;
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN: &str = "1";
const GUEST: &str = "2";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn day(offset: u64) -> String {
    today()
        .checked_add_days(Days::new(offset))
        .unwrap()
        .to_string()
}

/// Admin is user 1, a guest is user 2, and room 1 exists.
async fn app() -> Router {
    let config = RoomReservationConfig {
        admins: vec![AdminAccountConfig {
            name: "Root".to_owned(),
            email: "root@example.com".to_owned(),
            password: "root-pw".to_owned(),
            phone_number: String::new(),
        }],
        ..RoomReservationConfig::default()
    };
    let module = RoomReservationModule::in_memory(&config, Arc::new(FixedClock::new(today())));
    module.init().await.unwrap();
    let router = module.register_rest(Router::new());

    let (status, _) = send(
        &router,
        "POST",
        "/api/users/register",
        None,
        Some(json!({
            "name": "Guest",
            "email": "guest@example.com",
            "password": "guest-pw",
            "phone_number": "+1-555-0100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &router,
        "POST",
        "/api/rooms",
        Some(ADMIN),
        Some(json!({
            "name": "Sea view",
            "description": "Double room",
            "price": 120,
            "max_people": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    router
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = caller {
        builder = builder.header("x-user-id", id);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Sends a raw JSON body and also returns the response content type.
async fn send_raw(
    router: &Router,
    method: &str,
    uri: &str,
    caller: Option<&str>,
    body: &'static str,
) -> (StatusCode, String, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = caller {
        builder = builder.header("x-user-id", id);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

fn booking(check_in: u64, check_out: u64, people: i32) -> Value {
    json!({
        "user_id": 2,
        "room_id": 1,
        "check_in_date": day(check_in),
        "check_out_date": day(check_out),
        "number_of_people": people
    })
}

#[tokio::test]
async fn create_reservation_returns_details() {
    let router = app().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(booking(1, 2, 4)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["check_in_date"], day(1));
    assert_eq!(body["check_out_date"], day(2));
    assert_eq!(body["number_of_people"], 4);
    assert_eq!(body["approved"], false);
    assert_eq!(body["user"]["email"], "guest@example.com");
    assert!(body["user"].get("password").is_none());
    assert_eq!(body["room"]["name"], "Sea view");
}

#[tokio::test]
async fn missing_check_in_is_rejected_as_problem() {
    let router = app().await;
    let mut payload = booking(1, 2, 2);
    payload["check_in_date"] = Value::Null;

    let (status, body) = send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ROOM_RESERVATION_INVALID");
    assert_eq!(body["status"], 400);
    assert_eq!(body["instance"], "/api/reservations");
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("reservation is invalid")
    );

    let (_, list) = send(&router, "GET", "/api/reservations", Some(ADMIN), None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn absent_body_is_an_invalid_reservation() {
    let router = app().await;

    let (status, body) = send(&router, "POST", "/api/reservations", Some(GUEST), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ROOM_RESERVATION_INVALID");
}

#[tokio::test]
async fn unknown_references_are_not_found() {
    let router = app().await;
    let mut unknown_user = booking(1, 2, 2);
    unknown_user["user_id"] = json!(99);
    let mut unknown_room = booking(1, 2, 2);
    unknown_room["room_id"] = json!(99);

    let (status, body) = send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(unknown_user),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROOM_RESERVATION_USER_NOT_FOUND");

    let (status, body) = send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(unknown_room),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROOM_RESERVATION_ROOM_NOT_FOUND");
}

#[tokio::test]
async fn update_then_cancel_lifecycle() {
    let router = app().await;
    send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(booking(1, 2, 2)),
    )
    .await;

    let (status, _) = send(
        &router,
        "PUT",
        "/api/reservations/1",
        Some(GUEST),
        Some(json!({
            "check_in_date": day(4),
            "check_out_date": day(3),
            "number_of_people": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &router,
        "PUT",
        "/api/reservations/1",
        Some(GUEST),
        Some(json!({
            "check_in_date": day(3),
            "check_out_date": day(4),
            "number_of_people": 3,
            "approved": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number_of_people"], 3);
    assert_eq!(body["approved"], true);
    assert_eq!(body["user_id"], 2);

    let (status, _) = send(&router, "DELETE", "/api/reservations/1", Some(GUEST), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&router, "GET", "/api/reservations/1", Some(GUEST), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROOM_RESERVATION_NOT_FOUND");

    let (status, _) = send(&router, "DELETE", "/api/reservations/1", Some(GUEST), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_missing_reservation_is_not_found() {
    let router = app().await;

    let (status, _) = send(
        &router,
        "PUT",
        "/api/reservations/42",
        Some(GUEST),
        Some(booking(1, 2, 2)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn caller_checks() {
    let router = app().await;

    let (status, body) = send(&router, "GET", "/api/reservations/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "ROOM_RESERVATION_UNAUTHENTICATED");
    assert_eq!(body["instance"], "/api/reservations/1");

    let (status, _) = send(&router, "GET", "/api/reservations/1", Some("abc"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&router, "GET", "/api/reservations/1", Some("77"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&router, "GET", "/api/reservations", Some(GUEST), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "ROOM_RESERVATION_FORBIDDEN");
    assert_eq!(body["instance"], "/api/reservations");

    let (status, _) = send(&router, "GET", "/api/users", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn user_registration_and_login() {
    let router = app().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/users/register",
        None,
        Some(json!({
            "name": "Dup",
            "email": "guest@example.com",
            "password": "x"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROOM_RESERVATION_EMAIL_EXISTS");

    let (status, body) = send(
        &router,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "guest@example.com", "password": "guest-pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["role"], "user");

    let (status, _) = send(
        &router,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "guest@example.com", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn room_catalog_management() {
    let router = app().await;

    let (status, body) = send(&router, "GET", "/api/rooms", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &router,
        "POST",
        "/api/rooms",
        Some(GUEST),
        Some(json!({"name": "Attic", "price": 10, "max_people": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        "PUT",
        "/api/rooms/1",
        Some(ADMIN),
        Some(json!({"name": "Sea view", "price": -5, "max_people": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "price");

    send(
        &router,
        "POST",
        "/api/reservations",
        Some(GUEST),
        Some(booking(1, 2, 2)),
    )
    .await;
    let (status, body) = send(&router, "DELETE", "/api/rooms/1", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROOM_RESERVATION_ROOM_IN_USE");

    send(&router, "DELETE", "/api/reservations/1", Some(GUEST), None).await;
    let (status, _) = send(&router, "DELETE", "/api/rooms/1", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "GET", "/api/rooms/1", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_are_problems() {
    let router = app().await;

    let cases = [
        ("POST", "/api/users/register", None, r#"{"name":"x"}"#),
        ("POST", "/api/users/login", None, "not json"),
        ("POST", "/api/rooms", Some(ADMIN), r#"{"name":"Loft","price":"cheap"}"#),
        ("PUT", "/api/rooms/1", Some(ADMIN), ""),
    ];
    for (method, uri, caller, raw) in cases {
        let (status, content_type, body) = send_raw(&router, method, uri, caller, raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(content_type, "application/problem+json", "{method} {uri}");
        assert_eq!(body["code"], "ROOM_RESERVATION_MALFORMED_BODY", "{method} {uri}");
    }

    let (status, room) = send(&router, "GET", "/api/rooms/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["name"], "Sea view");
}
