use axum::body::Bytes;
use axum::http::StatusCode;
use chrono::NaiveDate;
use room_reservation_sdk::{NewReservation, Reservation, ReservationDetails, Role, Room, User};
use serde_json::json;

use super::dto::{
    CreateReservationRequest, LoginRequest, RegisterUserRequest, ReservationDetailsDto, UserDto,
    json_body, optional_json,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
}

#[test]
fn test_optional_json_treats_empty_and_null_as_absent() {
    let empty: Option<CreateReservationRequest> = optional_json(&Bytes::new()).unwrap();
    let null: Option<CreateReservationRequest> =
        optional_json(&Bytes::from_static(b" null ")).unwrap();

    assert!(empty.is_none());
    assert!(null.is_none());
}

#[test]
fn test_optional_json_rejects_garbage() {
    let err = optional_json::<CreateReservationRequest>(&Bytes::from_static(b"{not json"))
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_json_body_requires_a_complete_body() {
    let missing_field = json_body::<RegisterUserRequest>(&Bytes::from_static(br#"{"name":"x"}"#))
        .err()
        .expect("missing email must be rejected");
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_field.code, "ROOM_RESERVATION_MALFORMED_BODY");
    assert!(missing_field.detail.contains("email"));

    let empty = json_body::<LoginRequest>(&Bytes::new())
        .err()
        .expect("empty body must be rejected");
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let login: LoginRequest =
        json_body(&Bytes::from_static(br#"{"email":"a@b.c","password":"pw"}"#)).unwrap();
    assert_eq!(login.email, "a@b.c");
}

#[test]
fn test_create_request_allows_missing_dates() {
    let req: CreateReservationRequest = serde_json::from_value(json!({
        "user_id": 1,
        "room_id": 2,
        "check_out_date": "2026-07-03",
        "number_of_people": 2
    }))
    .unwrap();

    let new_reservation = NewReservation::from(req);
    assert_eq!(new_reservation.draft.check_in_date, None);
    assert_eq!(new_reservation.draft.check_out_date, Some(date(3)));
    assert!(!new_reservation.draft.approved);
}

#[test]
fn test_user_dto_has_no_password_and_lowercase_role() {
    let dto = UserDto::from(User {
        id: 1,
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        phone_number: String::new(),
        role: Role::Admin,
    });

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["role"], "admin");
    assert!(value.get("password").is_none());
}

#[test]
fn test_details_dto_flattens_reservation() {
    let details = ReservationDetails {
        reservation: Reservation {
            id: 5,
            user_id: 1,
            room_id: 2,
            check_in_date: date(1),
            check_out_date: date(2),
            number_of_people: 4,
            approved: false,
        },
        user: User {
            id: 1,
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            phone_number: String::new(),
            role: Role::User,
        },
        room: Room {
            id: 2,
            name: "Loft".to_owned(),
            description: String::new(),
            price: 90,
            max_people: 4,
        },
    };

    let value = serde_json::to_value(ReservationDetailsDto::from(details)).unwrap();

    assert_eq!(value["id"], 5);
    assert_eq!(value["check_in_date"], "2026-07-01");
    assert_eq!(value["number_of_people"], 4);
    assert_eq!(value["user"]["email"], "ann@example.com");
    assert_eq!(value["room"]["name"], "Loft");
}
