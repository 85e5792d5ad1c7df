//! REST handlers for the room-reservation module.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::{StatusCode, Uri};
use room_reservation_sdk::{ReservationId, RoomId, UserId};

use super::caller::{AdminCaller, Caller};
use super::dto::{
    CreateReservationRequest, LoginRequest, RegisterUserRequest, ReservationDetailsDto,
    ReservationDto, RoomDto, RoomRequest, UpdateReservationRequest, UserDto, json_body,
    optional_json,
};
use super::error::domain_error_to_problem;
use super::problem::{ApiResult, Problem};
use crate::domain::error::DomainError;
use crate::domain::service::{ReservationService, RoomService, UserService};

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// POST /api/reservations
pub async fn create_reservation(
    Extension(svc): Extension<Arc<ReservationService>>,
    Caller(caller): Caller,
    uri: Uri,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ReservationDetailsDto>)> {
    tracing::debug!(caller_id = caller.id, "Reservation requested");
    let request = optional_json::<CreateReservationRequest>(&body)?;
    let details = svc
        .create_reservation(request.map(Into::into))
        .await
        .map_err(at(&uri))?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// GET /api/reservations
pub async fn list_reservations(
    Extension(svc): Extension<Arc<ReservationService>>,
    AdminCaller(_admin): AdminCaller,
    uri: Uri,
) -> ApiResult<Json<Vec<ReservationDto>>> {
    let all = svc.list_reservations().await.map_err(at(&uri))?;
    Ok(Json(all.into_iter().map(Into::into).collect()))
}

/// GET /api/reservations/{id}
pub async fn get_reservation(
    Extension(svc): Extension<Arc<ReservationService>>,
    Caller(_caller): Caller,
    Path(id): Path<ReservationId>,
    uri: Uri,
) -> ApiResult<Json<ReservationDto>> {
    let reservation = svc.get_reservation(id).await.map_err(at(&uri))?;
    Ok(Json(reservation.into()))
}

/// PUT /api/reservations/{id}
pub async fn update_reservation(
    Extension(svc): Extension<Arc<ReservationService>>,
    Caller(_caller): Caller,
    Path(id): Path<ReservationId>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<ReservationDto>> {
    let draft = optional_json::<UpdateReservationRequest>(&body)?;
    let updated = svc
        .update_reservation(id, draft.map(Into::into))
        .await
        .map_err(at(&uri))?;
    Ok(Json(updated.into()))
}

/// DELETE /api/reservations/{id}
pub async fn cancel_reservation(
    Extension(svc): Extension<Arc<ReservationService>>,
    Caller(_caller): Caller,
    Path(id): Path<ReservationId>,
    uri: Uri,
) -> ApiResult<StatusCode> {
    svc.cancel_reservation(id).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/users/register
pub async fn register_user(
    Extension(svc): Extension<Arc<UserService>>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let req = json_body::<RegisterUserRequest>(&body)?;
    let user = svc.register(req.into()).await.map_err(at(&uri))?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/users/login
pub async fn login(
    Extension(svc): Extension<Arc<UserService>>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<UserDto>> {
    let req = json_body::<LoginRequest>(&body)?;
    let user = svc
        .login(&req.email, &req.password)
        .await
        .map_err(at(&uri))?;
    Ok(Json(user.into()))
}

/// GET /api/users
pub async fn list_users(
    Extension(svc): Extension<Arc<UserService>>,
    AdminCaller(_admin): AdminCaller,
    uri: Uri,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc.list_users().await.map_err(at(&uri))?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    Extension(svc): Extension<Arc<UserService>>,
    AdminCaller(_admin): AdminCaller,
    Path(id): Path<UserId>,
    uri: Uri,
) -> ApiResult<Json<UserDto>> {
    let user = svc.get_user(id).await.map_err(at(&uri))?;
    Ok(Json(user.into()))
}

/// POST /api/rooms
pub async fn add_room(
    Extension(svc): Extension<Arc<RoomService>>,
    AdminCaller(_admin): AdminCaller,
    uri: Uri,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<RoomDto>)> {
    let req = json_body::<RoomRequest>(&body)?;
    let room = svc.add_room(req.into()).await.map_err(at(&uri))?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

/// GET /api/rooms
pub async fn list_rooms(
    Extension(svc): Extension<Arc<RoomService>>,
    uri: Uri,
) -> ApiResult<Json<Vec<RoomDto>>> {
    let rooms = svc.list_rooms().await.map_err(at(&uri))?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    Extension(svc): Extension<Arc<RoomService>>,
    Path(id): Path<RoomId>,
    uri: Uri,
) -> ApiResult<Json<RoomDto>> {
    let room = svc.get_room(id).await.map_err(at(&uri))?;
    Ok(Json(room.into()))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    Extension(svc): Extension<Arc<RoomService>>,
    AdminCaller(_admin): AdminCaller,
    Path(id): Path<RoomId>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<RoomDto>> {
    let req = json_body::<RoomRequest>(&body)?;
    let room = svc.update_room(id, req.into()).await.map_err(at(&uri))?;
    Ok(Json(room.into()))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    Extension(svc): Extension<Arc<RoomService>>,
    AdminCaller(_admin): AdminCaller,
    Path(id): Path<RoomId>,
    uri: Uri,
) -> ApiResult<StatusCode> {
    svc.delete_room(id).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}
