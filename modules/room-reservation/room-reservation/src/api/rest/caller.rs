//! Axum extractors identifying the calling user.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use room_reservation_sdk::{User, UserId};

use super::error::{domain_error_to_problem, forbidden, unauthorized};
use super::problem::Problem;
use crate::domain::error::DomainError;
use crate::domain::service::UserService;

/// Header carrying the caller's user identifier.
pub const CALLER_HEADER: &str = "x-user-id";

/// Any registered user, resolved from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct Caller(pub User);

/// A caller holding the admin role.
#[derive(Debug, Clone)]
pub struct AdminCaller(pub User);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let users = parts
            .extensions
            .get::<Arc<UserService>>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("UserService extension is not installed");
                Problem::from(DomainError::Storage(anyhow::anyhow!(
                    "user directory not configured"
                )))
            })?;

        let id: UserId = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| {
                unauthorized(format!("missing or malformed '{CALLER_HEADER}' header"))
                    .with_instance(parts.uri.path())
            })?;

        match users.get_user(id).await {
            Ok(user) => Ok(Self(user)),
            Err(DomainError::UserNotFound { .. }) => {
                tracing::debug!(user_id = id, "Caller is not a registered user");
                Err(unauthorized("unknown caller").with_instance(parts.uri.path()))
            }
            Err(e) => Err(domain_error_to_problem(&e, parts.uri.path())),
        }
    }
}

impl<S> FromRequestParts<S> for AdminCaller
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Caller(user) = Caller::from_request_parts(parts, state).await?;
        if !user.role.is_admin() {
            tracing::warn!(user_id = user.id, "Non-admin caller on admin route");
            return Err(
                forbidden("administrator role required").with_instance(parts.uri.path()),
            );
        }
        Ok(Self(user))
    }
}
