// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User routes, scoped to the caller's backend session.
//!
//! The data-access layer reports failures as `None`/`false`; these handlers
//! turn them into HTTP errors.

use crate::error::{AppError, Result};
use crate::models::{AuthUserInfo, Session, User, UserUpdate};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/session/user-id", get(get_session_user_id))
        .route("/api/session/bootstrap", post(bootstrap_session))
        .route("/api/users", post(create_user))
        .route("/api/users/{id}", get(get_user).patch(update_user))
        .route("/api/users/{id}/all-clear", get(get_all_clear))
}

// ─── Session ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct UserIdResponse {
    pub user_id: String,
}

async fn get_session_user_id(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<UserIdResponse>> {
    let user_id = state
        .user_data(session)
        .get_current_user_id()
        .await
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserIdResponse { user_id }))
}

/// Make sure the session's user has a row, creating it on first login.
async fn bootstrap_session(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<UserIdResponse>> {
    let users = state.user_data(session);
    let info = users
        .get_current_auth_user()
        .await
        .ok_or(AppError::Unauthorized)?;

    if !users.ensure_user(&info).await {
        return Err(AppError::Backend(format!(
            "Could not ensure user row for {}",
            info.id
        )));
    }

    Ok(Json(UserIdResponse { user_id: info.id }))
}

// ─── Users ───────────────────────────────────────────────────

async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>> {
    let rows = state
        .user_data(session)
        .get_user_info(&id)
        .await
        .ok_or_else(|| AppError::Backend(format!("Could not load user {}", id)))?;

    Ok(Json(rows))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct AllClearResponse {
    /// `null` when the flag could not be determined
    pub is_all_clear: Option<bool>,
}

async fn get_all_clear(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Json<AllClearResponse> {
    let is_all_clear = state.user_data(session).get_user_is_all_clear(&id).await;
    Json(AllClearResponse { is_all_clear })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct CreateUserResponse {
    pub user_id: String,
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Json(info): Json<AuthUserInfo>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    info.validate()?;

    if !state.user_data(session).create_user(&info).await {
        return Err(AppError::Backend(format!("Could not create user {}", info.id)));
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse { user_id: info.id }),
    ))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct UpdateUserResponse {
    pub updated: bool,
}

/// `{"field": <column>, "value": <new value>}`
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub field: String,
    pub value: serde_json::Value,
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>> {
    let update = UserUpdate::parse(&req.field, req.value)?;
    let updated = state.user_data(session).update_user(&id, &update).await;
    Ok(Json(UpdateUserResponse { updated }))
}
