//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::User, AppState};

use super::{DataEnvelope, DeletedEnvelope, JsonBody};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, wrapped in `data`", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<DataEnvelope<Vec<User>>>> {
    let users = state.services.users.list().await?;
    Ok(DataEnvelope::new(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User, wrapped in `data`", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataEnvelope<User>>> {
    let user = state.services.users.get_by_id(&id).await?;
    Ok(DataEnvelope::new(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User created, wrapped in `data`", body = User),
        (status = 400, description = "Malformed user", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<(StatusCode, Json<DataEnvelope<User>>)> {
    let created = state.services.users.create(user).await?;
    Ok((StatusCode::CREATED, DataEnvelope::new(created)))
}

/// Replace an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = User,
    responses(
        (status = 200, description = "User updated, wrapped in `data`", body = User),
        (status = 400, description = "Malformed user", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<Json<DataEnvelope<User>>> {
    let updated = state.services.users.update(&id, user).await?;
    Ok(DataEnvelope::new(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Removed user, under `meta._deleted`", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedEnvelope<User>>> {
    let deleted = state.services.users.delete(&id).await?;
    Ok(DeletedEnvelope::new(deleted))
}
