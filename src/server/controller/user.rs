use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use entity::enums::PractitionerType;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserInput, UpdateUserInput, UserDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct UserListQuery {
    /// Practitioner type filter; an unrecognized value yields an empty list
    #[serde(rename = "practitionerType")]
    pub practitioner_type: Option<String>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<Uuid>,
}

/// Create a practitioner
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "Practitioner created", body = ApiResponse<UserDto>),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(input).await?;

    Ok(Json(ApiResponse::created(user)))
}

/// List practitioners, optionally filtered by type and tenant scope
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Practitioners", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, Error> {
    let practitioner_type = match query.practitioner_type.as_deref() {
        Some(raw) => {
            match serde_json::from_value::<PractitionerType>(serde_json::Value::String(
                raw.to_string(),
            )) {
                Ok(practitioner_type) => Some(practitioner_type),
                // An unknown filter value matches nothing rather than erroring.
                Err(_) => return Ok(Json(ApiResponse::ok(Vec::<UserDto>::new()))),
            }
        }
        None => None,
    };

    let users = UserService::new(&state.db)
        .list_users(practitioner_type, query.tenant_id)
        .await?;

    Ok(Json(ApiResponse::ok(users)))
}

/// Get a practitioner with their addresses
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "Practitioner ID")),
    responses(
        (status = 200, description = "Practitioner found", body = ApiResponse<UserDto>),
        (status = 404, description = "Practitioner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(id).await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// Partially update a practitioner
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "Practitioner ID")),
    request_body = UpdateUserInput,
    responses(
        (status = 200, description = "Practitioner updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Practitioner not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUserInput>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).update_user(id, input).await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// Delete a practitioner and their addresses
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "Practitioner ID")),
    responses(
        (status = 200, description = "Practitioner deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Practitioner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete_user(id).await?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
