use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::{RegisterRequest, User};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserDto {
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) username: String,
    pub(crate) name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            name: user.real_name(),
            username: user.username,
        }
    }
}

impl From<CreateUserDto> for RegisterRequest {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing field or username already exists"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let Json(dto) = payload?;

    let user = state.auth_service.register(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}
