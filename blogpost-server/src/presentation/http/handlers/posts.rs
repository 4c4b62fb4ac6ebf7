use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::post::{Author, CreatePostRequest, Post, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1))]
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorDto {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UpdatePostDto {
    /// Must equal the id in the path. Accepted as a string or a number.
    #[schema(value_type = Option<String>)]
    pub(crate) id: Option<Value>,
    #[validate(length(min = 1))]
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<AuthorDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) author: String,
    pub(crate) content: String,
    pub(crate) title: String,
    pub(crate) created: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            author: post.author_name(),
            id: post.id,
            content: post.content,
            title: post.title,
            created: post.created,
        }
    }
}

impl From<CreatePostDto> for CreatePostRequest {
    fn from(dto: CreatePostDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

impl From<UpdatePostDto> for UpdatePostRequest {
    fn from(dto: UpdatePostDto) -> Self {
        Self {
            id: dto.id.and_then(body_id_text),
            title: dto.title,
            content: dto.content,
            author: dto.author.map(Author::from),
        }
    }
}

fn body_id_text(value: Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = [PostDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.blog_service.list_posts().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.blog_service.get_post(&id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    security(
        ("basic_auth" = [])
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Missing or invalid field"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = payload?;
    dto.validate()?;

    let post = state.blog_service.create_post(&user, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    security(
        ("basic_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Post id")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Path and body ids differ, or invalid field"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = payload?;
    dto.validate()?;

    let post = state.blog_service.update_post(&id, dto.into()).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    security(
        ("basic_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post deleted, or it never existed"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.blog_service.delete_post(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{UpdatePostDto, body_id_text};
    use crate::domain::post::UpdatePostRequest;

    #[test]
    fn body_id_accepts_strings_and_numbers() {
        assert_eq!(body_id_text(json!("7")).as_deref(), Some("7"));
        assert_eq!(body_id_text(json!(7)).as_deref(), Some("7"));
        assert_eq!(body_id_text(json!(null)), None);
        assert_eq!(body_id_text(json!({"id": 7})), None);
    }

    #[test]
    fn update_dto_maps_author_object() {
        let dto: UpdatePostDto = serde_json::from_value(json!({
            "id": 7,
            "author": {"firstName": "Bo", "lastName": "Ng"}
        }))
        .expect("valid body");

        let req = UpdatePostRequest::from(dto);
        let author = req.author.expect("author must be mapped");
        assert_eq!(req.id.as_deref(), Some("7"));
        assert_eq!(author.full_name(), "Bo Ng");
        assert!(req.title.is_none());
    }
}
