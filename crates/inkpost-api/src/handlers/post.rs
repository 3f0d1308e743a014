//! Post CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use inkpost_core::error::AppError;
use inkpost_entity::post::Post;

use crate::dto::request::{CreatePostBody, UpdatePostBody};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.post_service.list().await?;
    Ok(Json(posts))
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreatePostBody>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = state
        .post_service
        .create(auth.context(), body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdatePostBody>,
) -> Result<Json<Post>, AppError> {
    let id = parse_uuid(&id)?;
    let post = state
        .post_service
        .update(auth.context(), id, body.title, body.content)
        .await?;
    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_uuid(&id)?;
    state.post_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::ok("Post deleted successfully")))
}
