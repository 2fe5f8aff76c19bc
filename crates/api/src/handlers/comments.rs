//! Handlers for video comments.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vidhub_core::error::CoreError;
use vidhub_core::fields::{check_max_len, require_text, MAX_CONTENT_LEN};
use vidhub_core::ids::require_id;
use vidhub_core::listing::{build_feed_plan, Scope};
use vidhub_core::types::DbId;
use vidhub_db::models::comment::Comment;
use vidhub_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::videos::find_video;
use crate::middleware::auth::AuthUser;
use crate::middleware::listing::ListingQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Body for creating or editing a comment.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
}

impl CommentRequest {
    fn content(&self) -> Result<&str, CoreError> {
        let content = require_text(self.content.as_deref(), "Comment should not be empty")?;
        check_max_len(content, MAX_CONTENT_LEN, "Comment")?;
        Ok(content)
    }
}

/// GET /api/v1/comments/{video_id}
///
/// Comments on one video, newest first. Only `page` and `limit` are read
/// from the query string. A valid id with no video yields an empty list.
pub async fn list_video_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;

    let plan = build_feed_plan(&params, Scope::ParentVideo(video_id));
    let comments = CommentRepo::list(&state.pool, &plan).await?;

    Ok(ApiResponse::ok(comments, "Comments fetched successfully"))
}

/// POST /api/v1/comments/{video_id}
pub async fn add_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Json(input): Json<CommentRequest>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let content = input.content()?;
    find_video(&state, video_id).await?;

    let comment = CommentRepo::create(&state.pool, video_id, auth.user_id, content).await?;

    tracing::info!(
        comment_id = comment.id,
        video_id,
        user_id = auth.user_id,
        "Comment added"
    );

    Ok(ApiResponse::ok(comment, "Comment added successfully"))
}

/// PATCH /api/v1/comments/c/{comment_id}
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(input): Json<CommentRequest>,
) -> AppResult<impl IntoResponse> {
    let comment_id = require_id(&comment_id, "comment")?;
    let content = input.content()?;

    let comment = find_comment(&state, comment_id).await?;
    auth.ensure_owner(comment.owner_id, "edit this comment")?;

    let comment = CommentRepo::update_content(&state.pool, comment_id, content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        }))?;

    tracing::info!(comment_id, user_id = auth.user_id, "Comment updated");

    Ok(ApiResponse::ok(comment, "Comment updated successfully"))
}

/// DELETE /api/v1/comments/c/{comment_id}
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let comment_id = require_id(&comment_id, "comment")?;

    let comment = find_comment(&state, comment_id).await?;
    auth.ensure_owner(comment.owner_id, "delete this comment")?;

    let comment = CommentRepo::delete(&state.pool, comment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        }))?;

    tracing::info!(comment_id, user_id = auth.user_id, "Comment deleted");

    Ok(ApiResponse::ok(comment, "Comment deleted successfully"))
}

async fn find_comment(state: &AppState, comment_id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        }))
}
