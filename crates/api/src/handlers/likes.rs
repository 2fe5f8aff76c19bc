//! Handlers for likes on videos, comments and tweets.
//!
//! Each toggle removes the caller's like if one exists and creates it
//! otherwise. Toggling a like on a missing target fails the foreign key and
//! surfaces as 404.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use vidhub_core::ids::require_id;
use vidhub_db::models::like::{LikeTarget, LikeToggle};
use vidhub_db::repositories::LikeRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/likes/toggle/v/{video_id}
pub async fn toggle_video_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let target = LikeTarget::Video(require_id(&video_id, "video")?);
    toggle(&auth, &state, target, "Video").await
}

/// POST /api/v1/likes/toggle/c/{comment_id}
pub async fn toggle_comment_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let target = LikeTarget::Comment(require_id(&comment_id, "comment")?);
    toggle(&auth, &state, target, "Comment").await
}

/// POST /api/v1/likes/toggle/t/{tweet_id}
pub async fn toggle_tweet_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let target = LikeTarget::Tweet(require_id(&tweet_id, "tweet")?);
    toggle(&auth, &state, target, "Tweet").await
}

/// GET /api/v1/likes/videos
///
/// Videos the caller has liked, most recent like first.
pub async fn list_liked_videos(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let videos = LikeRepo::liked_videos(&state.pool, auth.user_id).await?;

    Ok(ApiResponse::ok(videos, "Liked videos fetched successfully"))
}

async fn toggle(
    auth: &AuthUser,
    state: &AppState,
    target: LikeTarget,
    label: &str,
) -> AppResult<impl IntoResponse> {
    let outcome = LikeRepo::toggle(&state.pool, auth.user_id, target).await?;

    let response = match outcome {
        LikeToggle::Added(like) => {
            tracing::info!(
                target_id = target.id(),
                kind = target.column(),
                user_id = auth.user_id,
                "Like added"
            );
            ApiResponse::ok(Some(like), format!("{label} liked successfully"))
        }
        LikeToggle::Removed => {
            tracing::info!(
                target_id = target.id(),
                kind = target.column(),
                user_id = auth.user_id,
                "Like removed"
            );
            ApiResponse::ok(None, format!("{label} unliked successfully"))
        }
    };

    Ok(response)
}
