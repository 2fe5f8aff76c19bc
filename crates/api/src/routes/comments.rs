//! Route definitions for comments.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes mounted at `/comments`.
///
/// ```text
/// GET    /{video_id}     -> list_video_comments
/// POST   /{video_id}     -> add_comment
/// PATCH  /c/{comment_id} -> update_comment (owner only)
/// DELETE /c/{comment_id} -> delete_comment (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{video_id}",
            get(comments::list_video_comments).post(comments::add_comment),
        )
        .route(
            "/c/{comment_id}",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
}
