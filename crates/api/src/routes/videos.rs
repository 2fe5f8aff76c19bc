//! Route definitions for videos.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Video routes mounted at `/videos`.
///
/// ```text
/// GET    /                          -> list_videos
/// POST   /                          -> publish_video
/// GET    /{video_id}                -> get_video
/// PATCH  /{video_id}                -> update_video (owner only)
/// DELETE /{video_id}                -> delete_video (owner only)
/// PATCH  /toggle/publish/{video_id} -> toggle_publish_status (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos).post(videos::publish_video))
        .route(
            "/{video_id}",
            get(videos::get_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            "/toggle/publish/{video_id}",
            patch(videos::toggle_publish_status),
        )
}
