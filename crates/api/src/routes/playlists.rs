//! Route definitions for playlists.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::playlists;
use crate::state::AppState;

/// Playlist routes mounted at `/playlists`.
///
/// ```text
/// POST   /                                -> create_playlist
/// GET    /{playlist_id}                   -> get_playlist
/// DELETE /{playlist_id}                   -> delete_playlist (owner only)
/// GET    /user/{user_id}                  -> list_user_playlists
/// PATCH  /add/{video_id}/{playlist_id}    -> add_video_to_playlist (owner only)
/// PATCH  /remove/{video_id}/{playlist_id} -> remove_video_from_playlist (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(playlists::create_playlist))
        .route(
            "/{playlist_id}",
            get(playlists::get_playlist).delete(playlists::delete_playlist),
        )
        .route("/user/{user_id}", get(playlists::list_user_playlists))
        .route(
            "/add/{video_id}/{playlist_id}",
            patch(playlists::add_video_to_playlist),
        )
        .route(
            "/remove/{video_id}/{playlist_id}",
            patch(playlists::remove_video_from_playlist),
        )
}
