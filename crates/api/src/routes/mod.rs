//! Route tree for `/api/v1`.

pub mod comments;
pub mod health;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes. Every handler requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", videos::router())
        .nest("/comments", comments::router())
        .nest("/likes", likes::router())
        .nest("/tweets", tweets::router())
        .nest("/subscriptions", subscriptions::router())
        .nest("/playlists", playlists::router())
}
