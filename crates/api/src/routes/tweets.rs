use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::tweets;
use crate::state::AppState;

/// Tweet routes mounted at `/tweets`.
///
/// ```text
/// POST   /                -> create_tweet
/// GET    /user/{user_id}  -> list_user_tweets
/// PATCH  /{tweet_id}      -> update_tweet (owner only)
/// DELETE /{tweet_id}      -> delete_tweet (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tweets::create_tweet))
        .route("/user/{user_id}", get(tweets::list_user_tweets))
        .route(
            "/{tweet_id}",
            patch(tweets::update_tweet).delete(tweets::delete_tweet),
        )
}
