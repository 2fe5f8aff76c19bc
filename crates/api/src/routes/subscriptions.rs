use axum::routing::get;
use axum::Router;

use crate::handlers::subscriptions;
use crate::state::AppState;

/// Subscription routes mounted at `/subscriptions`.
///
/// ```text
/// POST /c/{channel_id}    -> toggle_subscription
/// GET  /c/{channel_id}    -> list_channel_subscribers
/// GET  /u/{subscriber_id} -> list_subscribed_channels
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/c/{channel_id}",
            get(subscriptions::list_channel_subscribers).post(subscriptions::toggle_subscription),
        )
        .route(
            "/u/{subscriber_id}",
            get(subscriptions::list_subscribed_channels),
        )
}
