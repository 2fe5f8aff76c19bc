//! Handlers for channel subscriptions. A channel is any user.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use vidhub_core::error::CoreError;
use vidhub_core::ids::require_id;
use vidhub_db::models::subscription::SubscriptionToggle;
use vidhub_db::repositories::{SubscriptionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::listing::ListingQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/subscriptions/c/{channel_id}
///
/// Subscribe to the channel, or unsubscribe if already subscribed.
pub async fn toggle_subscription(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let channel_id = require_id(&channel_id, "channel")?;

    if channel_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot subscribe to your own channel".into(),
        )));
    }
    if !UserRepo::exists(&state.pool, channel_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Channel",
            id: channel_id,
        }));
    }

    let response = match SubscriptionRepo::toggle(&state.pool, auth.user_id, channel_id).await? {
        SubscriptionToggle::Subscribed(subscription) => {
            tracing::info!(channel_id, user_id = auth.user_id, "Subscribed to channel");
            ApiResponse::ok(Some(subscription), "Subscribed successfully")
        }
        SubscriptionToggle::Unsubscribed => {
            tracing::info!(
                channel_id,
                user_id = auth.user_id,
                "Unsubscribed from channel",
            );
            ApiResponse::ok(None, "Unsubscribed successfully")
        }
    };

    Ok(response)
}

/// GET /api/v1/subscriptions/c/{channel_id}
///
/// Users subscribed to a channel, newest first, paginated.
pub async fn list_channel_subscribers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let channel_id = require_id(&channel_id, "channel")?;
    let subscribers =
        SubscriptionRepo::list_subscribers(&state.pool, channel_id, params.page_spec()).await?;

    Ok(ApiResponse::ok(subscribers, "Subscribers fetched successfully"))
}

/// GET /api/v1/subscriptions/u/{subscriber_id}
///
/// Channels a user is subscribed to, newest first, paginated.
pub async fn list_subscribed_channels(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(subscriber_id): Path<String>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let subscriber_id = require_id(&subscriber_id, "subscriber")?;
    let channels =
        SubscriptionRepo::list_subscribed_channels(&state.pool, subscriber_id, params.page_spec())
            .await?;

    Ok(ApiResponse::ok(channels, "Subscribed channels fetched successfully"))
}
