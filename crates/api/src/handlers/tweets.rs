//! Handlers for tweets (short text posts on a user's channel).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vidhub_core::error::CoreError;
use vidhub_core::fields::{check_max_len, require_text, MAX_CONTENT_LEN};
use vidhub_core::ids::require_id;
use vidhub_core::listing::{build_feed_plan, Scope};
use vidhub_core::types::DbId;
use vidhub_db::models::tweet::Tweet;
use vidhub_db::repositories::TweetRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::listing::ListingQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TweetRequest {
    pub content: Option<String>,
}

impl TweetRequest {
    fn content(&self) -> Result<&str, CoreError> {
        let content = require_text(self.content.as_deref(), "Content is required")?;
        check_max_len(content, MAX_CONTENT_LEN, "Content")?;
        Ok(content)
    }
}

/// POST /api/v1/tweets
pub async fn create_tweet(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<TweetRequest>,
) -> AppResult<impl IntoResponse> {
    let content = input.content()?;
    let tweet = TweetRepo::create(&state.pool, auth.user_id, content).await?;

    tracing::info!(tweet_id = tweet.id, user_id = auth.user_id, "Tweet created");

    Ok(ApiResponse::created(tweet, "Tweet created successfully"))
}

/// GET /api/v1/tweets/user/{user_id}
///
/// A user's tweets, newest first. An unknown user has no tweets.
pub async fn list_user_tweets(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let user_id = require_id(&user_id, "user")?;

    let plan = build_feed_plan(&params, Scope::Owner(user_id));
    let tweets = TweetRepo::list(&state.pool, &plan).await?;

    Ok(ApiResponse::ok(tweets, "Tweets fetched successfully"))
}

/// PATCH /api/v1/tweets/{tweet_id}
pub async fn update_tweet(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
    Json(input): Json<TweetRequest>,
) -> AppResult<impl IntoResponse> {
    let tweet_id = require_id(&tweet_id, "tweet")?;
    let content = input.content()?;

    let tweet = find_tweet(&state, tweet_id).await?;
    auth.ensure_owner(tweet.owner_id, "edit this tweet")?;

    let tweet = TweetRepo::update_content(&state.pool, tweet_id, content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tweet",
            id: tweet_id,
        }))?;

    tracing::info!(tweet_id, user_id = auth.user_id, "Tweet updated");

    Ok(ApiResponse::ok(tweet, "Tweet updated successfully"))
}

/// DELETE /api/v1/tweets/{tweet_id}
pub async fn delete_tweet(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tweet_id = require_id(&tweet_id, "tweet")?;

    let tweet = find_tweet(&state, tweet_id).await?;
    auth.ensure_owner(tweet.owner_id, "delete this tweet")?;

    if !TweetRepo::delete(&state.pool, tweet_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tweet",
            id: tweet_id,
        }));
    }

    tracing::info!(tweet_id, user_id = auth.user_id, "Tweet deleted");

    Ok(ApiResponse::ok(tweet, "Tweet deleted successfully"))
}

async fn find_tweet(state: &AppState, tweet_id: DbId) -> AppResult<Tweet> {
    TweetRepo::find_by_id(&state.pool, tweet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tweet",
            id: tweet_id,
        }))
}
