//! Handlers for videos: the searchable listing, publishing, and owner
//! maintenance (update, delete, publish toggle).
//!
//! Media files are uploaded to the external media host by the client; the
//! publish request carries the resulting URLs.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vidhub_core::error::CoreError;
use vidhub_core::fields::{check_max_len, optional_text, require_text, MAX_TITLE_LEN};
use vidhub_core::ids::require_id;
use vidhub_core::listing::{build_listing_plan, Scope};
use vidhub_core::types::DbId;
use vidhub_db::models::video::{CreateVideo, UpdateVideo, Video};
use vidhub_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::listing::ListingQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PublishVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_file: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// GET /api/v1/videos
///
/// Published videos filtered by `userId` and `query`, sorted by
/// `sortBy`/`sortType` and paginated by `page`/`limit`. Malformed
/// parameters fall back to their defaults.
pub async fn list_videos(
    _auth: AuthUser,
    State(state): State<AppState>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let plan = build_listing_plan(&params, Some(Scope::Published));
    let videos = VideoRepo::list(&state.pool, &plan).await?;

    Ok(ApiResponse::ok(videos, "Videos fetched successfully"))
}

/// POST /api/v1/videos
pub async fn publish_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PublishVideoRequest>,
) -> AppResult<impl IntoResponse> {
    let title = require_text(input.title.as_deref(), "Title is required")?;
    check_max_len(title, MAX_TITLE_LEN, "Title")?;
    let description = require_text(input.description.as_deref(), "Description is required")?;
    let video_file = require_text(input.video_file.as_deref(), "Video file is required")?;
    let thumbnail = require_text(input.thumbnail.as_deref(), "Thumbnail is required")?;

    let duration = input.duration.unwrap_or(0.0);
    if !duration.is_finite() || duration < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Duration must be a non-negative number".into(),
        )));
    }

    let video = VideoRepo::create(
        &state.pool,
        &CreateVideo {
            owner_id: auth.user_id,
            title: title.to_string(),
            description: description.to_string(),
            video_file: video_file.to_string(),
            thumbnail: thumbnail.to_string(),
            duration,
        },
    )
    .await?;

    tracing::info!(
        video_id = video.id,
        user_id = auth.user_id,
        "Video published",
    );

    Ok(ApiResponse::created(video, "Video published successfully"))
}

/// GET /api/v1/videos/{video_id}
pub async fn get_video(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let video = find_video(&state, video_id).await?;

    Ok(ApiResponse::ok(video, "Video fetched successfully"))
}

/// PATCH /api/v1/videos/{video_id}
///
/// Owner only. Absent fields are left unchanged; blank ones are rejected.
pub async fn update_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Json(input): Json<UpdateVideoRequest>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let title = optional_text(input.title.as_deref(), "Title")?;
    if let Some(title) = title {
        check_max_len(title, MAX_TITLE_LEN, "Title")?;
    }
    let patch = UpdateVideo {
        title: title.map(str::to_string),
        description: optional_text(input.description.as_deref(), "Description")?
            .map(str::to_string),
        thumbnail: optional_text(input.thumbnail.as_deref(), "Thumbnail")?.map(str::to_string),
    };

    let video = find_video(&state, video_id).await?;
    auth.ensure_owner(video.owner_id, "update this video")?;

    let video = VideoRepo::update(&state.pool, video_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    tracing::info!(video_id, user_id = auth.user_id, "Video updated");

    Ok(ApiResponse::ok(video, "Video updated successfully"))
}

/// DELETE /api/v1/videos/{video_id}
///
/// Owner only. Comments, likes and playlist entries go with it.
pub async fn delete_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let video = find_video(&state, video_id).await?;
    auth.ensure_owner(video.owner_id, "delete this video")?;

    if !VideoRepo::delete(&state.pool, video_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }));
    }

    tracing::info!(video_id, user_id = auth.user_id, "Video deleted");

    Ok(ApiResponse::ok(video, "Video deleted successfully"))
}

/// PATCH /api/v1/videos/toggle/publish/{video_id}
pub async fn toggle_publish_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let video = find_video(&state, video_id).await?;
    auth.ensure_owner(video.owner_id, "change this video's visibility")?;

    let video = VideoRepo::toggle_published(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    tracing::info!(
        video_id,
        user_id = auth.user_id,
        is_published = video.is_published,
        "Video publish status toggled"
    );

    let message = if video.is_published {
        "Video published"
    } else {
        "Video unpublished"
    };
    Ok(ApiResponse::ok(video, message))
}

pub(crate) async fn find_video(state: &AppState, video_id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))
}
