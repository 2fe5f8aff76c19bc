//! Handlers for playlists and their video membership.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vidhub_core::error::CoreError;
use vidhub_core::fields::{check_max_len, require_text, MAX_TITLE_LEN};
use vidhub_core::ids::require_id;
use vidhub_core::listing::{build_feed_plan, Scope};
use vidhub_core::types::DbId;
use vidhub_db::models::playlist::{Playlist, PlaylistWithVideos};
use vidhub_db::repositories::PlaylistRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::videos::find_video;
use crate::middleware::auth::AuthUser;
use crate::middleware::listing::ListingQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/v1/playlists
pub async fn create_playlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePlaylistRequest>,
) -> AppResult<impl IntoResponse> {
    let name = require_text(input.name.as_deref(), "Playlist name is required")?;
    check_max_len(name, MAX_TITLE_LEN, "Playlist name")?;
    let description = input.description.as_deref().map(str::trim).unwrap_or("");

    let playlist = PlaylistRepo::create(&state.pool, auth.user_id, name, description).await?;

    tracing::info!(
        playlist_id = playlist.id,
        user_id = auth.user_id,
        "Playlist created",
    );

    Ok(ApiResponse::created(playlist, "Playlist created successfully"))
}

/// GET /api/v1/playlists/{playlist_id}
pub async fn get_playlist(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let playlist_id = require_id(&playlist_id, "playlist")?;
    let playlist = find_playlist(&state, playlist_id).await?;
    let video_ids = PlaylistRepo::video_ids(&state.pool, playlist_id).await?;

    Ok(ApiResponse::ok(
        PlaylistWithVideos {
            playlist,
            video_ids,
        },
        "Playlist fetched successfully",
    ))
}

/// GET /api/v1/playlists/user/{user_id}
pub async fn list_user_playlists(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ListingQuery(params): ListingQuery,
) -> AppResult<impl IntoResponse> {
    let user_id = require_id(&user_id, "user")?;

    let plan = build_feed_plan(&params, Scope::Owner(user_id));
    let playlists = PlaylistRepo::list(&state.pool, &plan).await?;

    Ok(ApiResponse::ok(playlists, "Playlists fetched successfully"))
}

/// PATCH /api/v1/playlists/add/{video_id}/{playlist_id}
///
/// Owner only. Adding a video that is already present is a no-op.
pub async fn add_video_to_playlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let playlist_id = require_id(&playlist_id, "playlist")?;

    let playlist = find_playlist(&state, playlist_id).await?;
    auth.ensure_owner(playlist.owner_id, "modify this playlist")?;
    find_video(&state, video_id).await?;

    let added = PlaylistRepo::add_video(&state.pool, playlist_id, video_id).await?;
    if added {
        tracing::info!(
            playlist_id,
            video_id,
            user_id = auth.user_id,
            "Video added to playlist",
        );
    }

    let video_ids = PlaylistRepo::video_ids(&state.pool, playlist_id).await?;
    let message = if added {
        "Video added to playlist"
    } else {
        "Video already in playlist"
    };
    Ok(ApiResponse::ok(
        PlaylistWithVideos {
            playlist,
            video_ids,
        },
        message,
    ))
}

/// PATCH /api/v1/playlists/remove/{video_id}/{playlist_id}
pub async fn remove_video_from_playlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let video_id = require_id(&video_id, "video")?;
    let playlist_id = require_id(&playlist_id, "playlist")?;

    let playlist = find_playlist(&state, playlist_id).await?;
    auth.ensure_owner(playlist.owner_id, "modify this playlist")?;

    if !PlaylistRepo::remove_video(&state.pool, playlist_id, video_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Playlist video",
            id: video_id,
        }));
    }

    tracing::info!(
        playlist_id,
        video_id,
        user_id = auth.user_id,
        "Video removed from playlist",
    );

    let video_ids = PlaylistRepo::video_ids(&state.pool, playlist_id).await?;
    Ok(ApiResponse::ok(
        PlaylistWithVideos {
            playlist,
            video_ids,
        },
        "Video removed from playlist",
    ))
}

/// DELETE /api/v1/playlists/{playlist_id}
pub async fn delete_playlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let playlist_id = require_id(&playlist_id, "playlist")?;

    let playlist = find_playlist(&state, playlist_id).await?;
    auth.ensure_owner(playlist.owner_id, "delete this playlist")?;

    if !PlaylistRepo::delete(&state.pool, playlist_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id: playlist_id,
        }));
    }

    tracing::info!(playlist_id, user_id = auth.user_id, "Playlist deleted");

    Ok(ApiResponse::ok(playlist, "Playlist deleted successfully"))
}

async fn find_playlist(state: &AppState, playlist_id: DbId) -> AppResult<Playlist> {
    PlaylistRepo::find_by_id(&state.pool, playlist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id: playlist_id,
        }))
}
