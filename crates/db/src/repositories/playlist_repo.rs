//! Repository for the `playlists` and `playlist_videos` tables.

use sqlx::PgPool;
use vidhub_core::listing::ListingPlan;
use vidhub_core::types::DbId;

use crate::listing::{fetch_listing, ListingSource};
use crate::models::playlist::{Playlist, PlaylistListItem};

/// Column list for `playlists` queries.
const COLUMNS: &str = "id, owner_id, name, description, created_at, updated_at";

pub const PLAYLIST_SOURCE: ListingSource = ListingSource {
    from: "playlists p",
    columns: "p.id, p.name, p.description, p.created_at, p.updated_at",
    id_column: "p.id",
    owner_column: "p.owner_id",
    created_at_column: "p.created_at",
    title_column: Some("p.name"),
    parent_video_column: None,
    published_column: None,
    text_columns: &["p.name", "p.description"],
};

pub struct PlaylistRepo;

impl PlaylistRepo {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
        description: &str,
    ) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (owner_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(owner_id)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Video ids in a playlist, in the order they were added.
    pub async fn video_ids(pool: &PgPool, playlist_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT video_id FROM playlist_videos \
             WHERE playlist_id = $1 \
             ORDER BY created_at, id",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list(
        pool: &PgPool,
        plan: &ListingPlan,
    ) -> Result<Vec<PlaylistListItem>, sqlx::Error> {
        fetch_listing(pool, plan, &PLAYLIST_SOURCE).await
    }

    /// Add a video. Idempotent: returns `false` if it was already present.
    pub async fn add_video(
        pool: &PgPool,
        playlist_id: DbId,
        video_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO playlist_videos (playlist_id, video_id) VALUES ($1, $2) \
             ON CONFLICT (playlist_id, video_id) DO NOTHING",
        )
        .bind(playlist_id)
        .bind(video_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if the video was in the playlist.
    pub async fn remove_video(
        pool: &PgPool,
        playlist_id: DbId,
        video_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1 AND video_id = $2")
                .bind(playlist_id)
                .bind(video_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a playlist; its entries cascade. Returns `true` if deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
