//! Repository for the `videos` table.

use sqlx::PgPool;
use vidhub_core::listing::ListingPlan;
use vidhub_core::types::DbId;

use crate::listing::{fetch_listing, ListingSource};
use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoListItem};

/// Column list for `videos` queries.
const COLUMNS: &str = "\
    id, owner_id, title, description, video_file, thumbnail, duration, \
    views, is_published, created_at, updated_at";

/// Listing shape for videos: searchable by title and description.
pub const VIDEO_SOURCE: ListingSource = ListingSource {
    from: "videos v",
    columns: "\
        v.id, v.title, v.description, v.video_file, v.thumbnail, v.duration, \
        v.views, v.is_published, v.created_at, v.updated_at",
    id_column: "v.id",
    owner_column: "v.owner_id",
    created_at_column: "v.created_at",
    title_column: Some("v.title"),
    parent_video_column: None,
    published_column: Some("v.is_published"),
    text_columns: &["v.title", "v.description"],
};

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (owner_id, title, description, video_file, thumbnail, duration) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_file)
            .bind(&input.thumbnail)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Execute a listing plan against `videos`.
    pub async fn list(
        pool: &PgPool,
        plan: &ListingPlan,
    ) -> Result<Vec<VideoListItem>, sqlx::Error> {
        fetch_listing(pool, plan, &VIDEO_SOURCE).await
    }

    /// Update a video's details. Only non-`None` fields are changed.
    ///
    /// Returns `None` if no video with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                thumbnail = COALESCE($4, thumbnail) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.thumbnail.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_published`, returning the updated row.
    pub async fn toggle_published(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET is_published = NOT is_published \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video by ID. Comments, likes and playlist entries cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
