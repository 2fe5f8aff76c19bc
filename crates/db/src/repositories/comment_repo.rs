//! Repository for the `comments` table.

use sqlx::PgPool;
use vidhub_core::listing::ListingPlan;
use vidhub_core::types::DbId;

use crate::listing::{fetch_listing, ListingSource};
use crate::models::comment::{Comment, CommentListItem};

/// Column list for `comments` queries.
const COLUMNS: &str = "id, video_id, owner_id, content, created_at, updated_at";

/// Listing shape for comments, scoped by parent video.
pub const COMMENT_SOURCE: ListingSource = ListingSource {
    from: "comments c",
    columns: "c.id, c.video_id, c.content, c.created_at, c.updated_at",
    id_column: "c.id",
    owner_column: "c.owner_id",
    created_at_column: "c.created_at",
    title_column: None,
    parent_video_column: Some("c.video_id"),
    published_column: None,
    text_columns: &["c.content"],
};

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(
        pool: &PgPool,
        video_id: DbId,
        owner_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (video_id, owner_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(video_id)
            .bind(owner_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Execute a listing plan against `comments`.
    pub async fn list(
        pool: &PgPool,
        plan: &ListingPlan,
    ) -> Result<Vec<CommentListItem>, sqlx::Error> {
        fetch_listing(pool, plan, &COMMENT_SOURCE).await
    }

    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("DELETE FROM comments WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
