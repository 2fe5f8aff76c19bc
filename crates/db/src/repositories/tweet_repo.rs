//! Repository for the `tweets` table.

use sqlx::PgPool;
use vidhub_core::listing::ListingPlan;
use vidhub_core::types::DbId;

use crate::listing::{fetch_listing, ListingSource};
use crate::models::tweet::{Tweet, TweetListItem};

/// Column list for `tweets` queries.
const COLUMNS: &str = "id, owner_id, content, created_at, updated_at";

pub const TWEET_SOURCE: ListingSource = ListingSource {
    from: "tweets t",
    columns: "t.id, t.content, t.created_at, t.updated_at",
    id_column: "t.id",
    owner_column: "t.owner_id",
    created_at_column: "t.created_at",
    title_column: None,
    parent_video_column: None,
    published_column: None,
    text_columns: &["t.content"],
};

pub struct TweetRepo;

impl TweetRepo {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        content: &str,
    ) -> Result<Tweet, sqlx::Error> {
        let query =
            format!("INSERT INTO tweets (owner_id, content) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tweet>(&query)
            .bind(owner_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tweet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tweets WHERE id = $1");
        sqlx::query_as::<_, Tweet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        plan: &ListingPlan,
    ) -> Result<Vec<TweetListItem>, sqlx::Error> {
        fetch_listing(pool, plan, &TWEET_SOURCE).await
    }

    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Tweet>, sqlx::Error> {
        let query = format!("UPDATE tweets SET content = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tweet>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
