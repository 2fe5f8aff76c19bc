//! Repository for the `likes` table.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::like::{Like, LikeTarget, LikeToggle, LikedVideo};

/// Column list for `likes` queries.
const COLUMNS: &str = "id, liked_by, video_id, comment_id, tweet_id, created_at, updated_at";

pub struct LikeRepo;

impl LikeRepo {
    /// The caller's like on `target`, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM likes WHERE liked_by = $1 AND {} = $2",
            target.column()
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }

    /// Remove the caller's like on `target` if present, otherwise add one.
    ///
    /// Runs in a transaction; a concurrent duplicate insert surfaces as a
    /// `uq_likes_*` unique violation.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<LikeToggle, sqlx::Error> {
        let column = target.column();
        let mut tx = pool.begin().await?;

        let removed = sqlx::query(&format!(
            "DELETE FROM likes WHERE liked_by = $1 AND {column} = $2"
        ))
        .bind(user_id)
        .bind(target.id())
        .execute(&mut *tx)
        .await?;

        if removed.rows_affected() > 0 {
            tx.commit().await?;
            return Ok(LikeToggle::Removed);
        }

        let like = sqlx::query_as::<_, Like>(&format!(
            "INSERT INTO likes (liked_by, {column}) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(target.id())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(LikeToggle::Added(like))
    }

    /// Videos liked by `user_id`, most recently liked first.
    pub async fn liked_videos(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LikedVideo>, sqlx::Error> {
        sqlx::query_as::<_, LikedVideo>(
            "SELECT v.id AS video_id, v.title, v.description, v.thumbnail, v.created_at, \
                    l.created_at AS liked_at \
             FROM likes l \
             JOIN videos v ON v.id = l.video_id \
             WHERE l.liked_by = $1 \
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
