//! Repository for the `subscriptions` table.

use sqlx::PgPool;
use vidhub_core::listing::PageSpec;
use vidhub_core::types::DbId;

use crate::listing::OWNER_SUMMARY_COLUMNS;
use crate::models::subscription::{Subscription, SubscriptionEntry, SubscriptionToggle};

/// Column list for `subscriptions` queries.
const COLUMNS: &str = "id, subscriber_id, channel_id, created_at, updated_at";

pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Unsubscribe if subscribed, otherwise subscribe.
    pub async fn toggle(
        pool: &PgPool,
        subscriber_id: DbId,
        channel_id: DbId,
    ) -> Result<SubscriptionToggle, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query(
            "DELETE FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2",
        )
        .bind(subscriber_id)
        .bind(channel_id)
        .execute(&mut *tx)
        .await?;

        if removed.rows_affected() > 0 {
            tx.commit().await?;
            return Ok(SubscriptionToggle::Unsubscribed);
        }

        let query = format!(
            "INSERT INTO subscriptions (subscriber_id, channel_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let subscription = sqlx::query_as::<_, Subscription>(&query)
            .bind(subscriber_id)
            .bind(channel_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(SubscriptionToggle::Subscribed(subscription))
    }

    /// Users subscribed to `channel_id`, newest subscription first.
    pub async fn list_subscribers(
        pool: &PgPool,
        channel_id: DbId,
        page: PageSpec,
    ) -> Result<Vec<SubscriptionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_SUMMARY_COLUMNS}, s.created_at AS subscribed_at \
             FROM subscriptions s \
             JOIN users u ON u.id = s.subscriber_id \
             WHERE s.channel_id = $1 \
             ORDER BY s.created_at DESC, s.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SubscriptionEntry>(&query)
            .bind(channel_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Channels `subscriber_id` follows, newest subscription first.
    pub async fn list_subscribed_channels(
        pool: &PgPool,
        subscriber_id: DbId,
        page: PageSpec,
    ) -> Result<Vec<SubscriptionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_SUMMARY_COLUMNS}, s.created_at AS subscribed_at \
             FROM subscriptions s \
             JOIN users u ON u.id = s.channel_id \
             WHERE s.subscriber_id = $1 \
             ORDER BY s.created_at DESC, s.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SubscriptionEntry>(&query)
            .bind(subscriber_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }
}
