//! Channel subscription models. A channel is a user.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use super::owner::OwnerSummary;

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscription {
    pub id: DbId,
    pub subscriber_id: DbId,
    pub channel_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One side of a subscription: a subscriber of a channel, or a channel a
/// user follows, depending on the listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubscriptionEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: OwnerSummary,
    pub subscribed_at: Timestamp,
}

#[derive(Debug, Clone)]
pub enum SubscriptionToggle {
    Subscribed(Subscription),
    Unsubscribed,
}
