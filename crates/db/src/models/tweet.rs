//! Tweet (short text post) models.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use super::owner::OwnerSummary;

/// A row from the `tweets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tweet {
    pub id: DbId,
    pub owner_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TweetListItem {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub owner: OwnerSummary,
}
