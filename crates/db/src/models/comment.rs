//! Comment models.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use super::owner::OwnerSummary;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub video_id: DbId,
    pub owner_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment in a video's comment listing, with its author embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentListItem {
    pub id: DbId,
    pub video_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub owner: OwnerSummary,
}
