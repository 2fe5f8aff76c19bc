//! Video models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use super::owner::OwnerSummary;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A video as returned by the listing endpoint, with its owner embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoListItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub owner: OwnerSummary,
}

/// Validated input for publishing a video. Media URLs come from the
/// external media host.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub duration: f64,
}

/// Patch for a video's details. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}
