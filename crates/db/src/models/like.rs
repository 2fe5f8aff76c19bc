//! Like models. A like targets exactly one video, comment or tweet.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `likes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Like {
    pub id: DbId,
    pub liked_by: DbId,
    pub video_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub tweet_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The entity a like points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video(DbId),
    Comment(DbId),
    Tweet(DbId),
}

impl LikeTarget {
    /// Foreign-key column in `likes` holding this target.
    pub fn column(self) -> &'static str {
        match self {
            Self::Video(_) => "video_id",
            Self::Comment(_) => "comment_id",
            Self::Tweet(_) => "tweet_id",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            Self::Video(id) | Self::Comment(id) | Self::Tweet(id) => id,
        }
    }
}

/// Result of a toggle: the new like, or confirmation that one was removed.
#[derive(Debug, Clone)]
pub enum LikeToggle {
    Added(Like),
    Removed,
}

/// A video the caller has liked, projected from the joined video row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LikedVideo {
    pub video_id: DbId,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub created_at: Timestamp,
    pub liked_at: Timestamp,
}
