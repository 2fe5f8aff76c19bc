//! Public-display projection of a user, embedded in listing rows.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::DbId;

/// The owner/author of a listed record.
///
/// Columns are read under `owner_*` aliases (see
/// [`OWNER_SUMMARY_COLUMNS`](crate::listing::OWNER_SUMMARY_COLUMNS)) so they
/// can be flattened into a row that has its own `id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct OwnerSummary {
    #[sqlx(rename = "owner_id")]
    pub id: DbId,
    #[sqlx(rename = "owner_username")]
    pub username: String,
    #[sqlx(rename = "owner_full_name")]
    pub full_name: String,
    #[sqlx(rename = "owner_avatar")]
    pub avatar: Option<String>,
}
