//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Listing row structs carrying the embedded [`owner::OwnerSummary`]
//! - `Deserialize` or plain DTOs for inserts and patches

pub mod comment;
pub mod like;
pub mod owner;
pub mod playlist;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;
