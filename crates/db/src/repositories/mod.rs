//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod like_repo;
pub mod playlist_repo;
pub mod subscription_repo;
pub mod tweet_repo;
pub mod user_repo;
pub mod video_repo;

pub use comment_repo::CommentRepo;
pub use like_repo::LikeRepo;
pub use playlist_repo::PlaylistRepo;
pub use subscription_repo::SubscriptionRepo;
pub use tweet_repo::TweetRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
