pub mod feed;
pub mod follow;
pub mod home;
pub mod microposts;

pub use feed::FeedService;
pub use follow::FollowService;
pub use home::{HomeService, HomeSummary};
pub use microposts::MicropostService;
