pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod repository;
pub mod services;

pub use config::{Config, TimelineConfig};
pub use error::{AppError, Result};

use repository::{
    FollowRepository, InMemoryFollowRepository, InMemoryMicropostRepository, MicropostRepository,
};
use services::{FeedService, FollowService, HomeService, MicropostService};
use std::sync::Arc;

/// Services shared by every request handler.
///
/// Each instance owns its own stores; there is no process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub follows: FollowService,
    pub microposts: MicropostService,
    pub feed: FeedService,
    pub home: HomeService,
}

impl AppState {
    /// Wire the services over the given repositories
    pub fn new(
        follow_repo: Arc<dyn FollowRepository>,
        micropost_repo: Arc<dyn MicropostRepository>,
        config: &TimelineConfig,
    ) -> Self {
        let follows = FollowService::new(follow_repo);
        let microposts = MicropostService::new(micropost_repo.clone(), config.max_content_length);
        let feed = FeedService::new(follows.clone(), micropost_repo);
        let home = HomeService::new(
            follows.clone(),
            microposts.clone(),
            feed.clone(),
            config.page_size,
        );

        Self {
            follows,
            microposts,
            feed,
            home,
        }
    }

    /// Fresh, empty in-memory stores
    pub fn in_memory(config: &TimelineConfig) -> Self {
        Self::new(
            Arc::new(InMemoryFollowRepository::new()),
            Arc::new(InMemoryMicropostRepository::new()),
            config,
        )
    }
}
