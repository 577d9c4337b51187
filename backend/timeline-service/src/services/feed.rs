use crate::domain::Micropost;
use crate::error::Result;
use crate::pagination::{paginate, Page};
use crate::repository::MicropostRepository;
use crate::services::FollowService;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Builds home feeds from the follow graph and the micropost store.
///
/// Read-only: the builder never writes to either repository, and it keeps no
/// state between calls, so every feed reflects the stores as they are now.
#[derive(Clone)]
pub struct FeedService {
    follows: FollowService,
    microposts: Arc<dyn MicropostRepository>,
}

impl FeedService {
    pub fn new(follows: FollowService, microposts: Arc<dyn MicropostRepository>) -> Self {
        Self {
            follows,
            microposts,
        }
    }

    /// Microposts by `user_id` and everyone they follow, newest first.
    pub async fn feed_for(&self, user_id: Uuid) -> Result<Vec<Micropost>> {
        let mut authors = self.follows.following(user_id).await?;
        authors.push(user_id);
        authors.sort_unstable();
        authors.dedup();

        // Backends return newest first (see `MicropostRepository::list_by_authors`)
        let posts = self.microposts.list_by_authors(&authors).await?;

        debug!(
            %user_id,
            authors = authors.len(),
            posts = posts.len(),
            "Feed built"
        );
        Ok(posts)
    }

    pub async fn feed_page(
        &self,
        user_id: Uuid,
        page: usize,
        per_page: usize,
    ) -> Result<Page<Micropost>> {
        paginate(self.feed_for(user_id).await?, page, per_page)
    }
}
