use crate::domain::{AccountRemoval, Micropost};
use crate::error::Result;
use crate::pagination::{micropost_label, Page};
use crate::services::{FeedService, FollowService, MicropostService};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Everything the signed-in home page shows, read in one call
#[derive(Debug, Clone, Serialize)]
pub struct HomeSummary {
    pub user_id: Uuid,
    pub micropost_count: usize,
    pub micropost_count_label: String,
    pub following_count: usize,
    pub following_label: String,
    pub followers_count: usize,
    pub followers_label: String,
    pub feed: Page<Micropost>,
}

#[derive(Clone)]
pub struct HomeService {
    follows: FollowService,
    microposts: MicropostService,
    feed: FeedService,
    page_size: usize,
}

impl HomeService {
    pub fn new(
        follows: FollowService,
        microposts: MicropostService,
        feed: FeedService,
        page_size: usize,
    ) -> Self {
        Self {
            follows,
            microposts,
            feed,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn home_for(&self, user_id: Uuid, page: usize) -> Result<HomeSummary> {
        let feed = self.feed.feed_page(user_id, page, self.page_size).await?;
        let micropost_count = self.microposts.count_for(user_id).await?;
        let counts = self.follows.counts(user_id).await?;

        Ok(HomeSummary {
            user_id,
            micropost_count,
            micropost_count_label: micropost_label(micropost_count),
            following_count: counts.following_count,
            following_label: counts.following_label(),
            followers_count: counts.followers_count,
            followers_label: counts.followers_label(),
            feed,
        })
    }

    /// Remove a deleted account's microposts and every follow edge touching it.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<AccountRemoval> {
        let microposts_removed = self.microposts.delete_all(user_id).await?;
        let edges_removed = self.follows.remove_user(user_id).await?;

        info!(%user_id, microposts_removed, edges_removed, "User data removed");
        Ok(AccountRemoval {
            microposts_removed,
            edges_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryFollowRepository, InMemoryMicropostRepository};
    use std::sync::Arc;

    fn service(page_size: usize) -> HomeService {
        let graph = Arc::new(InMemoryFollowRepository::new());
        let posts = Arc::new(InMemoryMicropostRepository::new());
        let follows = FollowService::new(graph);
        HomeService::new(
            follows.clone(),
            MicropostService::new(posts.clone(), 140),
            FeedService::new(follows, posts),
            page_size,
        )
    }

    #[tokio::test]
    async fn test_sidebar_counts_for_followed_user() {
        let home = service(30);
        let user = Uuid::new_v4();
        let other_user = Uuid::new_v4();
        home.microposts.create(user, "Lorem Ipsum").await.unwrap();
        home.microposts.create(user, "Dolor sit amet").await.unwrap();
        home.follows.follow(other_user, user).await.unwrap();

        let summary = home.home_for(user, 1).await.unwrap();
        assert_eq!(summary.micropost_count_label, "2 microposts");
        assert_eq!(summary.following_label, "0 following");
        assert_eq!(summary.followers_label, "1 followers");
        assert_eq!(summary.feed.len(), 2);
    }

    #[tokio::test]
    async fn test_singular_label() {
        let home = service(30);
        let user = Uuid::new_v4();
        home.microposts.create(user, "Lorem Ipsum").await.unwrap();

        let summary = home.home_for(user, 1).await.unwrap();
        assert_eq!(summary.micropost_count_label, "1 micropost");
    }

    #[tokio::test]
    async fn test_delete_user_cascades() {
        let home = service(30);
        let user = Uuid::new_v4();
        let friend = Uuid::new_v4();
        home.microposts.create(user, "bye").await.unwrap();
        home.follows.follow(user, friend).await.unwrap();
        home.follows.follow(friend, user).await.unwrap();

        let removal = home.delete_user(user).await.unwrap();
        assert_eq!(removal.microposts_removed, 1);
        assert_eq!(removal.edges_removed, 2);
        assert_eq!(home.follows.follower_count(friend).await.unwrap(), 0);
        assert!(home.feed.feed_for(friend).await.unwrap().is_empty());
    }
}
