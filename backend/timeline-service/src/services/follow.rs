use crate::domain::{FollowCounts, FollowEdge};
use crate::error::{AppError, Result};
use crate::repository::FollowRepository;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct FollowService {
    repo: Arc<dyn FollowRepository>,
}

impl FollowService {
    pub fn new(repo: Arc<dyn FollowRepository>) -> Self {
        Self { repo }
    }

    /// Idempotent follow; returns true if a new edge was created.
    pub async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        if follower_id == followed_id {
            warn!(user_id = %follower_id, "Rejected self-follow");
            return Err(AppError::InvalidOperation(
                "users cannot follow themselves".to_string(),
            ));
        }

        let created = self
            .repo
            .insert_edge(FollowEdge::new(follower_id, followed_id))
            .await?;

        if created {
            info!(%follower_id, %followed_id, "Follow created");
        }
        Ok(created)
    }

    /// Idempotent unfollow; returns true if an edge was removed.
    pub async fn unfollow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        let removed = self.repo.delete_edge(follower_id, followed_id).await?;
        if removed {
            info!(%follower_id, %followed_id, "Follow removed");
        }
        Ok(removed)
    }

    pub async fn is_following(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        self.repo.edge_exists(follower_id, followed_id).await
    }

    pub async fn following(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        self.repo.following_ids(user_id).await
    }

    pub async fn following_count(&self, user_id: Uuid) -> Result<usize> {
        self.repo.count_following(user_id).await
    }

    pub async fn follower_count(&self, user_id: Uuid) -> Result<usize> {
        self.repo.count_followers(user_id).await
    }

    pub async fn counts(&self, user_id: Uuid) -> Result<FollowCounts> {
        Ok(FollowCounts {
            user_id,
            following_count: self.following_count(user_id).await?,
            followers_count: self.follower_count(user_id).await?,
        })
    }

    /// Drop every edge touching the user (account deletion cascade).
    pub async fn remove_user(&self, user_id: Uuid) -> Result<usize> {
        self.repo.delete_edges_touching(user_id).await
    }
}
