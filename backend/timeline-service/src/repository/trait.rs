use crate::domain::{FollowEdge, Micropost, NewMicropost};
use crate::error::Result;
use uuid::Uuid;

/// Storage interface for the follow graph.
/// Implementations report backend failures as `AppError::StorageUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert an edge; returns false if the edge already existed
    async fn insert_edge(&self, edge: FollowEdge) -> Result<bool>;

    /// Delete an edge; returns false if there was nothing to delete
    async fn delete_edge(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool>;

    async fn edge_exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool>;

    /// Ids the user follows, in no particular order
    async fn following_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>>;

    async fn count_following(&self, user_id: Uuid) -> Result<usize>;

    async fn count_followers(&self, user_id: Uuid) -> Result<usize>;

    /// Delete every edge where the user is either end; returns the number removed
    async fn delete_edges_touching(&self, user_id: Uuid) -> Result<usize>;
}

/// Storage interface for microposts.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MicropostRepository: Send + Sync {
    /// Persist an already-validated micropost and assign its id and sequence
    async fn insert(&self, new_post: NewMicropost) -> Result<Micropost>;

    /// Delete one micropost owned by `user_id`; returns false if no such post
    async fn delete(&self, user_id: Uuid, micropost_id: Uuid) -> Result<bool>;

    /// Delete all microposts by `user_id`; returns the number removed
    async fn delete_by_author(&self, user_id: Uuid) -> Result<usize>;

    async fn count_by_author(&self, user_id: Uuid) -> Result<usize>;

    /// Microposts by any of `author_ids`, newest first
    async fn list_by_authors(&self, author_ids: &[Uuid]) -> Result<Vec<Micropost>>;
}
