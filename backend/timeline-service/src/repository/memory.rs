use crate::domain::{FollowEdge, Micropost, NewMicropost};
use crate::error::Result;
use crate::repository::{FollowRepository, MicropostRepository};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-process follow graph.
///
/// Edges are keyed by `(follower_id, followed_id)`, so the map itself enforces
/// one edge per ordered pair. Writers take the lock exclusively, which
/// serializes concurrent follow/unfollow on the same pair.
#[derive(Default)]
pub struct InMemoryFollowRepository {
    edges: RwLock<HashMap<(Uuid, Uuid), FollowEdge>>,
}

impl InMemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn insert_edge(&self, edge: FollowEdge) -> Result<bool> {
        let mut edges = self.edges.write().await;
        let key = (edge.follower_id, edge.followed_id);
        if edges.contains_key(&key) {
            return Ok(false);
        }
        edges.insert(key, edge);
        Ok(true)
    }

    async fn delete_edge(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        let mut edges = self.edges.write().await;
        Ok(edges.remove(&(follower_id, followed_id)).is_some())
    }

    async fn edge_exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        let edges = self.edges.read().await;
        Ok(edges.contains_key(&(follower_id, followed_id)))
    }

    async fn following_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        let edges = self.edges.read().await;
        Ok(edges
            .keys()
            .filter(|(follower, _)| *follower == user_id)
            .map(|(_, followed)| *followed)
            .collect())
    }

    async fn count_following(&self, user_id: Uuid) -> Result<usize> {
        let edges = self.edges.read().await;
        Ok(edges.keys().filter(|(follower, _)| *follower == user_id).count())
    }

    async fn count_followers(&self, user_id: Uuid) -> Result<usize> {
        let edges = self.edges.read().await;
        Ok(edges.keys().filter(|(_, followed)| *followed == user_id).count())
    }

    async fn delete_edges_touching(&self, user_id: Uuid) -> Result<usize> {
        let mut edges = self.edges.write().await;
        let before = edges.len();
        edges.retain(|_, edge| !edge.touches(user_id));
        let removed = before - edges.len();
        debug!(%user_id, removed, "Removed follow edges for user");
        Ok(removed)
    }
}

#[derive(Default)]
struct MicropostTable {
    rows: HashMap<Uuid, Micropost>,
    next_seq: u64,
}

/// In-process micropost store.
#[derive(Default)]
pub struct InMemoryMicropostRepository {
    table: RwLock<MicropostTable>,
}

impl InMemoryMicropostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MicropostRepository for InMemoryMicropostRepository {
    async fn insert(&self, new_post: NewMicropost) -> Result<Micropost> {
        let mut table = self.table.write().await;
        table.next_seq += 1;

        let post = Micropost {
            id: Uuid::new_v4(),
            user_id: new_post.user_id,
            content: new_post.content,
            created_at: new_post.created_at,
            seq: table.next_seq,
        };
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, user_id: Uuid, micropost_id: Uuid) -> Result<bool> {
        let mut table = self.table.write().await;
        match table.rows.get(&micropost_id) {
            Some(post) if post.user_id == user_id => {
                table.rows.remove(&micropost_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_author(&self, user_id: Uuid) -> Result<usize> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|_, post| post.user_id != user_id);
        Ok(before - table.rows.len())
    }

    async fn count_by_author(&self, user_id: Uuid) -> Result<usize> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|p| p.user_id == user_id).count())
    }

    async fn list_by_authors(&self, author_ids: &[Uuid]) -> Result<Vec<Micropost>> {
        let authors: HashSet<&Uuid> = author_ids.iter().collect();
        let table = self.table.read().await;

        let mut posts: Vec<Micropost> = table
            .rows
            .values()
            .filter(|p| authors.contains(&p.user_id))
            .cloned()
            .collect();
        posts.sort_by(Micropost::newest_first);
        Ok(posts)
    }
}
