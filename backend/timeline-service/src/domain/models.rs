use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Micropost entity - a short text post authored by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Micropost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Store-assigned insertion sequence, strictly increasing
    pub seq: u64,
}

impl Micropost {
    /// Newest first: `created_at` descending, then `seq` descending.
    pub fn newest_first(a: &Micropost, b: &Micropost) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.seq.cmp(&a.seq))
    }
}

/// Validated input for a micropost insert
#[derive(Debug, Clone)]
pub struct NewMicropost {
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Directed follow edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(follower_id: Uuid, followed_id: Uuid) -> Self {
        Self {
            follower_id,
            followed_id,
            created_at: Utc::now(),
        }
    }

    pub fn touches(&self, user_id: Uuid) -> bool {
        self.follower_id == user_id || self.followed_id == user_id
    }
}

/// Follow graph statistics for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowCounts {
    pub user_id: Uuid,
    pub following_count: usize,
    pub followers_count: usize,
}

impl FollowCounts {
    pub fn following_label(&self) -> String {
        format!("{} following", self.following_count)
    }

    /// Always plural ("1 followers"); the sidebar link reads that way.
    pub fn followers_label(&self) -> String {
        format!("{} followers", self.followers_count)
    }
}

/// What an account deletion removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountRemoval {
    pub microposts_removed: usize,
    pub edges_removed: usize,
}
