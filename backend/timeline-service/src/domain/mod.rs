pub mod models;

pub use models::{AccountRemoval, FollowCounts, FollowEdge, Micropost, NewMicropost};
