mod memory;
mod r#trait;

pub use memory::{InMemoryFollowRepository, InMemoryMicropostRepository};
pub use r#trait::{FollowRepository, MicropostRepository};

#[cfg(test)]
pub use r#trait::{MockFollowRepository, MockMicropostRepository};
