/// Micropost service - validation, creation, deletion and per-author listing
use crate::domain::{Micropost, NewMicropost};
use crate::error::{AppError, Result};
use crate::repository::MicropostRepository;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct MicropostService {
    repo: Arc<dyn MicropostRepository>,
    max_content_length: usize,
}

impl MicropostService {
    pub fn new(repo: Arc<dyn MicropostRepository>, max_content_length: usize) -> Self {
        Self {
            repo,
            max_content_length,
        }
    }

    /// Create a micropost stamped with the current time
    pub async fn create(&self, user_id: Uuid, content: &str) -> Result<Micropost> {
        self.create_at(user_id, content, Utc::now()).await
    }

    /// Create a micropost with an explicit timestamp (backfill, fixtures)
    pub async fn create_at(
        &self,
        user_id: Uuid,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Micropost> {
        self.validate_content(content)?;

        let post = self
            .repo
            .insert(NewMicropost {
                user_id,
                content: content.to_string(),
                created_at,
            })
            .await?;

        info!(%user_id, micropost_id = %post.id, "Micropost created");
        Ok(post)
    }

    pub fn validate_content(&self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(AppError::Validation("content can't be blank".to_string()));
        }

        let length = content.chars().count();
        if length > self.max_content_length {
            return Err(AppError::Validation(format!(
                "content is too long ({} characters, maximum is {})",
                length, self.max_content_length
            )));
        }
        Ok(())
    }

    /// Delete one micropost owned by `user_id`
    pub async fn delete(&self, user_id: Uuid, micropost_id: Uuid) -> Result<()> {
        if !self.repo.delete(user_id, micropost_id).await? {
            return Err(AppError::NotFound(format!(
                "micropost {} for user {}",
                micropost_id, user_id
            )));
        }
        info!(%user_id, %micropost_id, "Micropost deleted");
        Ok(())
    }

    pub async fn delete_all(&self, user_id: Uuid) -> Result<usize> {
        let removed = self.repo.delete_by_author(user_id).await?;
        info!(%user_id, removed, "Deleted all microposts for user");
        Ok(removed)
    }

    pub async fn count_for(&self, user_id: Uuid) -> Result<usize> {
        self.repo.count_by_author(user_id).await
    }

    /// The user's microposts, newest first. Each call is a fresh snapshot.
    pub async fn list_for(&self, user_id: Uuid) -> Result<Vec<Micropost>> {
        let posts = self.repo.list_by_authors(&[user_id]).await?;
        debug!(%user_id, count = posts.len(), "Listed microposts");
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMicropostRepository;
    use chrono::Duration;

    fn service() -> MicropostService {
        MicropostService::new(Arc::new(InMemoryMicropostRepository::new()), 140)
    }

    #[tokio::test]
    async fn test_blank_content_rejected() {
        let svc = service();
        let user = Uuid::new_v4();

        for content in ["", "   ", "\n\t"] {
            let err = svc.create(user, content).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(svc.count_for(user).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_length_limit_counts_characters() {
        let svc = service();
        let user = Uuid::new_v4();

        assert!(svc.create(user, &"a".repeat(140)).await.is_ok());
        assert!(svc.create(user, &"é".repeat(140)).await.is_ok());
        assert!(matches!(
            svc.create(user, &"a".repeat(141)).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_for_is_newest_first() {
        let svc = service();
        let user = Uuid::new_v4();
        let now = Utc::now();

        svc.create_at(user, "older", now - Duration::days(1)).await.unwrap();
        svc.create_at(user, "newer", now - Duration::hours(1)).await.unwrap();

        let contents: Vec<String> = svc
            .list_for(user)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.content)
            .collect();
        assert_eq!(contents, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_list_for_reflects_current_state() {
        let svc = service();
        let user = Uuid::new_v4();

        svc.create(user, "Lorem Ipsum").await.unwrap();
        assert_eq!(svc.list_for(user).await.unwrap().len(), 1);

        svc.create(user, "Dolor sit amet").await.unwrap();
        assert_eq!(svc.list_for(user).await.unwrap().len(), 2);

        assert_eq!(svc.delete_all(user).await.unwrap(), 2);
        assert!(svc.list_for(user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_other_users_post_is_not_found() {
        let svc = service();
        let owner = Uuid::new_v4();
        let post = svc.create(owner, "mine").await.unwrap();

        let err = svc.delete(Uuid::new_v4(), post.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(svc.count_for(owner).await.unwrap(), 1);

        svc.delete(owner, post.id).await.unwrap();
        assert_eq!(svc.count_for(owner).await.unwrap(), 0);
    }
}
