/// Micropost handlers - HTTP endpoints for micropost operations
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Micropost;
use crate::error::Result;
use crate::pagination::micropost_label;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMicropostRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct MicropostListResponse {
    pub count: usize,
    pub count_label: String,
    pub microposts: Vec<Micropost>,
}

/// Create a micropost
pub async fn create_micropost(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    req: web::Json<CreateMicropostRequest>,
) -> Result<HttpResponse> {
    let post = state
        .microposts
        .create(user_id.into_inner(), &req.content)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List a user's microposts, newest first
pub async fn list_microposts(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let microposts = state.microposts.list_for(user_id.into_inner()).await?;
    let count = microposts.len();

    Ok(HttpResponse::Ok().json(MicropostListResponse {
        count,
        count_label: micropost_label(count),
        microposts,
    }))
}

pub async fn delete_micropost(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, micropost_id) = path.into_inner();
    state.microposts.delete(user_id, micropost_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Remove an account's microposts and follow edges
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let removal = state.home.delete_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(removal))
}
