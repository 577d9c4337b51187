use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub following: bool,
    pub changed: bool,
}

pub async fn follow_user(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, target_id) = path.into_inner();
    let changed = state.follows.follow(user_id, target_id).await?;

    Ok(HttpResponse::Ok().json(FollowResponse {
        following: true,
        changed,
    }))
}

pub async fn unfollow_user(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, target_id) = path.into_inner();
    let changed = state.follows.unfollow(user_id, target_id).await?;

    Ok(HttpResponse::Ok().json(FollowResponse {
        following: false,
        changed,
    }))
}

/// Following/follower counts with their sidebar labels
pub async fn get_stats(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let counts = state.follows.counts(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user_id": counts.user_id,
        "following_count": counts.following_count,
        "followers_count": counts.followers_count,
        "following_label": counts.following_label(),
        "followers_label": counts.followers_label(),
    })))
}
