use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    pub per_page: Option<usize>,
}

fn default_page() -> usize {
    1
}

/// GET /api/v1/users/{user_id}/feed
pub async fn get_feed(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();
    let per_page = query.per_page.unwrap_or_else(|| state.home.page_size());

    debug!(%user_id, page = query.page, per_page, "Getting feed");
    let page = state.feed.feed_page(user_id, query.page, per_page).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/v1/users/{user_id}/home
pub async fn get_home(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let summary = state.home.home_for(user_id.into_inner(), query.page).await?;
    Ok(HttpResponse::Ok().json(summary))
}
