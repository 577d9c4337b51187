/// HTTP handlers for timeline endpoints
///
/// - Feed: paged home feed and the home page summary
/// - Microposts: create, list, delete
/// - Follows: follow, unfollow, counts
///
/// The acting user comes from the path; authentication is handled upstream.
pub mod feed;
pub mod follows;
pub mod microposts;

use actix_web::{web, HttpResponse};

pub use feed::{get_feed, get_home};
pub use follows::{follow_user, get_stats, unfollow_user};
pub use microposts::{create_micropost, delete_micropost, delete_user, list_microposts};

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Register all routes; shared by the binary and the HTTP tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api/v1/users/{user_id}")
            .service(web::resource("").route(web::delete().to(delete_user)))
            .route("/feed", web::get().to(get_feed))
            .route("/home", web::get().to(get_home))
            .route("/stats", web::get().to(get_stats))
            .service(
                web::resource("/microposts")
                    .route(web::get().to(list_microposts))
                    .route(web::post().to(create_micropost)),
            )
            .route(
                "/microposts/{micropost_id}",
                web::delete().to(delete_micropost),
            )
            .service(
                web::resource("/following/{target_id}")
                    .route(web::put().to(follow_user))
                    .route(web::delete().to(unfollow_user)),
            ),
    );
}
