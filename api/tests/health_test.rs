mod helpers;

use api::routes::app;
use axum::http::StatusCode;
use helpers::{get_json, seeded_state};

#[tokio::test]
async fn health_check_is_mounted_under_api() {
    let app = app(seeded_state().await);

    let (status, json) = get_json(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["message"], "Health check passed");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app(seeded_state().await);

    let (status, _) = helpers::get_raw(app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
