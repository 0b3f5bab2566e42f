use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fitcoach-server-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let dir = scratch_dir("health");
    assert_eq!(status_of(static_routes(&dir), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn serves_site_assets() {
    let dir = scratch_dir("assets");
    std::fs::write(dir.join("style.css"), "body { color: #ccff00; }").unwrap();
    assert_eq!(status_of(static_routes(&dir), "/style.css").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_assets_are_not_found() {
    let dir = scratch_dir("missing");
    assert_eq!(status_of(static_routes(&dir), "/nope.png").await, StatusCode::NOT_FOUND);
}
