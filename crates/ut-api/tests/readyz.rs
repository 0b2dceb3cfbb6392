use std::sync::atomic::Ordering;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn draining_service_fails_readiness_but_stays_live() {
    let state = ut_api::test_state("test-key");
    state.readiness.store(false, Ordering::SeqCst);
    let app = ut_api::create_router(state);

    let ready = app.clone().oneshot(get("/readyz")).await.unwrap();
    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = ready.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "service_unavailable");

    // Liveness is about the process, not the drain flag.
    let live = app.oneshot(get("/livez")).await.unwrap();
    assert_eq!(live.status(), StatusCode::OK);
}
