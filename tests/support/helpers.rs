// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{FixedClock, InMemoryArticleRepository, StaticSessionAuthenticator};
use pressroom::application::dto::AuthenticatedUser;
use pressroom::application::ports::{auth::SessionAuthenticator, time::Clock};
use pressroom::application::services::ApplicationServices;
use pressroom::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use pressroom::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_SESSION: &str = "test-session";

pub struct TestContext {
    pub router: Router,
    pub repo: Arc<InMemoryArticleRepository>,
}

pub fn make_test_router() -> TestContext {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo.clone();
    let session_authenticator: Arc<dyn SessionAuthenticator> =
        Arc::new(StaticSessionAuthenticator {
            session_id: TEST_SESSION.into(),
            user: AuthenticatedUser {
                id: 1,
                username: "editor".into(),
            },
        });
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(FixedClock::default_instant()));

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        session_authenticator,
        clock,
    ));

    TestContext {
        router: build_router(HttpState { services }),
        repo,
    }
}

pub async fn admin_post(router: &Router, uri: &str, payload: &Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("sid={TEST_SESSION}"))
        .body(Body::from(payload.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn admin_get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("sid={TEST_SESSION}"))
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn admin_delete(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::COOKIE, format!("sid={TEST_SESSION}"))
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 400 whose payload names the violated field.
pub async fn assert_field_violation(response: Response<Body>, field: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["field"], field, "unexpected violation: {json}");
}

/// Post the payload with `field` removed and expect a violation naming it.
pub async fn require_field(router: &Router, field: &str, payload: &Value, uri: &str) {
    let mut payload = payload.clone();
    payload.as_object_mut().unwrap().remove(field);
    let response = admin_post(router, uri, &payload).await;
    assert_field_violation(response, field).await;
}

/// Post the payload with `field` set to a string and expect a violation
/// naming it.
pub async fn number_field(router: &Router, field: &str, payload: &Value, uri: &str) {
    let mut payload = payload.clone();
    payload
        .as_object_mut()
        .unwrap()
        .insert(field.into(), Value::String("not-a-number".into()));
    let response = admin_post(router, uri, &payload).await;
    assert_field_violation(response, field).await;
}
