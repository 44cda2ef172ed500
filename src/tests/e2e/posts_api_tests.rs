use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::posts::core::id_policy::PostIdPolicy;
use crate::shell::config::ServerConfig;
use crate::shell::{build_state, http};

fn app_with(config: ServerConfig) -> Router {
    http::router(build_state(&config))
}

fn app() -> Router {
    app_with(ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::post("/api/posts")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn lists_the_two_fixture_posts_after_startup() {
    let (status, json) = send(&app(), get("/api/posts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "title": "First post", "content": "This is the first post."},
            {"id": 2, "title": "Second post", "content": "This is the second post."}
        ])
    );
}

#[tokio::test]
async fn created_posts_show_up_in_the_list() {
    let app = app();
    let (status, created) = send(&app, post_json(r#"{"title":"T","content":"C"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);

    let (_, list) = send(&app, get("/api/posts")).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2], created);
}

#[tokio::test]
async fn rejected_creates_leave_the_collection_unchanged() {
    let app = app();
    let (_, before) = send(&app, get("/api/posts")).await;
    let (status, _) = send(&app, post_json(r#"{"title":"","content":"C"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, after) = send(&app, get("/api/posts")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn next_after_max_policy_hands_out_fresh_ids() {
    let app = app_with(ServerConfig {
        id_policy: PostIdPolicy::NextAfterMax,
        ..ServerConfig::default()
    });
    let (_, first) = send(&app, post_json(r#"{"title":"A","content":"a"}"#)).await;
    let (_, second) = send(&app, post_json(r#"{"title":"B","content":"b"}"#)).await;
    assert_eq!(first["id"], 3);
    assert_eq!(second["id"], 4);
}

#[tokio::test]
async fn an_unseeded_service_cannot_create_under_current_max() {
    let app = app_with(ServerConfig {
        seed: false,
        ..ServerConfig::default()
    });
    let (status, _) = send(&app, post_json(r#"{"title":"A","content":"a"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (_, list) = send(&app, get("/api/posts")).await;
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn deleting_removes_exactly_one_post() {
    let app = app();
    let request = Request::delete("/api/posts/9999").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::delete("/api/posts/1/delete").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, get("/api/posts")).await;
    let ids: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn sorting_by_content_ascending() {
    let (_, json) = send(&app(), get("/api/posts?sort=content&direction=asc")).await;
    let contents: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["content"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        contents,
        vec!["This is the first post.", "This is the second post."]
    );
}

#[tokio::test]
async fn invalid_sort_values_fall_back_to_title_descending() {
    let (_, json) = send(&app(), get("/api/posts?sort=bogus&direction=bogus")).await;
    assert_eq!(json[0]["title"], "Second post");
    assert_eq!(json[1]["title"], "First post");
}

#[tokio::test]
async fn searching_deduplicates_across_filters() {
    let (status, json) = send(&app(), get("/api/posts/search?title=first&content=FIRST")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"id": 1, "title": "First post", "content": "This is the first post."}])
    );
}

#[tokio::test]
async fn updating_with_an_empty_title_keeps_it() {
    let app = app();
    let request = Request::put("/api/posts/2")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title":""}"#))
        .unwrap();
    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Second post");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::get("/api/posts")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
