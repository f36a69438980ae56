//! Post integration tests
//!
//! Creation through the protected endpoint and the public paginated
//! listings, global and per author.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{register_and_login, spawn_default_app};

async fn create_post(server: &axum_test::TestServer, token: &str, content: &str) -> Value {
    let response = server
        .post("/api/posts")
        .authorization_bearer(token)
        .json(&json!({ "content": content }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn current_user_id(server: &axum_test::TestServer, token: &str) -> String {
    let response = server.get("/api/auth/me").authorization_bearer(token).await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["id"].as_str().expect("me response carries an id").to_string()
}

#[tokio::test]
async fn creating_a_post_requires_authentication() {
    let server = spawn_default_app().await;

    let response = server
        .post("/api/posts")
        .json(&json!({ "content": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_post_is_rejected() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    let response = server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({ "content": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn new_post_starts_with_zero_counters() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    let post = create_post(&server, &token, "first!").await;

    assert_eq!(post["content"], "first!");
    assert_eq!(post["likes_count"], 0);
    assert_eq!(post["comments_count"], 0);
    assert_eq!(post["user_id"], current_user_id(&server, &token).await.as_str());
}

#[tokio::test]
async fn media_only_post_is_accepted() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    let response = server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({ "media_url": "https://cdn.example/p.png" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let post: Value = response.json();
    assert_eq!(post["media_url"], "https://cdn.example/p.png");
    assert_eq!(post["content"], Value::Null);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    create_post(&server, &token, "one").await;
    // RFC 3339 timestamps carry sub-second precision, but keep a margin so
    // the two posts cannot share an instant.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    create_post(&server, &token, "two").await;

    let response = server.get("/api/posts").await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["total_elements"], 2);
    assert_eq!(page["items"][0]["content"], "two");
    assert_eq!(page["items"][1]["content"], "one");
}

#[tokio::test]
async fn page_size_is_capped() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;
    create_post(&server, &token, "only one").await;

    let response = server.get("/api/posts?page=0&size=10000").await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["size"], 100);
}

#[tokio::test]
async fn pagination_walks_all_posts() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    for i in 0..5 {
        create_post(&server, &token, &format!("post {i}")).await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let first = server.get("/api/posts?page=0&size=2").await;
    first.assert_status_ok();
    let first: Value = first.json();
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_eq!(first["total_elements"], 5);
    assert_eq!(first["total_pages"], 3);
    assert_eq!(first["items"][0]["content"], "post 4");

    let last = server.get("/api/posts?page=2&size=2").await;
    last.assert_status_ok();
    let last: Value = last.json();
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert_eq!(last["items"][0]["content"], "post 0");

    let beyond = server.get("/api/posts?page=3&size=2").await;
    beyond.assert_status_ok();
    let beyond: Value = beyond.json();
    assert_eq!(beyond["items"].as_array().unwrap().len(), 0);
    assert_eq!(beyond["total_elements"], 5);
}

#[tokio::test]
async fn user_listing_filters_by_author() {
    let server = spawn_default_app().await;
    let alice = register_and_login(&server, "alice@x.com", "secret1").await;
    let bob = register_and_login(&server, "bob@x.com", "secret1").await;

    create_post(&server, &alice, "from alice").await;
    create_post(&server, &bob, "from bob").await;

    let alice_id = current_user_id(&server, &alice).await;
    let response = server.get(&format!("/api/users/{alice_id}/posts")).await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["total_elements"], 1);
    assert_eq!(page["items"][0]["content"], "from alice");
    assert_eq!(page["items"][0]["user_id"], alice_id.as_str());
}

#[tokio::test]
async fn post_carries_author_alias_when_profile_exists() {
    let server = spawn_default_app().await;
    let token = register_and_login(&server, "a@x.com", "secret1").await;

    let without_profile = create_post(&server, &token, "before profile").await;
    assert_eq!(without_profile["alias"], Value::Null);

    let saved = server
        .put("/api/profiles/me")
        .authorization_bearer(&token)
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "alias": "ada"
        }))
        .await;
    saved.assert_status_ok();

    let response = server.get("/api/posts").await;
    response.assert_status_ok();
    let page: Value = response.json();
    assert_eq!(page["items"][0]["alias"], "ada");
}
