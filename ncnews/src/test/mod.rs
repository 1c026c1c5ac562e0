//! End-to-end tests that drive the full router the way a client would.

use crate::test_utils::{create_test_app, seed_test_data};
use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
#[test_log::test]
async fn test_unknown_path_returns_plain_not_found(pool: PgPool) {
    let server = create_test_app(pool).await;

    for path in ["/api/invalid", "/api/topics/mitch/articles", "/not-an-api"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Path not found");
    }
}

#[sqlx::test]
#[test_log::test]
async fn test_unsupported_method_returns_path_not_found(pool: PgPool) {
    seed_test_data(&pool).await;
    let server = create_test_app(pool).await;

    let response = server.put("/api/topics").json(&json!({"slug": "x"})).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Path not found");

    let response = server.delete("/api/users").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Path not found");

    let response = server.get("/api/comments/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Path not found");
}

#[sqlx::test]
#[test_log::test]
async fn test_healthz(pool: PgPool) {
    let server = create_test_app(pool).await;

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

/// A reader's journey: new topic, new article in it, a comment, some votes, then cleanup.
#[sqlx::test]
#[test_log::test]
async fn test_publish_discuss_and_remove_article(pool: PgPool) {
    seed_test_data(&pool).await;
    let server = create_test_app(pool.clone()).await;

    let response = server
        .post("/api/topics")
        .json(&json!({"slug": "gardening", "description": "Things that grow"}))
        .await;
    response.assert_status(StatusCode::CREATED);

    // A new topic has no articles yet, which reads as an unknown topic
    let response = server.get("/api/articles").add_query_param("topic", "gardening").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"msg": "Topic gardening not found"}));

    let response = server
        .post("/api/articles")
        .json(&json!({
            "author": "lurker",
            "title": "Tomatoes in October",
            "body": "Still ripening on the vine.",
            "topic": "gardening"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let article = response.json::<Value>()["article"].clone();
    assert_eq!(article["article_id"], 13);
    assert_eq!(article["votes"], 0);
    assert_eq!(article["comment_count"], 0);

    let response = server.get("/api/articles").add_query_param("topic", "gardening").await;
    response.assert_status_ok();
    let articles = response.json::<Value>()["articles"].clone();
    assert_eq!(articles.as_array().map(Vec::len), Some(1));
    assert_eq!(articles[0]["title"], "Tomatoes in October");

    let response = server
        .post("/api/articles/13/comments")
        .json(&json!({"username": "rogersop", "body": "Try a cold frame."}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["comment"]["comment_id"], 19);

    let response = server.patch("/api/comments/19").json(&json!({"inc_votes": 3})).await;
    response.assert_status_ok();
    let comment = response.json::<Value>()["comment"].clone();
    assert_eq!(comment["article_id"], 13);
    assert_eq!(comment["author"], "rogersop");
    assert_eq!(comment["votes"], 3);

    let response = server.patch("/api/articles/13").json(&json!({"inc_votes": -2})).await;
    response.assert_status_ok();
    let article = response.json::<Value>()["article"].clone();
    assert_eq!(article["votes"], -2);
    assert_eq!(article["comment_count"], 1);

    server.delete("/api/articles/13").await.assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/api/articles/13").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"msg": "Article 13 not found"}));

    // Comments went with the article
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE comment_id = 19")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let response = server.delete("/api/comments/19").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"msg": "Comment 19 not found"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_error_bodies_are_json(pool: PgPool) {
    seed_test_data(&pool).await;
    let server = create_test_app(pool).await;

    let response = server.get("/api/articles/banana").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"msg": "Invalid article_id: banana"}));

    let response = server.get("/api/articles").add_query_param("sort_by", "body").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"msg": "Bad Sort Request"}));

    let response = server.get("/api/users/nobody").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"msg": "User nobody not found"}));
}
