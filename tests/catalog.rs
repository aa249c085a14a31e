//! End-to-end catalog flows against PostgreSQL.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use library_entity::user::UserRole;

use common::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL via LIBRARY_TEST_DATABASE_URL"]
async fn test_author_and_book_lifecycle() {
    let app = TestApp::new().await;
    let admin = app.login_as("root", UserRole::Admin).await;

    let author = app
        .request("POST", "/authors", Some(json!({ "name": "Leo Tolstoy" })), Some(&admin))
        .await;
    assert_eq!(author.status, StatusCode::CREATED);
    let author_id = author.body["data"]["id"].as_i64().unwrap();

    let book = app
        .request(
            "POST",
            "/books",
            Some(json!({ "name": "wap", "title": "War and Peace", "author_id": author_id })),
            Some(&admin),
        )
        .await;
    assert_eq!(book.status, StatusCode::CREATED);
    assert_eq!(book.body["data"]["author"], "Leo Tolstoy");
    let book_id = book.body["data"]["id"].as_i64().unwrap();

    let by_title = app.request("GET", "/books/search?name=peace", None, None).await;
    assert_eq!(by_title.status, StatusCode::OK);
    assert_eq!(by_title.body["data"].as_array().unwrap().len(), 1);

    let by_author = app.request("GET", "/authors/search?name=TOLS", None, None).await;
    assert_eq!(by_author.body["data"][0]["id"], author_id);

    // `%` and `_` are literal characters, not wildcards.
    for uri in ["/authors/search?name=%25", "/books/search?name=_"] {
        let literal = app.request("GET", uri, None, None).await;
        assert_eq!(literal.status, StatusCode::OK, "{uri}");
        assert!(literal.body["data"].as_array().unwrap().is_empty(), "{uri}");
    }

    let renamed = app
        .request(
            "PUT",
            &format!("/authors/{author_id}"),
            Some(json!({ "name": "Lev Tolstoy" })),
            Some(&admin),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["data"]["name"], "Lev Tolstoy");

    let deleted = app
        .request("DELETE", &format!("/authors/{author_id}"), None, Some(&admin))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &format!("/books/{book_id}"), None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via LIBRARY_TEST_DATABASE_URL"]
async fn test_book_with_unknown_author_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.login_as("root", UserRole::Admin).await;

    let response = app
        .request(
            "POST",
            "/books",
            Some(json!({ "name": "ghost", "title": "Ghost", "author_id": 999 })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via LIBRARY_TEST_DATABASE_URL"]
async fn test_user_administration() {
    let app = TestApp::new().await;
    let admin = app.login_as("root", UserRole::Admin).await;
    let reader = app.login_as("reader", UserRole::User).await;

    let listed = app.request("GET", "/users", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let users = listed.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    let forbidden = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "x", "email": "x@example.com", "password": "secret1" })),
            Some(&reader),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "bob", "email": "bob@example.com", "password": "secret1" })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["role"], "user");
    let bob_id = created.body["data"]["id"].as_i64().unwrap();

    let duplicate = app
        .request(
            "PUT",
            &format!("/users/{bob_id}"),
            Some(json!({ "username": "reader", "email": "bob@example.com", "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let promoted = app
        .request(
            "PUT",
            &format!("/users/{bob_id}"),
            Some(json!({ "username": "bob", "email": "bob@example.com", "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["data"]["role"], "admin");

    let removed = app
        .request("DELETE", &format!("/users/{bob_id}"), None, Some(&admin))
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let missing = app.request("GET", &format!("/users/{bob_id}"), None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
