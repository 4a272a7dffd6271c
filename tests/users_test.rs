//! Integration tests for user records and the admin role.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_upsert_user_returns_result_and_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("PUT", "/users/new@x.com", Some(json!({"name": "New"})), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["upsertedCount"], 1);
    assert_eq!(response.body["result"]["matchedCount"], 0);

    let token = response.body["token"].as_str().unwrap();
    let claims = app.state.jwt_decoder.decode_token(token).unwrap();
    assert_eq!(claims.email, "new@x.com");

    let user = app
        .state
        .user_repo
        .find_by_email("new@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.document["name"], "New");
}

#[tokio::test]
async fn test_upsert_user_without_body() {
    let app = helpers::TestApp::new().await;

    let response = app.request_without_body("PUT", "/users/bob@x.com", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["upsertedCount"], 1);

    let token = response.body["token"].as_str().unwrap();
    let claims = app.state.jwt_decoder.decode_token(token).unwrap();
    assert_eq!(claims.email, "bob@x.com");

    let user = app
        .state
        .user_repo
        .find_by_email("bob@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.document["email"], "bob@x.com");
}

#[tokio::test]
async fn test_upsert_user_with_malformed_body() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request_with_header("PUT", "/users/bob@x.com", Some(json!([1, 2])), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.state.user_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_existing_user_updates_in_place() {
    let app = helpers::TestApp::new().await;
    app.seed_user("old@x.com", None).await;

    let response = app
        .request("PUT", "/users/old@x.com", Some(json!({"name": "Renamed"})), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["matchedCount"], 1);
    assert_eq!(response.body["result"]["upsertedId"], Value::Null);
    assert_eq!(app.state.user_repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_user_cannot_change_id() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("PUT", "/users/new@x.com", Some(json!({"_id": "mine"})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_status() {
    let app = helpers::TestApp::new().await;
    app.seed_user("alice@example.com", Some("admin")).await;
    app.seed_user("bob@example.com", Some("user")).await;

    let cases = [
        ("alice@example.com", true),
        ("bob@example.com", false),
        ("nobody@example.com", false),
    ];
    for (email, admin) in cases {
        let response = app.request("GET", &format!("/admin/{email}"), None, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"admin": admin}), "{email}");
    }
}

#[tokio::test]
async fn test_make_admin() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token("root@x.com").await;
    app.seed_user("carol@x.com", None).await;

    let response = app
        .request("PUT", "/user/admin/carol@x.com", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["modifiedCount"], 1);

    let response = app.request("GET", "/admin/carol@x.com", None, None).await;
    assert_eq!(response.body["admin"], true);
}

#[tokio::test]
async fn test_make_admin_never_creates_user() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token("root@x.com").await;

    let response = app
        .request("PUT", "/user/admin/ghost@x.com", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["matchedCount"], 0);
    assert!(
        app.state
            .user_repo
            .find_by_email("ghost@x.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_make_admin_requires_admin() {
    let app = helpers::TestApp::new().await;
    app.seed_user("plain@x.com", None).await;
    let token = app.token_for("plain@x.com");

    let response = app
        .request("PUT", "/user/admin/plain@x.com", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = app.request("GET", "/admin/plain@x.com", None, None).await;
    assert_eq!(response.body["admin"], false);
}

#[tokio::test]
async fn test_update_profile() {
    let app = helpers::TestApp::new().await;
    let created = app
        .request("PUT", "/users/dana@x.com", Some(json!({})), None)
        .await;
    let id = created.body["result"]["upsertedId"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/user/{id}"),
            Some(json!({"img": "a.png", "location": "Dhaka", "phoneNumber": "017"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["matchedCount"], 1);

    let user = app
        .state
        .user_repo
        .find_by_email("dana@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.document["img"], "a.png");
    assert_eq!(user.document["location"], "Dhaka");
    assert_eq!(user.document["phoneNumber"], "017");
}

#[tokio::test]
async fn test_update_profile_upserts_unknown_id() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("PUT", "/user/fresh-id", Some(json!({"location": "Sylhet"})), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["upsertedId"], "fresh-id");
    assert_eq!(response.body["upsertedCount"], 1);
}

#[tokio::test]
async fn test_list_users_requires_credential() {
    let app = helpers::TestApp::new().await;
    app.seed_user("a@x.com", None).await;
    app.seed_user("b@x.com", None).await;

    let response = app.request("GET", "/user", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.token_for("someone@x.com");
    let response = app.request("GET", "/user", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token("root@x.com").await;
    app.seed_user("gone@x.com", None).await;

    let response = app
        .request("DELETE", "/user/gone@x.com", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"acknowledged": true, "deletedCount": 1}));
    assert!(
        app.state
            .user_repo
            .find_by_email("gone@x.com")
            .await
            .unwrap()
            .is_none()
    );
}
