mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_user_strips_password() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("password").is_none(), "body leaked password: {}", body);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "a@x.com");
    assert!(body["id"].is_i64());
    assert!(body["objectId"].is_string());

    Ok(())
}

#[tokio::test]
async fn duplicate_email_conflicts() -> Result<()> {
    let app = common::test_app();
    let payload = json!({ "name": "Ann", "email": "dup@x.com", "password": "secret1" });

    let (status, _) = common::send(&app, Method::POST, "/users", Some(payload.clone()), None).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = common::send(&app, Method::POST, "/users", Some(payload), None).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["message"], "Email already in use");

    Ok(())
}

#[tokio::test]
async fn invalid_fields_are_reported_per_field() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "A", "email": "not-an-email", "password": "short" })),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let field_errors = body["field_errors"].as_object().expect("field_errors map");
    assert!(field_errors.contains_key("name"));
    assert!(field_errors.contains_key("email"));
    assert!(field_errors.contains_key("password"));

    Ok(())
}

#[tokio::test]
async fn list_and_get_never_expose_passwords() -> Result<()> {
    let app = common::test_app();

    common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    let (status, body) = common::send(&app, Method::GET, "/users", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password").is_none());

    let (status, user) = common::send(&app, Method::GET, "/users/1", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(user.get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn get_accepts_both_identifier_forms() -> Result<()> {
    let app = common::test_app();

    let (_, created) = common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    let serial = created["id"].as_i64().unwrap();
    let object_id = created["objectId"].as_str().unwrap();

    let (status, by_serial) =
        common::send(&app, Method::GET, &format!("/users/{}", serial), None, None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, by_object) =
        common::send(&app, Method::GET, &format!("/users/{}", object_id), None, None).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(by_serial["objectId"], by_object["objectId"]);

    Ok(())
}

#[tokio::test]
async fn unknown_and_malformed_ids() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/users/99", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, _) = common::send(&app, Method::GET, "/users/not-an-id", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn update_replaces_only_provided_fields() -> Result<()> {
    let app = common::test_app();

    common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    let (status, updated) = common::send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({ "name": "Beatrice" })),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Beatrice");
    assert_eq!(updated["email"], "a@x.com");
    assert!(updated.get("password").is_none());

    // Invalid present field still fails
    let (status, body) = common::send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({ "email": "nope" })),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Missing user is 404
    let (status, _) = common::send(
        &app,
        Method::PUT,
        "/users/42",
        Some(json!({ "name": "Nobody" })),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn updated_password_works_for_login() -> Result<()> {
    let app = common::test_app();

    common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    common::send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({ "password": "changed1" })),
        None,
    )
    .await?;

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "a@x.com", "password": "changed1" })),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn delete_user_then_404() -> Result<()> {
    let app = common::test_app();

    common::send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" })),
        None,
    )
    .await?;

    let (status, body) = common::send(&app, Method::DELETE, "/users/1", None, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = common::send(&app, Method::GET, "/users/1", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send(&app, Method::DELETE, "/users/1", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
