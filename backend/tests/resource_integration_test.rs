//! Integration tests for the resource catalog, premium gating, and admin

mod common;

use axum::http::StatusCode;
use common::TestApp;

/// Promote a user to admin directly in the database
async fn make_admin(app: &TestApp, email: &str) {
    sqlx::query("UPDATE users SET role = 'admin' WHERE email = $1")
        .bind(email)
        .execute(&app.pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_routes_are_role_gated() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let client = app.register_user("client@example.com", "Str0ng!pass").await;

    let (status, body) = app.get_auth("/api/v1/admin/users", &client).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("FORBIDDEN"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_premium_resource_locked_for_free_plan() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let admin = app.register_user("admin@example.com", "Str0ng!pass").await;
    make_admin(&app, "admin@example.com").await;

    // Seed one free and one premium resource
    app.post_auth(
        "/api/v1/admin/resources",
        r#"{"title":"Stretching 101","description":"Free guide","category":"recovery","link":"https://example.com/stretch"}"#,
        &admin,
    )
    .await;
    let (status, _body) = app
        .post_auth(
            "/api/v1/admin/resources",
            r#"{"title":"Macro masterclass","description":"Premium guide","category":"nutrition","link":"https://example.com/macros","premium":true}"#,
            &admin,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let client = app.register_user("freeuser@example.com", "Str0ng!pass").await;

    let (status, body) = app.get_auth("/api/v1/resources", &client).await;
    assert_eq!(status, StatusCode::OK);

    let resources: serde_json::Value = serde_json::from_str(&body).unwrap();
    let list = resources.as_array().unwrap();
    assert_eq!(list.len(), 2);

    for resource in list {
        if resource["premium"] == true {
            assert_eq!(resource["locked"], true);
            assert!(resource.get("link").is_none() || resource["link"].is_null());
        } else {
            assert_eq!(resource["locked"], false);
            assert!(resource["link"].is_string());
        }
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_upgrade_unlocks_premium_resources() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let admin = app.register_user("admin2@example.com", "Str0ng!pass").await;
    make_admin(&app, "admin2@example.com").await;
    app.post_auth(
        "/api/v1/admin/resources",
        r#"{"title":"Advanced programs","description":"Premium","category":"training","content":"Week 1 ...","premium":true}"#,
        &admin,
    )
    .await;

    let client = app.register_user("upgrader@example.com", "Str0ng!pass").await;

    // Before: free plan
    let (status, body) = app.get_auth("/api/v1/premium", &client).await;
    assert_eq!(status, StatusCode::OK);
    let premium: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(premium["plan"], "free");
    assert_eq!(premium["is_premium"], false);

    // Upgrade monthly
    let (status, body) = app
        .post_auth("/api/v1/premium/upgrade", r#"{"period":"monthly"}"#, &client)
        .await;
    assert_eq!(status, StatusCode::OK);
    let premium: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(premium["plan"], "premium");
    assert_eq!(premium["is_premium"], true);
    assert_eq!(premium["days_until_expiry"], 30);

    // Premium content is now served
    let (_, body) = app.get_auth("/api/v1/resources", &client).await;
    let resources: serde_json::Value = serde_json::from_str(&body).unwrap();
    let resource = &resources.as_array().unwrap()[0];
    assert_eq!(resource["locked"], false);
    assert!(resource["content"].is_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_export_json_contains_user_data() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let token = app.register_user("export@example.com", "Str0ng!pass").await;
    app.post_auth(
        "/api/v1/workouts",
        r#"{"exercise":"squats","reps":30}"#,
        &token,
    )
    .await;

    let (status, body) = app.get_auth("/api/v1/export/json", &token).await;
    assert_eq!(status, StatusCode::OK);

    let export: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(export["workouts"].as_array().unwrap().len(), 1);
    assert_eq!(export["export_version"], "1.0");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_export_csv_has_header_row() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let token = app.register_user("csv@example.com", "Str0ng!pass").await;
    app.post_auth(
        "/api/v1/workouts",
        r#"{"exercise":"plank","reps":5}"#,
        &token,
    )
    .await;

    let (status, body) = app.get_auth("/api/v1/export/csv/workouts", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("id,exercise,reps,notes,recorded_at"));
    assert!(body.contains("plank"));
}
