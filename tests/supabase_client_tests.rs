// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend client tests against a mock HTTP server.
//!
//! Verifies request shape (paths, filters, headers, bodies) and how backend
//! statuses map to errors.

use ecospot::db::{SupabaseDb, UserStore};
use ecospot::error::AppError;
use ecospot::models::{AuthUserInfo, NewUser, Session, UserUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "anon-key";

fn session() -> Session {
    Session::new("user-token")
}

#[tokio::test]
async fn test_auth_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "a@b.com",
            "user_metadata": {"avatar_url": "https://img"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let user = db.auth_user(&session()).await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.user_metadata.avatar_url.as_deref(), Some("https://img"));
}

#[tokio::test]
async fn test_auth_user_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid JWT"))
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let err = db.auth_user(&session()).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_select_users_filters_by_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "user_id": "u1",
            "email": "a@b.com",
            "avatar_url": null,
            "nickname": "초록지구",
            "goal": 3,
            "point": 10,
            "is_all_clear": false
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let rows = db.select_users(&session(), "u1").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nickname, "초록지구");
    assert_eq!(rows[0].point, 10);
}

#[tokio::test]
async fn test_select_users_accepts_null_all_clear() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "user_id": "u1",
            "email": "a@b.com",
            "avatar_url": "x",
            "nickname": "새싹지킴이",
            "goal": 3,
            "point": 0,
            "is_all_clear": null
        }])))
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let rows = db.select_users(&session(), "u1").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].is_all_clear, None);
}

#[tokio::test]
async fn test_select_all_clear_projection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user"))
        .and(query_param("select", "is_all_clear"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"is_all_clear": true}])))
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let rows = db.select_all_clear(&session(), "u1").await.unwrap();

    assert_eq!(rows[0].is_all_clear, Some(true));
}

#[tokio::test]
async fn test_insert_user_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "user_id": "u1",
            "email": "a@b.com",
            "avatar_url": "x",
            "nickname": "새싹지킴이",
            "goal": 3,
            "point": 0
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let info = AuthUserInfo {
        id: "u1".to_string(),
        email: "a@b.com".to_string(),
        avatar_url: "x".to_string(),
    };
    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    db.insert_user(&session(), &NewUser::from_auth(&info, "새싹지킴이"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_insert_duplicate_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key value"))
        .mount(&server)
        .await;

    let info = AuthUserInfo {
        id: "u1".to_string(),
        email: "a@b.com".to_string(),
        avatar_url: String::new(),
    };
    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let err = db
        .insert_user(&session(), &NewUser::from_auth(&info, "새싹지킴이"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_update_user_single_field() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/user"))
        .and(query_param("user_id", "eq.u1"))
        .and(body_json(json!({"goal": 5})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    db.update_user(&session(), "u1", &UserUpdate::Goal(5))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_is_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let db = SupabaseDb::new(&server.uri(), ANON_KEY);
    let err = db
        .update_user(&session(), "u1", &UserUpdate::Point(1))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Backend(msg) if msg.contains("boom")));
}
