#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use maplewood_api::auth::jwt::{generate_access_token, JwtConfig};
use maplewood_api::config::ServerConfig;
use maplewood_api::router::build_app_router;
use maplewood_api::state::AppState;
use maplewood_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router, with all middleware layers, over the
/// given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// A valid bearer token for `student_id`, signed with the test secret.
pub fn bearer(student_id: DbId) -> String {
    let token = generate_access_token(student_id, &test_config().jwt).unwrap();
    format!("Bearer {token}")
}

/// Send a request through the app and return status and parsed JSON body.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

pub async fn seed_specialization(pool: &PgPool) -> DbId {
    let (id,): (DbId,) =
        sqlx::query_as("INSERT INTO specializations (name) VALUES ('Mathematics') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

pub async fn seed_student(pool: &PgPool, email: &str, grade_level: i16) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO students (first_name, last_name, email, grade_level)
         VALUES ('Ada', 'Lovelace', $1, $2) RETURNING id",
    )
    .bind(email)
    .bind(grade_level)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Insert a 1-credit fall course open to `min..=max`.
pub async fn seed_course(
    pool: &PgPool,
    specialization_id: DbId,
    code: &str,
    min: i16,
    max: i16,
    prerequisite_id: Option<DbId>,
) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO courses (code, name, credits, hours_per_week, specialization_id,
                              prerequisite_id, course_type_id, grade_level_min,
                              grade_level_max, semester_order)
         VALUES ($1, $1, 1.0, 4, $2, $3, 1, $4, $5, 1) RETURNING id",
    )
    .bind(code)
    .bind(specialization_id)
    .bind(prerequisite_id)
    .bind(min)
    .bind(max)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Insert a fall semester for `year`.
pub async fn seed_semester(pool: &PgPool, year: i32, is_active: bool) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO semesters (name, year, order_in_year, is_active)
         VALUES ('Fall', $1, 1, $2) RETURNING id",
    )
    .bind(year)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_passed(pool: &PgPool, student_id: DbId, course_id: DbId, semester_id: DbId) {
    sqlx::query(
        "INSERT INTO student_course_history (student_id, course_id, semester_id, status_id)
         VALUES ($1, $2, $3, 1)",
    )
    .bind(student_id)
    .bind(course_id)
    .bind(semester_id)
    .execute(pool)
    .await
    .unwrap();
}
