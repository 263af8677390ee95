//! Shared test harness: boots the router against a disposable database.
//!
//! Database-backed tests need a test database. Configure one via
//! `GRADEBOOK__DATABASE__TEST_DATABASE_URL` (or the
//! `GRADEBOOK_TEST_DATABASE_URL` environment variable); when neither is set,
//! these tests skip with a note on stderr instead of failing.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use gradebook::{
    api::create_router,
    config::Config,
    state::{AppState, AppStateOptions},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

/// All tests share one database, so they serialize on this lock.
fn db_lock() -> Arc<tokio::sync::Mutex<()>> {
    static LOCK: OnceLock<Arc<tokio::sync::Mutex<()>>> = OnceLock::new();
    LOCK.get_or_init(|| Arc::new(tokio::sync::Mutex::new(())))
        .clone()
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _db_guard: tokio::sync::OwnedMutexGuard<()>,
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, HeaderMap, Vec<u8>)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(b))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes().to_vec();

        Ok((status, headers, bytes))
    }
}

/// Build a test app against the configured test database, or `None` when no
/// test database is available.
pub async fn try_test_app() -> Result<Option<TestApp>> {
    let mut config = Config::load()?;

    let Some(url) = config
        .database
        .test_database_url
        .clone()
        .or_else(|| std::env::var("GRADEBOOK_TEST_DATABASE_URL").ok())
    else {
        eprintln!("skipping: no test database configured");
        return Ok(None);
    };
    config.database.url = url;

    let db_guard = db_lock().lock_owned().await;

    let state = AppState::new_with_options(
        config,
        AppStateOptions {
            run_migrations: true,
        },
    )
    .await?;

    // Every test starts from clean tables with fresh identifiers.
    sqlx::query("TRUNCATE TABLE students, grades RESTART IDENTITY")
        .execute(&state.db_pool)
        .await?;

    let router = create_router(state.clone());

    Ok(Some(TestApp {
        router,
        state,
        _db_guard: db_guard,
    }))
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "unexpected status for {context}");
}

pub fn parse_json(body: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

/// Create a student over HTTP and return the stored representation.
pub async fn create_student(
    app: &TestApp,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<Value> {
    let body = json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": email,
    });

    let (status, _headers, bytes) = app
        .request(
            Method::POST,
            "/gradebook/students",
            Some(body.to_string()),
        )
        .await?;
    assert_status(status, StatusCode::CREATED, "create student");

    parse_json(&bytes)
}

/// Create a grade over HTTP, returning the response status.
pub async fn create_grade(
    app: &TestApp,
    grade: f64,
    student_id: i64,
    subject: &str,
) -> Result<StatusCode> {
    let body = json!({
        "grade": grade,
        "studentId": student_id,
        "subject": subject,
    });

    let (status, _headers, _bytes) = app
        .request(Method::POST, "/gradebook/grades", Some(body.to_string()))
        .await?;

    Ok(status)
}
