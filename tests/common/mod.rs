//! Shared test harness: a real router over a scratch SQLite database.

use axum::body::Body;
use axum::Router;
use http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use staff_admin::{AppState, Config};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

/// Build the full application router against a fresh database.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config {
        database_url: format!("sqlite://{}", dir.path().join("test.db").display()),
        http_port: 0,
        cors_allowed_origins: Vec::new(),
        environment: "development".into(),
    };
    let state = AppState::new(&config).await.expect("initialize state");

    TestApp {
        router: staff_admin::api::create_router(state),
        _dir: dir,
    }
}

impl TestApp {
    /// Send a request and return the raw response.
    pub async fn send(&self, method: &str, path: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and return status plus parsed JSON body (Null when
    /// the body is empty).
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.send(method, path, body).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Create a department and return its id.
    pub async fn create_department(&self, name: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/api/departments",
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create department: {body}");
        body["departmentId"].as_i64().unwrap()
    }

    /// Create an employee with sensible defaults and return its id.
    pub async fn create_employee(&self, department_id: i64, name: &str, email: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/api/employees",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "departmentId": department_id,
                    "role": "Developer",
                    "salary": 90000,
                    "status": true,
                    "joiningDate": "2023-01-15",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create employee: {body}");
        body["employeeId"].as_i64().unwrap()
    }
}
