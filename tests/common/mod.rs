#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

use museum_ticketing_server::{
    config::Config, db, routes::create_routes, state::AppState,
};

pub const PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    db_path: PathBuf,
}

impl TestApp {
    /// Fresh database file with the schema applied and exhibitions seeded.
    pub async fn new() -> Self {
        let app = Self::unseeded().await;
        db::seed_events(&app.pool).await.expect("Failed to seed test db");
        app
    }

    pub async fn unseeded() -> Self {
        let db_path = std::env::temp_dir().join(format!("museum_test_{}.db", Uuid::new_v4()));

        let config = Config {
            database_url: format!("sqlite://{}", db_path.display()),
            host: "127.0.0.1".to_string(),
            port: 0,
            max_connections: 5,
            seed_events: false,
        };

        let pool = db::connect(&config).await.expect("Failed to open test db");
        db::migrate(&pool).await.expect("Failed to migrate test db");

        let router = create_routes(AppState::new(pool.clone(), config));

        Self {
            router,
            pool,
            db_path,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, payload: Value) -> (StatusCode, Value) {
        self.post_raw(uri, payload.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Registers a visitor and logs in to learn the assigned id.
    pub async fn register_visitor(&self, email: &str) -> i64 {
        let (status, _) = self
            .post_json(
                "/register",
                json!({
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": email,
                    "phone_number": "555-0100",
                    "password": PASSWORD
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .post_json("/login", json!({ "email": email, "password": PASSWORD }))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["visitor_id"].as_i64().unwrap()
    }

    pub async fn first_event_id(&self) -> i64 {
        let (_, events) = self.get("/events").await;
        events[0]["id"].as_i64().unwrap()
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let base = self.db_path.display().to_string();
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", base, suffix));
        }
    }
}
