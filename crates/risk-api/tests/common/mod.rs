//! Common test utilities for risks API tests.
//!
//! Every test builds its own store so no state leaks between tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use risk_api::{risks_router, RiskStore};
use serde_json::Value;
use tower::ServiceExt;

/// Router plus a handle on the store it serves.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<RiskStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(RiskStore::new());
        let router = risks_router(Arc::clone(&store));
        Self { router, store }
    }

    /// POST /v1/risks with an explicit content type.
    pub async fn create_with_content_type(
        &self,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/v1/risks");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        send(&self.router, builder.body(body.into()).unwrap()).await
    }

    /// POST /v1/risks with a JSON body.
    pub async fn create(&self, body: &Value) -> (StatusCode, Value) {
        self.create_with_content_type(Some("application/json"), body.to_string())
            .await
    }

    /// GET /v1/risks
    pub async fn list(&self) -> (StatusCode, Value) {
        self.get("/v1/risks").await
    }

    /// GET /v1/risks/{id}
    pub async fn get_by_id(&self, id: &str) -> (StatusCode, Value) {
        self.get(&format!("/v1/risks/{id}")).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(&self.router, request).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a request through the router and decode the JSON body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// A payload that passes validation.
pub fn valid_payload(title: &str) -> Value {
    serde_json::json!({
        "state": "open",
        "title": title,
        "description": format!("description of {title}")
    })
}
