pub mod editor;
pub mod enhance;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;

/// Cap on request bodies outside the photo upload route.
pub const JSON_BODY_LIMIT: usize = 1_000_000;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::api_health_handler))
        // Text enhancement proxy
        .route("/api/optimize", post(enhance::handle_optimize))
        .route("/api/translate", post(enhance::handle_translate))
        // Editor session
        .route("/api/v1/cv", get(editor::handle_get_cv))
        .route("/api/v1/cv/render", get(editor::handle_render))
        .route("/api/v1/cv/outline", get(editor::handle_outline))
        .route("/api/v1/cv/focus", post(editor::handle_focus))
        .route("/api/v1/cv/blur", post(editor::handle_blur))
        .route("/api/v1/cv/experiences", post(editor::handle_add_experience))
        .route(
            "/api/v1/cv/experiences/:id",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        .route("/api/v1/cv/education", post(editor::handle_add_education))
        .route(
            "/api/v1/cv/education/:id",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        .route("/api/v1/cv/lists/:field", post(editor::handle_add_list_item))
        .route(
            "/api/v1/cv/lists/:field/:index",
            patch(editor::handle_update_list_item).delete(editor::handle_remove_list_item),
        )
        .route("/api/v1/cv/template", put(editor::handle_set_template))
        .route("/api/v1/cv/locale", put(editor::handle_set_locale))
        .route(
            "/api/v1/cv/photo",
            post(editor::handle_upload_photo)
                .delete(editor::handle_remove_photo)
                .layer(DefaultBodyLimit::max(editor::PHOTO_BODY_LIMIT)),
        )
        .route("/api/v1/cv/photo/drag/start", post(editor::handle_drag_start))
        .route("/api/v1/cv/photo/drag/move", post(editor::handle_drag_move))
        .route("/api/v1/cv/photo/drag/end", post(editor::handle_drag_end))
        .route(
            "/api/v1/cv/summary/optimize",
            post(editor::handle_optimize_summary),
        )
        // Snapshot persistence and export
        .route("/api/v1/cv/save", post(editor::handle_save))
        .route("/api/v1/cv/load", post(editor::handle_load))
        .route("/api/v1/cv/export", get(editor::handle_export))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use super::build_router;
    use crate::config::Config;
    use crate::llm_client::{LlmError, TextEnhancer};
    use crate::state::AppState;

    /// Deterministic enhancer that tags its input.
    pub struct StubEnhancer;

    #[async_trait]
    impl TextEnhancer for StubEnhancer {
        async fn optimize(&self, text: &str, context: &str) -> Result<String, LlmError> {
            Ok(format!("[optimized:{context}] {text}"))
        }

        async fn translate(&self, text: &str) -> Result<String, LlmError> {
            Ok(format!("[translated] {text}"))
        }
    }

    /// Enhancer whose every call fails upstream.
    pub struct FailingEnhancer;

    #[async_trait]
    impl TextEnhancer for FailingEnhancer {
        async fn optimize(&self, _text: &str, _context: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }

        async fn translate(&self, _text: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    /// Enhancer that signals `entered` and then waits for `release` before answering.
    #[derive(Default)]
    pub struct GatedEnhancer {
        pub entered: Notify,
        pub release: Notify,
    }

    #[async_trait]
    impl TextEnhancer for GatedEnhancer {
        async fn optimize(&self, text: &str, _context: &str) -> Result<String, LlmError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(format!("[gated] {text}"))
        }

        async fn translate(&self, text: &str) -> Result<String, LlmError> {
            Ok(text.to_string())
        }
    }

    pub fn test_app() -> (Router, TempDir) {
        test_app_with(Arc::new(StubEnhancer))
    }

    pub fn test_app_with(enhancer: Arc<dyn TextEnhancer>) -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = dir.path().join("cv.json").display().to_string();
        let config = Config::from_lookup(|key| match key {
            "SNAPSHOT_PATH" => Some(snapshot_path.clone()),
            _ => None,
        })
        .unwrap();
        (build_router(AppState::new(config, enhancer)), dir)
    }

    /// Sends one request. An empty body comes back as `Value::Null`, a non-JSON one
    /// as `Value::String`.
    pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::json;

    use super::test_support::{json_request, send, test_app};
    use super::JSON_BODY_LIMIT;

    #[tokio::test]
    async fn test_oversized_json_body_is_rejected() {
        let (app, _dir) = test_app();
        let text = "a".repeat(JSON_BODY_LIMIT + 1);
        let (status, _) = send(
            &app,
            json_request(Method::POST, "/api/optimize", json!({ "text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_photo_upload_may_exceed_json_limit() {
        let (app, _dir) = test_app();
        let boundary = "cvstudio-boundary";
        let image = "P".repeat(JSON_BODY_LIMIT * 2);
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"me.png\"\r\n\
             Content-Type: image/png\r\n\r\n{image}\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/cv/photo")
            .header("content-type", format!("multipart/form-data; boundary={boundary}"))
            .body(Body::from(body))
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
    }
}
