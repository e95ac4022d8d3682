//! HTTP route handlers.
//!
//! The service exposes a single route at the root path; every other path
//! falls through to Axum's default not-found handler.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod root;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_ROOT;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the Axum router with the root route and its cache header.
pub fn create_router(state: AppState) -> Router {
    // Root - body is process configuration, keep it out of shared caches
    let root_routes = Router::new().route("/", get(root::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ROOT),
        ),
    );

    Router::new()
        .merge(root_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_span_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::{AppConfig, HttpServerConfig, LoggingConfig, DEFAULT_APP_NAME};

    fn state_with_name(app_name: &str) -> AppState {
        AppState::new(AppConfig {
            http: HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            app_name: app_name.to_string(),
            logging: LoggingConfig::default(),
        })
    }

    async fn get_body(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_serves_configured_name() {
        let app = create_router(state_with_name("My Service"));
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "My Service");
    }

    #[tokio::test]
    async fn root_serves_fallback_name() {
        let app = create_router(state_with_name(DEFAULT_APP_NAME));
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "no app name");
    }

    #[tokio::test]
    async fn repeated_requests_get_identical_responses() {
        let app = create_router(state_with_name("My Service"));
        let first = get_body(app.clone(), "/").await;
        let second = get_body(app, "/").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn non_root_paths_are_not_found() {
        let app = create_router(state_with_name("My Service"));
        let (status, _) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_response_is_not_cacheable() {
        let app = create_router(state_with_name("My Service"));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_ROOT
        );
    }
}
