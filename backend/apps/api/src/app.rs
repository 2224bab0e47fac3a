//! Router Assembly

use axum::Router;
use docstore::DocumentStore;
use records::records_router;
use session::{SessionConfig, session_router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

/// Build the full application over one shared document store
pub fn build_app<S>(store: S, session_config: SessionConfig, cors: CorsLayer) -> Router
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let api = records_router(store.clone()).merge(session_router(store, session_config));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use docstore::InMemoryDocumentStore;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(
            InMemoryDocumentStore::new(),
            SessionConfig::default(),
            CorsLayer::new(),
        )
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_api() {
        let app = app();

        let (status, body) = call(&app, Method::GET, "/api/composers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = call(&app, Method::GET, "/composers", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_records_and_sessions_share_the_store() {
        let app = app();

        let (status, _) = call(
            &app,
            Method::POST,
            "/api/signup",
            Some(json!({ "username": "ada", "password": "pw", "emailAddress": "ada@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({ "username": "ada", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User logged in." }));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = app();

        let (status, body) = call(&app, Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/composers"].is_object());
        assert!(body["paths"]["/api/signup"].is_object());
    }
}
