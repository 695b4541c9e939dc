use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::infra::runtime::mcp_transport::{self, LocalSessionManager};
use crate::tools::communications::{CommunicationsRouter, CommunicationsSvc};

/// `/healthz` plus streamable MCP at `/mcp`.
pub fn build_app(
    factory: impl Fn() -> (CommunicationsSvc, CommunicationsRouter) + Send + Sync + Clone + 'static,
) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = mcp_transport::make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::wb::WbClient;
    use crate::infra::credentials::Credentials;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use hyper::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let client = WbClient::new("http://feedbacks.test", "http://returns.test").unwrap();
        let credentials = Arc::new(Credentials::default());
        build_app(move || (CommunicationsSvc::new(client.clone(), credentials.clone()), CommunicationsSvc::router()))
    }

    #[tokio::test]
    async fn healthz_says_ok() {
        let res = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let res = app()
            .oneshot(Request::builder().uri("/v1/grammar/check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
