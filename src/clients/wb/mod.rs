//! Wildberries communications API client.
//!
//! Every endpoint adapter goes through [`WbClient::fetch_json`] or
//! [`WbClient::send_expect_no_content`], so status handling is the same for
//! all of them:
//!
//! - 401 and 429 with a problem document become `Unauthorized` / `RateLimited`
//! - any other non-success status becomes `UpstreamStatus`
//! - a success body that does not match the output type becomes `SchemaValidation`
//!
//! There are no retries. One call, one request.

mod claims;
mod feedbacks;
mod questions;
mod valuations;

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::core::error::{ApiError, RemoteProblem};
use crate::infra::config::ApiConfig;
use crate::infra::credentials::ApiKey;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::logging::log_metric;
use crate::infra::runtime::limits::make_http_client_with;

pub const FEEDBACK_PATH: &str = "/api/v1/feedback";
pub const FEEDBACKS_PATH: &str = "/api/v1/feedbacks";
pub const FEEDBACKS_ARCHIVE_PATH: &str = "/api/v1/feedbacks/archive";
pub const FEEDBACKS_COUNT_PATH: &str = "/api/v1/feedbacks/count";
pub const FEEDBACKS_COUNT_UNANSWERED_PATH: &str = "/api/v1/feedbacks/count-unanswered";
pub const FEEDBACKS_ANSWER_PATH: &str = "/api/v1/feedbacks/answer";
pub const NEW_FEEDBACKS_QUESTIONS_PATH: &str = "/api/v1/new-feedbacks-questions";
pub const QUESTION_PATH: &str = "/api/v1/question";
pub const QUESTIONS_PATH: &str = "/api/v1/questions";
pub const QUESTIONS_COUNT_PATH: &str = "/api/v1/questions/count";
pub const QUESTIONS_COUNT_UNANSWERED_PATH: &str = "/api/v1/questions/count-unanswered";
pub const SUPPLIER_VALUATIONS_PATH: &str = "/api/v1/supplier-valuations";
pub const CLAIMS_PATH: &str = "/api/v1/claims";

#[derive(Clone)]
pub struct WbClient {
    http: Client,
    feedbacks_base: String,
    returns_base: String,
}

impl WbClient {
    /// Client with default timeouts against the given hosts.
    pub fn new(feedbacks_base: impl Into<String>, returns_base: impl Into<String>) -> Result<Self, reqwest::Error> {
        let cfg = ApiConfig {
            feedbacks_base_url: feedbacks_base.into(),
            returns_base_url: returns_base.into(),
            ..ApiConfig::default()
        };
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: make_http_client_with(cfg)?,
            feedbacks_base: cfg.feedbacks_base_url.trim_end_matches('/').to_owned(),
            returns_base: cfg.returns_base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn feedbacks_url(&self, path: &str) -> String {
        format!("{}{}", self.feedbacks_base, path)
    }

    fn returns_url(&self, path: &str) -> String {
        format!("{}{}", self.returns_base, path)
    }

    /// Send and parse the body into `T`.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
        api_key: &ApiKey,
    ) -> Result<T, ApiError> {
        let resp = self.send(operation, builder, api_key, |s| s.is_success()).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(operation, error = %e, "response failed schema validation");
            ApiError::SchemaValidation(e)
        })
    }

    /// Send and require `204 No Content`.
    pub(crate) async fn send_expect_no_content(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
        api_key: &ApiKey,
    ) -> Result<(), ApiError> {
        self.send(operation, builder, api_key, |s| s == StatusCode::NO_CONTENT)
            .await
            .map(|_| ())
    }

    async fn send(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
        api_key: &ApiKey,
        accept: impl Fn(StatusCode) -> bool,
    ) -> Result<Response, ApiError> {
        let (builder, rid) = add_standard_headers(builder, api_key, None);
        let req = builder.build()?;
        let path = req.url().path().to_owned();
        let start = Instant::now();
        let sent = self.http.execute(req).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;

        let resp = match sent {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(operation, %path, request_id = %rid, error = %e, "transport error");
                log_metric(operation, "transport_error", elapsed_ms);
                return Err(ApiError::Transport(e));
            }
        };

        let status = resp.status();
        tracing::debug!(operation, %path, request_id = %rid, status = status.as_u16(), elapsed_ms, "wb api call");
        if accept(status) {
            log_metric(operation, "ok", elapsed_ms);
            return Ok(resp);
        }

        log_metric(operation, "error_status", elapsed_ms);
        let body = resp.text().await.unwrap_or_default();
        let err = classify_failure(status, body);
        tracing::warn!(operation, %path, request_id = %rid, status = status.as_u16(), kind = err.kind(), "wb api call failed");
        Err(err)
    }
}

fn classify_failure(status: StatusCode, body: String) -> ApiError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::TOO_MANY_REQUESTS {
        if let Ok(problem) = serde_json::from_str::<RemoteProblem>(&body) {
            return if status == StatusCode::UNAUTHORIZED {
                ApiError::Unauthorized(problem)
            } else {
                ApiError::RateLimited(problem)
            };
        }
    }
    ApiError::UpstreamStatus { status: status.as_u16(), body }
}


#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn key() -> ApiKey {
        ApiKey::new("tok").unwrap()
    }

    #[test]
    fn unauthorized_with_problem_document_is_structured() {
        let body = fixtures::problem(401, "Unauthorized").to_string();
        match classify_failure(StatusCode::UNAUTHORIZED, body) {
            ApiError::Unauthorized(p) => assert_eq!(p.status, 401),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_429_falls_back_to_status() {
        match classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down".into()) {
            ApiError::UpstreamStatus { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_are_plain_upstream_errors() {
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(err, ApiError::UpstreamStatus { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let cli = WbClient::new("http://feedbacks.local/", "http://returns.local").unwrap();
        assert_eq!(cli.feedbacks_url(FEEDBACKS_PATH), "http://feedbacks.local/api/v1/feedbacks");
        assert_eq!(cli.returns_url(CLAIMS_PATH), "http://returns.local/api/v1/claims");
    }

    #[tokio::test]
    async fn sends_raw_token_and_request_id() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/ping")
                .header("authorization", "tok")
                .header_exists("x-request-id")
                .header_exists("user-agent");
            then.status(200).json_body(json!(1));
        });
        let cli = WbClient::new(server.base_url(), server.base_url()).unwrap();
        let out: u32 = cli
            .fetch_json("ping", cli.http.get(server.url("/ping")), &key())
            .await
            .unwrap();
        m.assert();
        assert_eq!(out, 1);
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let cli = WbClient::new("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();
        let err = cli
            .fetch_json::<u32>("ping", cli.http.get("http://127.0.0.1:9/ping"), &key())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn no_retry_after_server_error() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/ping");
            then.status(503).body("unavailable");
        });
        let cli = WbClient::new(server.base_url(), server.base_url()).unwrap();
        let err = cli
            .fetch_json::<u32>("ping", cli.http.get(server.url("/ping")), &key())
            .await
            .unwrap_err();
        m.assert_hits(1);
        assert!(matches!(err, ApiError::UpstreamStatus { status: 503, .. }));
    }
}
