use crate::infra::config::ApiConfig;

/// Build the shared reqwest client from API settings. Redirects are not
/// followed: the remote never redirects and a redirect would drop the token.
pub fn make_http_client_with(cfg: &ApiConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(cfg.connect_timeout())
        .timeout(cfg.timeout())
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("wb-communications-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        assert!(make_http_client_with(&ApiConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn request_timeout_is_applied() {
        use httpmock::prelude::*;
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(std::time::Duration::from_millis(500));
        });
        let cfg = ApiConfig { timeout_ms: 50, ..ApiConfig::default() };
        let http = make_http_client_with(&cfg).unwrap();
        let err = http.get(server.url("/slow")).send().await.unwrap_err();
        assert!(err.is_timeout());
    }
}
