use std::net::SocketAddr;
use std::sync::Arc;

use crate::clients::wb::WbClient;
use crate::infra::config::{AppConfig, Mode};
use crate::infra::credentials::{CredentialScope, Credentials};
use crate::tools::communications::{CommunicationsRouter, CommunicationsSvc};

/// Handler factory shared by both transports. Every session gets a clone of
/// the same client (one connection pool) and the same credentials.
pub fn service_factory(
    client: WbClient,
    credentials: Arc<Credentials>,
) -> impl Fn() -> (CommunicationsSvc, CommunicationsRouter) + Send + Sync + Clone + 'static {
    move || (CommunicationsSvc::new(client.clone(), credentials.clone()), CommunicationsSvc::router())
}

pub async fn run_server(cfg: &AppConfig, credentials: Credentials) -> anyhow::Result<()> {
    tracing::info!(
        mode = %cfg.server.mode,
        port = cfg.server.port,
        feedbacks_base_url = %cfg.api.feedbacks_base_url,
        returns_base_url = %cfg.api.returns_base_url,
        "BOOT wb-communications-mcp"
    );
    if credentials.for_scope(CredentialScope::Communications).is_none() {
        tracing::warn!("no API token configured; tool calls will report missing credentials");
    }

    let client = WbClient::from_config(&cfg.api)?;
    let factory = service_factory(client, Arc::new(credentials));

    if cfg.server.mode == Mode::Stdio {
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = crate::infra::http_app::build_app(factory);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.server.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::credentials::ApiKey;

    #[test]
    fn factory_shares_credentials_between_sessions() {
        let client = WbClient::new("http://feedbacks.test", "http://returns.test").unwrap();
        let creds = Arc::new(Credentials::new(ApiKey::new("tok"), None));
        let factory = service_factory(client, creds.clone());
        let (a, _) = factory();
        let (b, _) = factory();
        assert!(Arc::ptr_eq(&a.credentials, &b.credentials));
        assert_eq!(Arc::strong_count(&creds), 4);
    }
}
