use std::process::ExitCode;

use wb_communications_mcp::infra::{credentials, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = credentials::load_env_file(None);
    logging::init();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }
    wb_communications_mcp::cli::run().await
}
