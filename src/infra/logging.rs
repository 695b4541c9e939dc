pub fn init() {
    // Honor RUST_LOG if set, default to info. Always write to stderr: in
    // stdio mode stdout carries the MCP frames.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Record one outbound API call: a tracing line plus `metrics` facade samples.
pub fn log_metric(operation: &'static str, outcome: &'static str, latency_ms: f64) {
    tracing::info!(operation, outcome, latency_ms, "metric");
    metrics::counter!("wb_api_requests_total", "operation" => operation, "outcome" => outcome).increment(1);
    metrics::histogram!("wb_api_latency_ms", "operation" => operation).record(latency_ms);
}
