use reqwest::RequestBuilder;

use crate::infra::credentials::ApiKey;

/// Random request id for log correlation.
pub fn generate_request_id() -> String {
    format!("wbc-{}", uuid::Uuid::new_v4())
}

/// Attach the raw token and the correlation id. Returns the updated builder
/// and the request id used.
pub fn add_standard_headers(
    builder: RequestBuilder,
    api_key: &ApiKey,
    request_id: Option<String>,
) -> (RequestBuilder, String) {
    let rid = request_id.unwrap_or_else(generate_request_id);
    let b = builder
        .header(reqwest::header::AUTHORIZATION, api_key.expose())
        .header("x-request-id", rid.as_str());
    (b, rid)
}
