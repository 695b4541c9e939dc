use serde::de::Error as _;

use crate::core::error::ApiError;
use crate::core::validate::Validate;
use crate::domain::{ClaimsPage, GetClaimsQuery};
use crate::infra::credentials::ApiKey;

use super::{WbClient, CLAIMS_PATH};

impl WbClient {
    /// Buyer return claims from the returns host. The response is a plain
    /// `{claims, total}` object, not the common envelope.
    pub async fn get_claims(&self, query: &GetClaimsQuery, api_key: &ApiKey) -> Result<ClaimsPage, ApiError> {
        query.validate()?;
        let b = self.http.get(self.returns_url(CLAIMS_PATH)).query(query);
        let page: ClaimsPage = self.fetch_json("getClaims", b, api_key).await?;
        page.check_limits()
            .map_err(|msg| ApiError::SchemaValidation(serde_json::Error::custom(msg)))?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::domain::claim::ClaimStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    fn query() -> GetClaimsQuery {
        GetClaimsQuery { is_archive: false, id: None, limit: Some(50), offset: None, nm_id: None }
    }

    #[tokio::test]
    async fn claims_come_from_returns_host() {
        let feedbacks = MockServer::start();
        let returns = MockServer::start();
        let m = returns.mock(|when, then| {
            when.method(GET)
                .path(CLAIMS_PATH)
                .query_param("is_archive", "false")
                .query_param("limit", "50")
                .header("authorization", "ret-tok");
            then.status(200).json_body(json!({ "claims": [fixtures::claim()], "total": 31 }));
        });
        let cli = WbClient::new(feedbacks.base_url(), returns.base_url()).unwrap();
        let page = cli.get_claims(&query(), &ApiKey::new("ret-tok").unwrap()).await.unwrap();
        m.assert();
        assert_eq!(page.total, 31);
        assert_eq!(page.claims[0].status, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn overlong_comment_fails_schema() {
        let server = MockServer::start();
        let mut claim = fixtures::claim();
        claim["user_comment"] = json!("x".repeat(1_001));
        server.mock(|when, then| {
            when.method(GET).path(CLAIMS_PATH);
            then.status(200).json_body(json!({ "claims": [claim], "total": 1 }));
        });
        let cli = WbClient::new(server.base_url(), server.base_url()).unwrap();
        let err = cli.get_claims(&query(), &ApiKey::new("tok").unwrap()).await.unwrap_err();
        assert!(matches!(err, ApiError::SchemaValidation(_)));
    }

    #[tokio::test]
    async fn limit_over_two_hundred_is_rejected_locally() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path(CLAIMS_PATH);
            then.status(200);
        });
        let cli = WbClient::new(server.base_url(), server.base_url()).unwrap();
        let mut q = query();
        q.limit = Some(201);
        let err = cli.get_claims(&q, &ApiKey::new("tok").unwrap()).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        m.assert_hits(0);
    }
}
