use crate::core::envelope::ResponseEnvelope;
use crate::core::error::ApiError;
use crate::core::validate::Validate;
use crate::domain::{GetSupplierValuationsRequest, SupplierValuations};
use crate::infra::credentials::ApiKey;

use super::{WbClient, SUPPLIER_VALUATIONS_PATH};

impl WbClient {
    /// Reason-code tables for feedback complaints and product problems.
    pub async fn get_supplier_valuations(
        &self,
        req: &GetSupplierValuationsRequest,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<SupplierValuations>, ApiError> {
        req.validate()?;
        let mut b = self.http.get(self.feedbacks_url(SUPPLIER_VALUATIONS_PATH));
        if let Some(locale) = &req.locale {
            b = b.header("X-Locale", locale.as_str());
        }
        self.fetch_json("getSupplierValuations", b, api_key).await
    }
}
