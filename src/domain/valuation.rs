use std::collections::BTreeMap;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::core::error::ApiError;
use crate::core::validate::Validate;

/// Reason-code lookup tables used when complaining about a feedback or
/// reporting a product problem. Keys are numeric codes as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierValuations {
    pub feedback_valuations: BTreeMap<String, String>,
    pub product_valuations: BTreeMap<String, String>,
}

impl SupplierValuations {
    pub fn feedback_reason(&self, code: i64) -> Option<&str> {
        self.feedback_valuations.get(&code.to_string()).map(String::as_str)
    }

    pub fn product_problem(&self, code: i64) -> Option<&str> {
        self.product_valuations.get(&code.to_string()).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetSupplierValuationsRequest {
    /// Response language: `ru`, `en` or `zh`. Sent as `X-Locale`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl GetSupplierValuationsRequest {
    pub const LOCALES: [&'static str; 3] = ["ru", "en", "zh"];
}

impl Validate for GetSupplierValuationsRequest {
    fn validate(&self) -> Result<(), ApiError> {
        match self.locale.as_deref() {
            Some(loc) if !Self::LOCALES.contains(&loc) => Err(ApiError::InvalidInput(format!(
                "locale must be one of {:?}, got {loc:?}",
                Self::LOCALES
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn looks_up_reason_codes() {
        let v: SupplierValuations = serde_json::from_value(json!({
            "feedbackValuations": {"1": "Not about the product", "3": "Spam"},
            "productValuations": {"2": "Item was swapped"}
        }))
        .unwrap();
        assert_eq!(v.feedback_reason(3), Some("Spam"));
        assert_eq!(v.product_problem(2), Some("Item was swapped"));
        assert_eq!(v.product_problem(9), None);
    }

    #[test]
    fn non_string_reason_fails() {
        let res = serde_json::from_value::<SupplierValuations>(json!({
            "feedbackValuations": {"1": 1},
            "productValuations": {}
        }));
        assert!(res.is_err());
    }

    #[test]
    fn locale_is_checked() {
        assert!(GetSupplierValuationsRequest { locale: Some("en".into()) }.validate().is_ok());
        assert!(GetSupplierValuationsRequest { locale: None }.validate().is_ok());
        assert!(GetSupplierValuationsRequest { locale: Some("de".into()) }.validate().is_err());
    }
}
