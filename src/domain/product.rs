use serde::{Deserialize, Serialize};

use crate::core::nullable;

/// Catalogue entry a feedback or question refers to.
///
/// Archived feedback may leave out any of these keys, so all of them are
/// optional. The seller-side names may also be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReference {
    /// Article number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<i64>,
    /// Card id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imt_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub supplier_article: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub supplier_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub brand_name: Option<Option<String>>,
    /// Absent on questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}
