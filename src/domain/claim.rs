//! Buyer return claims, served from the returns host.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::envelope::RemoteOutcome;
use crate::core::error::ApiError;
use crate::core::nullable;
use crate::core::validate::{check_range, Validate};
use crate::domain::common::Timestamp;

macro_rules! int_code {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(v: u8) -> Result<Self, Self::Error> {
                match v {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("unknown {} code {}", stringify!($name), other)),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }
    };
}

int_code! {
    /// Where the claim was filed.
    ClaimSource { BuyerPortal = 1, Chat = 3 }
}

int_code! {
    /// Decision on the return.
    ClaimStatus { Pending = 0, Refused = 1, Approved = 2 }
}

int_code! {
    /// What happens to the goods.
    ClaimStatusEx {
        Pending = 0,
        KeptByBuyerRefused = 1,
        HandedInForDisposal = 2,
        KeptByBuyerApproved = 5,
        BackToSaleAfterCheck = 8,
        ReturnedToSeller = 10,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    pub claim_type: ClaimSource,
    pub status: ClaimStatus,
    pub status_ex: ClaimStatusEx,
    pub nm_id: i64,
    pub user_comment: String,
    /// Reply shown to the buyer.
    #[serde(deserialize_with = "nullable::required")]
    pub wb_comment: Option<String>,
    pub dt: Timestamp,
    #[serde(deserialize_with = "nullable::required")]
    pub imt_name: Option<String>,
    pub order_dt: Timestamp,
    /// Equals `dt` until the claim is reviewed.
    pub dt_update: Timestamp,
    pub photos: Vec<String>,
    pub video_paths: Vec<String>,
    /// Replies the seller may choose from.
    pub actions: Vec<String>,
    /// Kept as the remote number so integer prices stay integers.
    pub price: serde_json::Number,
    pub currency_code: String,
    /// Order id the claim refers to.
    pub srid: String,
}

impl Claim {
    pub const MAX_USER_COMMENT: usize = 1_000;
    pub const MAX_WB_COMMENT: usize = 10_000;
}

/// `/api/v1/claims` response; not wrapped in the common envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsPage {
    pub claims: Vec<Claim>,
    pub total: u64,
}

impl ClaimsPage {
    /// Length limits the remote documents for comments.
    pub fn check_limits(&self) -> Result<(), String> {
        for c in &self.claims {
            if c.user_comment.chars().count() > Claim::MAX_USER_COMMENT {
                return Err(format!("claim {}: user_comment longer than {}", c.id, Claim::MAX_USER_COMMENT));
            }
            if let Some(wb) = &c.wb_comment {
                if wb.chars().count() > Claim::MAX_WB_COMMENT {
                    return Err(format!("claim {}: wb_comment longer than {}", c.id, Claim::MAX_WB_COMMENT));
                }
            }
        }
        Ok(())
    }
}

impl RemoteOutcome for ClaimsPage {
    fn is_remote_error(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetClaimsQuery {
    /// `false`: under review, `true`: archived.
    pub is_archive: bool,
    /// Claim id (UUID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Page size, default 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 200))]
    pub limit: Option<u32>,
    /// Number of claims to skip, default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Article number filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<i64>,
}

impl GetClaimsQuery {
    pub const MAX_LIMIT: u32 = 200;
}

impl Validate for GetClaimsQuery {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(limit) = self.limit {
            check_range("limit", limit, 1, Self::MAX_LIMIT)?;
        }
        if let Some(id) = &self.id {
            Uuid::parse_str(id).map_err(|e| ApiError::InvalidInput(format!("id must be a UUID: {e}")))?;
        }
        Ok(())
    }
}
