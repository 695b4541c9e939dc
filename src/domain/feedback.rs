//! Buyer feedback (product reviews), the seller answers attached to them and
//! the request contracts of the feedback endpoints.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::core::error::ApiError;
use crate::core::nullable;
use crate::core::validate::{check_len, check_min, check_not_blank, check_range, Validate};
use crate::domain::common::{Rating, SortOrder, Timestamp};
use crate::domain::product::ProductReference;

/// Moderation state of a seller answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackAnswerState {
    None,
    WbRu,
    ReviewRequired,
    Rejected,
}

/// Processing state of the feedback itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackState {
    None,
    WbRu,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnswer {
    pub text: String,
    pub state: FeedbackAnswerState,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoLink {
    pub full_size: String,
    pub mini_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub preview_image: String,
    /// HLS playlist.
    pub link: String,
    pub duration_sec: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "nullable::required")]
    pub text: Option<String>,
    #[serde(deserialize_with = "nullable::required")]
    pub pros: Option<String>,
    #[serde(deserialize_with = "nullable::required")]
    pub cons: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_valuation: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
    #[serde(deserialize_with = "nullable::required")]
    pub answer: Option<FeedbackAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FeedbackState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_details: Option<ProductReference>,
    #[serde(deserialize_with = "nullable::required")]
    pub photo_links: Option<Vec<PhotoLink>>,
    #[serde(deserialize_with = "nullable::required")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_viewed: Option<bool>,
    /// `""`, `ok`, `smaller` or `bigger`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_able_supplier_feedback_valuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_feedback_valuation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_able_supplier_product_valuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_product_valuation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub is_able_return_product_orders: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub return_product_orders_date: Option<Option<String>>,
    /// Buyer tags.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub bables: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_shk_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub parent_feedback_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable::double_option")]
    pub child_feedback_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPage {
    pub count_unanswered: u64,
    pub count_archive: u64,
    pub feedbacks: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedFeedbackPage {
    pub feedbacks: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnansweredFeedbackCounters {
    pub count_unanswered: u64,
    pub count_unanswered_today: u64,
    /// Average rating as a decimal string, e.g. `"4.7"`.
    pub valuation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemsFlags {
    pub has_new_questions: bool,
    pub has_new_feedbacks: bool,
}

// --- request contracts ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetFeedbackByIdRequest {
    /// Feedback id.
    pub id: String,
}

impl Validate for GetFeedbackByIdRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_not_blank("id", &self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFeedbacksQuery {
    /// Processed (`true`) or unprocessed (`false`) feedback.
    pub is_answered: bool,
    /// Article number filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<i64>,
    /// Number of feedbacks to return (max 5000).
    #[schemars(range(min = 1, max = 5000))]
    pub take: u32,
    /// Number of feedbacks to skip (max 199990).
    #[schemars(range(min = 0, max = 199990))]
    pub skip: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Period start, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<i64>,
    /// Period end, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<i64>,
}

impl GetFeedbacksQuery {
    pub const MAX_TAKE: u32 = 5_000;
    pub const MAX_SKIP: u32 = 199_990;
}

impl Validate for GetFeedbacksQuery {
    fn validate(&self) -> Result<(), ApiError> {
        check_range("take", self.take, 1, Self::MAX_TAKE)?;
        check_range("skip", self.skip, 0, Self::MAX_SKIP)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetArchivedFeedbacksQuery {
    /// Article number filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<i64>,
    /// Number of feedbacks to return (max 5000).
    #[schemars(range(min = 1, max = 5000))]
    pub take: u32,
    /// Number of feedbacks to skip.
    pub skip: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl Validate for GetArchivedFeedbacksQuery {
    fn validate(&self) -> Result<(), ApiError> {
        check_range("take", self.take, 1, GetFeedbacksQuery::MAX_TAKE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFeedbacksCountQuery {
    /// Period start, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<i64>,
    /// Period end, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<i64>,
    /// Processed (`true`) or unprocessed (`false`) feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_answered: Option<bool>,
}

impl Validate for GetFeedbacksCountQuery {
    fn validate(&self) -> Result<(), ApiError> {
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            check_min("dateTo", to, from)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PostFeedbackAnswerRequest {
    /// Feedback id. The remote does not check it.
    pub id: String,
    /// Answer text, 2 to 5000 characters.
    #[schemars(length(min = 2, max = 5000))]
    pub text: String,
}

impl PostFeedbackAnswerRequest {
    pub const MIN_TEXT: usize = 2;
    pub const MAX_TEXT: usize = 5_000;
}

impl Validate for PostFeedbackAnswerRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_not_blank("id", &self.id)?;
        check_len("text", &self.text, Self::MIN_TEXT, Self::MAX_TEXT)
    }
}
