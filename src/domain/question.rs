//! Buyer questions and the request contracts of the question endpoints.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::core::error::ApiError;
use crate::core::nullable;
use crate::core::validate::{check_min, check_not_blank, check_range, Validate};
use crate::domain::common::{SortOrder, Timestamp};
use crate::domain::product::ProductReference;

/// State of a question as reported by the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionState {
    /// Rejected by the seller, hidden from buyers.
    None,
    /// Answered and shown on the storefront.
    WbRu,
    /// New question.
    SuppliersPortalSynch,
}

/// Verdict a seller may set when answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum QuestionReplyState {
    /// Reject the question; it is not shown to the buyer.
    None,
    /// Publish the answer.
    WbRu,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub text: String,
    pub editable: bool,
    pub create_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub created_date: Timestamp,
    pub state: QuestionState,
    #[serde(deserialize_with = "nullable::required")]
    pub answer: Option<QuestionAnswer>,
    pub product_details: ProductReference,
    pub was_viewed: bool,
    /// Suspicious content; shown with a warning.
    pub is_warned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub count_unanswered: u64,
    pub count_archive: u64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnansweredQuestionCounters {
    pub count_unanswered: u64,
    pub count_unanswered_today: u64,
}

// --- request contracts ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetQuestionByIdRequest {
    /// Question id.
    pub id: String,
}

impl Validate for GetQuestionByIdRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_not_blank("id", &self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetQuestionsQuery {
    /// Answered (`true`) or unanswered (`false`) questions.
    pub is_answered: bool,
    /// Number of questions to return (max 10000).
    #[schemars(range(min = 1, max = 10000))]
    pub take: u32,
    /// Number of questions to skip (max 10000).
    #[schemars(range(min = 0, max = 10000))]
    pub skip: u32,
    /// Article number filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Period start, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<i64>,
    /// Period end, Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<i64>,
}

impl GetQuestionsQuery {
    pub const MAX_TAKE: u32 = 10_000;
    pub const MAX_SKIP: u32 = 10_000;
}

impl Validate for GetQuestionsQuery {
    fn validate(&self) -> Result<(), ApiError> {
        check_range("take", self.take, 1, Self::MAX_TAKE)?;
        check_range("skip", self.skip, 0, Self::MAX_SKIP)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetQuestionsCountQuery {
    /// Period start, Unix timestamp.
    pub date_from: i64,
    /// Period end, Unix timestamp.
    pub date_to: i64,
    /// Answered (`true`) or unanswered (`false`); the remote defaults to answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_answered: Option<bool>,
}

impl Validate for GetQuestionsCountQuery {
    fn validate(&self) -> Result<(), ApiError> {
        check_min("dateTo", self.date_to, self.date_from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnswerText {
    /// Answer shown to the buyer.
    pub text: String,
}

/// Body of `PATCH /api/v1/questions`: either mark a question viewed or
/// answer/reject it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchQuestionRequest {
    #[serde(rename_all = "camelCase")]
    Answer {
        /// Question id.
        id: String,
        answer: AnswerText,
        state: QuestionReplyState,
    },
    #[serde(rename_all = "camelCase")]
    MarkViewed {
        /// Question id.
        id: String,
        /// Viewed (`true`) or not viewed (`false`).
        was_viewed: bool,
    },
}

impl PatchQuestionRequest {
    pub fn id(&self) -> &str {
        match self {
            PatchQuestionRequest::Answer { id, .. } | PatchQuestionRequest::MarkViewed { id, .. } => id,
        }
    }
}

impl Validate for PatchQuestionRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_not_blank("id", self.id())?;
        if let PatchQuestionRequest::Answer { answer, state: QuestionReplyState::WbRu, .. } = self {
            check_not_blank("answer.text", &answer.text)?;
        }
        Ok(())
    }
}

/// Flat tool arguments for `patchQuestion`; exactly one of `wasViewed` or
/// `answer` + `state` must be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchQuestionArgs {
    /// Question id.
    pub id: String,
    /// Mark the question viewed (`true`) or not viewed (`false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_viewed: Option<bool>,
    /// Answer to publish or edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerText>,
    /// `wbRu` publishes the answer, `none` rejects the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<QuestionReplyState>,
}

impl TryFrom<PatchQuestionArgs> for PatchQuestionRequest {
    type Error = ApiError;

    fn try_from(args: PatchQuestionArgs) -> Result<Self, Self::Error> {
        match (args.was_viewed, args.answer, args.state) {
            (Some(was_viewed), None, None) => Ok(PatchQuestionRequest::MarkViewed { id: args.id, was_viewed }),
            (None, Some(answer), Some(state)) => Ok(PatchQuestionRequest::Answer { id: args.id, answer, state }),
            (None, None, Some(QuestionReplyState::None)) => Ok(PatchQuestionRequest::Answer {
                id: args.id,
                answer: AnswerText { text: String::new() },
                state: QuestionReplyState::None,
            }),
            _ => Err(ApiError::InvalidInput(
                "expected either wasViewed, or answer together with state".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question_json() -> serde_json::Value {
        json!({
            "id": "n5um6IUBQOOSTxXoo0gV",
            "text": "Does it fit a 40mm burr?",
            "createdDate": "2024-06-01T10:00:00Z",
            "state": "wbRu",
            "answer": { "text": "Yes", "editable": true, "createDate": "2024-06-01T12:00:00Z" },
            "productDetails": {
                "nmId": 14917842,
                "imtId": 11157265,
                "productName": "Coffee grinder",
                "supplierArticle": "CG-01",
                "supplierName": "Kitchen Co",
                "brandName": "Grindr"
            },
            "wasViewed": true,
            "isWarned": false
        })
    }

    #[test]
    fn question_survives_unchanged() {
        let raw = question_json();
        let q: Question = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(q.state, QuestionState::WbRu);
        assert_eq!(serde_json::to_value(&q).unwrap(), raw);
    }

    #[test]
    fn unanswered_question_needs_explicit_null_answer() {
        let mut raw = question_json();
        raw["answer"] = json!(null);
        let q: Question = serde_json::from_value(raw.clone()).unwrap();
        assert!(q.answer.is_none());
        assert_eq!(serde_json::to_value(&q).unwrap(), raw);
        raw.as_object_mut().unwrap().remove("answer");
        assert!(serde_json::from_value::<Question>(raw).is_err());
    }

    #[test]
    fn question_state_has_its_own_values() {
        let mut raw = question_json();
        raw["state"] = json!("suppliersPortalSynch");
        assert!(serde_json::from_value::<Question>(raw.clone()).is_ok());
        raw["state"] = json!("rejected");
        assert!(serde_json::from_value::<Question>(raw).is_err());
    }

    #[test]
    fn question_requires_warning_flag() {
        let mut raw = question_json();
        raw.as_object_mut().unwrap().remove("isWarned");
        assert!(serde_json::from_value::<Question>(raw).is_err());
    }

    #[test]
    fn questions_take_over_limit_is_rejected() {
        let q = GetQuestionsQuery {
            is_answered: false,
            take: 10_001,
            skip: 0,
            nm_id: None,
            order: None,
            date_from: None,
            date_to: None,
        };
        let err = q.validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn patch_body_picks_variant_from_shape() {
        let viewed: PatchQuestionRequest =
            serde_json::from_value(json!({"id": "q1", "wasViewed": true})).unwrap();
        assert_eq!(viewed, PatchQuestionRequest::MarkViewed { id: "q1".into(), was_viewed: true });

        let answer: PatchQuestionRequest = serde_json::from_value(
            json!({"id": "q1", "answer": {"text": "Yes"}, "state": "wbRu"}),
        )
        .unwrap();
        assert!(matches!(answer, PatchQuestionRequest::Answer { state: QuestionReplyState::WbRu, .. }));
    }

    #[test]
    fn patch_body_serializes_back_to_wire_shape() {
        let body = PatchQuestionRequest::MarkViewed { id: "q1".into(), was_viewed: false };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"id": "q1", "wasViewed": false}));
    }

    #[test]
    fn publishing_empty_answer_is_rejected() {
        let body = PatchQuestionRequest::Answer {
            id: "q1".into(),
            answer: AnswerText { text: " ".into() },
            state: QuestionReplyState::WbRu,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn flat_args_map_to_request_variants() {
        let viewed = PatchQuestionArgs { id: "q1".into(), was_viewed: Some(true), answer: None, state: None };
        assert_eq!(
            PatchQuestionRequest::try_from(viewed).unwrap(),
            PatchQuestionRequest::MarkViewed { id: "q1".into(), was_viewed: true }
        );

        let answer = PatchQuestionArgs {
            id: "q1".into(),
            was_viewed: None,
            answer: Some(AnswerText { text: "Yes".into() }),
            state: Some(QuestionReplyState::WbRu),
        };
        assert!(matches!(
            PatchQuestionRequest::try_from(answer).unwrap(),
            PatchQuestionRequest::Answer { state: QuestionReplyState::WbRu, .. }
        ));
    }

    #[test]
    fn ambiguous_flat_args_are_rejected() {
        let both = PatchQuestionArgs {
            id: "q1".into(),
            was_viewed: Some(true),
            answer: Some(AnswerText { text: "Yes".into() }),
            state: Some(QuestionReplyState::WbRu),
        };
        assert!(PatchQuestionRequest::try_from(both).is_err());

        let neither = PatchQuestionArgs { id: "q1".into(), was_viewed: None, answer: None, state: None };
        assert!(PatchQuestionRequest::try_from(neither).is_err());
    }
}
