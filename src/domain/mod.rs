//! Canonical entity types and request contracts of the communications API.
//! Each entity is declared once and shared by every endpoint that returns it.

pub mod claim;
pub mod common;
pub mod feedback;
pub mod product;
pub mod question;
pub mod valuation;

pub use claim::{Claim, ClaimsPage, GetClaimsQuery};
pub use common::{Rating, SortOrder, Timestamp};
pub use feedback::{
    ArchivedFeedbackPage, Feedback, FeedbackPage, GetArchivedFeedbacksQuery, GetFeedbackByIdRequest,
    GetFeedbacksCountQuery, GetFeedbacksQuery, NewItemsFlags, PostFeedbackAnswerRequest,
    UnansweredFeedbackCounters,
};
pub use product::ProductReference;
pub use question::{
    GetQuestionByIdRequest, GetQuestionsCountQuery, GetQuestionsQuery, PatchQuestionArgs,
    PatchQuestionRequest, Question, QuestionPage, UnansweredQuestionCounters,
};
pub use valuation::{GetSupplierValuationsRequest, SupplierValuations};
