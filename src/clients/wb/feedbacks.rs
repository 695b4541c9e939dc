use crate::core::envelope::ResponseEnvelope;
use crate::core::error::ApiError;
use crate::core::validate::Validate;
use crate::domain::{
    ArchivedFeedbackPage, Feedback, FeedbackPage, GetArchivedFeedbacksQuery, GetFeedbackByIdRequest,
    GetFeedbacksCountQuery, GetFeedbacksQuery, NewItemsFlags, PostFeedbackAnswerRequest,
    UnansweredFeedbackCounters,
};
use crate::infra::credentials::ApiKey;

use super::{
    WbClient, FEEDBACKS_ANSWER_PATH, FEEDBACKS_ARCHIVE_PATH, FEEDBACKS_COUNT_PATH,
    FEEDBACKS_COUNT_UNANSWERED_PATH, FEEDBACKS_PATH, FEEDBACK_PATH, NEW_FEEDBACKS_QUESTIONS_PATH,
};

impl WbClient {
    pub async fn get_feedback_by_id(
        &self,
        req: &GetFeedbackByIdRequest,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<Feedback>, ApiError> {
        req.validate()?;
        let b = self.http.get(self.feedbacks_url(FEEDBACK_PATH)).query(req);
        self.fetch_json("getFeedbackById", b, api_key).await
    }

    pub async fn get_feedbacks(
        &self,
        query: &GetFeedbacksQuery,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<FeedbackPage>, ApiError> {
        query.validate()?;
        let b = self.http.get(self.feedbacks_url(FEEDBACKS_PATH)).query(query);
        self.fetch_json("getFeedbacks", b, api_key).await
    }

    pub async fn get_archived_feedbacks(
        &self,
        query: &GetArchivedFeedbacksQuery,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<ArchivedFeedbackPage>, ApiError> {
        query.validate()?;
        let b = self.http.get(self.feedbacks_url(FEEDBACKS_ARCHIVE_PATH)).query(query);
        self.fetch_json("getArchivedFeedbacks", b, api_key).await
    }

    /// Number of feedbacks for a period. The remote returns a bare integer as `data`.
    pub async fn get_feedbacks_count(
        &self,
        query: &GetFeedbacksCountQuery,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<u64>, ApiError> {
        query.validate()?;
        let b = self.http.get(self.feedbacks_url(FEEDBACKS_COUNT_PATH)).query(query);
        self.fetch_json("getFeedbacksCount", b, api_key).await
    }

    pub async fn get_unanswered_feedbacks_count(
        &self,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<UnansweredFeedbackCounters>, ApiError> {
        let b = self.http.get(self.feedbacks_url(FEEDBACKS_COUNT_UNANSWERED_PATH));
        self.fetch_json("getUnansweredFeedbacksCount", b, api_key).await
    }

    /// Answer a feedback. Succeeds only on `204 No Content`; the remote does
    /// not check that the id exists.
    pub async fn post_feedback_answer(&self, req: &PostFeedbackAnswerRequest, api_key: &ApiKey) -> Result<(), ApiError> {
        req.validate()?;
        let b = self.http.post(self.feedbacks_url(FEEDBACKS_ANSWER_PATH)).json(req);
        self.send_expect_no_content("postFeedbackAnswer", b, api_key).await
    }

    /// Whether unseen feedbacks or questions exist.
    pub async fn get_new_feedbacks_questions(
        &self,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<NewItemsFlags>, ApiError> {
        let b = self.http.get(self.feedbacks_url(NEW_FEEDBACKS_QUESTIONS_PATH));
        self.fetch_json("getNewFeedbacksQuestions", b, api_key).await
    }
}
