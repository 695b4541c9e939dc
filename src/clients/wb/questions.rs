use crate::core::envelope::ResponseEnvelope;
use crate::core::error::ApiError;
use crate::core::validate::Validate;
use crate::domain::{
    GetQuestionByIdRequest, GetQuestionsCountQuery, GetQuestionsQuery, PatchQuestionRequest, Question,
    QuestionPage, UnansweredQuestionCounters,
};
use crate::infra::credentials::ApiKey;

use super::{WbClient, QUESTIONS_COUNT_PATH, QUESTIONS_COUNT_UNANSWERED_PATH, QUESTIONS_PATH, QUESTION_PATH};

impl WbClient {
    pub async fn get_question_by_id(
        &self,
        req: &GetQuestionByIdRequest,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<Question>, ApiError> {
        req.validate()?;
        let b = self.http.get(self.feedbacks_url(QUESTION_PATH)).query(req);
        self.fetch_json("getQuestionById", b, api_key).await
    }

    pub async fn get_questions(
        &self,
        query: &GetQuestionsQuery,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<QuestionPage>, ApiError> {
        query.validate()?;
        let b = self.http.get(self.feedbacks_url(QUESTIONS_PATH)).query(query);
        self.fetch_json("getQuestions", b, api_key).await
    }

    pub async fn get_questions_count(
        &self,
        query: &GetQuestionsCountQuery,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<u64>, ApiError> {
        query.validate()?;
        let b = self.http.get(self.feedbacks_url(QUESTIONS_COUNT_PATH)).query(query);
        self.fetch_json("getQuestionsCount", b, api_key).await
    }

    pub async fn get_unanswered_questions_count(
        &self,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<UnansweredQuestionCounters>, ApiError> {
        let b = self.http.get(self.feedbacks_url(QUESTIONS_COUNT_UNANSWERED_PATH));
        self.fetch_json("getUnansweredQuestionsCount", b, api_key).await
    }

    /// Mark viewed, answer, edit an answer or reject. The remote replies with
    /// an envelope whose `data` is always null.
    pub async fn patch_question(
        &self,
        req: &PatchQuestionRequest,
        api_key: &ApiKey,
    ) -> Result<ResponseEnvelope<serde_json::Value>, ApiError> {
        req.validate()?;
        let b = self.http.patch(self.feedbacks_url(QUESTIONS_PATH)).json(req);
        self.fetch_json("patchQuestion", b, api_key).await
    }
}
