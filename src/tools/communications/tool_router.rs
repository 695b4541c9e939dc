use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{CallToolResult, ServerCapabilities, ServerInfo};
use rmcp::ErrorData as McpError;

use crate::clients::wb::WbClient;
use crate::core::error::ApiError;
use crate::core::validate::Validate;
use crate::domain::{
    GetArchivedFeedbacksQuery, GetClaimsQuery, GetFeedbackByIdRequest, GetFeedbacksCountQuery, GetFeedbacksQuery,
    GetQuestionByIdRequest, GetQuestionsCountQuery, GetQuestionsQuery, GetSupplierValuationsRequest,
    PatchQuestionArgs, PatchQuestionRequest, PostFeedbackAnswerRequest,
};
use crate::infra::credentials::{ApiKey, CredentialScope, Credentials};
use crate::infra::runtime::mcp_transport::ServerHandler;

use super::reply;

const INSTRUCTIONS: &str = "Tools for the Wildberries seller communications API: buyer feedback, \
questions and return claims. Results are the API response as JSON text.";

#[derive(Clone)]
pub struct CommunicationsSvc {
    pub client: WbClient,
    pub credentials: Arc<Credentials>,
}

impl ServerHandler for CommunicationsSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }
}

impl CommunicationsSvc {
    pub fn new(client: WbClient, credentials: Arc<Credentials>) -> Self {
        Self { client, credentials }
    }

    fn key(&self, scope: CredentialScope) -> Result<&ApiKey, ApiError> {
        self.credentials
            .for_scope(scope)
            .ok_or_else(|| ApiError::MissingCredentials(Credentials::missing_message(scope)))
    }

    /// Validate first so bad arguments are reported even without a token.
    fn prepare(&self, scope: CredentialScope, input: &impl Validate) -> Result<&ApiKey, ApiError> {
        input.validate()?;
        self.key(scope)
    }
}

#[rmcp::tool_router]
impl CommunicationsSvc {
    #[rmcp::tool(name = "getFeedbackById", description = "Get one feedback by its id")]
    async fn get_feedback_by_id(
        &self,
        Parameters(req): Parameters<GetFeedbackByIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &req)?;
            self.client.get_feedback_by_id(&req, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "getFeedbacks",
        description = "List processed or unprocessed feedbacks, paged with take/skip"
    )]
    async fn get_feedbacks(&self, Parameters(query): Parameters<GetFeedbacksQuery>) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &query)?;
            self.client.get_feedbacks(&query, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "getArchivedFeedbacks", description = "List archived feedbacks")]
    async fn get_archived_feedbacks(
        &self,
        Parameters(query): Parameters<GetArchivedFeedbacksQuery>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &query)?;
            self.client.get_archived_feedbacks(&query, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "getFeedbacksCount", description = "Count feedbacks for a period")]
    async fn get_feedbacks_count(
        &self,
        Parameters(query): Parameters<GetFeedbacksCountQuery>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &query)?;
            self.client.get_feedbacks_count(&query, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "getUnansweredFeedbacksCount",
        description = "Unprocessed feedback counters and the average rating"
    )]
    async fn get_unanswered_feedbacks_count(&self) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.key(CredentialScope::Communications)?;
            self.client.get_unanswered_feedbacks_count(key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "postFeedbackAnswer", description = "Answer a feedback")]
    async fn post_feedback_answer(
        &self,
        Parameters(req): Parameters<PostFeedbackAnswerRequest>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &req)?;
            self.client.post_feedback_answer(&req, key).await
        }
        .await;
        reply::acknowledged(res, format!("Answer to feedback {} accepted", req.id))
    }

    #[rmcp::tool(
        name = "getNewFeedbacksQuestions",
        description = "Whether there are unseen feedbacks or questions"
    )]
    async fn get_new_feedbacks_questions(&self) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.key(CredentialScope::Communications)?;
            self.client.get_new_feedbacks_questions(key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "getQuestionById", description = "Get one buyer question by its id")]
    async fn get_question_by_id(
        &self,
        Parameters(req): Parameters<GetQuestionByIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &req)?;
            self.client.get_question_by_id(&req, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "getQuestions",
        description = "List answered or unanswered questions, paged with take/skip"
    )]
    async fn get_questions(&self, Parameters(query): Parameters<GetQuestionsQuery>) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &query)?;
            self.client.get_questions(&query, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "getQuestionsCount", description = "Count questions for a period")]
    async fn get_questions_count(
        &self,
        Parameters(query): Parameters<GetQuestionsCountQuery>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &query)?;
            self.client.get_questions_count(&query, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(name = "getUnansweredQuestionsCount", description = "Unanswered question counters")]
    async fn get_unanswered_questions_count(&self) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.key(CredentialScope::Communications)?;
            self.client.get_unanswered_questions_count(key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "patchQuestion",
        description = "Mark a question viewed (id + wasViewed), or answer, edit or reject it (id + answer + state)"
    )]
    async fn patch_question(&self, Parameters(args): Parameters<PatchQuestionArgs>) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let req = PatchQuestionRequest::try_from(args)?;
            let key = self.prepare(CredentialScope::Communications, &req)?;
            self.client.patch_question(&req, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "getSupplierValuations",
        description = "Reason codes for feedback complaints and product problems"
    )]
    async fn get_supplier_valuations(
        &self,
        Parameters(req): Parameters<GetSupplierValuationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Communications, &req)?;
            self.client.get_supplier_valuations(&req, key).await
        }
        .await;
        reply::outcome(res)
    }

    #[rmcp::tool(
        name = "getClaims",
        description = "Buyer return claims for the last 14 days"
    )]
    async fn get_claims(&self, Parameters(query): Parameters<GetClaimsQuery>) -> Result<CallToolResult, McpError> {
        let res: Result<_, ApiError> = async {
            let key = self.prepare(CredentialScope::Returns, &query)?;
            self.client.get_claims(&query, key).await
        }
        .await;
        reply::outcome(res)
    }
}

pub type CommunicationsRouter = ToolRouter<CommunicationsSvc>;

impl CommunicationsSvc {
    pub fn router() -> CommunicationsRouter {
        Self::tool_router()
    }
}
