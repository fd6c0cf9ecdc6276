//! Reply To Question use case
//!
//! Validates a reply and appends it to an existing question.

use crate::ports::activity_log::{ActivityEvent, ActivityLogger, NoActivityLog};
use crate::use_cases::shared::{StoreFailure, store_failure};
use forum_domain::{ForumRepository, PostContent, PostKind, QuestionId, Reply, ValidationErrors};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while replying to a question
#[derive(Error, Debug)]
pub enum ReplyToQuestionError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("Store failure: {0}")]
    Store(StoreFailure),
}

/// Input for the ReplyToQuestion use case
#[derive(Debug, Clone)]
pub struct ReplyToQuestionInput {
    pub question_id: QuestionId,
    pub author: String,
    pub message: String,
}

impl ReplyToQuestionInput {
    pub fn new(
        question_id: QuestionId,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            author: author.into(),
            message: message.into(),
        }
    }
}

/// Use case for replying to a question
pub struct ReplyToQuestionUseCase<R: ForumRepository + 'static> {
    repository: Arc<R>,
    activity: Arc<dyn ActivityLogger>,
}

impl<R: ForumRepository + 'static> ReplyToQuestionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            activity: Arc::new(NoActivityLog),
        }
    }

    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.activity = activity;
        self
    }

    pub fn execute(&self, input: ReplyToQuestionInput) -> Result<Reply, ReplyToQuestionError> {
        let question_id = input.question_id;
        let content = match PostContent::try_new(PostKind::Reply, input.author, input.message) {
            Ok(content) => content,
            Err(errors) => {
                debug!("Rejected reply to question {}: {}", question_id, errors);
                self.activity.log(ActivityEvent::new(
                    "reply_rejected",
                    json!({ "questionId": question_id, "errors": errors.errors() }),
                ));
                return Err(errors.into());
            }
        };

        let (author, message) = content.into_parts();
        let reply = self
            .repository
            .add_reply(question_id, author, message)
            .map_err(|e| ReplyToQuestionError::Store(store_failure("add_reply", e)))?
            .ok_or(ReplyToQuestionError::QuestionNotFound(question_id))?;

        info!(
            "Reply {} posted to question {} by {}",
            reply.id, reply.question_id, reply.author
        );
        self.activity.log(ActivityEvent::new(
            "reply_posted",
            json!({
                "replyId": reply.id,
                "questionId": reply.question_id,
                "author": reply.author,
                "messageBytes": reply.message.len(),
            }),
        ));

        Ok(reply)
    }
}
