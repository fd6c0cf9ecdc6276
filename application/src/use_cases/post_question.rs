//! Post Question use case
//!
//! Validates a new question and stores it.

use crate::ports::activity_log::{ActivityEvent, ActivityLogger, NoActivityLog};
use crate::use_cases::shared::{StoreFailure, store_failure};
use forum_domain::{ForumRepository, PostContent, PostKind, Question, ValidationErrors};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while posting a question
#[derive(Error, Debug)]
pub enum PostQuestionError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Store failure: {0}")]
    Store(StoreFailure),
}

/// Input for the PostQuestion use case
#[derive(Debug, Clone)]
pub struct PostQuestionInput {
    pub author: String,
    pub message: String,
}

impl PostQuestionInput {
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }
}

/// Use case for posting a new question
pub struct PostQuestionUseCase<R: ForumRepository + 'static> {
    repository: Arc<R>,
    activity: Arc<dyn ActivityLogger>,
}

impl<R: ForumRepository + 'static> PostQuestionUseCase<R> {
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

    pub fn execute(&self, input: PostQuestionInput) -> Result<Question, PostQuestionError> {
        let content = match PostContent::try_new(PostKind::Question, input.author, input.message) {
            Ok(content) => content,
            Err(errors) => {
                debug!("Rejected question: {}", errors);
                self.activity.log(ActivityEvent::new(
                    "question_rejected",
                    json!({ "errors": errors.errors() }),
                ));
                return Err(errors.into());
            }
        };

        let (author, message) = content.into_parts();
        let question = self
            .repository
            .create_question(author, message)
            .map_err(|e| PostQuestionError::Store(store_failure("create_question", e)))?;

        info!("Question {} posted by {}", question.id, question.author);
        self.activity.log(ActivityEvent::new(
            "question_posted",
            json!({
                "questionId": question.id,
                "author": question.author,
                "messageBytes": question.message.len(),
            }),
        ));

        Ok(question)
    }
}
