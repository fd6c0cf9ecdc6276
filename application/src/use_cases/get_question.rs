//! Get Question use case
//!
//! Fetches one question together with its replies.

use crate::use_cases::shared::{StoreFailure, store_failure};
use forum_domain::{ForumRepository, Question, QuestionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GetQuestionError {
    #[error("Question {0} not found")]
    NotFound(QuestionId),

    #[error("Store failure: {0}")]
    Store(StoreFailure),
}

impl GetQuestionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GetQuestionError::NotFound(_))
    }
}

/// Use case for fetching a question thread
pub struct GetQuestionUseCase<R: ForumRepository + 'static> {
    repository: Arc<R>,
}

impl<R: ForumRepository + 'static> GetQuestionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, id: QuestionId) -> Result<Question, GetQuestionError> {
        let question = self
            .repository
            .get_question(id)
            .map_err(|e| GetQuestionError::Store(store_failure("get_question", e)))?;

        match question {
            Some(question) => {
                debug!("Question {} has {} replies", id, question.reply_count());
                Ok(question)
            }
            None => Err(GetQuestionError::NotFound(id)),
        }
    }
}
