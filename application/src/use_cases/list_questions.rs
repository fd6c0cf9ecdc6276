//! List Questions use case

use crate::use_cases::shared::{StoreFailure, store_failure};
use forum_domain::{ForumRepository, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ListQuestionsError {
    #[error("Store failure: {0}")]
    Store(StoreFailure),
}

/// Every stored question, in creation order
#[derive(Debug, Clone, Default)]
pub struct ListQuestionsOutput {
    pub questions: Vec<Question>,
}

impl ListQuestionsOutput {
    /// An empty board is a normal outcome ("no content"), not an error.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Total replies across all listed questions.
    pub fn reply_total(&self) -> usize {
        self.questions.iter().map(Question::reply_count).sum()
    }
}

/// Use case for listing all questions
pub struct ListQuestionsUseCase<R: ForumRepository + 'static> {
    repository: Arc<R>,
}

impl<R: ForumRepository + 'static> ListQuestionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<ListQuestionsOutput, ListQuestionsError> {
        let questions = self
            .repository
            .list_questions()
            .map_err(|e| ListQuestionsError::Store(store_failure("list_questions", e)))?;
        debug!("Listed {} questions", questions.len());
        Ok(ListQuestionsOutput { questions })
    }
}
