//! Forum entities.
//!
//! Values handed out by a [`ForumRepository`](super::repository::ForumRepository)
//! are snapshots: the store stays the single owner of the live reply lists.

use super::value_objects::{QuestionId, ReplyId};
use serde::{Deserialize, Serialize};

/// A top-level forum post and the replies appended to it, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub author: String,
    pub message: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Question {
    /// A freshly created question has no replies.
    pub fn new(id: QuestionId, author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            message: message.into(),
            replies: Vec::new(),
        }
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}

/// A response to a question.
///
/// `question_id` is a lookup key, not an ownership link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: ReplyId,
    pub author: String,
    pub message: String,
    pub question_id: QuestionId,
}

impl Reply {
    pub fn new(
        id: ReplyId,
        question_id: QuestionId,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            message: message.into(),
            question_id,
        }
    }
}
