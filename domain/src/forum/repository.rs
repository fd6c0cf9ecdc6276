//! Forum repository trait

use super::entities::{Question, Reply};
use super::value_objects::QuestionId;

/// Authoritative registry of questions and their replies, and the sole
/// allocator of question and reply ids.
///
/// This is a domain-level abstraction; implementations live in the
/// infrastructure layer. Every method is synchronous and must be safe to call
/// from many threads at once.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - question ids and reply ids come from two independent sequences, each
///   starting at 1 and growing by one per successful creation
/// - a failed [`add_reply`](Self::add_reply) (unknown question) does not
///   consume a reply id
/// - appends to one question are serialized and never lost, while appends to
///   different questions do not wait on each other
/// - readers never observe an id that has been allocated but not stored, nor
///   a partially appended reply
///
/// Inputs are not re-validated; callers reject blank fields beforehand.
pub trait ForumRepository: Send + Sync {
    /// Error type for contract failures (never used for "not found")
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store a new question with an empty reply list and return it.
    fn create_question(&self, author: String, message: String) -> Result<Question, Self::Error>;

    /// Snapshot of every stored question in creation order.
    fn list_questions(&self) -> Result<Vec<Question>, Self::Error>;

    /// Snapshot of one question with all replies appended so far.
    ///
    /// Returns `Ok(None)` for an unknown id.
    fn get_question(&self, id: QuestionId) -> Result<Option<Question>, Self::Error>;

    /// Append a reply to an existing question and return it.
    ///
    /// Returns `Ok(None)` when the question does not exist.
    fn add_reply(
        &self,
        question_id: QuestionId,
        author: String,
        message: String,
    ) -> Result<Option<Reply>, Self::Error>;

    /// Number of stored questions.
    fn question_count(&self) -> Result<usize, Self::Error> {
        self.list_questions().map(|questions| questions.len())
    }
}
