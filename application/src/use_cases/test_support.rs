//! Test doubles shared by the use case tests.

use crate::ports::activity_log::{ActivityEvent, ActivityLogger};
use forum_domain::{ForumRepository, Question, QuestionId, Reply, ReplyId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, thiserror::Error)]
#[error("mock store unavailable")]
pub struct MockStoreError;

#[derive(Default)]
struct MockState {
    questions: Vec<Question>,
    last_question_id: u64,
    last_reply_id: u64,
}

/// Coarse-locked repository; good enough to exercise the use cases.
#[derive(Default)]
pub struct MockRepository {
    state: Mutex<MockState>,
    failing: AtomicBool,
}

impl MockRepository {
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.failing.store(true, Ordering::SeqCst);
        repo
    }

    fn check(&self) -> Result<(), MockStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(MockStoreError)
        } else {
            Ok(())
        }
    }
}

impl ForumRepository for MockRepository {
    type Error = MockStoreError;

    fn create_question(&self, author: String, message: String) -> Result<Question, Self::Error> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.last_question_id += 1;
        let question = Question::new(QuestionId::new(state.last_question_id), author, message);
        state.questions.push(question.clone());
        Ok(question)
    }

    fn list_questions(&self) -> Result<Vec<Question>, Self::Error> {
        self.check()?;
        Ok(self.state.lock().unwrap().questions.clone())
    }

    fn get_question(&self, id: QuestionId) -> Result<Option<Question>, Self::Error> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state.questions.iter().find(|q| q.id == id).cloned())
    }

    fn add_reply(
        &self,
        question_id: QuestionId,
        author: String,
        message: String,
    ) -> Result<Option<Reply>, Self::Error> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.questions.iter().position(|q| q.id == question_id) else {
            return Ok(None);
        };
        state.last_reply_id += 1;
        let reply = Reply::new(ReplyId::new(state.last_reply_id), question_id, author, message);
        state.questions[index].replies.push(reply.clone());
        Ok(Some(reply))
    }
}

/// Activity logger that keeps every event in memory.
#[derive(Default)]
pub struct RecordingActivityLog {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingActivityLog {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }
}

impl ActivityLogger for RecordingActivityLog {
    fn log(&self, event: ActivityEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
