//! JSON output formatter
//!
//! Each result is one compact JSON document:
//! `{"status":201,"body":{...}}`. Bodies use the same field names as the
//! forum API (`id`, `author`, `message`, `replies`, `questionId`).

use super::formatter::OutputFormatter;
use super::status::Status;
use forum_application::TrafficReport;
use forum_domain::{FieldError, Question, Reply};
use serde::Serialize;
use serde_json::json;

/// Formats forum results as JSON documents
pub struct JsonFormatter;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl JsonFormatter {
    fn render<T: Serialize>(status: Status, body: Option<&T>, error: Option<&str>) -> String {
        let envelope = Envelope {
            status: status.code(),
            body,
            error,
        };
        serde_json::to_string(&envelope).unwrap_or_else(|e| {
            json!({ "status": Status::InternalError.code(), "error": e.to_string() }).to_string()
        })
    }

    fn body<T: Serialize>(status: Status, body: &T) -> String {
        Self::render(status, Some(body), None)
    }

    fn error(status: Status, message: &str) -> String {
        Self::render::<()>(status, None, Some(message))
    }
}

impl OutputFormatter for JsonFormatter {
    fn question_created(&self, question: &Question) -> String {
        Self::body(Status::Created, question)
    }

    fn question_list(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return Self::render::<()>(Status::NoContent, None, None);
        }
        Self::body(Status::Ok, &questions)
    }

    fn question_detail(&self, question: &Question) -> String {
        Self::body(Status::Ok, question)
    }

    fn reply_created(&self, reply: &Reply) -> String {
        Self::body(Status::Created, reply)
    }

    fn invalid_input(&self, errors: &[FieldError]) -> String {
        Self::body(Status::BadRequest, &errors)
    }

    fn not_found(&self, message: &str) -> String {
        Self::error(Status::NotFound, message)
    }

    fn failure(&self, message: &str) -> String {
        Self::error(Status::InternalError, message)
    }

    fn board_summary(&self, questions: usize, replies: usize) -> String {
        Self::body(
            Status::Ok,
            &json!({ "questions": questions, "replies": replies }),
        )
    }

    fn traffic_report(&self, report: &TrafficReport) -> String {
        let body = json!({
            "questionsCreated": report.questions_created,
            "repliesCreated": report.replies_created,
            "questionsStored": report.questions_stored,
            "repliesStored": report.replies_stored,
            "elapsedMs": report.elapsed.as_millis() as u64,
            "consistent": report.is_consistent(),
            "violations": report.violations,
        });
        Self::body(Status::Ok, &body)
    }
}
