//! Output formatter trait

use super::{ConsoleFormatter, JsonFormatter};
use forum_application::TrafficReport;
use forum_domain::{FieldError, OutputFormat, Question, Reply};

/// Renders forum outcomes for the terminal.
///
/// Every method returns the complete text to print for one result.
pub trait OutputFormatter: Send + Sync {
    /// 201: a question was stored
    fn question_created(&self, question: &Question) -> String;

    /// 200 with the questions, or 204 when the board is empty
    fn question_list(&self, questions: &[Question]) -> String;

    /// 200: one question with all of its replies
    fn question_detail(&self, question: &Question) -> String;

    /// 201: a reply was stored
    fn reply_created(&self, reply: &Reply) -> String;

    /// 400: input rejected, one entry per offending field
    fn invalid_input(&self, errors: &[FieldError]) -> String;

    /// 404
    fn not_found(&self, message: &str) -> String;

    /// The store failed; not a business outcome
    fn failure(&self, message: &str) -> String;

    /// Board totals
    fn board_summary(&self, questions: usize, replies: usize) -> String;

    /// Result of a traffic simulation run
    fn traffic_report(&self, report: &TrafficReport) -> String;
}

/// Pick the formatter for a configured output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
