//! Console output formatter for forum results

use super::formatter::OutputFormatter;
use super::status::Status;
use colored::{ColoredString, Colorize};
use forum_application::TrafficReport;
use forum_domain::{FieldError, Question, Reply, preview};

const LIST_PREVIEW_CHARS: usize = 60;

/// Formats forum results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn status(status: Status) -> ColoredString {
        let label = format!("[{}]", status);
        match status {
            Status::Created | Status::Ok => label.green().bold(),
            Status::NoContent | Status::BadRequest | Status::NotFound => label.yellow().bold(),
            Status::InternalError => label.red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn reply_line(reply: &Reply) -> String {
        format!(
            "{} {}",
            format!("#{} {}:", reply.id, reply.author).yellow(),
            reply.message
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn question_created(&self, question: &Question) -> String {
        format!(
            "{} Question #{} by {}",
            Self::status(Status::Created),
            question.id,
            question.author.bold()
        )
    }

    fn question_list(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return format!(
                "{} {}",
                Self::status(Status::NoContent),
                "No questions yet".dimmed()
            );
        }

        let mut output = format!("{} {} question(s)\n", Self::status(Status::Ok), questions.len());
        for question in questions {
            output.push_str(&format!(
                "  {:>4}  {:<16} {} {}\n",
                format!("#{}", question.id).cyan(),
                question.author,
                preview(&question.message, LIST_PREVIEW_CHARS),
                format!("({} replies)", question.reply_count()).dimmed()
            ));
        }
        output.trim_end().to_string()
    }

    fn question_detail(&self, question: &Question) -> String {
        let mut output = format!("{}\n", Self::status(Status::Ok));
        output.push_str(&Self::header(&format!("Question #{}", question.id)));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Author:".cyan().bold(),
            question.author
        ));
        output.push_str(&Self::indent(&question.message, "  "));
        output.push('\n');

        output.push_str(&Self::section_header(&format!(
            "Replies ({})",
            question.reply_count()
        )));
        if question.replies.is_empty() {
            output.push_str(&format!("  {}\n", "No replies yet".dimmed()));
        }
        for reply in &question.replies {
            output.push_str(&Self::indent(&Self::reply_line(reply), "  "));
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    fn reply_created(&self, reply: &Reply) -> String {
        format!(
            "{} Reply #{} to question #{} by {}",
            Self::status(Status::Created),
            reply.id,
            reply.question_id,
            reply.author.bold()
        )
    }

    fn invalid_input(&self, errors: &[FieldError]) -> String {
        let mut output = Self::status(Status::BadRequest).to_string();
        for error in errors {
            let field = error.field_name.as_deref().unwrap_or("input");
            output.push_str(&format!("\n  - {}: {}", field.bold(), error.message));
            if let Some(rejected) = &error.rejected_value {
                output.push_str(&format!(" {}", format!("(got {:?})", rejected).dimmed()));
            }
        }
        output
    }

    fn not_found(&self, message: &str) -> String {
        format!("{} {}", Self::status(Status::NotFound), message)
    }

    fn failure(&self, message: &str) -> String {
        format!("{} {}", Self::status(Status::InternalError), message)
    }

    fn board_summary(&self, questions: usize, replies: usize) -> String {
        format!(
            "{} {} question(s), {} reply(ies)",
            Self::status(Status::Ok),
            questions,
            replies
        )
    }

    fn traffic_report(&self, report: &TrafficReport) -> String {
        let mut output = Self::header("Traffic Simulation");
        output.push('\n');

        output.push_str(&format!(
            "{} {} created, {} stored\n",
            "Questions:".cyan().bold(),
            report.questions_created,
            report.questions_stored
        ));
        output.push_str(&format!(
            "{} {} created, {} stored\n",
            "Replies:  ".cyan().bold(),
            report.replies_created,
            report.replies_stored
        ));
        output.push_str(&format!(
            "{} {:.1?}\n",
            "Elapsed:  ".cyan().bold(),
            report.elapsed
        ));

        if report.is_consistent() {
            output.push_str(&format!("\n{}\n", "All invariants hold".green().bold()));
        } else {
            output.push_str(&Self::section_header("Invariant violations"));
            for violation in &report.violations {
                output.push_str(&format!("  {} {}\n", "x".red(), violation));
            }
        }

        output.push_str(&format!("{}", "=".repeat(60).cyan()));
        output
    }
}
