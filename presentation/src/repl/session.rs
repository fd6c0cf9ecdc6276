//! Command execution for the REPL
//!
//! [`ForumSession`] runs parsed commands through the use cases and renders
//! every outcome with the configured [`OutputFormatter`]. It has no terminal
//! dependency, so the whole command surface is testable without a TTY.

use super::command::{self, CommandError, ReplCommand};
use crate::output::OutputFormatter;
use forum_application::{
    ActivityLogger, GetQuestionError, GetQuestionUseCase, ListQuestionsUseCase,
    PostQuestionError, PostQuestionInput, PostQuestionUseCase, ReplyToQuestionError,
    ReplyToQuestionInput, ReplyToQuestionUseCase,
};
use forum_domain::{FieldError, ForumRepository, ValidationErrors};
use std::sync::Arc;

/// Printed when the session ends
pub const FAREWELL: &str = "Bye!";

/// What the REPL loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and read the next line
    Continue(String),
    Quit,
}

/// Forum use cases bound to one repository and one output format
pub struct ForumSession<R: ForumRepository + 'static> {
    post: PostQuestionUseCase<R>,
    list: ListQuestionsUseCase<R>,
    get: GetQuestionUseCase<R>,
    reply: ReplyToQuestionUseCase<R>,
    formatter: Box<dyn OutputFormatter>,
}

impl<R: ForumRepository + 'static> ForumSession<R> {
    pub fn new(repository: Arc<R>, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            post: PostQuestionUseCase::new(Arc::clone(&repository)),
            list: ListQuestionsUseCase::new(Arc::clone(&repository)),
            get: GetQuestionUseCase::new(Arc::clone(&repository)),
            reply: ReplyToQuestionUseCase::new(repository),
            formatter,
        }
    }

    /// Record posts and rejections to an activity log
    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.post = self.post.with_activity_logger(Arc::clone(&activity));
        self.reply = self.reply.with_activity_logger(activity);
        self
    }

    /// Parse and run one input line.
    pub fn handle_line(&self, line: &str) -> Flow {
        match command::parse(line) {
            Ok(ReplCommand::Quit) => Flow::Quit,
            Ok(cmd) => Flow::Continue(self.run(cmd)),
            Err(err) => Flow::Continue(self.render_command_error(err)),
        }
    }

    /// Run a parsed command and render its outcome.
    pub fn run(&self, cmd: ReplCommand) -> String {
        match cmd {
            ReplCommand::Ask { author, message } => {
                match self.post.execute(PostQuestionInput::new(author, message)) {
                    Ok(question) => self.formatter.question_created(&question),
                    Err(PostQuestionError::Validation(errors)) => {
                        self.formatter.invalid_input(errors.errors())
                    }
                    Err(err @ PostQuestionError::Store(_)) => self.formatter.failure(&err.to_string()),
                }
            }
            ReplCommand::List => match self.list.execute() {
                Ok(output) => self.formatter.question_list(&output.questions),
                Err(err) => self.formatter.failure(&err.to_string()),
            },
            ReplCommand::Show(id) => match self.get.execute(id) {
                Ok(question) => self.formatter.question_detail(&question),
                Err(err @ GetQuestionError::NotFound(_)) => {
                    self.formatter.not_found(&err.to_string())
                }
                Err(err) => self.formatter.failure(&err.to_string()),
            },
            ReplCommand::Reply {
                question_id,
                author,
                message,
            } => {
                let input = ReplyToQuestionInput::new(question_id, author, message);
                match self.reply.execute(input) {
                    Ok(reply) => self.formatter.reply_created(&reply),
                    Err(ReplyToQuestionError::Validation(errors)) => {
                        self.formatter.invalid_input(errors.errors())
                    }
                    Err(err @ ReplyToQuestionError::QuestionNotFound(_)) => {
                        self.formatter.not_found(&err.to_string())
                    }
                    Err(err) => self.formatter.failure(&err.to_string()),
                }
            }
            ReplCommand::Stats => match self.list.execute() {
                Ok(output) => self
                    .formatter
                    .board_summary(output.len(), output.reply_total()),
                Err(err) => self.formatter.failure(&err.to_string()),
            },
            ReplCommand::Help => command::help_text(),
            ReplCommand::Quit => FAREWELL.to_string(),
        }
    }

    fn render_command_error(&self, err: CommandError) -> String {
        let errors = match err {
            CommandError::InvalidId(domain) => ValidationErrors::from(domain).into_errors(),
            other => vec![FieldError::new(other.to_string())],
        };
        self.formatter.invalid_input(&errors)
    }
}
