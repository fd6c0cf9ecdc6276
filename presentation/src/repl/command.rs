//! REPL command parsing
//!
//! Lines are split into words on whitespace; single or double quotes group
//! words (`reply 1 "Jane Doe" sounds good`) and a backslash escapes the next
//! character. The message is everything after the fixed arguments, joined
//! with single spaces.

use forum_domain::{DomainError, QuestionId};
use thiserror::Error;

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask { author: String, message: String },
    List,
    Show(QuestionId),
    Reply {
        question_id: QuestionId,
        author: String,
        message: String,
    },
    Stats,
    Help,
    Quit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    InvalidId(#[from] DomainError),
}

pub const ASK_USAGE: &str = "ask <author> <message...>";
pub const SHOW_USAGE: &str = "show <questionId>";
pub const REPLY_USAGE: &str = "reply <questionId> <author> <message...>";

/// Help text listing every command
pub fn help_text() -> String {
    [
        "Commands:".to_string(),
        format!("  {:<42} - Post a question", ASK_USAGE),
        format!("  {:<42} - List all questions", "list"),
        format!("  {:<42} - Show a question with its replies", SHOW_USAGE),
        format!("  {:<42} - Reply to a question", REPLY_USAGE),
        format!("  {:<42} - Show board totals", "stats"),
        format!("  {:<42} - Show this help", "/help, /h, /?"),
        format!("  {:<42} - Exit", "/quit, /exit, /q"),
        String::new(),
        "Quote names or messages that contain spaces: ask \"Jane Doe\" \"Is this on?\"".to_string(),
    ]
    .join("\n")
}

/// Parse one non-empty input line.
pub fn parse(line: &str) -> Result<ReplCommand, CommandError> {
    let words = split_words(line)?;
    let Some((name, args)) = words.split_first() else {
        return Err(CommandError::Usage("type /help for available commands"));
    };

    match name.as_str() {
        "ask" => {
            let author = args.first().cloned().unwrap_or_default();
            let message = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
            Ok(ReplCommand::Ask { author, message })
        }
        "list" | "ls" => Ok(ReplCommand::List),
        "show" => match args {
            [id] => Ok(ReplCommand::Show(id.parse()?)),
            _ => Err(CommandError::Usage(SHOW_USAGE)),
        },
        "reply" => {
            let Some((id, rest)) = args.split_first() else {
                return Err(CommandError::Usage(REPLY_USAGE));
            };
            let question_id = id.parse()?;
            let author = rest.first().cloned().unwrap_or_default();
            let message = rest.get(1..).map(|words| words.join(" ")).unwrap_or_default();
            Ok(ReplCommand::Reply {
                question_id,
                author,
                message,
            })
        }
        "stats" => Ok(ReplCommand::Stats),
        "/help" | "/h" | "/?" | "help" => Ok(ReplCommand::Help),
        "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn split_words(line: &str) -> Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_word = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
