//! Interactive forum prompt
//!
//! Provides a readline-based interface over [`ForumSession`].

pub mod command;
mod session;

pub use command::{CommandError, ReplCommand};
pub use session::{FAREWELL, Flow, ForumSession};

use forum_domain::ForumRepository;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive forum REPL
pub struct ForumRepl<R: ForumRepository + 'static> {
    session: ForumSession<R>,
    prompt: String,
    history_path: Option<PathBuf>,
}

impl<R: ForumRepository + 'static> ForumRepl<R> {
    pub fn new(session: ForumSession<R>) -> Self {
        Self {
            session,
            prompt: "forum> ".to_string(),
            history_path: None,
        }
    }

    /// Set the input prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Persist line history to this file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(&self.prompt) {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    match self.session.handle_line(line) {
                        Flow::Continue(output) => println!("{}", output),
                        Flow::Quit => {
                            println!("{}", FAREWELL);
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", FAREWELL);
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Forum Board                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", command::help_text());
        println!();
    }
}
