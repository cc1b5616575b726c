//! Line-oriented command interpreter over a [`PointsTrie`].
//!
//! The shell reads one command per line from any [`BufRead`], runs it against
//! the trie it owns and writes results to any [`Write`]. Command errors are
//! printed and the loop continues; only I/O failures end it early.

mod command;

use std::io::{BufRead, Write};

use tracing::debug;

pub use command::{Command, HELP_TEXT};

use crate::config::ShellConfig;
use crate::error::{CommandError, TrieShellResult};
use crate::trie::PointsTrie;

/// What a successfully executed command asks the shell to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to print
    Silent,
    /// Print one line
    Line(String),
    /// Print a block of text as is
    Text(&'static str),
    /// Stop reading input
    Quit,
}

/// Interactive or scripted shell holding one trie.
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    output: W,
    trie: PointsTrie,
    config: ShellConfig,
    interactive: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates an interactive shell that prompts before every line.
    pub fn interactive(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            trie: PointsTrie::new(),
            config,
            interactive: true,
        }
    }

    /// Creates a shell for running a script: no prompt, optional echo.
    pub fn script(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            interactive: false,
            ..Self::interactive(input, output, config)
        }
    }

    /// The trie the shell operates on.
    pub fn trie(&self) -> &PointsTrie {
        &self.trie
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The session ended normally.
    /// * `Err(TrieShellError::Io)` - Reading or writing a stream failed.
    pub fn run(&mut self) -> TrieShellResult<()> {
        let mut line = String::new();
        loop {
            if self.interactive {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            if !self.interactive && self.config.echo_commands {
                writeln!(self.output, "{}", line.trim_end())?;
            }

            match Command::parse(&line).and_then(|command| self.execute(command)) {
                Ok(Response::Silent) => {}
                Ok(Response::Line(text)) => writeln!(self.output, "{text}")?,
                Ok(Response::Text(text)) => write!(self.output, "{text}")?,
                Ok(Response::Quit) => break,
                Err(e) => {
                    debug!(error = %e, line = line.trim_end(), "command failed");
                    writeln!(self.output, "{}{}", self.config.error_prefix, e)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Runs one parsed command against the trie.
    pub fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        debug!(?command, "executing command");
        match command {
            Command::New => {
                self.trie.reset();
                Ok(Response::Silent)
            }
            Command::Add { key, points } => self
                .trie
                .add(&key, points)
                .then_some(Response::Silent)
                .ok_or(CommandError::AddRejected),
            Command::Change { key, points } => self
                .trie
                .change(&key, points)
                .then_some(Response::Silent)
                .ok_or(CommandError::ChangeRejected),
            Command::Delete { key } => self
                .trie
                .remove(&key)
                .then_some(Response::Silent)
                .ok_or(CommandError::RemoveRejected),
            Command::Points { key } => self
                .trie
                .lookup(&key)
                .map(|points| Response::Line(points.to_string()))
                .ok_or(CommandError::NoPoints),
            Command::Trie => Ok(Response::Line(self.trie.to_string())),
            Command::Help => Ok(Response::Text(HELP_TEXT)),
            Command::Quit => Ok(Response::Quit),
        }
    }
}
