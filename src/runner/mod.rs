//! External process abstraction
//!
//! Every program the release touches (package manager, `git`, clipboard
//! tool) is started through the [CommandRunner] trait, so the pipeline can
//! be exercised against [mock::RecordingRunner] without a real repository,
//! package manager or clipboard.
//!
//! - [system::SystemRunner]: spawns real processes with `std::process`
//! - [mock::RecordingRunner]: records invocations and replays scripted results

pub mod mock;
pub mod system;

pub use mock::RecordingRunner;
pub use system::SystemRunner;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A program plus its arguments, optionally run in a specific directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub dir: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
        }
    }

    /// Run in `dir` instead of the current directory
    pub fn in_dir(mut self, dir: Option<&Path>) -> Self {
        self.dir = dir.map(Path::to_path_buf);
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
                write!(f, " {}", quoted(arg))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// `arg` in double quotes, with embedded quotes escaped
pub fn quoted(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\\\""))
}

/// How a finished process ended
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout followed by stderr; empty for streamed runs
    pub combined: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        CommandOutput {
            code: Some(0),
            combined: String::new(),
        }
    }

    pub fn failure(code: i32, combined: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            combined: combined.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// "exit status 1" / "terminated by signal"
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Starts external programs and waits for them.
///
/// `Err` means the program could not be started at all; a program that ran
/// and failed is an `Ok` output with a non-zero code. Both block until the
/// child exits; there is no timeout.
pub trait CommandRunner {
    /// Run with stdout/stderr inherited from this process
    fn run_streaming(&self, invocation: &Invocation) -> io::Result<CommandOutput>;

    /// Run with stdout/stderr captured into [CommandOutput::combined]
    fn run_captured(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}
