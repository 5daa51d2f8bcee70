use crate::runner::{CommandOutput, CommandRunner, Invocation};
use std::io;
use std::sync::Mutex;

/// How the fake should answer an invocation
#[derive(Debug, Clone)]
enum Scripted {
    Output(CommandOutput),
    SpawnError(String),
}

/// Runner for testing without starting processes
///
/// Every invocation is recorded. Invocations whose rendered command line
/// starts with a registered prefix get the scripted answer; all others
/// succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    scripted: Vec<(String, Scripted)>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands starting with `prefix` exit with `code` and `output`
    pub fn fail_on(mut self, prefix: impl Into<String>, code: i32, output: &str) -> Self {
        self.scripted.push((
            prefix.into(),
            Scripted::Output(CommandOutput::failure(code, output)),
        ));
        self
    }

    /// Make commands starting with `prefix` fail to spawn
    pub fn spawn_error_on(mut self, prefix: impl Into<String>, message: &str) -> Self {
        self.scripted
            .push((prefix.into(), Scripted::SpawnError(message.to_string())));
        self
    }

    /// Recorded invocations, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Recorded invocations rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.to_string()).collect()
    }

    fn answer(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(invocation.clone());
        }

        let line = invocation.to_string();
        let scripted = self
            .scripted
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, answer)| answer.clone());

        match scripted {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::SpawnError(message)) => {
                Err(io::Error::new(io::ErrorKind::NotFound, message))
            }
            None => Ok(CommandOutput::success()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run_streaming(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.answer(invocation)
    }

    fn run_captured(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.answer(invocation)
    }
}
