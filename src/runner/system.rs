use crate::runner::{CommandOutput, CommandRunner, Invocation};
use std::io;
use std::process::{Command, Stdio};

/// Runs invocations as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run_streaming(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        tracing::debug!(command = %invocation, "running (streaming)");

        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutput {
            code: status.code(),
            combined: String::new(),
        })
    }

    fn run_captured(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        tracing::debug!(command = %invocation, "running (captured)");

        let output = Self::command(invocation).stdin(Stdio::null()).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(command = %invocation, code = ?output.status.code(), "finished");
        Ok(CommandOutput {
            code: output.status.code(),
            combined,
        })
    }
}
