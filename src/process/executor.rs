use std::process::{Command, Stdio};

use super::ProcessError;

/// Launches external programs with inherited stdio and blocks until the
/// child has exited or been killed by a signal.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawn `args[0]` with the remaining tokens as its argument vector.
    /// PATH resolution is the OS's. The child's exit status is deliberately
    /// not surfaced: any completion leaves the shell prompting again.
    pub fn spawn_process(&self, args: &[String]) -> Result<(), ProcessError> {
        let program = match args.first() {
            Some(program) => program,
            None => return Ok(()),
        };

        let mut command = Command::new(program);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.clone()));
            }
            Err(e) => return Err(ProcessError::SpawnFailed(e.to_string())),
        };

        // Blocks through stops; only exit or a fatal signal completes the
        // wait. This also reaps the child.
        child
            .wait()
            .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;

        Ok(())
    }
}
