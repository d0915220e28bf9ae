use super::{Command, CommandError, Flow};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// No output, no inspection of arguments; the loop stops after this
    /// dispatch and the process exits with a success status.
    fn execute(&self, _args: &[String]) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signals_termination() {
        let cmd = ExitCommand::new();
        assert_eq!(cmd.execute(&[]).expect("exit cannot fail"), Flow::Exit);
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let cmd = ExitCommand::new();
        let args = vec!["1".to_string(), "now".to_string()];
        assert_eq!(cmd.execute(&args).expect("exit cannot fail"), Flow::Exit);
    }
}
