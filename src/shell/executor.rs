use super::tokenizer;
use crate::core::commands::Flow;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError> {
        let tokens = tokenizer::tokenize(line);

        // An empty or all-whitespace line is a no-op, not an error.
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        self.executor
            .execute(command, args)
            .map_err(ShellError::from)
    }
}
