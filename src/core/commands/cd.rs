use super::{Command, CommandError, Flow};
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<Flow, CommandError> {
        let target = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("cd: expected an argument".to_string())
        })?;

        env::set_current_dir(target)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", target, e)))?;

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::test_support::lock_current_dir;
    use std::env;

    #[test]
    fn test_cd_without_argument_is_usage_error() {
        let _lock = lock_current_dir();
        let before = env::current_dir().expect("cwd");

        let cmd = CdCommand::new();
        let result = cmd.execute(&[]);

        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
        assert_eq!(env::current_dir().expect("cwd"), before);
    }

    #[test]
    fn test_cd_to_valid_directory() {
        let _lock = lock_current_dir();
        let original = env::current_dir().expect("cwd");
        let temp_dir = env::temp_dir();

        let cmd = CdCommand::new();
        let flow = cmd
            .execute(&[temp_dir.to_string_lossy().to_string()])
            .expect("cd to temp dir should succeed");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            env::current_dir()
                .expect("cwd")
                .canonicalize()
                .expect("canonicalize"),
            temp_dir.canonicalize().expect("canonicalize")
        );

        env::set_current_dir(original).expect("restore cwd");
    }

    #[test]
    fn test_cd_to_nonexistent_directory_reports_error() {
        let _lock = lock_current_dir();
        let before = env::current_dir().expect("cwd");

        let cmd = CdCommand::new();
        let result = cmd.execute(&["/path/that/does/not/exist".to_string()]);

        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        assert_eq!(env::current_dir().expect("cwd"), before);
    }
}
