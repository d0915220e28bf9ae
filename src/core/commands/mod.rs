mod cd;
mod ebi;
mod exit;
mod help;
mod sakana;

pub use cd::CdCommand;
pub use ebi::EbiCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use sakana::SakanaCommand;

use crate::process::{ProcessError, ProcessExecutor};

/// Built-in names in registry order. `help` prints them in exactly this
/// order, and the dispatcher's linear lookup walks them in this order.
pub const BUILTIN_NAMES: [&str; 5] = ["cd", "help", "exit", "ebi", "sakana"];

/// Tells the read loop whether to keep prompting after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    /// Execute with the arguments that followed the command name on the
    /// line. Reportable failures come back as errors; the caller prints
    /// them and keeps the loop alive.
    fn execute(&self, args: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    Ebi(EbiCommand),
    Sakana(SakanaCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Ebi(cmd) => cmd.execute(args),
            CommandType::Sakana(cmd) => cmd.execute(args),
        }
    }
}

/// Dispatches a tokenized command: built-ins first, everything else goes to
/// the process executor. The registry is fixed at construction and never
/// mutated afterwards.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: Vec<(&'static str, CommandType)>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let commands = vec![
            ("cd", CommandType::Cd(CdCommand::new())),
            ("help", CommandType::Help(HelpCommand::new())),
            ("exit", CommandType::Exit(ExitCommand::new())),
            ("ebi", CommandType::Ebi(EbiCommand::new())),
            ("sakana", CommandType::Sakana(SakanaCommand::new())),
        ];

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Run one command. `command` is the first token of the line, `args` the
    /// rest. External completion always yields `Flow::Continue`; the child's
    /// exit status is not the shell's business.
    pub fn execute(&self, command: &str, args: &[String]) -> Result<Flow, CommandError> {
        if let Some(cmd) = self.lookup(command) {
            return cmd.execute(args);
        }

        let mut full_args = Vec::with_capacity(args.len() + 1);
        full_args.push(command.to_string());
        full_args.extend_from_slice(args);
        self.process_executor.spawn_process(&full_args)?;
        Ok(Flow::Continue)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.lookup(command).is_some()
    }

    fn lookup(&self, command: &str) -> Option<&CommandType> {
        self.commands
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, cmd)| cmd)
    }
}
