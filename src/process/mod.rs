use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    SpawnFailed(String),
    WaitFailed(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::SpawnFailed(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::SpawnFailed(msg) => write!(f, "failed to start process: {}", msg),
            ProcessError::WaitFailed(msg) => write!(f, "failed to wait on process: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
