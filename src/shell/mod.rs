use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod executor;
pub mod tokenizer;

use crate::{
    core::commands::{CommandExecutor, Flow},
    error::ShellError,
    flags::Flags,
    highlight::OutputStyler,
};

use executor::CommandHandler;

const PROMPT: &str = ">><(((°> ";

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) styler: OutputStyler,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;

        Ok(Shell {
            editor,
            styler: OutputStyler::new(),
            flags,
            executor: CommandExecutor::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            self.print_greeting();
        }

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => match self.execute_command(&line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => self.report(&e),
                },
                // A closed input stream reads as an empty line: the empty
                // dispatch is a no-op and the loop prompts again.
                Err(ReadlineError::Eof) => continue,
                Err(ReadlineError::Interrupted) => continue,
                Err(e) => {
                    self.report(&ShellError::from(e));
                    continue;
                }
            }
        }
        Ok(())
    }

    fn report(&self, error: &ShellError) {
        eprintln!("{}", self.styler.error(&format!("sakana: {}", error)));
    }

    fn print_greeting(&self) {
        println!(
            "{}",
            self.styler
                .greeting(&format!(">><(((°> < sakana {}", env!("CARGO_PKG_VERSION")))
        );
        println!("Type 'help' to list the built-in commands.");
    }
}
