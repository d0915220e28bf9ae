use super::{Command, CommandError, Flow, BUILTIN_NAMES};

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    /// Banner followed by the built-in names in registry order. Arguments
    /// never change the output, so rendering takes none.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "          |sakana {}\n",
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str("          |Type program names and arguments, and hit enter.\n");
        out.push_str("          |The following are built in:\n");

        for name in BUILTIN_NAMES {
            out.push_str(&format!("          |  {}\n", name));
        }

        out.push_str(">><(((°> < Use the man command for information on other programs.\n");
        out
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<Flow, CommandError> {
        print!("{}", self.render());
        Ok(Flow::Continue)
    }
}
