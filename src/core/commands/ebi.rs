use super::{Command, CommandError, Flow};

const EBI_ART: &str = r"(´￣￣￣￣￣￣￣￣￣
  ＼
　　＼_,
　　 ヾ9＼
　 __ｸ 　 ｀>､＿_
　j广>rイ　 /　/ ｀>､
　　 ｀ `　Ｙ┬く-く_,ハ、
　　 　 　 ｀　`　′'`'ー＼
　　　　 　 　 　 　 　 ヾ＼
　　　　　　　　　　　 　｀^'
";

/// Prints a shrimp.
#[derive(Clone)]
pub struct EbiCommand;

impl Default for EbiCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EbiCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn art(&self) -> &'static str {
        EBI_ART
    }
}

impl Command for EbiCommand {
    fn execute(&self, _args: &[String]) -> Result<Flow, CommandError> {
        print!("{}", EBI_ART);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_is_nonempty_and_multiline() {
        let cmd = EbiCommand::new();
        assert!(!cmd.art().is_empty());
        assert!(cmd.art().lines().count() > 1);
    }

    #[test]
    fn test_execute_continues_and_ignores_args() {
        let cmd = EbiCommand::new();
        let flow = cmd
            .execute(&["extra".to_string()])
            .expect("ebi cannot fail");
        assert_eq!(flow, Flow::Continue);
    }
}
