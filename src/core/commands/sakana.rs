use super::{Command, CommandError, Flow};

const SAKANA_ART: &str = r#"　　　　　 　/,　.
　　　 _,..//〃ー，_／(.　　　　　／
　,イ';＾;;;;::""'''　::"〃,,__∠_/
／;:◎'':;　）;＿＿___　　　　　　 (
≧_ﾉ　　__ノ))三＝　　_..､'､"^^^＼ヾ
　~''ー＜　＿＿_､-~＼(
　　　　　＼(
"#;

/// Prints a fish.
#[derive(Clone)]
pub struct SakanaCommand;

impl Default for SakanaCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SakanaCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn art(&self) -> &'static str {
        SAKANA_ART
    }
}

impl Command for SakanaCommand {
    fn execute(&self, _args: &[String]) -> Result<Flow, CommandError> {
        print!("{}", SAKANA_ART);
        Ok(Flow::Continue)
    }
}
