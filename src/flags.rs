use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Skip the startup greeting".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let known = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long);

            match known {
                Some(flag) => flag.value = Some("true".to_string()),
                None => {
                    return Err(ShellError::FlagError(format!(
                        "unrecognized option: {}",
                        arg
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("Usage: sakana [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short() {
        let mut flags = Flags::new();
        flags
            .parse(&["-q".to_string(), "--version".to_string()])
            .expect("known flags should parse");

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("version"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let mut flags = Flags::new();
        let result = flags.parse(&["--frobnicate".to_string()]);
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_parse_empty_args() {
        let mut flags = Flags::new();
        assert!(flags.parse(&[]).is_ok());
        assert!(!flags.is_set("quiet"));
    }
}
