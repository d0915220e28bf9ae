/// Delimiters a command line is split on: space, tab, CR, LF, bell.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{7}'];

/// Split a line into whitespace-delimited tokens.
///
/// Runs of delimiters collapse, so no empty tokens are ever produced; an
/// empty or all-delimiter line yields an empty Vec. Tokens are owned copies,
/// independent of the source line.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| DELIMITERS.contains(&c))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_all_delimiter_line_yields_no_tokens() {
        assert!(tokenize("  \t \r\n \u{7} ").is_empty());
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(tokenize("ls -l /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(
            tokenize("  echo \t\t hello \r\n world  "),
            vec!["echo", "hello", "world"]
        );
    }

    #[test]
    fn test_bell_is_a_delimiter() {
        assert_eq!(tokenize("a\u{7}b"), vec!["a", "b"]);
    }

    #[test]
    fn test_word_count_matches_input() {
        let words = ["alpha", "beta", "gamma", "delta"];
        let line = words.join(" ");
        let tokens = tokenize(&line);
        assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(words.iter()) {
            assert_eq!(token, word);
        }
    }

    #[test]
    fn test_non_delimiter_punctuation_is_kept() {
        assert_eq!(tokenize("grep -n 'a b'"), vec!["grep", "-n", "'a", "b'"]);
    }
}
