//! Paste-buffer listing behind a versioned-format table.
//!
//! The `list-buffers` line format changed across tmux versions: older servers
//! print bare numeric ids (`0: 14 bytes: "..."`), newer ones a literal
//! `buffer` name prefix (`buffer0000: 14 bytes: "..."`). Which form a server
//! speaks is configuration, not auto-detected. Every pattern lives here;
//! nothing else in the tree contains a buffer pattern string.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// How the server addresses paste buffers in `-b` arguments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferAddressing {
    /// Bare numeric indexes (older servers).
    Index,
    /// `bufferNNNN` style names (modern servers).
    #[default]
    Name,
}

impl BufferAddressing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for BufferAddressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BufferAddressing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" => Ok(Self::Index),
            "name" => Ok(Self::Name),
            _ => Err(format!("unknown buffer addressing: {s}")),
        }
    }
}

const INDEXED_PATTERN: &str = r#"^(\d+): (\d+) bytes: "(.*)"$"#;
const NAMED_PATTERN: &str = r#"^(buffer\d+): (\d+) bytes: "(.*)"$"#;

/// A compiled `list-buffers` line pattern plus the addressing mode it
/// implies. Subgroup 1 captures the id, 2 the byte count, 3 the sample text.
#[derive(Debug, Clone)]
pub struct BufferFormat {
    addressing: BufferAddressing,
    pattern: Regex,
}

impl BufferFormat {
    /// Bare numeric ids, as printed by older servers.
    pub fn indexed() -> Self {
        Self {
            addressing: BufferAddressing::Index,
            pattern: Regex::new(INDEXED_PATTERN).expect("static pattern compiles"),
        }
    }

    /// `bufferNNNN` names, as printed by modern servers.
    pub fn named() -> Self {
        Self {
            addressing: BufferAddressing::Name,
            pattern: Regex::new(NAMED_PATTERN).expect("static pattern compiles"),
        }
    }

    /// A user-supplied pattern for servers neither stock form matches.
    pub fn custom(addressing: BufferAddressing, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            addressing,
            pattern: Regex::new(pattern)?,
        })
    }

    /// The stock format for an addressing mode.
    pub fn for_addressing(addressing: BufferAddressing) -> Self {
        match addressing {
            BufferAddressing::Index => Self::indexed(),
            BufferAddressing::Name => Self::named(),
        }
    }

    pub fn addressing(&self) -> BufferAddressing {
        self.addressing
    }

    /// Parse one listing line; `None` when the line does not match.
    pub fn parse_line(&self, line: &str) -> Option<BufferEntry> {
        let caps = self.pattern.captures(line)?;
        let id = caps.get(1)?.as_str().to_string();
        let size = caps.get(2)?.as_str().parse().ok()?;
        let sample = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
        Some(BufferEntry { id, size, sample })
    }
}

impl Default for BufferFormat {
    fn default() -> Self {
        Self::named()
    }
}

/// One paste buffer parsed from a `list-buffers` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferEntry {
    pub id: String,
    pub size: usize,
    pub sample: String,
}

/// Parse `list-buffers` output. Non-matching lines are skipped, never a
/// failure.
pub fn parse_buffer_lines(format: &BufferFormat, lines: &[String]) -> Vec<BufferEntry> {
    lines
        .iter()
        .filter_map(|line| format.parse_line(line))
        .collect()
}

/// `list-buffers`, parsed through `format`.
pub fn list_buffers(
    runner: &impl TmuxCommandRunner,
    format: &BufferFormat,
) -> Result<Vec<BufferEntry>, TmuxError> {
    let lines = runner.run_lines(&["list-buffers"])?;
    Ok(parse_buffer_lines(format, &lines))
}

/// `show-buffer [-b id]`: the full contents of one buffer.
pub fn show_buffer(
    runner: &impl TmuxCommandRunner,
    id: Option<&str>,
) -> Result<String, TmuxError> {
    match id {
        Some(id) => runner.run(&["show-buffer", "-b", id]),
        None => runner.run(&["show-buffer"]),
    }
}

/// `set-buffer [-b id] data`: store text in a paste buffer.
pub fn set_buffer(
    runner: &impl TmuxCommandRunner,
    id: Option<&str>,
    data: &str,
) -> Result<(), TmuxError> {
    match id {
        Some(id) => runner.run(&["set-buffer", "-b", id, data])?,
        None => runner.run(&["set-buffer", data])?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn named_format_parses_modern_listing() {
        let ls = lines(&[
            "buffer0000: 12 bytes: \"make test\\n\"",
            "buffer0001: 5 bytes: \"hello\"",
        ]);
        let entries = parse_buffer_lines(&BufferFormat::named(), &ls);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "buffer0000");
        assert_eq!(entries[0].size, 12);
        assert_eq!(entries[0].sample, "make test\\n");
        assert_eq!(entries[1].id, "buffer0001");
    }

    #[test]
    fn indexed_format_parses_legacy_listing() {
        let ls = lines(&["0: 5 bytes: \"hello\"", "1: 3 bytes: \"hi\\n\""]);
        let entries = parse_buffer_lines(&BufferFormat::indexed(), &ls);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "0");
        assert_eq!(entries[1].sample, "hi\\n");
    }

    #[test]
    fn mismatched_format_yields_nothing() {
        // A legacy listing read with the modern pattern: skip, don't fail.
        let ls = lines(&["0: 5 bytes: \"hello\""]);
        assert!(parse_buffer_lines(&BufferFormat::named(), &ls).is_empty());
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let ls = lines(&["not a buffer line", "buffer0000: 5 bytes: \"hello\""]);
        let entries = parse_buffer_lines(&BufferFormat::named(), &ls);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn custom_pattern() {
        let fmt = BufferFormat::custom(
            BufferAddressing::Index,
            r#"^(\d+) \((\d+)b\) "(.*)"$"#,
        )
        .expect("pattern compiles");
        let entry = fmt.parse_line("7 (3b) \"abc\"").expect("should match");
        assert_eq!(entry.id, "7");
        assert_eq!(entry.size, 3);
        assert_eq!(entry.sample, "abc");
    }

    #[test]
    fn custom_pattern_rejects_bad_regex() {
        assert!(BufferFormat::custom(BufferAddressing::Name, "(unclosed").is_err());
    }

    #[test]
    fn addressing_round_trip() {
        assert_eq!(
            "index".parse::<BufferAddressing>().expect("parses"),
            BufferAddressing::Index
        );
        assert_eq!(BufferAddressing::Name.to_string(), "name");
        assert!("fancy".parse::<BufferAddressing>().is_err());
    }

    struct MockRunner;
    impl TmuxCommandRunner for MockRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            match args {
                ["list-buffers"] => Ok("buffer0000: 5 bytes: \"hello\"\n".to_string()),
                ["show-buffer", "-b", "buffer0000"] => Ok("hello".to_string()),
                ["set-buffer", "-b", "b1", "payload"] => Ok(String::new()),
                ["set-buffer", "payload"] => Ok(String::new()),
                other => panic!("unexpected args {other:?}"),
            }
        }
    }

    #[test]
    fn buffer_calls_issue_expected_commands() {
        let entries = list_buffers(&MockRunner, &BufferFormat::named()).expect("list");
        assert_eq!(entries[0].id, "buffer0000");

        let contents = show_buffer(&MockRunner, Some("buffer0000")).expect("show");
        assert_eq!(contents, "hello");

        set_buffer(&MockRunner, Some("b1"), "payload").expect("set with id");
        set_buffer(&MockRunner, None, "payload").expect("set anonymous");
    }
}
