//! Parsers for tmux listing output and `-F` candidate listings.
//!
//! Window and pane listing lines lead with the entry id (`1: ...`) and mark
//! the active entry with a trailing `(active)`. Candidate listings for
//! interactive prompting use explicit `-F` format strings instead, one id
//! per line.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Format string for session name candidates (`list-sessions -F`).
pub const SESSION_NAME_FORMAT: &str = "#S";
/// Format string for window id candidates (`list-windows -F`).
pub const WINDOW_ID_FORMAT: &str = "#I";
/// Format string for pane id candidates (`list-panes -F`).
pub const PANE_ID_FORMAT: &str = "#P";

/// One pane parsed from a default-format listing line. Ephemeral: only valid
/// within the listing call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneRecord {
    pub id: String,
    pub active: bool,
}

fn is_active_line(line: &str) -> bool {
    line.trim_end().ends_with("(active)")
}

/// Extract the entry id from a listing line: the leading whitespace-delimited
/// token, trailing `:` stripped.
pub fn entry_id(line: &str) -> Option<String> {
    let token = line.split_whitespace().next()?;
    let id = token.trim_end_matches(':');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Id of the first entry carrying the `(active)` marker, or `None` when no
/// line matches. Callers decide whether "no active entry" is an error.
pub fn active_entry(lines: &[String]) -> Option<String> {
    parse_pane_records(lines)
        .into_iter()
        .find(|r| r.active)
        .map(|r| r.id)
}

/// Id of the first entry NOT marked active; the fallback target pane.
pub fn nearest_inactive(lines: &[String]) -> Option<String> {
    parse_pane_records(lines)
        .into_iter()
        .find(|r| !r.active)
        .map(|r| r.id)
}

/// Parse default-format listing lines into pane records. Blank lines are
/// skipped; lines without a leading id are skipped.
pub fn parse_pane_records(lines: &[String]) -> Vec<PaneRecord> {
    lines
        .iter()
        .filter_map(|line| {
            let id = entry_id(line)?;
            Some(PaneRecord {
                id,
                active: is_active_line(line),
            })
        })
        .collect()
}

/// `list-panes [-t target]` in the default format, for the extractors above.
pub fn list_panes_raw(
    runner: &impl TmuxCommandRunner,
    target: Option<&str>,
) -> Result<Vec<String>, TmuxError> {
    match target {
        Some(t) => runner.run_lines(&["list-panes", "-t", t]),
        None => runner.run_lines(&["list-panes"]),
    }
}

/// Session name candidates: `list-sessions -F "#S"`.
pub fn list_session_names(runner: &impl TmuxCommandRunner) -> Result<Vec<String>, TmuxError> {
    runner.run_lines(&["list-sessions", "-F", SESSION_NAME_FORMAT])
}

/// Window id candidates: `list-windows [-t session] -F "#I"`.
pub fn list_window_ids(
    runner: &impl TmuxCommandRunner,
    session: Option<&str>,
) -> Result<Vec<String>, TmuxError> {
    match session {
        Some(s) => runner.run_lines(&["list-windows", "-F", WINDOW_ID_FORMAT, "-t", s]),
        None => runner.run_lines(&["list-windows", "-F", WINDOW_ID_FORMAT]),
    }
}

/// Pane id candidates: `list-panes [-t target] -F "#P"`.
pub fn list_pane_ids(
    runner: &impl TmuxCommandRunner,
    target: Option<&str>,
) -> Result<Vec<String>, TmuxError> {
    match target {
        Some(t) => runner.run_lines(&["list-panes", "-t", t, "-F", PANE_ID_FORMAT]),
        None => runner.run_lines(&["list-panes", "-F", PANE_ID_FORMAT]),
    }
}

/// Id of the window the client is currently on:
/// `display-message -p [-t session] "#I"`.
pub fn current_window_id(
    runner: &impl TmuxCommandRunner,
    session: Option<&str>,
) -> Result<String, TmuxError> {
    let out = match session {
        Some(s) => runner.run(&["display-message", "-p", "-t", s, WINDOW_ID_FORMAT])?,
        None => runner.run(&["display-message", "-p", WINDOW_ID_FORMAT])?,
    };
    Ok(out.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn active_entry_basic() {
        let ls = lines(&["0: 80x24 (active)", "1: 80x24"]);
        assert_eq!(active_entry(&ls), Some("0".to_string()));
    }

    #[test]
    fn active_entry_none_when_unmarked() {
        let ls = lines(&["0: 80x24", "1: 80x24"]);
        assert_eq!(active_entry(&ls), None);
    }

    #[test]
    fn active_entry_real_pane_listing() {
        let ls = lines(&[
            "0: [169x90] [history 12/2000, 8437 bytes] %0",
            "1: [169x22] [history 0/2000, 0 bytes] %3 (active)",
        ]);
        assert_eq!(active_entry(&ls), Some("1".to_string()));
    }

    #[test]
    fn active_entry_window_listing() {
        let ls = lines(&[
            "1: zsh- (1 panes) [80x24] [layout b25d,80x24,0,0,1] @1",
            "2: vim* (2 panes) [80x24] [layout b25e,80x24,0,0,2] @2 (active)",
        ]);
        assert_eq!(active_entry(&ls), Some("2".to_string()));
    }

    #[test]
    fn nearest_inactive_basic() {
        let ls = lines(&["0 (active)", "1"]);
        assert_eq!(nearest_inactive(&ls), Some("1".to_string()));
    }

    #[test]
    fn nearest_inactive_none_when_all_active() {
        let ls = lines(&["0 (active)"]);
        assert_eq!(nearest_inactive(&ls), None);
    }

    #[test]
    fn entry_id_strips_colon() {
        assert_eq!(entry_id("2: vim* (active)"), Some("2".to_string()));
        assert_eq!(entry_id("1"), Some("1".to_string()));
        assert_eq!(entry_id(""), None);
    }

    #[test]
    fn parse_pane_records_flags() {
        let ls = lines(&["0: 80x24 (active)", "", "1: 80x24"]);
        let records = parse_pane_records(&ls);
        assert_eq!(
            records,
            vec![
                PaneRecord {
                    id: "0".to_string(),
                    active: true
                },
                PaneRecord {
                    id: "1".to_string(),
                    active: false
                },
            ]
        );
    }

    struct MockRunner;
    impl TmuxCommandRunner for MockRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            match args[0] {
                "list-sessions" => {
                    assert_eq!(args, ["list-sessions", "-F", "#S"]);
                    Ok("work\nscratch\n".to_string())
                }
                "list-windows" => {
                    assert_eq!(args, ["list-windows", "-F", "#I", "-t", "work"]);
                    Ok("1\n2\n".to_string())
                }
                "list-panes" => {
                    assert_eq!(args, ["list-panes", "-t", "work:2", "-F", "#P"]);
                    Ok("0\n1\n".to_string())
                }
                "display-message" => {
                    assert_eq!(args, ["display-message", "-p", "#I"]);
                    Ok("2\n".to_string())
                }
                other => panic!("unexpected subcommand {other}"),
            }
        }
    }

    #[test]
    fn candidate_listings_use_format_flags() {
        let sessions = list_session_names(&MockRunner).expect("sessions");
        assert_eq!(sessions, vec!["work".to_string(), "scratch".to_string()]);

        let windows = list_window_ids(&MockRunner, Some("work")).expect("windows");
        assert_eq!(windows, vec!["1".to_string(), "2".to_string()]);

        let panes = list_pane_ids(&MockRunner, Some("work:2")).expect("panes");
        assert_eq!(panes, vec!["0".to_string(), "1".to_string()]);

        let current = current_window_id(&MockRunner, None).expect("current window");
        assert_eq!(current, "2");
    }
}
