//! Thin typed wrappers over the tmux subcommands edmux issues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Split direction for `split-window`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    /// New pane below (`-v`).
    #[default]
    Vertical,
    /// New pane to the right (`-h`).
    Horizontal,
}

impl SplitOrientation {
    pub fn flag(self) -> &'static str {
        match self {
            Self::Vertical => "-v",
            Self::Horizontal => "-h",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for SplitOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Self::Vertical),
            "horizontal" | "h" => Ok(Self::Horizontal),
            _ => Err(format!("unknown split orientation: {s}")),
        }
    }
}

/// `send-keys -t <target> <text> C-m`: text terminated by an enter key.
pub fn send_text(
    runner: &impl TmuxCommandRunner,
    target: &str,
    text: &str,
) -> Result<(), TmuxError> {
    runner.run(&["send-keys", "-t", target, text, "C-m"])?;
    Ok(())
}

/// `send-keys -t <target> <key>` without a terminator (e.g. `C-c`).
pub fn send_key(
    runner: &impl TmuxCommandRunner,
    target: &str,
    key: &str,
) -> Result<(), TmuxError> {
    runner.run(&["send-keys", "-t", target, key])?;
    Ok(())
}

/// `split-window [-h|-v] [-p size]`. The new pane becomes the active one;
/// read its id back through the active-entry extractor.
pub fn split_window(
    runner: &impl TmuxCommandRunner,
    orientation: SplitOrientation,
    size_percent: Option<u16>,
) -> Result<(), TmuxError> {
    let size;
    let mut args = vec!["split-window", orientation.flag()];
    if let Some(percent) = size_percent {
        size = percent.to_string();
        args.push("-p");
        args.push(&size);
    }
    runner.run(&args)?;
    Ok(())
}

/// `select-pane -t <target>`.
pub fn select_pane(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["select-pane", "-t", target])?;
    Ok(())
}

/// `select-pane -t <target> -T <title>`.
pub fn set_pane_title(
    runner: &impl TmuxCommandRunner,
    target: &str,
    title: &str,
) -> Result<(), TmuxError> {
    runner.run(&["select-pane", "-t", target, "-T", title])?;
    Ok(())
}

/// `kill-pane -t <target>`.
pub fn kill_pane(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["kill-pane", "-t", target])?;
    Ok(())
}

/// `kill-pane -a [-t target]`: kill every pane except the target (or the
/// active one when no target is given).
pub fn kill_other_panes(
    runner: &impl TmuxCommandRunner,
    target: Option<&str>,
) -> Result<(), TmuxError> {
    match target {
        Some(t) => runner.run(&["kill-pane", "-a", "-t", t])?,
        None => runner.run(&["kill-pane", "-a"])?,
    };
    Ok(())
}

/// `clear-history -t <target>`.
pub fn clear_history(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["clear-history", "-t", target])?;
    Ok(())
}

/// `resize-pane -Z -t <target>`: toggle pane zoom.
pub fn toggle_zoom(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["resize-pane", "-Z", "-t", target])?;
    Ok(())
}

/// `copy-mode -t <target>`.
pub fn copy_mode(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["copy-mode", "-t", target])?;
    Ok(())
}

/// `new-window [-a]`: `-a` inserts the window after the current one.
pub fn new_window(runner: &impl TmuxCommandRunner, after: bool) -> Result<(), TmuxError> {
    if after {
        runner.run(&["new-window", "-a"])?;
    } else {
        runner.run(&["new-window"])?;
    }
    Ok(())
}

/// `switch-client -t <target>`.
pub fn switch_client(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["switch-client", "-t", target])?;
    Ok(())
}

/// `select-window -t <target>`.
pub fn select_window(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["select-window", "-t", target])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl TmuxCommandRunner for Recorder {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            self.calls
                .borrow_mut()
                .push(args.iter().map(|s| s.to_string()).collect());
            Ok(String::new())
        }
    }

    fn last_call(rec: &Recorder) -> Vec<String> {
        rec.calls.borrow().last().expect("a call was made").clone()
    }

    #[test]
    fn send_text_appends_enter() {
        let rec = Recorder::default();
        send_text(&rec, "work:2.1", "echo hi").expect("send");
        assert_eq!(
            last_call(&rec),
            ["send-keys", "-t", "work:2.1", "echo hi", "C-m"]
        );
    }

    #[test]
    fn send_key_has_no_terminator() {
        let rec = Recorder::default();
        send_key(&rec, "2.1", "C-c").expect("send");
        assert_eq!(last_call(&rec), ["send-keys", "-t", "2.1", "C-c"]);
    }

    #[test]
    fn split_window_flags() {
        let rec = Recorder::default();
        split_window(&rec, SplitOrientation::Vertical, Some(20)).expect("split");
        assert_eq!(last_call(&rec), ["split-window", "-v", "-p", "20"]);

        split_window(&rec, SplitOrientation::Horizontal, None).expect("split");
        assert_eq!(last_call(&rec), ["split-window", "-h"]);
    }

    #[test]
    fn kill_other_panes_variants() {
        let rec = Recorder::default();
        kill_other_panes(&rec, None).expect("kill");
        assert_eq!(last_call(&rec), ["kill-pane", "-a"]);

        kill_other_panes(&rec, Some("2.1")).expect("kill");
        assert_eq!(last_call(&rec), ["kill-pane", "-a", "-t", "2.1"]);
    }

    #[test]
    fn new_window_after_flag() {
        let rec = Recorder::default();
        new_window(&rec, false).expect("new");
        assert_eq!(last_call(&rec), ["new-window"]);
        new_window(&rec, true).expect("new");
        assert_eq!(last_call(&rec), ["new-window", "-a"]);
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!(
            "horizontal".parse::<SplitOrientation>().expect("parses"),
            SplitOrientation::Horizontal
        );
        assert_eq!(SplitOrientation::Vertical.flag(), "-v");
        assert!("diagonal".parse::<SplitOrientation>().is_err());
    }
}
