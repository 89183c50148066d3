//! fzf-backed implementation of the core chooser capability.

use std::io::Write;
use std::process::{Command, Stdio};

use edmux_core::{Chooser, CoreError};

pub struct FzfChooser;

impl FzfChooser {
    fn fzf_available() -> bool {
        Command::new("which")
            .arg("fzf")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Chooser for FzfChooser {
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<Option<String>, CoreError> {
        if !Self::fzf_available() {
            return Err(CoreError::Chooser(
                "fzf not found; install fzf or pass an explicit target flag".to_string(),
            ));
        }

        let mut child = Command::new("fzf")
            .args(["--no-multi", "--prompt"])
            .arg(format!("{prompt}> "))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CoreError::Chooser(format!("failed to spawn fzf: {e}")))?;

        if let Some(ref mut stdin) = child.stdin {
            stdin
                .write_all(candidates.join("\n").as_bytes())
                .map_err(|e| CoreError::Chooser(format!("failed to write to fzf stdin: {e}")))?;
        }
        // Drop stdin to signal EOF
        drop(child.stdin.take());

        let output = child
            .wait_with_output()
            .map_err(|e| CoreError::Chooser(format!("fzf failed: {e}")))?;

        if !output.status.success() {
            // User pressed Escape or Ctrl-C in fzf
            return Ok(None);
        }

        let selected = String::from_utf8_lossy(&output.stdout);
        let selected = selected.trim();
        if selected.is_empty() {
            Ok(None)
        } else {
            Ok(Some(selected.to_string()))
        }
    }
}
