//! TmuxCommandRunner trait and TmuxExecutor (sync subprocess wrapper).

use crate::error::TmuxError;

/// Trait for executing tmux commands. Enables mock injection for testing.
pub trait TmuxCommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;

    /// Like [`run`](Self::run), split on line boundaries with trailing blank
    /// lines trimmed.
    fn run_lines(&self, args: &[&str]) -> Result<Vec<String>, TmuxError> {
        Ok(split_lines(&self.run(args)?))
    }

    /// `has-session` existence probe: is any tmux server reachable?
    fn server_running(&self) -> bool {
        self.run(&["has-session"]).is_ok()
    }

    /// Fail fast with [`TmuxError::ServerNotRunning`] when no server is
    /// reachable. A missing binary stays [`TmuxError::NotFound`] so the two
    /// conditions are diagnosable apart.
    fn ensure_server(&self) -> Result<(), TmuxError> {
        match self.run(&["has-session"]) {
            Ok(_) => Ok(()),
            Err(TmuxError::NotFound) => Err(TmuxError::NotFound),
            Err(_) => Err(TmuxError::ServerNotRunning),
        }
    }
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        (**self).run(args)
    }
}

/// Split captured output into lines, dropping trailing blank lines only.
pub fn split_lines(output: &str) -> Vec<String> {
    let mut lines: Vec<String> = output.lines().map(str::to_string).collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Real tmux executor using `std::process::Command`.
///
/// Each call spawns a new `tmux` process, so the executor itself holds no
/// interior mutability and no persistent child handle.
pub struct TmuxExecutor {
    tmux_bin: String,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: None,
            socket_name: None,
        }
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let mut cmd = std::process::Command::new(&self.tmux_bin);
        // Socket path takes precedence over socket name
        if let Some(ref path) = self.socket_path {
            cmd.args(["-S", path]);
        } else if let Some(ref name) = self.socket_name {
            cmd.args(["-L", name]);
        }
        cmd.args(args);
        tracing::debug!(?args, "tmux invoke");
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TmuxError::NotFound
            } else {
                TmuxError::Io(e)
            }
        })?;
        if !output.status.success() {
            let status = output
                .status
                .code()
                .map(|c| format!("exit code {c}"))
                .unwrap_or_else(|| "killed by signal".to_string());
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(TmuxError::CommandFailed {
                args: args.join(" "),
                status,
                output: detail,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
