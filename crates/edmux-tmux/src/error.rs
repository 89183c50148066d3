//! Error types for the tmux backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    /// The `has-session` pre-flight probe failed: no reachable tmux server.
    #[error("tmux server is not running")]
    ServerNotRunning,

    /// The tmux binary itself could not be found.
    #[error("tmux binary not found in PATH")]
    NotFound,

    /// A tmux call exited non-zero or was killed by a signal. Carries the
    /// failing arguments and the process output verbatim.
    #[error("`tmux {args}` failed ({status}): {output}")]
    CommandFailed {
        args: String,
        status: String,
        output: String,
    },

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}
