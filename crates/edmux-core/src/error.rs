//! Error types for edmux core logic.

use edmux_tmux::TmuxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Tmux(#[from] TmuxError),

    /// A runner-dependent operation was invoked with no live runner pane.
    #[error("no runner pane for window {0}")]
    NoRunnerPane(String),

    #[error("no command has been run yet")]
    NoLastCommand,

    /// The user aborted an interactive selection. Surfaced silently.
    #[error("selection cancelled")]
    Cancelled,

    #[error("no {0} to choose from")]
    NoCandidates(&'static str),

    /// The injected chooser itself failed (as opposed to a user abort).
    #[error("chooser error: {0}")]
    Chooser(String),

    /// A listing had no entry marked active where one was required.
    #[error("could not locate the active pane")]
    NoActivePane,

    #[error("target is not fully resolved: {0}")]
    UnresolvedTarget(String),
}
