//! Shared helpers for the command modules.

use edmux_core::{CoreError, pane_target};
use edmux_tmux::TmuxCommandRunner;
use edmux_tmux::listing::{active_entry, current_window_id, list_panes_raw};

/// The window a command operates on: an explicit flag, or the window the
/// client is currently on.
pub fn resolve_window(
    tmux: &impl TmuxCommandRunner,
    window_flag: Option<&str>,
    session: Option<&str>,
) -> Result<String, CoreError> {
    match window_flag {
        Some(w) => Ok(w.to_string()),
        None => Ok(current_window_id(tmux, session)?),
    }
}

/// `window.pane` target of the pane currently active in `window`.
pub fn active_pane_in(
    tmux: &impl TmuxCommandRunner,
    window: &str,
) -> Result<String, CoreError> {
    let pane =
        active_entry(&list_panes_raw(tmux, Some(window))?).ok_or(CoreError::NoActivePane)?;
    Ok(pane_target(window, &pane))
}

/// `window.pane` target of the pane active in the window the client is on.
pub fn current_active_pane(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
) -> Result<String, CoreError> {
    let window = current_window_id(tmux, session)?;
    active_pane_in(tmux, &window)
}
