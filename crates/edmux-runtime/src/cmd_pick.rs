//! `edmux pick` — jump to a session:window target.

use edmux_core::Chooser;
use edmux_tmux::error::TmuxError;
use edmux_tmux::executor::TmuxCommandRunner;
use edmux_tmux::listing::{list_session_names, list_window_ids};
use edmux_tmux::ops;

/// `session:window` candidates, every window of every session (or of one
/// session when scoped).
pub(crate) fn build_candidates(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
) -> Result<Vec<String>, TmuxError> {
    let sessions = match session {
        Some(s) => vec![s.to_string()],
        None => list_session_names(tmux)?,
    };
    let mut candidates = Vec::new();
    for session in &sessions {
        for window in list_window_ids(tmux, Some(session))? {
            candidates.push(format!("{session}:{window}"));
        }
    }
    Ok(candidates)
}

pub fn cmd_pick(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
    chooser: &impl Chooser,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;

    let candidates = build_candidates(tmux, session)?;
    if candidates.is_empty() {
        anyhow::bail!("no windows to pick from");
    }

    let target = match candidates.as_slice() {
        [only] => only.clone(),
        _ => match chooser.choose("target", &candidates)? {
            Some(target) => target,
            None => return Ok(()),
        },
    };

    if ops::switch_client(tmux, &target).is_err() {
        // Not attached as a tmux client; move the window selection instead.
        ops::select_window(tmux, &target)?;
    }
    Ok(())
}
