//! `edmux send` — send text to an interactively chosen pane.

use edmux_core::{CoreError, Selection, resolve_target};
use edmux_tmux::{TmuxCommandRunner, ops};

use crate::prompt::FzfChooser;

pub fn cmd_send(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
    target_flag: Option<&str>,
    text: &str,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;

    let target = match target_flag {
        Some(t) => t.to_string(),
        None => {
            let mut selection = Selection::default();
            if let Some(s) = session {
                selection.set_session(s);
            }
            match resolve_target(&mut selection, tmux, &FzfChooser) {
                Ok(target) => target,
                Err(CoreError::Cancelled) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
    };

    ops::send_text(tmux, &target, text)?;
    Ok(())
}
