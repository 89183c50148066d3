//! Window commands: new-window, split, clone. Remote-directory aware.

use edmux_core::parse_remote_dir;
use edmux_tmux::error::TmuxError;
use edmux_tmux::executor::TmuxCommandRunner;
use edmux_tmux::ops::{self, SplitOrientation};

use crate::context::current_active_pane;

/// Send the directory-change sequence to `target`. A remote spec gets the
/// ssh login send before the `cd`.
fn send_change_dir(
    tmux: &impl TmuxCommandRunner,
    target: &str,
    dir: &str,
) -> Result<(), TmuxError> {
    match parse_remote_dir(dir) {
        Some(remote) => {
            ops::send_text(tmux, target, &remote.login_command())?;
            ops::send_text(tmux, target, &format!("cd {}", remote.path))?;
        }
        None => ops::send_text(tmux, target, &format!("cd {dir}"))?,
    }
    Ok(())
}

pub fn cmd_new_window(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
    after: bool,
    dir: Option<&str>,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    ops::new_window(tmux, after)?;
    if let Some(dir) = dir {
        let target = current_active_pane(tmux, session)?;
        send_change_dir(tmux, &target, dir)?;
    }
    Ok(())
}

pub fn cmd_split(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
    horizontal: bool,
    size: Option<u16>,
    dir: Option<&str>,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    let orientation = if horizontal {
        SplitOrientation::Horizontal
    } else {
        SplitOrientation::Vertical
    };
    ops::split_window(tmux, orientation, size)?;
    if let Some(dir) = dir {
        let target = current_active_pane(tmux, session)?;
        send_change_dir(tmux, &target, dir)?;
    }
    Ok(())
}

/// Open a fresh editor client in a new window. What the client command does
/// (restoring layout, connecting to a server) is the editor's business; it
/// is sent as one opaque configured line.
pub fn cmd_clone(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
    client_command: Option<&str>,
    dir: Option<&str>,
) -> anyhow::Result<()> {
    let Some(client_command) = client_command else {
        anyhow::bail!("clone requires client_command to be set in the config file");
    };
    tmux.ensure_server()?;
    ops::new_window(tmux, false)?;
    let target = current_active_pane(tmux, session)?;
    if let Some(dir) = dir {
        send_change_dir(tmux, &target, dir)?;
    }
    ops::send_text(tmux, &target, client_command)?;
    Ok(())
}
