//! `edmux run` and the runner-dependent commands.

use edmux_core::{RunnerManager, RunnerSettings};
use edmux_tmux::{TmuxCommandRunner, ops};

use crate::context::{current_active_pane, resolve_window};

/// Build a manager for one invocation and re-attach to any runner pane left
/// by a previous one. Never creates a pane.
fn attach(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<(RunnerManager, String)> {
    tmux.ensure_server()?;
    let window = resolve_window(tmux, window_flag, session)?;
    let mut manager = RunnerManager::new(settings);
    manager.adopt(tmux, &window)?;
    Ok((manager, window))
}

pub fn cmd_run(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
    dir: Option<&str>,
    command: &str,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    let window = resolve_window(tmux, window_flag, session)?;
    let mut manager = RunnerManager::new(settings);
    manager.run_command(tmux, &window, command, dir)?;
    Ok(())
}

pub fn cmd_interrupt(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<()> {
    let (mut manager, window) = attach(tmux, settings, session, window_flag)?;
    manager.interrupt(tmux, &window)?;
    Ok(())
}

pub fn cmd_inspect(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<()> {
    let (mut manager, window) = attach(tmux, settings, session, window_flag)?;
    manager.inspect(tmux, &window)?;
    Ok(())
}

pub fn cmd_clear_history(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<()> {
    let (mut manager, window) = attach(tmux, settings, session, window_flag)?;
    manager.clear_history(tmux, &window)?;
    Ok(())
}

pub fn cmd_zoom(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<()> {
    let (mut manager, window) = attach(tmux, settings, session, window_flag)?;
    manager.zoom(tmux, &window)?;
    Ok(())
}

pub fn cmd_close_runner(
    tmux: &impl TmuxCommandRunner,
    settings: RunnerSettings,
    session: Option<&str>,
    window_flag: Option<&str>,
) -> anyhow::Result<()> {
    let (mut manager, window) = attach(tmux, settings, session, window_flag)?;
    manager.close(tmux, &window)?;
    Ok(())
}

pub fn cmd_close_panes(
    tmux: &impl TmuxCommandRunner,
    session: Option<&str>,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    let target = current_active_pane(tmux, session)?;
    ops::kill_other_panes(tmux, Some(&target))?;
    Ok(())
}
