//! Runner-pane manager: per-window lifecycle of the pane that receives
//! commands sent from the editor.
//!
//! ## States (per window)
//!
//! - `NoRunner` — no tracked pane, or the tracked pane no longer exists
//! - `RunnerStarting` — a pane is being provisioned (reuse, adopt, or split)
//! - `RunnerAlive` — the tracked pane answered the last liveness probe
//!
//! ## Key transitions
//!
//! - `ensure_runner`: `NoRunner -> RunnerStarting -> RunnerAlive`
//! - `close` or window closed: `RunnerAlive -> NoRunner`
//!
//! Liveness is re-checked on every read; a stale entry (window closed, pane
//! killed) is never returned as live. Before any map read, entries whose
//! window id is absent from the live window-id list are dropped, bounding
//! the map to the set of live windows. A tmux failure mid-provisioning
//! propagates unchanged and leaves the map unmodified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use edmux_tmux::error::TmuxError;
use edmux_tmux::executor::TmuxCommandRunner;
use edmux_tmux::listing::{
    active_entry, list_pane_ids, list_panes_raw, list_window_ids, nearest_inactive,
};
use edmux_tmux::ops::{self, SplitOrientation};

use crate::error::CoreError;

/// Title stamped on runner panes so a later host process can find them
/// again without persisting anything.
pub const RUNNER_PANE_TITLE: &str = "edmux-runner";

const TITLE_LIST_FORMAT: &str = "#P\t#T";

/// How runner panes are provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    pub orientation: SplitOrientation,
    pub height_percent: u16,
    /// Reuse the nearest currently-inactive pane instead of splitting.
    pub prefer_nearest: bool,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            orientation: SplitOrientation::Vertical,
            height_percent: 20,
            prefer_nearest: false,
        }
    }
}

/// `window.pane` target within the current session.
pub fn pane_target(window: &str, pane: &str) -> String {
    format!("{window}.{pane}")
}

/// Tracks, per window, which pane is the designated command runner.
/// One instance per host process; never persisted.
#[derive(Debug, Default)]
pub struct RunnerManager {
    panes: HashMap<String, String>,
    last_command: Option<String>,
    settings: RunnerSettings,
}

impl RunnerManager {
    pub fn new(settings: RunnerSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Drop entries whose window is no longer in the live window-id list.
    fn gc(&mut self, tmux: &impl TmuxCommandRunner) -> Result<(), CoreError> {
        let live = list_window_ids(tmux, None)?;
        let before = self.panes.len();
        self.panes.retain(|window, _| live.contains(window));
        if self.panes.len() < before {
            tracing::debug!(
                pruned = before - self.panes.len(),
                "dropped runner entries for closed windows"
            );
        }
        Ok(())
    }

    fn probe(tmux: &impl TmuxCommandRunner, window: &str, pane: &str) -> bool {
        list_pane_ids(tmux, Some(window))
            .map(|ids| ids.iter().any(|id| id == pane))
            .unwrap_or(false)
    }

    /// True iff a pane is tracked for `window` AND it answers a liveness
    /// probe right now.
    pub fn is_alive(&mut self, tmux: &impl TmuxCommandRunner, window: &str) -> bool {
        if self.gc(tmux).is_err() {
            return false;
        }
        match self.panes.get(window) {
            Some(pane) => Self::probe(tmux, window, pane),
            None => false,
        }
    }

    fn require_alive(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<String, CoreError> {
        self.gc(tmux)?;
        if let Some(pane) = self.panes.get(window) {
            if Self::probe(tmux, window, pane) {
                return Ok(pane.clone());
            }
        }
        Err(CoreError::NoRunnerPane(window.to_string()))
    }

    fn find_titled_runner(
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<Option<String>, TmuxError> {
        let lines = tmux.run_lines(&["list-panes", "-t", window, "-F", TITLE_LIST_FORMAT])?;
        for line in lines {
            if let Some((id, title)) = line.split_once('\t') {
                if title == RUNNER_PANE_TITLE && !id.is_empty() {
                    return Ok(Some(id.to_string()));
                }
            }
        }
        Ok(None)
    }

    /// Re-attach to an existing runner for `window` without creating
    /// anything: the tracked pane when it is still live, else a pane already
    /// carrying the runner title (left by a previous host process).
    pub fn adopt(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<Option<String>, CoreError> {
        self.gc(tmux)?;
        if let Some(pane) = self.panes.get(window) {
            if Self::probe(tmux, window, pane) {
                return Ok(Some(pane.clone()));
            }
        }
        match Self::find_titled_runner(tmux, window)? {
            Some(pane) => {
                tracing::debug!(window, pane = %pane, "adopted existing runner pane");
                self.panes.insert(window.to_string(), pane.clone());
                Ok(Some(pane))
            }
            None => Ok(None),
        }
    }

    /// Return the live runner pane for `window`, provisioning one first when
    /// needed. Idempotent: with a live runner, no split/create call is made.
    ///
    /// Provisioning order: adopt a pane already titled as a runner, else
    /// reuse the nearest inactive pane (when `prefer_nearest`), else split
    /// with the configured orientation and size. A new pane gets a
    /// `cd <dir>` send and the runner title before it is recorded.
    pub fn ensure_runner(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
        dir: Option<&str>,
    ) -> Result<String, CoreError> {
        if let Some(pane) = self.adopt(tmux, window)? {
            return Ok(pane);
        }

        let reused = if self.settings.prefer_nearest {
            nearest_inactive(&list_panes_raw(tmux, Some(window))?)
        } else {
            None
        };

        let pane = match reused {
            Some(pane) => pane,
            None => {
                ops::split_window(
                    tmux,
                    self.settings.orientation,
                    Some(self.settings.height_percent),
                )?;
                active_entry(&list_panes_raw(tmux, Some(window))?)
                    .ok_or(CoreError::NoActivePane)?
            }
        };

        let target = pane_target(window, &pane);
        if let Some(dir) = dir {
            ops::send_text(tmux, &target, &format!("cd {dir}"))?;
        }
        ops::set_pane_title(tmux, &target, RUNNER_PANE_TITLE)?;

        tracing::info!(window, pane = %pane, "runner pane ready");
        self.panes.insert(window.to_string(), pane.clone());
        Ok(pane)
    }

    /// Send `text` (terminated by an enter key) to the window's runner pane,
    /// creating it first when needed, then restore focus to the pane that
    /// was active before the call.
    pub fn run_command(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
        text: &str,
        dir: Option<&str>,
    ) -> Result<(), CoreError> {
        let prior = active_entry(&list_panes_raw(tmux, Some(window))?);
        let pane = self.ensure_runner(tmux, window, dir)?;
        ops::send_text(tmux, &pane_target(window, &pane), text)?;
        self.last_command = Some(text.to_string());
        if let Some(prior) = prior {
            ops::select_pane(tmux, &pane_target(window, &prior))?;
        }
        Ok(())
    }

    /// Re-run the most recently run command.
    pub fn run_last_command(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
        dir: Option<&str>,
    ) -> Result<(), CoreError> {
        let text = self.last_command.clone().ok_or(CoreError::NoLastCommand)?;
        self.run_command(tmux, window, &text, dir)
    }

    /// Send `C-c` to the runner pane. Fails fast when no runner is alive.
    pub fn interrupt(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<(), CoreError> {
        let pane = self.require_alive(tmux, window)?;
        ops::send_key(tmux, &pane_target(window, &pane), "C-c")?;
        Ok(())
    }

    /// Focus the runner pane and enter copy mode for scrollback inspection.
    pub fn inspect(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<(), CoreError> {
        let pane = self.require_alive(tmux, window)?;
        let target = pane_target(window, &pane);
        ops::select_pane(tmux, &target)?;
        ops::copy_mode(tmux, &target)?;
        Ok(())
    }

    /// Clear the runner pane's history.
    pub fn clear_history(
        &mut self,
        tmux: &impl TmuxCommandRunner,
        window: &str,
    ) -> Result<(), CoreError> {
        let pane = self.require_alive(tmux, window)?;
        ops::clear_history(tmux, &pane_target(window, &pane))?;
        Ok(())
    }

    /// Toggle zoom on the runner pane.
    pub fn zoom(&mut self, tmux: &impl TmuxCommandRunner, window: &str) -> Result<(), CoreError> {
        let pane = self.require_alive(tmux, window)?;
        ops::toggle_zoom(tmux, &pane_target(window, &pane))?;
        Ok(())
    }

    /// Kill the tracked runner pane and drop the entry. Safe to call when no
    /// runner is tracked or the pane is already gone.
    pub fn close(&mut self, tmux: &impl TmuxCommandRunner, window: &str) -> Result<(), CoreError> {
        if let Some(pane) = self.panes.remove(window) {
            match ops::kill_pane(tmux, &pane_target(window, &pane)) {
                Ok(()) => {}
                Err(TmuxError::CommandFailed { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
