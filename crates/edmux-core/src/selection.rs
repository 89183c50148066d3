//! Target selection state and interactive resolution.
//!
//! A target pane is addressed as `session:window.pane`. Components are
//! chosen interactively through an injected [`Chooser`] capability; the core
//! supplies candidate lists and consumes the chosen string, never depending
//! on a specific UI.

use serde::{Deserialize, Serialize};

use edmux_tmux::TmuxCommandRunner;
use edmux_tmux::listing::{list_pane_ids, list_session_names, list_window_ids};

use crate::error::CoreError;

/// Interactive chooser capability supplied by the host environment.
/// `Ok(None)` means the user aborted the selection.
pub trait Chooser {
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<Option<String>, CoreError>;
}

/// The currently chosen session/window/pane. Unset until first use; cleared
/// when an interactive selection is cancelled.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub session: Option<String>,
    pub window: Option<String>,
    pub pane: Option<String>,
}

impl Selection {
    pub fn set_session(&mut self, session: impl Into<String>) {
        self.session = Some(session.into());
    }

    pub fn set_window(&mut self, window: impl Into<String>) {
        self.window = Some(window.into());
    }

    pub fn set_pane(&mut self, pane: impl Into<String>) {
        self.pane = Some(pane.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_some() && self.window.is_some() && self.pane.is_some()
    }

    /// `session:window.pane` with unset components left as empty
    /// placeholders.
    pub fn target_string(&self) -> String {
        format!(
            "{}:{}.{}",
            self.session.as_deref().unwrap_or(""),
            self.window.as_deref().unwrap_or(""),
            self.pane.as_deref().unwrap_or("")
        )
    }

    /// The fully qualified target, or `None` unless all three components are
    /// set. Sending keys requires a fully resolved target.
    pub fn resolved_target(&self) -> Option<String> {
        if self.is_complete() {
            Some(self.target_string())
        } else {
            None
        }
    }
}

/// Pick one candidate: exactly one is auto-selected without prompting, more
/// than one goes through the chooser. A user abort clears `selection` and
/// surfaces as [`CoreError::Cancelled`].
fn pick_one(
    selection: &mut Selection,
    chooser: &impl Chooser,
    kind: &'static str,
    prompt: &str,
    candidates: Vec<String>,
) -> Result<String, CoreError> {
    match candidates.as_slice() {
        [] => Err(CoreError::NoCandidates(kind)),
        [only] => Ok(only.clone()),
        _ => match chooser.choose(prompt, &candidates)? {
            Some(choice) => Ok(choice),
            None => {
                selection.clear();
                Err(CoreError::Cancelled)
            }
        },
    }
}

/// Fill every unset component of `selection` from the live listings, each
/// scoped by the components already chosen, and return the fully resolved
/// target.
pub fn resolve_target(
    selection: &mut Selection,
    tmux: &impl TmuxCommandRunner,
    chooser: &impl Chooser,
) -> Result<String, CoreError> {
    let session = match selection.session.clone() {
        Some(session) => session,
        None => {
            let candidates = list_session_names(tmux)?;
            let session = pick_one(selection, chooser, "sessions", "session", candidates)?;
            selection.set_session(session.clone());
            session
        }
    };

    let window = match selection.window.clone() {
        Some(window) => window,
        None => {
            let candidates = list_window_ids(tmux, Some(&session))?;
            let window = pick_one(selection, chooser, "windows", "window", candidates)?;
            selection.set_window(window.clone());
            window
        }
    };

    if selection.pane.is_none() {
        let scope = format!("{session}:{window}");
        let candidates = list_pane_ids(tmux, Some(&scope))?;
        let pane = pick_one(selection, chooser, "panes", "pane", candidates)?;
        selection.set_pane(pane);
    }

    selection
        .resolved_target()
        .ok_or_else(|| CoreError::UnresolvedTarget(selection.target_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edmux_tmux::TmuxError;

    #[test]
    fn target_formatting() {
        let mut sel = Selection::default();
        sel.set_session("work");
        sel.set_window("2");
        sel.set_pane("1");
        assert_eq!(sel.target_string(), "work:2.1");
        assert_eq!(sel.resolved_target(), Some("work:2.1".to_string()));
        assert!(sel.is_complete());
    }

    #[test]
    fn incomplete_target_renders_placeholders() {
        let mut sel = Selection::default();
        sel.set_session("work");
        assert_eq!(sel.target_string(), "work:.");
        assert_eq!(sel.resolved_target(), None);
        assert!(!sel.is_complete());
    }

    #[test]
    fn clear_resets_all_components() {
        let mut sel = Selection::default();
        sel.set_session("work");
        sel.set_pane("1");
        sel.clear();
        assert_eq!(sel, Selection::default());
    }

    struct SingleEverything;
    impl TmuxCommandRunner for SingleEverything {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            match args[0] {
                "list-sessions" => Ok("work\n".to_string()),
                "list-windows" => {
                    assert_eq!(args, ["list-windows", "-F", "#I", "-t", "work"]);
                    Ok("2\n".to_string())
                }
                "list-panes" => {
                    assert_eq!(args, ["list-panes", "-t", "work:2", "-F", "#P"]);
                    Ok("1\n".to_string())
                }
                other => panic!("unexpected subcommand {other}"),
            }
        }
    }

    struct NeverAsked;
    impl Chooser for NeverAsked {
        fn choose(&self, _: &str, _: &[String]) -> Result<Option<String>, CoreError> {
            panic!("single candidates must be auto-selected");
        }
    }

    #[test]
    fn single_candidates_skip_the_chooser() {
        let mut sel = Selection::default();
        let target =
            resolve_target(&mut sel, &SingleEverything, &NeverAsked).expect("resolves");
        assert_eq!(target, "work:2.1");
        assert!(sel.is_complete());
    }

    struct TwoSessions;
    impl TmuxCommandRunner for TwoSessions {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            match args[0] {
                "list-sessions" => Ok("work\nscratch\n".to_string()),
                other => panic!("unexpected subcommand {other}"),
            }
        }
    }

    struct Aborts;
    impl Chooser for Aborts {
        fn choose(&self, _: &str, _: &[String]) -> Result<Option<String>, CoreError> {
            Ok(None)
        }
    }

    #[test]
    fn cancel_clears_selection() {
        let mut sel = Selection::default();
        sel.set_pane("9");
        let err = resolve_target(&mut sel, &TwoSessions, &Aborts).expect_err("cancelled");
        assert!(matches!(err, CoreError::Cancelled));
        assert_eq!(sel, Selection::default());
    }

    struct NoSessions;
    impl TmuxCommandRunner for NoSessions {
        fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
            Ok(String::new())
        }
    }

    #[test]
    fn empty_listing_is_no_candidates() {
        let mut sel = Selection::default();
        let err = resolve_target(&mut sel, &NoSessions, &Aborts).expect_err("no candidates");
        assert!(matches!(err, CoreError::NoCandidates("sessions")));
    }

    struct PicksScratch;
    impl Chooser for PicksScratch {
        fn choose(&self, prompt: &str, candidates: &[String]) -> Result<Option<String>, CoreError> {
            assert_eq!(prompt, "session");
            assert_eq!(candidates, ["work".to_string(), "scratch".to_string()]);
            Ok(Some("scratch".to_string()))
        }
    }

    struct TwoSessionsThenSingles;
    impl TmuxCommandRunner for TwoSessionsThenSingles {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            match args[0] {
                "list-sessions" => Ok("work\nscratch\n".to_string()),
                "list-windows" => Ok("1\n".to_string()),
                "list-panes" => Ok("0\n".to_string()),
                other => panic!("unexpected subcommand {other}"),
            }
        }
    }

    #[test]
    fn chooser_choice_is_recorded() {
        let mut sel = Selection::default();
        let target = resolve_target(&mut sel, &TwoSessionsThenSingles, &PicksScratch)
            .expect("resolves");
        assert_eq!(target, "scratch:1.0");
        assert_eq!(sel.session.as_deref(), Some("scratch"));
    }
}
