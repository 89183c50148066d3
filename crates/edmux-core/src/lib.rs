//! edmux-core: selection state, runner-pane lifecycle, and remote-directory
//! detection. All tmux access goes through the injected command runner; the
//! interactive chooser is an injected capability, so this crate never
//! depends on a UI.

pub mod error;
pub mod remote;
pub mod runner;
pub mod selection;

pub use error::CoreError;
pub use remote::{RemoteContext, parse_remote_dir};
pub use runner::{RUNNER_PANE_TITLE, RunnerManager, RunnerSettings, pane_target};
pub use selection::{Chooser, Selection, resolve_target};
