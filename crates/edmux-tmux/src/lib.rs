//! edmux-tmux: tmux backend IO boundary.
//! Provides subprocess execution, listing/buffer parsing, and typed wrappers
//! for every tmux subcommand edmux issues. No business logic — pure IO
//! boundary.

pub mod buffer;
pub mod error;
pub mod executor;
pub mod listing;
pub mod ops;

pub use buffer::{BufferAddressing, BufferEntry, BufferFormat, list_buffers, parse_buffer_lines};
pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor, split_lines};
pub use listing::{
    PaneRecord, active_entry, current_window_id, entry_id, list_pane_ids, list_panes_raw,
    list_session_names, list_window_ids, nearest_inactive, parse_pane_records,
};
pub use ops::SplitOrientation;
