//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "edmux", about = "drive a tmux server from your editor")]
pub struct Cli {
    /// tmux socket path (forwarded as `tmux -S`)
    #[arg(long, short = 'S', global = true)]
    pub socket_path: Option<String>,

    /// tmux socket name (forwarded as `tmux -L`)
    #[arg(long, short = 'L', global = true)]
    pub socket_name: Option<String>,

    /// Config file path (default: <config dir>/edmux/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Session scope for prompts and navigation
    #[arg(long, global = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send text to an interactively chosen pane
    Send(SendOpts),
    /// Run a command in the window's runner pane
    Run(RunOpts),
    /// Send C-c to the runner pane
    Interrupt(WindowOpts),
    /// Focus the runner pane and enter copy mode
    Inspect(WindowOpts),
    /// Clear the runner pane's history
    ClearHistory(WindowOpts),
    /// Toggle zoom on the runner pane
    Zoom(WindowOpts),
    /// Kill the runner pane
    CloseRunner(WindowOpts),
    /// Kill every pane in the current window except the active one
    ClosePanes,
    /// List paste buffers
    Buffers(BuffersOpts),
    /// Print a paste buffer's contents to stdout
    Yank(YankOpts),
    /// Store text (argument or stdin) in a paste buffer
    Put(PutOpts),
    /// Create a window and change into a directory (remote-aware)
    NewWindow(NewWindowOpts),
    /// Split the current window (remote-aware)
    Split(SplitOpts),
    /// Open a fresh editor client in a new window
    Clone(CloneOpts),
    /// Jump to a session:window target
    Pick,
}

#[derive(clap::Args)]
pub struct SendOpts {
    /// Text to send, terminated by an enter key
    pub text: String,

    /// Explicit session:window.pane target, skipping the prompt
    #[arg(long)]
    pub target: Option<String>,
}

#[derive(clap::Args)]
pub struct RunOpts {
    /// Command line to run in the runner pane
    pub command: String,

    /// Window id (default: the window the client is on)
    #[arg(long)]
    pub window: Option<String>,

    /// Directory a freshly created runner changes into
    #[arg(long)]
    pub dir: Option<String>,
}

#[derive(clap::Args)]
pub struct WindowOpts {
    /// Window id (default: the window the client is on)
    #[arg(long)]
    pub window: Option<String>,
}

#[derive(clap::Args)]
pub struct BuffersOpts {
    /// Emit the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct YankOpts {
    /// Buffer id, skipping the prompt
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(clap::Args)]
pub struct PutOpts {
    /// Text to store (default: read stdin)
    pub text: Option<String>,

    /// Buffer id to overwrite
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(clap::Args)]
pub struct NewWindowOpts {
    /// Insert the window after the current one
    #[arg(long)]
    pub after: bool,

    /// Directory to change into; remote specs get an ssh login first
    #[arg(long)]
    pub dir: Option<String>,
}

#[derive(clap::Args)]
pub struct SplitOpts {
    /// Split side-by-side instead of stacked
    #[arg(long)]
    pub horizontal: bool,

    /// New pane size as a percentage
    #[arg(long)]
    pub size: Option<u16>,

    /// Directory to change into; remote specs get an ssh login first
    #[arg(long)]
    pub dir: Option<String>,
}

#[derive(clap::Args)]
pub struct CloneOpts {
    /// Directory to change into before spawning the client
    #[arg(long)]
    pub dir: Option<String>,
}
