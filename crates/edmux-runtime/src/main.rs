//! edmux: drive a tmux server from your editor.
//! One subcommand per operation so any editor can bind keys to
//! `edmux <subcommand>` invocations.

use clap::Parser;

mod cli;
mod cmd_buffer;
mod cmd_pick;
mod cmd_run;
mod cmd_send;
mod cmd_window;
mod config;
mod context;
mod prompt;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("EDMUX_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(args.config.as_deref())?;
    let tmux = config.executor(args.socket_path.as_deref(), args.socket_name.as_deref());
    let session = args.session.as_deref();

    match args.command {
        cli::Command::Send(opts) => {
            cmd_send::cmd_send(&tmux, session, opts.target.as_deref(), &opts.text)
        }
        cli::Command::Run(opts) => cmd_run::cmd_run(
            &tmux,
            config.runner.clone(),
            session,
            opts.window.as_deref(),
            opts.dir.as_deref(),
            &opts.command,
        ),
        cli::Command::Interrupt(opts) => {
            cmd_run::cmd_interrupt(&tmux, config.runner.clone(), session, opts.window.as_deref())
        }
        cli::Command::Inspect(opts) => {
            cmd_run::cmd_inspect(&tmux, config.runner.clone(), session, opts.window.as_deref())
        }
        cli::Command::ClearHistory(opts) => cmd_run::cmd_clear_history(
            &tmux,
            config.runner.clone(),
            session,
            opts.window.as_deref(),
        ),
        cli::Command::Zoom(opts) => {
            cmd_run::cmd_zoom(&tmux, config.runner.clone(), session, opts.window.as_deref())
        }
        cli::Command::CloseRunner(opts) => cmd_run::cmd_close_runner(
            &tmux,
            config.runner.clone(),
            session,
            opts.window.as_deref(),
        ),
        cli::Command::ClosePanes => cmd_run::cmd_close_panes(&tmux, session),
        cli::Command::Buffers(opts) => {
            cmd_buffer::cmd_buffers(&tmux, &config.buffer_format()?, opts.json)
        }
        cli::Command::Yank(opts) => cmd_buffer::cmd_yank(
            &tmux,
            &config.buffer_format()?,
            opts.id.as_deref(),
            &prompt::FzfChooser,
        ),
        cli::Command::Put(opts) => cmd_buffer::cmd_put(&tmux, opts.id.as_deref(), opts.text),
        cli::Command::NewWindow(opts) => {
            cmd_window::cmd_new_window(&tmux, session, opts.after, opts.dir.as_deref())
        }
        cli::Command::Split(opts) => cmd_window::cmd_split(
            &tmux,
            session,
            opts.horizontal,
            opts.size,
            opts.dir.as_deref(),
        ),
        cli::Command::Clone(opts) => cmd_window::cmd_clone(
            &tmux,
            session,
            config.client_command.as_deref(),
            opts.dir.as_deref(),
        ),
        cli::Command::Pick => cmd_pick::cmd_pick(&tmux, session, &prompt::FzfChooser),
    }
}
