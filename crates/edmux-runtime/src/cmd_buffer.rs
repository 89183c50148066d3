//! Paste-buffer commands: listing, yanking into the editor, putting from it.

use std::io::Read;

use edmux_core::Chooser;
use edmux_tmux::buffer::{self, BufferEntry, BufferFormat};
use edmux_tmux::executor::TmuxCommandRunner;

pub fn cmd_buffers(
    tmux: &impl TmuxCommandRunner,
    format: &BufferFormat,
    json: bool,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    let entries = buffer::list_buffers(tmux, format)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{:<12} {:>8}  {}", entry.id, entry.size, entry.sample);
        }
    }
    Ok(())
}

/// Print one buffer's full contents to stdout for the editor to consume.
pub fn cmd_yank(
    tmux: &impl TmuxCommandRunner,
    format: &BufferFormat,
    id_flag: Option<&str>,
    chooser: &impl Chooser,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;

    let id = match id_flag {
        Some(id) => id.to_string(),
        None => {
            let entries = buffer::list_buffers(tmux, format)?;
            match pick_buffer(&entries, chooser)? {
                Some(id) => id,
                None => return Ok(()),
            }
        }
    };

    let contents = buffer::show_buffer(tmux, Some(&id))?;
    print!("{contents}");
    Ok(())
}

pub fn cmd_put(
    tmux: &impl TmuxCommandRunner,
    id: Option<&str>,
    text: Option<String>,
) -> anyhow::Result<()> {
    tmux.ensure_server()?;
    let data = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    buffer::set_buffer(tmux, id, &data)?;
    Ok(())
}

/// Pick a buffer id: a single buffer is auto-selected, more go through the
/// chooser. `Ok(None)` when the user aborts.
pub(crate) fn pick_buffer(
    entries: &[BufferEntry],
    chooser: &impl Chooser,
) -> anyhow::Result<Option<String>> {
    match entries.len() {
        0 => anyhow::bail!("no paste buffers"),
        1 => Ok(Some(entries[0].id.clone())),
        _ => {
            let candidates: Vec<String> = entries
                .iter()
                .map(|e| format!("{}: {}", e.id, e.sample))
                .collect();
            match chooser.choose("buffer", &candidates)? {
                Some(line) => {
                    let id = line.split_once(':').map(|(id, _)| id).unwrap_or(&line);
                    Ok(Some(id.trim().to_string()))
                }
                None => Ok(None),
            }
        }
    }
}
