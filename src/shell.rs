//! Line-oriented command shell.
//!
//! Stands in for the tray UI and global hotkeys: each stdin line is one
//! command. Digits `1`..`9` trigger the matching paste slot.

use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use cs_core::{EntryPreview, PasteSlot};

use crate::bootstrap::AppContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Paste(PasteSlot),
    List,
    Json,
    Bindings,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`, type `help` for a list")]
pub struct UnknownCommand(String);

impl FromStr for ShellCommand {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let command = match (parts.next(), parts.next(), parts.next()) {
            (Some("list" | "ls"), None, None) => ShellCommand::List,
            (Some("json"), None, None) => ShellCommand::Json,
            (Some("bindings"), None, None) => ShellCommand::Bindings,
            (Some("help" | "?"), None, None) => ShellCommand::Help,
            (Some("quit" | "exit" | "q"), None, None) => ShellCommand::Quit,
            (Some("paste"), Some(slot), None) | (Some(slot), None, None) => slot
                .parse::<PasteSlot>()
                .map(ShellCommand::Paste)
                .map_err(|_| UnknownCommand(line.to_string()))?,
            _ => return Err(UnknownCommand(line.to_string())),
        };
        Ok(command)
    }
}

const HELP: &str = "\
commands:
  1..9, paste <n>  paste history slot n
  list             show history previews
  json             dump history as JSON
  bindings         show paste shortcut bindings
  quit             restore the clipboard and exit";

/// Run commands from `input` until it ends or `quit` is read.
pub async fn run_shell<R, W>(context: &AppContext, input: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{HELP}")?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Paste(slot) => {
                if let Err(err) = context.paste_history_slot().execute(slot).await {
                    warn!(error = %err, "Paste failed");
                    writeln!(out, "paste failed: {err}")?;
                }
            }
            ShellCommand::List => {
                let previews = context.list_history_previews().execute();
                write_previews(&mut out, &previews)?;
            }
            ShellCommand::Json => {
                let history = context.store.history();
                writeln!(out, "{}", serde_json::to_string_pretty(&*history)?)?;
            }
            ShellCommand::Bindings => {
                for binding in &context.bindings {
                    writeln!(out, "{:<16} -> slot {}", binding.to_string(), binding.slot)?;
                }
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
        out.flush()?;
    }

    info!("Shell input closed");
    Ok(())
}

fn write_previews<W: Write>(out: &mut W, previews: &[EntryPreview]) -> anyhow::Result<()> {
    if previews.is_empty() {
        writeln!(out, "(history is empty)")?;
        return Ok(());
    }
    for preview in previews {
        let video = if preview.is_video { " [video]" } else { "" };
        writeln!(
            out,
            "{:>2}  {:<7} {}{video}",
            preview.index + 1,
            preview.kind,
            preview.title
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_paste_slots() {
        assert_eq!(
            "3".parse::<ShellCommand>(),
            Ok(ShellCommand::Paste(PasteSlot::new(3).unwrap()))
        );
        assert_eq!(
            " paste 9 ".parse::<ShellCommand>(),
            Ok(ShellCommand::Paste(PasteSlot::new(9).unwrap()))
        );
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        assert!("0".parse::<ShellCommand>().is_err());
        assert!("paste 10".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn keywords_are_recognized() {
        assert_eq!("ls".parse::<ShellCommand>(), Ok(ShellCommand::List));
        assert_eq!("json".parse::<ShellCommand>(), Ok(ShellCommand::Json));
        assert_eq!("q".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
        assert!("list extra".parse::<ShellCommand>().is_err());
    }
}
