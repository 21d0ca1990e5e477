use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat};
use std::collections::HashSet;
use tracing::debug;

use cs_core::{ClipboardFormat, ObservedClipboardRepresentation, SystemClipboardSnapshot};

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Capture every format the clipboard lists, raw and in listing order.
    pub fn read_snapshot(ctx: &ClipboardContext) -> Result<SystemClipboardSnapshot> {
        let available = map_clipboard_err(ctx.available_formats())?;

        let mut seen = HashSet::new();
        let mut reps = Vec::with_capacity(available.len());

        for format_id in available {
            if ClipboardFormat::is_meta_target(&format_id) || !seen.insert(format_id.clone()) {
                continue;
            }
            match ctx.get_buffer(&format_id) {
                Ok(buf) => reps.push(ObservedClipboardRepresentation::observed(format_id, buf)),
                Err(err) => {
                    debug!(format_id = %format_id, error = %err, "Skipping unreadable clipboard format")
                }
            }
        }

        // Some backends list standard formats under names get_buffer cannot fetch.
        let has = |format: ClipboardFormat| reps.iter().any(|r| r.format == format);
        let missing_text = !has(ClipboardFormat::Text) && ctx.has(ContentFormat::Text);
        let missing_files = !has(ClipboardFormat::FileUrl) && ctx.has(ContentFormat::Files);

        if missing_text {
            if let Ok(text) = ctx.get_text() {
                reps.push(ObservedClipboardRepresentation::typed(
                    ClipboardFormat::Text,
                    text.into_bytes(),
                ));
            }
        }

        if missing_files {
            if let Ok(files) = ctx.get_files() {
                reps.push(ObservedClipboardRepresentation::typed(
                    ClipboardFormat::FileUrl,
                    files.join("\n").into_bytes(),
                ));
            }
        }

        Ok(SystemClipboardSnapshot::new(reps))
    }

    /// Replace the clipboard with all representations of `snapshot` as one item.
    pub fn write_snapshot(ctx: &ClipboardContext, snapshot: SystemClipboardSnapshot) -> Result<()> {
        if snapshot.is_empty() {
            return Self::clear(ctx);
        }

        let contents = snapshot
            .representations
            .into_iter()
            .map(to_clipboard_content)
            .collect::<Vec<_>>();

        map_clipboard_err(ctx.set(contents))
    }

    pub fn clear(ctx: &ClipboardContext) -> Result<()> {
        map_clipboard_err(ctx.clear())
    }
}

/// String-typed kinds under their preferred id go through the typed setters;
/// everything else is written verbatim under its own format id.
fn to_clipboard_content(rep: ObservedClipboardRepresentation) -> ClipboardContent {
    let preferred = rep.format.preferred_format_id() == rep.format_id;
    let as_string = || String::from_utf8(rep.bytes.to_vec()).ok();

    let typed = match rep.format {
        ClipboardFormat::Text if preferred => as_string().map(ClipboardContent::Text),
        ClipboardFormat::Rtf if preferred => as_string().map(ClipboardContent::Rtf),
        ClipboardFormat::Html if preferred => as_string().map(ClipboardContent::Html),
        _ => None,
    };

    typed.unwrap_or_else(|| ClipboardContent::Other(rep.format_id.into_inner(), rep.bytes.to_vec()))
}
