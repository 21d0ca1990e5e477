//! One-shot clipboard inspection.
//!
//! Prints what the clipboard exposes right now and which entry the history
//! store would record for it. Useful for checking format ids on a new platform.

use std::fmt::Write as _;
use tracing::{info_span, warn};

use cs_core::clipboard::classify;
use cs_core::ports::{FileContentPort, SystemClipboardPort};
use cs_core::EntryPreview;

pub fn probe_report(
    clipboard: &dyn SystemClipboardPort,
    files: &dyn FileContentPort,
) -> anyhow::Result<String> {
    let _span = info_span!("probe.report").entered();
    let mut report = String::new();

    match clipboard.change_count() {
        Ok(count) => writeln!(report, "change count: {count}")?,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Failed to read change count");
            writeln!(report, "change count: unavailable ({err})")?;
        }
    }

    let snapshot = clipboard.read_snapshot()?;
    writeln!(
        report,
        "representations: {} ({} bytes)",
        snapshot.representation_count(),
        snapshot.total_size_bytes()
    )?;
    for (i, rep) in snapshot.representations.iter().enumerate() {
        writeln!(
            report,
            "  [{i}] {:<32} {:<14} {} bytes",
            rep.format_id.as_str(),
            rep.format.label(),
            rep.size_bytes()
        )?;
    }

    match classify(&snapshot, files) {
        Some(entry) => {
            let preview = EntryPreview::from_entry(0, &entry);
            writeln!(report, "classified as: {} \"{}\"", preview.kind, preview.title)?;
        }
        None => writeln!(report, "classified as: nothing")?,
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::testing::{InMemoryClipboard, InMemoryFiles};
    use cs_core::{ObservedClipboardRepresentation, SystemClipboardSnapshot};

    #[test]
    fn report_lists_representations_and_classification() {
        let clipboard = InMemoryClipboard::new();
        clipboard.set_external(SystemClipboardSnapshot::new(vec![
            ObservedClipboardRepresentation::observed("text/html", b"<b>bold</b>".to_vec()),
            ObservedClipboardRepresentation::observed("text/plain", b"bold".to_vec()),
        ]));

        let report = probe_report(&clipboard, &InMemoryFiles::new()).unwrap();

        assert!(report.contains("change count: 1"));
        assert!(report.contains("representations: 2 (15 bytes)"));
        assert!(report.contains("text/html"));
        assert!(report.contains("classified as: text \"bold\""));
    }

    #[test]
    fn empty_clipboard_classifies_as_nothing() {
        let report = probe_report(&InMemoryClipboard::new(), &InMemoryFiles::new()).unwrap();

        assert!(report.contains("representations: 0"));
        assert!(report.contains("classified as: nothing"));
    }
}
