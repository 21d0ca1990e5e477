//! Payload classification.
//!
//! A single copy usually exposes the same content under several
//! representations (an HTML fragment also carries plain text, a copied file
//! carries its URL and an icon image). Classification picks exactly one of
//! them, trying kinds in a fixed priority order:
//!
//! ```text
//! Text → Image → File (readable target only) → Pdf → Rtf → Html → first exposed type → none
//! ```
//!
//! Classification is a pure read. A representation that cannot be decoded
//! (non UTF-8 text, an unreadable file target) only skips its rule.

use bytes::Bytes;

use super::{ClipboardEntry, ClipboardFormat, FileRef, FormatId, SystemClipboardSnapshot};
use crate::ports::FileContentPort;

/// Read-only view of what the clipboard exposes at one point in time.
pub trait ClipboardPayloadSource {
    /// Exposed kinds, in the order the platform listed them.
    fn exposed_formats(&self) -> Vec<ClipboardFormat>;

    /// Every payload exposed for the given kind with its native id, in listing order.
    fn fetch_all(&self, format: &ClipboardFormat) -> Vec<(FormatId, Bytes)>;

    /// Raw bytes of the first payload of the given kind, if exposed.
    fn fetch(&self, format: &ClipboardFormat) -> Option<Bytes> {
        self.fetch_all(format).into_iter().next().map(|(_, bytes)| bytes)
    }
}

impl ClipboardPayloadSource for SystemClipboardSnapshot {
    fn exposed_formats(&self) -> Vec<ClipboardFormat> {
        self.representations.iter().map(|r| r.format.clone()).collect()
    }

    fn fetch_all(&self, format: &ClipboardFormat) -> Vec<(FormatId, Bytes)> {
        self.representations
            .iter()
            .filter(|r| &r.format == format)
            .map(|r| (r.format_id.clone(), r.bytes.clone()))
            .collect()
    }
}

/// Produce at most one entry for the current clipboard contents.
pub fn classify(
    source: &dyn ClipboardPayloadSource,
    files: &dyn FileContentPort,
) -> Option<ClipboardEntry> {
    if let Some(text) = source
        .fetch(&ClipboardFormat::Text)
        .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    {
        return Some(ClipboardEntry::Text(text));
    }

    if let Some(image) = preferred_image(source) {
        return Some(ClipboardEntry::Image(image));
    }

    if let Some(file) = readable_file_ref(source, files) {
        return Some(ClipboardEntry::File(file));
    }

    if let Some(pdf) = source.fetch(&ClipboardFormat::Pdf) {
        return Some(ClipboardEntry::Pdf(pdf));
    }

    if let Some(rtf) = source.fetch(&ClipboardFormat::Rtf) {
        return Some(ClipboardEntry::Rtf(rtf));
    }

    if let Some(html) = source.fetch(&ClipboardFormat::Html) {
        return Some(ClipboardEntry::Html(html));
    }

    let first = source.exposed_formats().into_iter().next()?;
    source.fetch(&first).map(ClipboardEntry::Unknown)
}

/// Image bytes, taken from the platform's preferred image id when it is exposed.
fn preferred_image(source: &dyn ClipboardPayloadSource) -> Option<Bytes> {
    let images = source.fetch_all(&ClipboardFormat::Image);
    let preferred = ClipboardFormat::Image.preferred_format_id();
    let position = images
        .iter()
        .position(|(id, _)| id.as_str().eq_ignore_ascii_case(preferred.as_str()))
        .unwrap_or(0);
    images.into_iter().nth(position).map(|(_, bytes)| bytes)
}

/// First readable file target across every exposed file-reference payload.
fn readable_file_ref(
    source: &dyn ClipboardPayloadSource,
    files: &dyn FileContentPort,
) -> Option<FileRef> {
    source
        .fetch_all(&ClipboardFormat::FileUrl)
        .into_iter()
        .filter_map(|(_, raw)| {
            let list = std::str::from_utf8(&raw).ok()?;
            FileRef::from_uri_list(list)
        })
        .find(|file| {
            let readable = files.is_readable(&file.to_path());
            #[cfg(feature = "tracing")]
            if !readable {
                tracing::debug!(file = %file, "File target unreadable, skipping file reference");
            }
            readable
        })
}
