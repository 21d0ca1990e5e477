use serde::Serialize;

use super::{ClipboardEntry, EntryKind};

/// Maximum number of characters kept in a text title.
const TITLE_MAX_CHARS: usize = 80;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "avi", "mkv"];

/// A read-only projection of a [`ClipboardEntry`],
/// optimized for presentation purposes.
///
/// This is NOT a domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPreview {
    /// Position in the history (0 = most recent)
    pub index: usize,

    /// Serialized type tag of the entry
    pub kind: &'static str,

    /// Primary human-readable summary, always a single line
    pub title: String,

    pub size_bytes: usize,

    /// Set for file references with a common video extension
    pub is_video: bool,
}

impl EntryPreview {
    pub fn from_entry(index: usize, entry: &ClipboardEntry) -> Self {
        let kind = entry.kind();
        let (title, is_video) = match entry {
            ClipboardEntry::Text(text) => (summarize_text(text), false),
            ClipboardEntry::File(file) => {
                let is_video = file
                    .extension()
                    .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
                    .unwrap_or(false);
                (file.file_name(), is_video)
            }
            _ => (format!("{} ({} bytes)", kind_label(kind), entry.size_bytes()), false),
        };

        Self {
            index,
            kind: kind.as_str(),
            title,
            size_bytes: entry.size_bytes(),
            is_video,
        }
    }

    /// Previews for a whole history slice, in order.
    pub fn list(entries: &[ClipboardEntry]) -> Vec<Self> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::from_entry(index, entry))
            .collect()
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Text => "Text",
        EntryKind::Image => "Image",
        EntryKind::File => "File",
        EntryKind::Pdf => "PDF",
        EntryKind::Rtf => "RTF",
        EntryKind::Html => "HTML",
        EntryKind::Unknown => "Unknown",
    }
}

fn summarize_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= TITLE_MAX_CHARS {
        return collapsed;
    }
    let mut title: String = collapsed.chars().take(TITLE_MAX_CHARS).collect();
    title.push('…');
    title
}
