use tracing::warn;

use cs_core::clipboard::UNKNOWN_FORMAT_ID;
use cs_core::ports::FileContentPort;
use cs_core::{
    ClipboardEntry, ClipboardFormat, ObservedClipboardRepresentation, SystemClipboardSnapshot,
};

/// The single representation written when pasting `entry`.
///
/// Images keep the id matching their encoding. Files are pasted as their
/// contents, read at this moment. Returns `None` when the file cannot be read.
pub(super) fn snapshot_for(
    entry: &ClipboardEntry,
    files: &dyn FileContentPort,
) -> Option<SystemClipboardSnapshot> {
    let representation = match entry {
        ClipboardEntry::Text(text) => {
            ObservedClipboardRepresentation::typed(ClipboardFormat::Text, text.clone().into_bytes())
        }
        ClipboardEntry::Image(data) => ObservedClipboardRepresentation::observed(
            ClipboardFormat::image_format_id_for(data),
            data.clone(),
        ),
        ClipboardEntry::File(file) => match files.read(&file.to_path()) {
            Ok(contents) => {
                ObservedClipboardRepresentation::typed(ClipboardFormat::FileContents, contents)
            }
            Err(err) => {
                warn!(
                    file = %file,
                    error = %format!("{err:#}"),
                    "Failed to read file for paste, skipping write"
                );
                return None;
            }
        },
        ClipboardEntry::Pdf(data) => {
            ObservedClipboardRepresentation::typed(ClipboardFormat::Pdf, data.clone())
        }
        ClipboardEntry::Rtf(data) => {
            ObservedClipboardRepresentation::typed(ClipboardFormat::Rtf, data.clone())
        }
        ClipboardEntry::Html(data) => {
            ObservedClipboardRepresentation::typed(ClipboardFormat::Html, data.clone())
        }
        ClipboardEntry::Unknown(data) => {
            ObservedClipboardRepresentation::observed(UNKNOWN_FORMAT_ID, data.clone())
        }
    };
    Some(SystemClipboardSnapshot::single(representation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use cs_core::testing::InMemoryFiles;
    use cs_core::FileRef;

    #[test]
    fn text_is_written_under_the_text_format() {
        let snapshot =
            snapshot_for(&ClipboardEntry::Text("hi".into()), &InMemoryFiles::new()).unwrap();

        assert_eq!(snapshot.representation_count(), 1);
        let rep = &snapshot.representations[0];
        assert_eq!(rep.format, ClipboardFormat::Text);
        assert_eq!(rep.bytes, Bytes::from_static(b"hi"));
    }

    #[test]
    fn image_is_labelled_by_its_encoding() {
        let entry = ClipboardEntry::Image(Bytes::from_static(b"\xff\xd8\xff\xe0JFIF"));

        let snapshot = snapshot_for(&entry, &InMemoryFiles::new()).unwrap();

        let rep = &snapshot.representations[0];
        assert_eq!(rep.format, ClipboardFormat::Image);
        let expected = if cfg!(target_os = "macos") { "public.jpeg" } else { "image/jpeg" };
        assert_eq!(rep.format_id.as_str(), expected);
    }

    #[test]
    fn file_is_written_as_its_contents() {
        let files = InMemoryFiles::new().with_file("/tmp/notes.txt", b"contents".to_vec());
        let entry = ClipboardEntry::File(FileRef::new("file:///tmp/notes.txt"));

        let snapshot = snapshot_for(&entry, &files).unwrap();

        let rep = &snapshot.representations[0];
        assert_eq!(rep.format, ClipboardFormat::FileContents);
        assert_eq!(rep.bytes, Bytes::from_static(b"contents"));
    }

    #[test]
    fn unreadable_file_produces_no_payload() {
        let entry = ClipboardEntry::File(FileRef::new("file:///tmp/missing.txt"));

        assert!(snapshot_for(&entry, &InMemoryFiles::new()).is_none());
    }

    #[test]
    fn unknown_payload_uses_the_unknown_format_id() {
        let entry = ClipboardEntry::Unknown(Bytes::from_static(b"blob"));

        let snapshot = snapshot_for(&entry, &InMemoryFiles::new()).unwrap();

        assert_eq!(snapshot.representations[0].format_id.as_str(), UNKNOWN_FORMAT_ID);
    }
}
