use std::io::Write;

use cs_core::clipboard::classify;
use cs_core::{ClipboardEntry, FileRef, ObservedClipboardRepresentation, SystemClipboardSnapshot};
use cs_platform::LocalFileReader;
use tempfile::NamedTempFile;

fn uri_list_snapshot(uri: &str) -> SystemClipboardSnapshot {
    SystemClipboardSnapshot::new(vec![
        ObservedClipboardRepresentation::observed("text/uri-list", uri.as_bytes().to_vec()),
        ObservedClipboardRepresentation::observed("text/html", b"<img>".to_vec()),
    ])
}

#[cfg(unix)]
#[test]
fn file_on_disk_is_classified_as_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"data").unwrap();
    let uri = format!("file://{}", file.path().display());

    let entry = classify(&uri_list_snapshot(&uri), &LocalFileReader::new());

    assert_eq!(entry, Some(ClipboardEntry::File(FileRef::new(uri))));
}

#[test]
fn deleted_file_falls_through_to_html() {
    let file = NamedTempFile::new().unwrap();
    let uri = format!("file://{}", file.path().display());
    drop(file);

    let entry = classify(&uri_list_snapshot(&uri), &LocalFileReader::new());

    assert!(matches!(entry, Some(ClipboardEntry::Html(_))));
}
