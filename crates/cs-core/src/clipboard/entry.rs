use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const GNOME_OPERATION_LINES: &[&str] = &["copy", "cut"];

/// Reference to a file exposed on the clipboard, kept in the string form the
/// platform handed out (`file:///Users/me/report.pdf` or a bare path).
///
/// Two references are equal when their string forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Build a reference from a `text/uri-list` / `public.file-url` payload.
    ///
    /// Only the first non-comment line is used. The `copy`/`cut` operation line
    /// that leads a `x-special/gnome-copied-files` payload is skipped. Returns
    /// `None` for an empty list.
    pub fn from_uri_list(list: &str) -> Option<Self> {
        list.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .find(|line| !GNOME_OPERATION_LINES.contains(line))
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local filesystem path this reference points at.
    pub fn to_path(&self) -> PathBuf {
        let raw = self.0.as_str();
        let stripped = raw
            .strip_prefix("file://localhost")
            .or_else(|| raw.strip_prefix("file://"));
        match stripped {
            Some(rest) => match urlencoding::decode(rest) {
                Ok(decoded) => PathBuf::from(decoded.into_owned()),
                Err(_) => PathBuf::from(rest),
            },
            None => PathBuf::from(raw),
        }
    }

    /// Last path component, for display.
    pub fn file_name(&self) -> String {
        self.to_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.clone())
    }

    /// Lowercased extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.to_path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One typed, immutable clipboard payload snapshot.
///
/// Equality is variant-aware: entries are equal only when they are the same
/// variant carrying the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord", into = "EntryRecord")]
pub enum ClipboardEntry {
    Text(String),
    Image(Bytes),
    File(FileRef),
    Pdf(Bytes),
    Rtf(Bytes),
    Html(Bytes),
    Unknown(Bytes),
}

/// Discriminant of [`ClipboardEntry`], also its serialized `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Text,
    Image,
    File,
    Pdf,
    Rtf,
    Html,
    Unknown,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Image => "image",
            EntryKind::File => "file",
            EntryKind::Pdf => "pdf",
            EntryKind::Rtf => "rtf",
            EntryKind::Html => "html",
            EntryKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClipboardEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            ClipboardEntry::Text(_) => EntryKind::Text,
            ClipboardEntry::Image(_) => EntryKind::Image,
            ClipboardEntry::File(_) => EntryKind::File,
            ClipboardEntry::Pdf(_) => EntryKind::Pdf,
            ClipboardEntry::Rtf(_) => EntryKind::Rtf,
            ClipboardEntry::Html(_) => EntryKind::Html,
            ClipboardEntry::Unknown(_) => EntryKind::Unknown,
        }
    }

    /// Size of the captured payload. File entries report the length of the reference.
    pub fn size_bytes(&self) -> usize {
        match self {
            ClipboardEntry::Text(text) => text.len(),
            ClipboardEntry::File(file) => file.as_str().len(),
            ClipboardEntry::Image(data)
            | ClipboardEntry::Pdf(data)
            | ClipboardEntry::Rtf(data)
            | ClipboardEntry::Html(data)
            | ClipboardEntry::Unknown(data) => data.len(),
        }
    }
}

/// Errors raised while decoding the serialized entry record.
#[derive(Debug, thiserror::Error)]
pub enum EntryDecodeError {
    #[error("entry of type `{kind}` is missing its `{field}` field")]
    MissingField { kind: String, field: &'static str },

    #[error("entry of type `{kind}` has invalid base64 data: {source}")]
    InvalidBase64 {
        kind: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// Tagged persistence record: `{type, data, url}` with exactly one of `data` / `url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl EntryRecord {
    fn with_data(kind: EntryKind, data: String) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            data: Some(data),
            url: None,
        }
    }

    fn take_data(&mut self) -> Result<String, EntryDecodeError> {
        self.data.take().ok_or_else(|| EntryDecodeError::MissingField {
            kind: self.kind.clone(),
            field: "data",
        })
    }

    fn take_bytes(&mut self) -> Result<Bytes, EntryDecodeError> {
        let data = self.take_data()?;
        STANDARD
            .decode(data.as_bytes())
            .map(Bytes::from)
            .map_err(|source| EntryDecodeError::InvalidBase64 {
                kind: self.kind.clone(),
                source,
            })
    }
}

impl From<ClipboardEntry> for EntryRecord {
    fn from(entry: ClipboardEntry) -> Self {
        let kind = entry.kind();
        match entry {
            ClipboardEntry::Text(text) => EntryRecord::with_data(kind, text),
            ClipboardEntry::File(file) => EntryRecord {
                kind: kind.as_str().to_string(),
                data: None,
                url: Some(file.0),
            },
            ClipboardEntry::Image(data)
            | ClipboardEntry::Pdf(data)
            | ClipboardEntry::Rtf(data)
            | ClipboardEntry::Html(data)
            | ClipboardEntry::Unknown(data) => EntryRecord::with_data(kind, STANDARD.encode(&data)),
        }
    }
}

impl TryFrom<EntryRecord> for ClipboardEntry {
    type Error = EntryDecodeError;

    fn try_from(mut record: EntryRecord) -> Result<Self, Self::Error> {
        let entry = match record.kind.as_str() {
            "text" => ClipboardEntry::Text(record.take_data()?),
            "image" => ClipboardEntry::Image(record.take_bytes()?),
            "file" => {
                let url = record.url.take().ok_or_else(|| EntryDecodeError::MissingField {
                    kind: record.kind.clone(),
                    field: "url",
                })?;
                ClipboardEntry::File(FileRef::new(url))
            }
            "pdf" => ClipboardEntry::Pdf(record.take_bytes()?),
            "rtf" => ClipboardEntry::Rtf(record.take_bytes()?),
            "html" => ClipboardEntry::Html(record.take_bytes()?),
            // Unrecognised tags degrade to an opaque payload.
            _ => ClipboardEntry::Unknown(record.take_bytes()?),
        };
        Ok(entry)
    }
}
