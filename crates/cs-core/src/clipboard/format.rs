use serde::{Deserialize, Serialize};
use std::fmt;

/// Format id written for payloads classified as `Unknown`.
pub const UNKNOWN_FORMAT_ID: &str = "unknown";

/// Platform-native clipboard format identifier (e.g. `public.utf8-plain-text`, `text/html`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormatId(String);

impl FormatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FormatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FormatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of payload a clipboard representation carries.
///
/// The same logical kind is exposed under different identifiers per platform:
/// UTIs on macOS, MIME names on X11/Wayland and registered names on Windows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipboardFormat {
    Text,
    Image,
    FileUrl,
    FileContents,
    Pdf,
    Rtf,
    Html,
    Other(FormatId),
}

const TEXT_IDS: &[&str] = &[
    "public.utf8-plain-text",
    "public.text",
    "NSStringPboardType",
    "text/plain",
    "text/plain;charset=utf-8",
    "UTF8_STRING",
    "STRING",
    "TEXT",
    "CF_UNICODETEXT",
    "CF_TEXT",
];

const IMAGE_IDS: &[&str] = &[
    "public.tiff",
    "public.png",
    "public.jpeg",
    "com.compuserve.gif",
    "com.microsoft.bmp",
    "NSTIFFPboardType",
    "image/png",
    "image/tiff",
    "image/jpeg",
    "image/gif",
    "image/bmp",
    "PNG",
    "CF_DIB",
    "CF_DIBV5",
    "CF_BITMAP",
];

const FILE_URL_IDS: &[&str] = &["public.file-url", "text/uri-list", "x-special/gnome-copied-files"];

const FILE_CONTENTS_IDS: &[&str] = &["NSFileContentsPboardType", "application/octet-stream"];

const PDF_IDS: &[&str] = &["com.adobe.pdf", "NSPDFPboardType", "application/pdf"];

const RTF_IDS: &[&str] = &[
    "public.rtf",
    "NSRTFPboardType",
    "text/rtf",
    "application/rtf",
    "Rich Text Format",
];

const HTML_IDS: &[&str] = &["public.html", "NSHTMLPboardType", "text/html", "HTML Format"];

/// Leading bytes of common image encodings and the native id each is exposed under.
#[cfg(target_os = "macos")]
const IMAGE_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "public.png"),
    (b"\xff\xd8\xff", "public.jpeg"),
    (b"II*\0", "public.tiff"),
    (b"MM\0*", "public.tiff"),
    (b"GIF8", "com.compuserve.gif"),
    (b"BM", "com.microsoft.bmp"),
];

#[cfg(not(target_os = "macos"))]
const IMAGE_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"II*\0", "image/tiff"),
    (b"MM\0*", "image/tiff"),
    (b"GIF8", "image/gif"),
    (b"BM", "image/bmp"),
];

/// Bookkeeping targets some platforms list alongside real payloads.
const META_TARGET_IDS: &[&str] = &["TARGETS", "TIMESTAMP", "MULTIPLE", "SAVE_TARGETS", "DELETE"];

fn matches_any(id: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| c.eq_ignore_ascii_case(id))
}

impl ClipboardFormat {
    /// Map a platform format identifier to its payload kind.
    pub fn from_format_id(id: &str) -> Self {
        let trimmed = id.trim();
        if matches_any(trimmed, TEXT_IDS) {
            ClipboardFormat::Text
        } else if matches_any(trimmed, IMAGE_IDS) {
            ClipboardFormat::Image
        } else if matches_any(trimmed, FILE_URL_IDS) {
            ClipboardFormat::FileUrl
        } else if matches_any(trimmed, FILE_CONTENTS_IDS) {
            ClipboardFormat::FileContents
        } else if matches_any(trimmed, PDF_IDS) {
            ClipboardFormat::Pdf
        } else if matches_any(trimmed, RTF_IDS) {
            ClipboardFormat::Rtf
        } else if matches_any(trimmed, HTML_IDS) {
            ClipboardFormat::Html
        } else {
            ClipboardFormat::Other(FormatId::new(trimmed))
        }
    }

    /// Whether the identifier is a platform bookkeeping target rather than a payload.
    pub fn is_meta_target(id: &str) -> bool {
        matches_any(id.trim(), META_TARGET_IDS)
    }

    /// Native identifier used when writing a single representation of this kind.
    pub fn preferred_format_id(&self) -> FormatId {
        let id = match self {
            ClipboardFormat::Other(id) => return id.clone(),
            #[cfg(target_os = "macos")]
            ClipboardFormat::Text => "public.utf8-plain-text",
            #[cfg(target_os = "macos")]
            ClipboardFormat::Image => "public.tiff",
            #[cfg(target_os = "macos")]
            ClipboardFormat::FileUrl => "public.file-url",
            #[cfg(target_os = "macos")]
            ClipboardFormat::FileContents => "NSFileContentsPboardType",
            #[cfg(target_os = "macos")]
            ClipboardFormat::Pdf => "com.adobe.pdf",
            #[cfg(target_os = "macos")]
            ClipboardFormat::Rtf => "public.rtf",
            #[cfg(target_os = "macos")]
            ClipboardFormat::Html => "public.html",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::Text => "text/plain",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::Image => "image/png",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::FileUrl => "text/uri-list",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::FileContents => "application/octet-stream",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::Pdf => "application/pdf",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::Rtf => "text/rtf",
            #[cfg(not(target_os = "macos"))]
            ClipboardFormat::Html => "text/html",
        };
        FormatId::new(id)
    }

    /// Native identifier that matches the encoding of an image payload.
    ///
    /// Unrecognised encodings get the preferred image id.
    pub fn image_format_id_for(bytes: &[u8]) -> FormatId {
        IMAGE_SIGNATURES
            .iter()
            .find(|(signature, _)| bytes.starts_with(signature))
            .map(|(_, id)| FormatId::new(*id))
            .unwrap_or_else(|| ClipboardFormat::Image.preferred_format_id())
    }

    /// Short lowercase label, used in logs and previews.
    pub fn label(&self) -> &str {
        match self {
            ClipboardFormat::Text => "text",
            ClipboardFormat::Image => "image",
            ClipboardFormat::FileUrl => "file-url",
            ClipboardFormat::FileContents => "file-contents",
            ClipboardFormat::Pdf => "pdf",
            ClipboardFormat::Rtf => "rtf",
            ClipboardFormat::Html => "html",
            ClipboardFormat::Other(id) => id.as_str(),
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_macos_and_mime_identifiers() {
        assert_eq!(ClipboardFormat::from_format_id("public.utf8-plain-text"), ClipboardFormat::Text);
        assert_eq!(ClipboardFormat::from_format_id("UTF8_STRING"), ClipboardFormat::Text);
        assert_eq!(ClipboardFormat::from_format_id("public.tiff"), ClipboardFormat::Image);
        assert_eq!(ClipboardFormat::from_format_id("image/png"), ClipboardFormat::Image);
        assert_eq!(ClipboardFormat::from_format_id("text/uri-list"), ClipboardFormat::FileUrl);
        assert_eq!(ClipboardFormat::from_format_id("com.adobe.pdf"), ClipboardFormat::Pdf);
        assert_eq!(ClipboardFormat::from_format_id("text/RTF"), ClipboardFormat::Rtf);
        assert_eq!(ClipboardFormat::from_format_id("HTML Format"), ClipboardFormat::Html);
    }

    #[test]
    fn unrecognised_identifier_is_kept_verbatim() {
        let format = ClipboardFormat::from_format_id("com.example.custom");
        assert_eq!(format, ClipboardFormat::Other(FormatId::new("com.example.custom")));
        assert_eq!(format.preferred_format_id().as_str(), "com.example.custom");
    }

    #[test]
    fn preferred_ids_round_trip_to_the_same_kind() {
        for format in [
            ClipboardFormat::Text,
            ClipboardFormat::Image,
            ClipboardFormat::FileUrl,
            ClipboardFormat::FileContents,
            ClipboardFormat::Pdf,
            ClipboardFormat::Rtf,
            ClipboardFormat::Html,
        ] {
            let id = format.preferred_format_id();
            assert_eq!(ClipboardFormat::from_format_id(id.as_str()), format);
        }
    }

    #[test]
    fn image_id_follows_the_payload_encoding() {
        let jpeg = ClipboardFormat::image_format_id_for(b"\xff\xd8\xff\xe0JFIF");
        let png = ClipboardFormat::image_format_id_for(b"\x89PNG\r\n\x1a\n....");
        let tiff = ClipboardFormat::image_format_id_for(b"MM\0*data");

        #[cfg(target_os = "macos")]
        {
            assert_eq!(jpeg.as_str(), "public.jpeg");
            assert_eq!(png.as_str(), "public.png");
            assert_eq!(tiff.as_str(), "public.tiff");
        }
        #[cfg(not(target_os = "macos"))]
        {
            assert_eq!(jpeg.as_str(), "image/jpeg");
            assert_eq!(png.as_str(), "image/png");
            assert_eq!(tiff.as_str(), "image/tiff");
        }
        for id in [jpeg, png, tiff] {
            assert_eq!(ClipboardFormat::from_format_id(id.as_str()), ClipboardFormat::Image);
        }
    }

    #[test]
    fn unrecognised_image_encoding_gets_the_preferred_id() {
        assert_eq!(
            ClipboardFormat::image_format_id_for(b"raw dib"),
            ClipboardFormat::Image.preferred_format_id()
        );
    }

    #[test]
    fn meta_targets_are_flagged() {
        assert!(ClipboardFormat::is_meta_target("TARGETS"));
        assert!(!ClipboardFormat::is_meta_target("text/plain"));
    }
}
