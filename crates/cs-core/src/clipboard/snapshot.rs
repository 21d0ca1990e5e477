use bytes::Bytes;

use super::{ClipboardFormat, FormatId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotHash(pub [u8; 32]);

/// Every representation the system clipboard exposed at one point in time.
///
/// Representations are kept in the order the platform listed them; the
/// classifier's "first exposed type" fallback depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemClipboardSnapshot {
    pub representations: Vec<ObservedClipboardRepresentation>,
}

/// One format of clipboard data, captured byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedClipboardRepresentation {
    /// Platform-native identifier, written back verbatim on restore.
    pub format_id: FormatId,
    pub format: ClipboardFormat,
    pub bytes: Bytes,
}

impl ObservedClipboardRepresentation {
    /// Representation observed under a platform identifier; the kind is derived from it.
    pub fn observed(format_id: impl Into<FormatId>, bytes: impl Into<Bytes>) -> Self {
        let format_id = format_id.into();
        let format = ClipboardFormat::from_format_id(format_id.as_str());
        Self {
            format_id,
            format,
            bytes: bytes.into(),
        }
    }

    /// Representation of a known kind under its preferred native identifier.
    pub fn typed(format: ClipboardFormat, bytes: impl Into<Bytes>) -> Self {
        Self {
            format_id: format.preferred_format_id(),
            format,
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl SystemClipboardSnapshot {
    pub fn new(representations: Vec<ObservedClipboardRepresentation>) -> Self {
        Self { representations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(representation: ObservedClipboardRepresentation) -> Self {
        Self {
            representations: vec![representation],
        }
    }

    /// 返回该快照中所有 representation 的总字节大小
    pub fn total_size_bytes(&self) -> usize {
        self.representations.iter().map(|r| r.size_bytes()).sum()
    }

    /// 是否为空快照（没有任何 representation）
    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }

    pub fn representation_count(&self) -> usize {
        self.representations.len()
    }

    /// First representation of the given kind.
    pub fn find(&self, format: &ClipboardFormat) -> Option<&ObservedClipboardRepresentation> {
        self.representations.iter().find(|r| &r.format == format)
    }

    /// Order-independent fingerprint over format ids and payloads.
    pub fn snapshot_hash(&self) -> SnapshotHash {
        let mut rep_hashes: Vec<[u8; 32]> = self
            .representations
            .iter()
            .map(|r| {
                let mut hasher = blake3::Hasher::new();
                hasher.update(r.format_id.as_str().as_bytes());
                hasher.update(b"|");
                hasher.update(&r.bytes);
                *hasher.finalize().as_bytes()
            })
            .collect();

        // 顺序无关
        rep_hashes.sort_unstable();

        let mut hasher = blake3::Hasher::new();
        hasher.update(b"snapshot-hash-v1|");
        for h in &rep_hashes {
            hasher.update(h);
        }

        SnapshotHash(*hasher.finalize().as_bytes())
    }
}
