use crate::clipboard::{ObservedClipboardRepresentation, SystemClipboardSnapshot};

/// Snapshot built from `(format id, bytes)` pairs in listing order.
pub(super) fn snapshot(reps: &[(&str, &[u8])]) -> SystemClipboardSnapshot {
    SystemClipboardSnapshot::new(
        reps.iter()
            .map(|(id, bytes)| ObservedClipboardRepresentation::observed(*id, bytes.to_vec()))
            .collect(),
    )
}
