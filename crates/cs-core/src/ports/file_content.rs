use anyhow::Result;
use std::path::Path;

/// Local filesystem access used for file references on the clipboard.
pub trait FileContentPort: Send + Sync {
    /// Whether `path` is a regular file that can be opened for reading right now.
    fn is_readable(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}
