use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use cs_core::ports::FileContentPort;

/// Reads files from the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileReader;

impl LocalFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl FileContentPort for LocalFileReader {
    fn is_readable(&self, path: &Path) -> bool {
        match File::open(path).and_then(|file| file.metadata()) {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn existing_file_is_readable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"payload").unwrap();

        let reader = LocalFileReader::new();

        assert!(reader.is_readable(file.path()));
        assert_eq!(reader.read(file.path()).unwrap(), b"payload");
    }

    #[test]
    fn directory_is_not_readable_as_a_file() {
        let dir = tempdir().unwrap();

        assert!(!LocalFileReader::new().is_readable(dir.path()));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.txt");

        let reader = LocalFileReader::new();

        assert!(!reader.is_readable(&missing));
        let err = reader.read(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("gone.txt"));
    }
}
