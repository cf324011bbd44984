//! Byte-stream acquisition for the parser facade.
//!
//! HTTP downloads and zip extraction live outside this crate; anything that
//! can hand over a data file by key implements [`EntryProvider`].

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs::File, io::AsyncRead};
use tracing::debug;

use crate::error::GeonamesError;

/// An opened data file.
pub type EntryReader = Box<dyn AsyncRead + Send + Unpin>;

/// Resolves a dataset entry key, such as `IT` or `allCountries`, to its bytes.
#[async_trait]
pub trait EntryProvider: Send + Sync {
    /// `Ok(None)` when the provider has no entry for `key`.
    async fn open_entry(&self, key: &str) -> io::Result<Option<EntryReader>>;
}

/// Serves `<root>/<key>.txt`, e.g. a directory of already extracted dumps.
#[derive(Clone, Debug)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.txt"))
    }
}

#[async_trait]
impl EntryProvider for LocalDirectory {
    async fn open_entry(&self, key: &str) -> io::Result<Option<EntryReader>> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("entry key `{key}` is not a plain file name"),
            ));
        }

        let path = self.entry_path(key);
        match File::open(&path).await {
            Ok(file) => {
                debug!(path = %path.display(), "opened entry");
                Ok(Some(Box::new(file)))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Opens a plain-text export from disk.
pub async fn open_file(path: impl AsRef<Path>) -> Result<File, GeonamesError> {
    let path = path.as_ref();
    File::open(path).await.map_err(|source| GeonamesError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn local_directory_serves_txt_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("IT.txt"), "row\n").unwrap();
        let provider = LocalDirectory::new(dir.path());

        let mut entry = provider.open_entry("IT").await.unwrap().unwrap();
        let mut text = String::new();
        entry.read_to_string(&mut text).await.unwrap();
        assert_eq!(text, "row\n");

        assert!(provider.open_entry("FR").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalDirectory::new(dir.path());
        let err = provider.open_entry("../secret").await.err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn open_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("countryInfo.txt");
        let err = open_file(&missing).await.unwrap_err();
        assert!(err.to_string().contains("countryInfo.txt"));
    }
}
