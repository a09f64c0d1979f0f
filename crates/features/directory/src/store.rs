use crate::error::{DirectoryError, DirectoryErrorExt};
use ipnt_domain::models::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Read-only view over the data directory.
///
/// Every call goes to the filesystem; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads `file` from the data directory as a JSON object.
    ///
    /// A missing file yields an empty object.
    ///
    /// # Errors
    /// * [`DirectoryError::Io`] if the file exists but cannot be read.
    /// * [`DirectoryError::Json`] if the content is not valid JSON or not an object.
    pub async fn load(&self, file: &str) -> Result<Document, DirectoryError> {
        let path = self.root.join(file);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Data file absent, using empty document");
                return Ok(Document::new());
            }
            Err(source) => {
                return Err(DirectoryError::Io {
                    source,
                    context: Some(format!("Failed to read {}", path.display()).into()),
                });
            }
        };

        serde_json::from_slice(&bytes).context(format!("Failed to parse {}", path.display()))
    }
}
