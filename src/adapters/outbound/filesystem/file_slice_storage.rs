use crate::ports::outbound::SliceStorage;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum persisted slice size (1 MB). The slices hold carts and
/// bookmark lists, never the catalog itself; anything larger is suspect.
const MAX_SLICE_SIZE: u64 = 1024 * 1024;

/// FileSliceStorage adapter: one JSON file per slice key inside a
/// directory, for embeddings with a real filesystem (desktop shells,
/// integration tests).
pub struct FileSliceStorage {
    directory: PathBuf,
}

impl FileSliceStorage {
    /// Creates the storage rooted at `directory`, creating it if needed.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(|e| CatalogError::Storage {
            key: directory.display().to_string(),
            details: format!("failed to create storage directory: {}", e),
        })?;
        Ok(Self { directory })
    }

    /// Creates the storage rooted at the configured directory.
    pub fn from_config(config: &crate::config::ConfigFile) -> Result<Self> {
        let directory = config.storage_dir.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing config field: storage_dir\n\n💡 Hint: Set storage_dir in quotedesk.config.yml to the directory for persisted slices."
            )
        })?;
        Self::new(directory)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // keys are fixed slice names; reject anything path-like
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "Invalid slice key '{}': only alphanumeric, hyphen and underscore are allowed",
                key
            );
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }

    fn check_regular_file(path: &Path) -> Result<bool> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => return Ok(false),
        };
        if metadata.is_symlink() || !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }
        if metadata.len() > MAX_SLICE_SIZE {
            anyhow::bail!(
                "{} is too large ({} bytes); slices are capped at {} bytes",
                path.display(),
                metadata.len(),
                MAX_SLICE_SIZE
            );
        }
        Ok(true)
    }
}

impl SliceStorage for FileSliceStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !Self::check_regular_file(&path)? {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| CatalogError::Storage {
            key: key.to_string(),
            details: format!("failed to read {}: {}", path.display(), e),
        })?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| {
            CatalogError::Storage {
                key: key.to_string(),
                details: format!("failed to write {}: {}", path.display(), e),
            }
            .into()
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CatalogError::Storage {
                key: key.to_string(),
                details: format!("failed to remove {}: {}", path.display(), e),
            }
            .into()),
        }
    }
}
