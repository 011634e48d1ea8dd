#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::fs;
use tracing::debug;

/// Raw whole-file storage.
///
/// Files are addressed by bare name inside a flat namespace. A write
/// replaces the previous contents entirely.
///
/// # Implementation Note
///
/// This trait uses native async trait methods (Edition 2024 feature),
/// eliminating the need for the async-trait crate while maintaining
/// full async/await support in trait methods.
pub trait FileStore: Send + Sync {
    /// Read a file. Returns `Ok(None)` if it does not exist.
    async fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Create or replace a file.
    async fn write(&self, name: &str, contents: &[u8]) -> StorageResult<()>;
}

/// Reject names that are empty or could leave the store's namespace.
fn validate_name(name: &str) -> StorageResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Files in a single directory on the local filesystem.
///
/// Writes go to a temporary sibling first and are renamed over the target,
/// so a reader never observes a half-written file.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tagkeeper_storage::DirectoryStore;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = DirectoryStore::open("/var/lib/tagkeeper").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "Opened data directory");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> StorageResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

impl FileStore for DirectoryStore {
    async fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.path(name)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, name: &str, contents: &[u8]) -> StorageResult<()> {
        let path = self.path(name)?;
        let staging = self.root.join(format!(".{name}.tmp"));

        fs::write(&staging, contents).await?;
        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory store for tests and the host emulator.
///
/// Clones share the same files. Failures can be injected to exercise the
/// error paths of callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file with raw contents.
    pub fn insert(&self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.lock().files.insert(name.into(), contents.into());
    }

    /// Raw contents of a file, if present.
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.lock().files.get(name).cloned()
    }

    /// Contents of a file as UTF-8 text, if present.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().files.contains_key(name)
    }

    /// Names of every stored file, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lock().files.keys().cloned().collect();
        names.sort();
        names
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }
}

impl FileStore for MemoryStore {
    async fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_name(name)?;
        let state = self.lock();
        if state.fail_reads {
            return Err(StorageError::Backend(format!("read of {name} failed")));
        }
        Ok(state.files.get(name).cloned())
    }

    async fn write(&self, name: &str, contents: &[u8]) -> StorageResult<()> {
        validate_name(name)?;
        let mut state = self.lock();
        if state.fail_writes {
            return Err(StorageError::Backend(format!("write of {name} failed")));
        }
        state.files.insert(name.to_string(), contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("../escape.json")]
    #[case("nested/file.json")]
    #[case("windows\\file.json")]
    fn test_invalid_names_rejected(#[case] name: &str) {
        assert!(matches!(
            validate_name(name),
            Err(StorageError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn test_directory_store_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();

        assert!(store.read("rfid_data.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_directory_store_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();

        store.write("rfid_data.json", b"[\"123\"]").await.unwrap();
        store.write("rfid_data.json", b"[]").await.unwrap();

        assert_eq!(store.read("rfid_data.json").await.unwrap().unwrap(), b"[]");
        assert!(!dir.path().join(".rfid_data.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_directory_store_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data").join("terminal");

        let store = DirectoryStore::open(&root).await.unwrap();

        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[tokio::test]
    async fn test_memory_store_shared_between_clones() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.write("a.json", b"1").await.unwrap();

        assert_eq!(clone.get_string("a.json").as_deref(), Some("1"));
        assert_eq!(clone.names(), vec!["a.json".to_string()]);
    }

    #[tokio::test]
    async fn test_memory_store_injected_failures() {
        let store = MemoryStore::new();
        store.insert("a.json", "1");

        store.fail_writes(true);
        assert!(store.write("a.json", b"2").await.is_err());
        assert_eq!(store.get_string("a.json").as_deref(), Some("1"));

        store.fail_reads(true);
        assert!(store.read("a.json").await.is_err());
    }
}
