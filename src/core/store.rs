//! # Completion Counter Persistence
//!
//! The one datum that outlives a session: how many times the core level
//! sequence has been completed. Stored as a decimal string in a single file
//! under `~/.vanhoc/`.
//!
//! The store is a trait so the progression logic is testable without a real
//! file system; the game only ever sees `load()` and `save()`.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

/// Abstract home of the completion counter.
pub trait CompletionStore: Send {
    /// Current count. Missing or unreadable state reads as 0.
    fn load(&self) -> u32;

    /// Persist a new count.
    fn save(&self, count: u32) -> io::Result<()>;
}

/// Returns `~/.vanhoc/`, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".vanhoc");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File-backed store: one file holding the count as a decimal string.
pub struct FileCompletionStore {
    path: PathBuf,
}

impl FileCompletionStore {
    /// Store at the default location (`~/.vanhoc/completion_count`).
    pub fn open_default() -> io::Result<Self> {
        Ok(Self { path: data_dir()?.join("completion_count") })
    }

    /// Store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletionStore for FileCompletionStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse::<u32>() {
                Ok(count) => {
                    debug!("Loaded completion count {} from {}", count, self.path.display());
                    count
                }
                Err(e) => {
                    warn!("Malformed completion count in {}: {}", self.path.display(), e);
                    0
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&self, count: u32) -> io::Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, count.to_string())?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Saved completion count {} to {}", count, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests.
pub struct MemoryCompletionStore {
    count: Mutex<u32>,
}

impl MemoryCompletionStore {
    pub fn new(count: u32) -> Self {
        Self { count: Mutex::new(count) }
    }
}

impl CompletionStore for MemoryCompletionStore {
    fn load(&self) -> u32 {
        *self.count.lock().expect("store lock poisoned")
    }

    fn save(&self, count: u32) -> io::Result<()> {
        *self.count.lock().expect("store lock poisoned") = count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> FileCompletionStore {
        let path = std::env::temp_dir().join(format!("vanhoc-store-test-{name}-{}", std::process::id()));
        let _ = fs::remove_file(&path);
        FileCompletionStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = scratch_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = scratch_store("roundtrip");
        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
        store.save(8).unwrap();
        assert_eq!(store.load(), 8);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_stored_format_is_decimal_string() {
        let store = scratch_store("format");
        store.save(12).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "12");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_garbage_content_loads_zero() {
        let store = scratch_store("garbage");
        fs::write(store.path(), "not a number").unwrap();
        assert_eq!(store.load(), 0);
        fs::write(store.path(), "-3").unwrap();
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCompletionStore::new(3);
        assert_eq!(store.load(), 3);
        store.save(4).unwrap();
        assert_eq!(store.load(), 4);
    }
}
