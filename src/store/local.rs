//! # Local Directory Backend
//!
//! One file per key under a root directory. File names are the URL-safe
//! base64 of the key, so object ids containing `/`, `..` or `:` can never
//! resolve outside the root. Writes land in a temp file that is renamed
//! over the target.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::backend::KeyValueStore;
use super::errors::StoreResult;

const ENTRY_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Distinguishes temp files of concurrent writers to the same key.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem-backed key-value backend
#[derive(Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn entry_name(key: &str) -> String {
        URL_SAFE_NO_PAD.encode(key.as_bytes())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", Self::entry_name(key), ENTRY_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.root.join(format!(
            "{}.{}.{}.{}",
            Self::entry_name(key),
            std::process::id(),
            seq,
            TEMP_EXTENSION
        ))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let temp = self.temp_path(key);
        fs::write(&temp, value.as_bytes())?;
        if let Err(e) = fs::rename(&temp, self.entry_path(key)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
