//! Persistent key/value store
//!
//! String values under string keys, with an optional byte quota. Writes
//! either fully succeed or leave the previous contents in place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Result};

/// A string key/value store shared by the gallery and settings.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

fn usage(map: &BTreeMap<String, String>) -> usize {
    map.iter().map(|(k, v)| k.len() + v.len()).sum()
}

fn check_quota(map: &BTreeMap<String, String>, quota: Option<usize>) -> Result<()> {
    match quota {
        Some(limit) if usage(map) > limit => Err(Error::QuotaExceeded(format!(
            "{} bytes needed, {} available",
            usage(map),
            limit
        ))),
        _ => Ok(()),
    }
}

fn lock(map: &Mutex<BTreeMap<String, String>>) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
    map.lock().map_err(|_| Error::Storage("store lock poisoned".into()))
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self { map: Mutex::default(), quota: Some(bytes) }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.map.lock().map(|m| usage(&m)).unwrap_or(0)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = lock(&self.map)?;
        let mut next = map.clone();
        next.insert(key.to_string(), value.to_string());
        check_quota(&next, self.quota)?;
        *map = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        lock(&self.map)?.remove(key);
        Ok(())
    }
}

/// Store persisted as one JSON object in a file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`. An unreadable or corrupt
    /// file starts the store empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>, quota: Option<usize>) -> Result<Self> {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("ignoring corrupt store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("opened store {} ({} keys)", path.display(), map.len());
        Ok(Self { path, map: Mutex::new(map), quota })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, map: &BTreeMap<String, String>) -> Result<()> {
        check_quota(map, self.quota)?;
        let text = serde_json::to_string_pretty(map)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut map = lock(&self.map)?;
        let mut next = map.clone();
        f(&mut next);
        self.write(&next)?;
        *map = next;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|m| {
            m.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|m| {
            m.remove(key);
        })
    }
}

/// The store a configuration asks for: file-backed when a path is set.
pub fn open_store(config: &crate::StudioConfig) -> Result<Arc<dyn KvStore>> {
    Ok(match &config.store_path {
        Some(path) => Arc::new(FileStore::open(path, config.store_quota_bytes)?),
        None => Arc::new(match config.store_quota_bytes {
            Some(q) => MemoryStore::with_quota(q),
            None => MemoryStore::new(),
        }),
    })
}
