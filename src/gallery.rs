//! Asset gallery: small uploaded images kept in the local store
//!
//! Items are stored newest first as one JSON array under
//! [`GALLERY_KEY`]. Every mutation is written to the store before the
//! in-memory list changes, so a failed write leaves both sides as they were.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::images::{mime_for_path, sniff_mime, to_data_uri};
use crate::storage::KvStore;
use crate::{Error, Result};

pub const GALLERY_KEY: &str = "bk_asset_gallery";

/// Largest upload accepted, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub name: String,
    /// Base64 `data:` URI of the image
    pub data: String,
    /// Upload time, Unix milliseconds
    pub date: i64,
}

pub struct Gallery<S> {
    store: S,
    items: Vec<GalleryItem>,
}

impl<S: KvStore> Gallery<S> {
    /// Load the gallery. Missing or corrupt data yields an empty gallery.
    pub fn load(store: S) -> Self {
        let items = match store.get(GALLERY_KEY) {
            Some(json) => serde_json::from_str::<Vec<GalleryItem>>(&json).unwrap_or_else(|e| {
                log::error!("Failed to load gallery: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { store, items }
    }

    /// Items, newest first.
    pub fn list(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GalleryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add an upload at the front of the list.
    pub fn add(&mut self, bytes: &[u8], name: &str, mime: Option<&str>, now_ms: i64) -> Result<GalleryItem> {
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(Error::SizeExceeded { size: bytes.len(), limit: MAX_UPLOAD_BYTES });
        }
        let mime = mime
            .or_else(|| sniff_mime(bytes))
            .unwrap_or_else(|| mime_for_path(Path::new(name)));
        let item = GalleryItem {
            id: self.fresh_id(now_ms),
            name: name.to_string(),
            data: to_data_uri(bytes, mime),
            date: now_ms,
        };

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item.clone());
        next.extend(self.items.iter().cloned());
        self.persist(&next)?;
        self.items = next;
        log::info!("gallery: added {} ({} bytes)", item.name, bytes.len());
        Ok(item)
    }

    /// Remove exactly the item with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Result<GalleryItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| Error::NotFound(format!("gallery item {}", id)))?;
        let mut next = self.items.clone();
        let removed = next.remove(pos);
        self.persist(&next)?;
        self.items = next;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(GALLERY_KEY)?;
        self.items.clear();
        Ok(())
    }

    fn persist(&self, items: &[GalleryItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(GALLERY_KEY, &json)
    }

    /// Millisecond timestamp id, suffixed when two uploads share a millisecond.
    fn fresh_id(&self, now_ms: i64) -> String {
        let base = now_ms.to_string();
        if self.get(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|id| self.get(id).is_none())
            .unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn oversized_upload_is_rejected() {
        let mut g = Gallery::load(MemoryStore::new());
        let big = vec![0u8; 600 * 1024];
        let err = g.add(&big, "big.jpg", None, 1).unwrap_err();
        assert!(matches!(err, Error::SizeExceeded { size, limit } if size == 614400 && limit == 512000));
        assert!(g.is_empty());
    }

    #[test]
    fn newest_first_and_remove_keeps_order() {
        let store = Arc::new(MemoryStore::new());
        let mut g = Gallery::load(store.clone());
        for (i, name) in ["a.png", "b.png", "c.png"].iter().enumerate() {
            g.add(PNG, name, None, 100 + i as i64).unwrap();
        }
        let names: Vec<_> = g.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["c.png", "b.png", "a.png"]);
        assert!(g.list()[0].data.starts_with("data:image/png;base64,"));

        g.remove("101").unwrap();
        let names: Vec<_> = g.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["c.png", "a.png"]);
        assert!(matches!(g.remove("101"), Err(Error::NotFound(_))));

        // reload from the same store
        let g2 = Gallery::load(store);
        assert_eq!(g2.list(), g.list());
    }

    #[test]
    fn quota_failure_changes_nothing() {
        let store = Arc::new(MemoryStore::with_quota(200));
        let mut g = Gallery::load(store.clone());
        g.add(PNG, "ok.png", None, 1).unwrap();
        let big = vec![7u8; 400];
        assert!(matches!(g.add(&big, "big.bin", None, 2), Err(Error::QuotaExceeded(_))));
        assert_eq!(g.len(), 1);
        assert_eq!(Gallery::load(store).len(), 1);
    }

    #[test]
    fn same_millisecond_ids_are_unique() {
        let mut g = Gallery::load(MemoryStore::new());
        let a = g.add(PNG, "a.png", None, 5).unwrap();
        let b = g.add(PNG, "b.png", None, 5).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn corrupt_data_loads_empty_and_clear_removes_key() {
        let store = Arc::new(MemoryStore::new());
        store.set(GALLERY_KEY, "[{broken").unwrap();
        let mut g = Gallery::load(store.clone());
        assert!(g.is_empty());
        g.add(PNG, "a.png", Some("image/png"), 1).unwrap();
        g.clear().unwrap();
        assert!(g.is_empty());
        assert_eq!(store.get(GALLERY_KEY), None);
    }
}
