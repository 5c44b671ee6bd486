//! Image references: data URIs, sniffing, and resolution for export
//!
//! Cards reference images by string. Before rasterization every reference is
//! turned into a self-contained `data:` URI so the SVG needs no resource
//! loading of its own.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{Error, Result, StudioConfig};

/// Encode bytes as a base64 `data:` URI.
pub fn to_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 `data:` URI into its MIME type and decoded bytes.
pub fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload.trim()).ok()?;
    Some((mime.to_string(), bytes))
}

/// Detect common image formats by magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xff, 0xd8, 0xff, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => {
            let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
            let head = head.trim_start();
            (head.starts_with("<svg") || head.starts_with("<?xml")).then_some("image/svg+xml")
        }
    }
}

/// MIME type guessed from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read an image file into a data URI, sniffing the type when possible.
pub fn file_to_data_uri(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mime = sniff_mime(&bytes).unwrap_or_else(|| mime_for_path(path));
    Ok(to_data_uri(&bytes, mime))
}

fn is_remote(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Turns image references into data URIs for export.
pub struct ImageResolver {
    allow_remote: bool,
    #[cfg(feature = "remote")]
    client: Option<reqwest::blocking::Client>,
}

impl ImageResolver {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            allow_remote: config.allow_remote_images,
            #[cfg(feature = "remote")]
            client: if config.allow_remote_images {
                Some(crate::http::client(config)?)
            } else {
                None
            },
        })
    }

    /// Resolve one reference. Remote images are refused unless enabled, the
    /// same way a browser refuses to export a tainted canvas.
    pub fn resolve(&self, href: &str) -> Result<String> {
        if href.starts_with("data:") {
            return Ok(href.to_string());
        }
        if is_remote(href) {
            return self.fetch(href);
        }
        let path = href.strip_prefix("file://").unwrap_or(href);
        file_to_data_uri(Path::new(path)).map_err(|e| Error::Capture(format!("cannot load image {}: {}", path, e)))
    }

    #[cfg(feature = "remote")]
    fn fetch(&self, url: &str) -> Result<String> {
        let client = match (&self.client, self.allow_remote) {
            (Some(c), true) => c,
            _ => return Err(Error::Capture(format!("remote image refused: {}", url))),
        };
        let (bytes, declared) = crate::http::fetch_bytes(client, url)
            .map_err(|e| Error::Capture(format!("cannot load image {}: {}", url, e)))?;
        let mime = sniff_mime(&bytes)
            .map(str::to_string)
            .or(declared)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        log::debug!("fetched {} ({} bytes, {})", url, bytes.len(), mime);
        Ok(to_data_uri(&bytes, &mime))
    }

    #[cfg(not(feature = "remote"))]
    fn fetch(&self, url: &str) -> Result<String> {
        let _ = self.allow_remote;
        Err(Error::Capture(format!("remote image refused: {}", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEAD: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_mime(&PNG_HEAD), Some("image/png"));
        assert_eq!(sniff_mime(&[0xff, 0xd8, 0xff, 0xe0]), Some("image/jpeg"));
        assert_eq!(sniff_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime(b"  <svg xmlns=\"\"/>"), Some("image/svg+xml"));
        assert_eq!(sniff_mime(b"hello"), None);
    }

    #[test]
    fn data_uri_round_trip() {
        let uri = to_data_uri(&PNG_HEAD, "image/png");
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(parse_data_uri(&uri), Some(("image/png".to_string(), PNG_HEAD.to_vec())));
        assert_eq!(parse_data_uri("data:image/png,raw"), None);
    }

    #[test]
    fn resolves_files_and_keeps_data_uris() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.bin");
        std::fs::write(&path, PNG_HEAD).unwrap();

        let r = ImageResolver::new(&StudioConfig::default()).unwrap();
        let uri = r.resolve(path.to_str().unwrap()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(r.resolve(&uri).unwrap(), uri);
    }

    #[test]
    fn refuses_remote_and_missing_images() {
        let r = ImageResolver::new(&StudioConfig::default()).unwrap();
        assert!(matches!(r.resolve("https://example.com/a.png"), Err(Error::Capture(_))));
        assert!(matches!(r.resolve("/definitely/not/here.png"), Err(Error::Capture(_))));
    }
}
