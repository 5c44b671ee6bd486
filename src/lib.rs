//! Basherkella card studio
//!
//! A template-driven generator for square and portrait social media cards:
//! news stories, quotes, morning greetings, prayer timetables and verses.
//! The same field set can be previewed in any of its category's designs and
//! exported as a 2× PNG.
//!
//! # Features
//!
//! - **Template catalog**: 38 designs across five categories, looked up by id
//! - **Pure rendering**: field set + template id → visual tree, cheap enough for
//!   every keystroke
//! - **PNG export**: resvg rasterization at twice the nominal canvas size
//! - **Remote helpers** (`remote`, default): headline normalization through a
//!   generative language API and random stock backgrounds
//!
//! # Example
//!
//! ```no_run
//! use bkcards::{Category, Editor, StudioConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StudioConfig {
//!     download_dir: "out".into(),
//!     ..Default::default()
//! };
//!
//! let mut editor = Editor::open(config)?;
//! editor.switch_category(Category::Quote);
//! if let Some(story) = editor.fields_mut().story_mut() {
//!     story.headline = "সত্যের জয় হবেই".to_string();
//!     story.body = "কাজী নজরুল ইসলাম, জাতীয় কবি".to_string();
//! }
//! if let Some(out) = editor.capture()? {
//!     println!("saved {}", out.path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod catalog;
pub mod datefmt;
pub mod fields;
pub mod images;
pub mod rendering;
pub mod templates;

pub mod capture;
pub mod gallery;
pub mod settings;
pub mod storage;

#[cfg(feature = "remote")]
mod http;

// Remote collaborators
#[cfg(feature = "remote")]
pub mod normalize;
#[cfg(feature = "remote")]
pub mod stock;

pub mod editor;

// Async-friendly capture handle (worker-thread backed)
pub mod async_api;

pub use async_api::CaptureWorker;
pub use capture::{capture_filename, CaptureOutcome, CaptureOutput, CaptureService, Stage};
pub use catalog::{CanvasSize, Category, TemplateDescriptor};
pub use editor::{Editor, KeyState};
pub use fields::CardFields;
pub use rendering::{Card, Screenshot};
pub use templates::{render, RenderContext};

/// Configuration for the studio
///
/// The defaults are conservative: remote images referenced by URL are not
/// fetched during export, and no API key is configured. Use
/// [`StudioConfig::from_env`] to pick up credentials and paths from the
/// environment.
///
/// # Examples
///
/// ```
/// let cfg = bkcards::StudioConfig::default();
/// assert_eq!(cfg.scale_factor, 2.0);
/// assert!(cfg.api_key.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Directory exported PNGs are written into
    pub download_dir: PathBuf,
    /// Export pixel ratio relative to the nominal canvas size
    pub scale_factor: f32,
    /// Timeout for remote requests in milliseconds
    pub timeout_ms: u64,
    /// User agent string sent with remote requests
    pub user_agent: String,
    /// Credential for the text normalization API
    pub api_key: Option<String>,
    /// Base URL of the text normalization API
    pub api_base_url: String,
    /// Model name used for text normalization
    pub model: String,
    /// Base URL of the stock image generator
    pub stock_base_url: String,
    /// Whether `http(s)://` image references are fetched during export
    pub allow_remote_images: bool,
    /// Whether system fonts are loaded for rasterization
    pub load_system_fonts: bool,
    /// Backing file of the persistent key/value store (`None` keeps it in memory)
    pub store_path: Option<PathBuf>,
    /// Byte quota of the persistent store (`None` is unlimited)
    pub store_quota_bytes: Option<usize>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            scale_factor: 2.0,
            timeout_ms: 30000,
            user_agent: format!("bkcards/{}", env!("CARGO_PKG_VERSION")),
            api_key: None,
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            stock_base_url: "https://image.pollinations.ai".to_string(),
            allow_remote_images: false,
            load_system_fonts: true,
            store_path: None,
            store_quota_bytes: Some(5 * 1024 * 1024),
        }
    }
}

impl StudioConfig {
    /// Defaults overlaid with `API_KEY` / `GEMINI_API_KEY`, `BK_DOWNLOAD_DIR`
    /// and `BK_STORE` from the environment.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        let var = |k: &str| std::env::var(k).ok().filter(|v| !v.trim().is_empty());
        cfg.api_key = var("API_KEY").or_else(|| var("GEMINI_API_KEY"));
        if let Some(dir) = var("BK_DOWNLOAD_DIR") {
            cfg.download_dir = PathBuf::from(dir);
        }
        if let Some(path) = var("BK_STORE") {
            cfg.store_path = Some(PathBuf::from(path));
        }
        cfg
    }

    /// Reject settings no export could succeed with.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale_factor > 0.0 && self.scale_factor <= 8.0) {
            return Err(Error::Config(format!("scale_factor {} out of range", self.scale_factor)));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Milliseconds since the Unix epoch, as used in export file names.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = StudioConfig::default();
        cfg.validate().unwrap();
        assert!(!cfg.allow_remote_images);
        assert_eq!(cfg.model, "gemini-2.5-flash");
    }

    #[test]
    fn bad_scale_is_rejected() {
        let cfg = StudioConfig { scale_factor: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }
}
