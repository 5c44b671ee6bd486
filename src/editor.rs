//! Editor session
//!
//! One [`Editor`] is what a single studio window holds: the active category,
//! its field set and template, the preview mounted on the stage, and the
//! collaborators that export, analyze and fetch images. Every operation
//! returns a handled `Result`; on failure the previous state is kept.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::capture::{CaptureOutcome, CaptureOutput, CaptureService, NodeId, Stage};
use crate::catalog::{self, Category, TemplateDescriptor};
use crate::fields::{self, CardFields, ImageRef};
use crate::gallery::Gallery;
use crate::rendering::raster::{Rasterizer, ResvgRasterizer};
use crate::rendering::Card;
use crate::settings::Settings;
use crate::storage::{self, KvStore};
use crate::templates::{self, RenderContext};
use crate::{datefmt, Error, Result, StudioConfig};

#[cfg(feature = "remote")]
use crate::normalize::{GeneratedContent, Mode, NormalizeClient};
#[cfg(feature = "remote")]
use crate::stock::StockImageClient;

/// On-screen preview scale of the mounted card.
pub const PREVIEW_SCALE: f32 = 0.5;

/// What the studio knows about the normalization credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Configured,
    Missing,
    /// The service rejected the key; the user has to pick another one.
    NeedsReselection,
}

pub struct Editor {
    settings: Settings<Arc<dyn KvStore>>,
    gallery: Gallery<Arc<dyn KvStore>>,
    capture: CaptureService,
    stage: Stage,
    preview: Option<NodeId>,
    category: Category,
    template: &'static TemplateDescriptor,
    fields: CardFields,
    today: NaiveDate,
    key_state: KeyState,
    #[cfg(feature = "remote")]
    normalizer: NormalizeClient,
    #[cfg(feature = "remote")]
    stock: StockImageClient,
}

impl Editor {
    /// Open a session with the store and rasterizer the configuration asks for.
    pub fn open(config: StudioConfig) -> Result<Self> {
        let store = storage::open_store(&config)?;
        let rasterizer: Arc<dyn Rasterizer> = Arc::new(ResvgRasterizer::new(config.load_system_fonts));
        Self::with_parts(config, store, rasterizer)
    }

    pub fn with_parts(config: StudioConfig, store: Arc<dyn KvStore>, rasterizer: Arc<dyn Rasterizer>) -> Result<Self> {
        let settings = Settings::load(store.clone());
        let gallery = Gallery::load(store);
        let today = datefmt::today();
        let key_state = if config.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
            KeyState::Configured
        } else {
            KeyState::Missing
        };

        let category = Category::News;
        let mut editor = Self {
            template: settings.default_template(category),
            fields: CardFields::seeded(category, today),
            settings,
            gallery,
            capture: CaptureService::new(rasterizer, &config)?,
            stage: Stage::new(),
            preview: None,
            category,
            today,
            key_state,
            #[cfg(feature = "remote")]
            normalizer: NormalizeClient::new(&config)?,
            #[cfg(feature = "remote")]
            stock: StockImageClient::new(&config)?,
        };
        editor.apply_default_font();
        Ok(editor)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn template(&self) -> &'static TemplateDescriptor {
        self.template
    }

    pub fn fields(&self) -> &CardFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut CardFields {
        &mut self.fields
    }

    pub fn key_state(&self) -> KeyState {
        self.key_state
    }

    pub fn settings(&self) -> &Settings<Arc<dyn KvStore>> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings<Arc<dyn KvStore>> {
        &mut self.settings
    }

    pub fn gallery(&self) -> &Gallery<Arc<dyn KvStore>> {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery<Arc<dyn KvStore>> {
        &mut self.gallery
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Date used for seeded fields and date pills.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Open another category: fields reset to its defaults and its default
    /// template is selected. Entering hadith without an image fetches a
    /// random stock background.
    pub fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.fields = CardFields::seeded(category, self.today);
        self.template = self.settings.default_template(category);
        self.apply_default_font();
        log::debug!("switched to {} ({})", category, self.template.id);

        #[cfg(feature = "remote")]
        if category == Category::Hadith && self.fields.images().is_empty() {
            if let Err(e) = self.fetch_stock_image() {
                log::warn!("stock image fetch failed: {}", e);
            }
        }
    }

    /// Replace the whole field set, switching category when it differs.
    pub fn set_fields(&mut self, fields: CardFields) {
        let category = fields.category();
        if category != self.category {
            self.category = category;
            self.template = self.settings.default_template(category);
        }
        self.fields = fields;
    }

    pub fn select_template(&mut self, id: &str) -> Result<()> {
        let t = catalog::lookup(id).ok_or_else(|| Error::NotFound(format!("template '{}'", id)))?;
        if t.category != self.category {
            return Err(Error::CategoryMismatch { template: id.to_string(), category: self.category.to_string() });
        }
        self.template = t;
        Ok(())
    }

    /// Render the current fields and mount the result as the live preview.
    pub fn preview(&mut self) -> Card {
        let ctx = RenderContext::new(datefmt::long_date(self.today));
        let card = templates::render(&self.fields, self.template.id, self.settings.custom_logo(), &ctx);
        let updated = match self.preview {
            Some(id) => self.stage.update(id, card.clone()).is_ok(),
            None => false,
        };
        if !updated {
            self.preview = Some(self.stage.mount_preview(card.clone(), PREVIEW_SCALE));
        }
        card
    }

    /// Export the live preview. `Ok(None)` means a capture was already running.
    pub fn capture(&mut self) -> Result<Option<CaptureOutput>> {
        self.preview();
        let live = self
            .preview
            .ok_or_else(|| Error::Capture("nothing to capture".into()))?;
        match self.capture.capture(&mut self.stage, live, crate::now_ms())? {
            CaptureOutcome::Saved(out) => Ok(Some(out)),
            CaptureOutcome::Skipped => Ok(None),
        }
    }

    /// Replace the morning caption with a random predefined one.
    pub fn random_caption(&mut self) -> Option<&str> {
        match &mut self.fields {
            CardFields::Morning(m) => {
                m.caption = fields::random_caption().to_string();
                Some(m.caption.as_str())
            }
            _ => None,
        }
    }

    pub fn add_image(&mut self, image: ImageRef) {
        self.fields.images_mut().push(image);
    }

    /// Add a gallery item's image to the card.
    pub fn add_image_from_gallery(&mut self, id: &str) -> Result<()> {
        let data = self
            .gallery
            .get(id)
            .map(|i| i.data.clone())
            .ok_or_else(|| Error::NotFound(format!("gallery item {}", id)))?;
        self.add_image(data);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        let images = self.fields.images_mut();
        (index < images.len()).then(|| images.remove(index))
    }

    #[cfg(feature = "remote")]
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.normalizer.set_api_key(key);
        self.key_state = if self.normalizer.has_api_key() { KeyState::Configured } else { KeyState::Missing };
    }

    /// Normalize raw text into the story fields of a news or quote card.
    #[cfg(feature = "remote")]
    pub fn analyze(&mut self, raw: &str) -> Result<GeneratedContent> {
        let mode = match self.category {
            Category::News => Mode::News,
            Category::Quote => Mode::Quote,
            other => return Err(Error::Other(format!("{} cards have no text analysis", other))),
        };
        match self.normalizer.normalize(raw, mode) {
            Ok(content) => {
                if let Some(story) = self.fields.story_mut() {
                    story.headline = content.headline.clone();
                    story.body = content.body.clone();
                    story.caption = content.caption.clone();
                }
                Ok(content)
            }
            Err(e) => {
                match e {
                    Error::PermissionDenied(_) => self.key_state = KeyState::NeedsReselection,
                    Error::MissingCredentials => self.key_state = KeyState::Missing,
                    _ => {}
                }
                log::error!("Error processing text: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the card's images with a random stock background.
    #[cfg(feature = "remote")]
    pub fn fetch_stock_image(&mut self) -> Result<()> {
        let image = self.stock.fetch_random()?;
        let images = self.fields.images_mut();
        images.clear();
        images.push(image);
        Ok(())
    }

    fn apply_default_font(&mut self) {
        let font = self.settings.default_font().id.to_string();
        if let Some(story) = self.fields.story_mut() {
            story.font = Some(font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CanvasSize;
    use crate::rendering::Screenshot;
    use crate::storage::MemoryStore;

    struct Blank;

    impl Rasterizer for Blank {
        fn rasterize(&self, _: &str, size: CanvasSize, scale: f32) -> Result<Screenshot> {
            let out = size.scaled(scale);
            Ok(Screenshot { width: out.width, height: out.height, png_data: vec![0] })
        }
    }

    fn editor(dir: &std::path::Path) -> Editor {
        let config = StudioConfig {
            download_dir: dir.to_path_buf(),
            stock_base_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        Editor::with_parts(config, Arc::new(MemoryStore::new()), Arc::new(Blank)).unwrap()
    }

    #[test]
    fn switching_category_resets_fields_and_template() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        assert_eq!(ed.template().id, "bk-news-classic-light");
        ed.select_template("bk-news-royal-green").unwrap();
        ed.fields_mut().story_mut().unwrap().headline = "পুরনো".into();

        ed.switch_category(Category::Prayer);
        assert_eq!(ed.template().id, "bk-prayer-classic");
        assert!(matches!(ed.fields(), CardFields::Prayer(p) if p.location == fields::DEFAULT_LOCATION));

        ed.switch_category(Category::News);
        assert_eq!(ed.template().id, "bk-news-classic-light");
        assert_eq!(ed.fields().clone(), {
            let mut f = CardFields::seeded(Category::News, ed.today);
            f.story_mut().unwrap().font = Some("hind".into());
            f
        });
    }

    #[test]
    fn foreign_template_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        assert!(matches!(ed.select_template("bk-quote-glass"), Err(Error::CategoryMismatch { .. })));
        assert!(matches!(ed.select_template("bk-news-nope"), Err(Error::NotFound(_))));
        assert_eq!(ed.template().id, "bk-news-classic-light");
    }

    #[test]
    fn saved_default_template_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        ed.settings_mut().set_default_template(Category::Quote, "bk-quote-glass").unwrap();
        ed.switch_category(Category::Quote);
        assert_eq!(ed.template().id, "bk-quote-glass");
    }

    #[test]
    fn empty_quote_capture_is_portrait_2x() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        ed.switch_category(Category::Quote);
        let card = ed.preview();
        assert!(card.contains_text("বক্তার নাম"));
        assert_eq!(ed.stage().node_count(), 1);

        let out = ed.capture().unwrap().unwrap();
        assert_eq!((out.width, out.height), (1200, 1500));
        assert!(out.file_name.starts_with("bk-quote-"));
        assert!(out.path.exists());
        assert_eq!(ed.stage().node_count(), 1);
    }

    #[test]
    fn custom_logo_reaches_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        ed.settings_mut().set_custom_logo(Some("data:image/png;base64,AA==".into())).unwrap();
        let mut card = ed.preview();
        let mut hrefs = Vec::new();
        card.for_each_image_mut(|h| hrefs.push(h.clone()));
        assert!(hrefs.contains(&"data:image/png;base64,AA==".to_string()));
    }

    #[test]
    fn images_and_captions() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        assert_eq!(ed.random_caption(), None);
        ed.switch_category(Category::Morning);
        let caption = ed.random_caption().unwrap().to_string();
        assert!(fields::DEFAULT_CAPTIONS.contains(&caption.as_str()));

        let item = ed
            .gallery_mut()
            .add(&[0x89, b'P', b'N', b'G'], "a.png", None, 7)
            .unwrap();
        ed.add_image_from_gallery(&item.id).unwrap();
        ed.add_image("second.png".into());
        assert_eq!(ed.fields().images().len(), 2);
        assert_eq!(ed.remove_image(0), Some(item.data));
        assert_eq!(ed.remove_image(5), None);
        assert!(matches!(ed.add_image_from_gallery("missing"), Err(Error::NotFound(_))));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn analysis_needs_a_story_category_and_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        assert_eq!(ed.key_state(), KeyState::Missing);
        assert!(matches!(ed.analyze("খবর"), Err(Error::MissingCredentials)));

        ed.switch_category(Category::Morning);
        assert!(matches!(ed.analyze("খবর"), Err(Error::Other(_))));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn failed_stock_fetch_leaves_hadith_without_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(dir.path());
        ed.switch_category(Category::Hadith);
        assert!(ed.fields().images().is_empty());
    }
}
