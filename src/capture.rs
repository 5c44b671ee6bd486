//! Capture and export
//!
//! A capture deep-clones the live card into an off-screen slot of the
//! [`Stage`] at its native canvas size, inlines its images, rasterizes it at
//! the configured pixel ratio and writes `bk-<category>-<unix-ms>.png` into
//! the download directory. The off-screen clone is removed on every path.
//!
//! Only one capture runs at a time. A second request while one is in flight
//! is dropped, not queued.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::Category;
use crate::images::ImageResolver;
use crate::rendering::raster::Rasterizer;
use crate::rendering::{svg, Card};
use crate::{Error, Result, StudioConfig};

pub type NodeId = u64;

/// A card attached to the stage.
#[derive(Debug, Clone)]
pub struct Mounted {
    pub card: Card,
    /// Display scale of an on-screen preview; 1.0 for native size
    pub scale: f32,
    pub offscreen: bool,
}

/// The document cards are mounted into.
#[derive(Debug, Default)]
pub struct Stage {
    next_id: NodeId,
    nodes: BTreeMap<NodeId, Mounted>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a card at native size.
    pub fn mount(&mut self, card: Card) -> NodeId {
        self.insert(Mounted { card, scale: 1.0, offscreen: false })
    }

    /// Mount a card displayed at `scale`, as the editor preview does.
    pub fn mount_preview(&mut self, card: Card, scale: f32) -> NodeId {
        self.insert(Mounted { card, scale, offscreen: false })
    }

    /// Replace the card of a mounted node, keeping its display scale.
    pub fn update(&mut self, id: NodeId, card: Card) -> Result<()> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound(format!("stage node {}", id)))?;
        node.card = card;
        Ok(())
    }

    pub fn unmount(&mut self, id: NodeId) -> Option<Mounted> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Mounted> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, m: Mounted) -> NodeId {
        self.next_id += 1;
        self.nodes.insert(self.next_id, m);
        self.next_id
    }
}

/// Off-screen copy of a card, unmounted when dropped.
struct OffscreenClone<'a> {
    stage: &'a mut Stage,
    id: NodeId,
}

impl<'a> OffscreenClone<'a> {
    fn mount(stage: &'a mut Stage, card: Card) -> Self {
        let id = stage.insert(Mounted { card, scale: 1.0, offscreen: true });
        Self { stage, id }
    }

    fn card(&self) -> Option<&Card> {
        self.stage.get(self.id).map(|m| &m.card)
    }
}

impl Drop for OffscreenClone<'_> {
    fn drop(&mut self) {
        self.stage.unmount(self.id);
    }
}

/// Single-flight flag shared by everything that can start a capture.
#[derive(Debug, Clone, Default)]
pub struct BusyGate(Arc<AtomicBool>);

impl BusyGate {
    /// Take the gate, or `None` if a capture is already running.
    pub fn try_acquire(&self) -> Option<BusyToken> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyToken(self.0.clone()))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Held while a capture runs; releases the gate on drop.
#[derive(Debug)]
pub struct BusyToken(Arc<AtomicBool>);

impl Drop for BusyToken {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A written export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutput {
    pub path: PathBuf,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// sha256 of the PNG bytes
    pub digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(CaptureOutput),
    /// Another capture was in flight; nothing was done.
    Skipped,
}

/// `bk-<category>-<ms>.png`
pub fn capture_filename(category: Category, ms: i64) -> String {
    format!("bk-{}-{}.png", category.slug(), ms)
}

pub struct CaptureService {
    rasterizer: Arc<dyn Rasterizer>,
    images: ImageResolver,
    download_dir: PathBuf,
    scale: f32,
    gate: BusyGate,
}

impl CaptureService {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, config: &StudioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rasterizer,
            images: ImageResolver::new(config)?,
            download_dir: config.download_dir.clone(),
            scale: config.scale_factor,
            gate: BusyGate::default(),
        })
    }

    /// The busy flag of this service.
    pub fn gate(&self) -> BusyGate {
        self.gate.clone()
    }

    /// Export the card mounted at `live`.
    pub fn capture(&self, stage: &mut Stage, live: NodeId, now_ms: i64) -> Result<CaptureOutcome> {
        let Some(_token) = self.gate.try_acquire() else {
            log::debug!("capture already in flight, ignoring request");
            return Ok(CaptureOutcome::Skipped);
        };
        self.run_capture(stage, live, now_ms).map(CaptureOutcome::Saved)
    }

    /// Export without consulting the busy gate. Callers hold the gate.
    pub(crate) fn run_capture(&self, stage: &mut Stage, live: NodeId, now_ms: i64) -> Result<CaptureOutput> {
        let card = stage
            .get(live)
            .map(|m| m.card.clone())
            .ok_or_else(|| Error::Capture(format!("no card mounted at {}", live)))?;

        let clone = OffscreenClone::mount(stage, card);
        let result = match clone.card() {
            Some(card) => self.export(card, now_ms),
            None => Err(Error::Capture("off-screen clone vanished".into())),
        };
        drop(clone);

        result.map_err(|e| {
            log::error!("Screenshot failed: {}", e);
            match e {
                Error::Capture(_) => e,
                other => Error::Capture(other.to_string()),
            }
        })
    }

    fn export(&self, card: &Card, now_ms: i64) -> Result<CaptureOutput> {
        let mut card = card.clone();
        let mut failed = None;
        card.for_each_image_mut(|href| {
            if failed.is_some() {
                return;
            }
            match self.images.resolve(href) {
                Ok(uri) => *href = uri,
                Err(e) => failed = Some(e),
            }
        });
        if let Some(e) = failed {
            return Err(e);
        }

        let doc = svg::to_svg(&card);
        let shot = self.rasterizer.rasterize(&doc, card.size, self.scale)?;

        fs::create_dir_all(&self.download_dir)?;
        let file_name = capture_filename(card.category, now_ms);
        let path = self.download_dir.join(&file_name);
        fs::write(&path, &shot.png_data)?;
        log::info!("saved {} ({}x{})", path.display(), shot.width, shot.height);

        Ok(CaptureOutput {
            path,
            file_name,
            width: shot.width,
            height: shot.height,
            digest: shot.digest(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CanvasSize;
    use crate::fields::CardFields;
    use crate::rendering::Screenshot;
    use crate::templates::{render, RenderContext};
    use std::sync::Mutex;

    /// Records what it was asked to draw and returns a fixed PNG.
    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<(String, CanvasSize, f32)>>,
    }

    impl Rasterizer for Recording {
        fn rasterize(&self, svg: &str, size: CanvasSize, scale: f32) -> Result<Screenshot> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push((svg.to_string(), size, scale));
            }
            let out = size.scaled(scale);
            Ok(Screenshot { width: out.width, height: out.height, png_data: vec![1, 2, 3] })
        }
    }

    struct Failing;

    impl Rasterizer for Failing {
        fn rasterize(&self, _: &str, _: CanvasSize, _: f32) -> Result<Screenshot> {
            Err(Error::Render("boom".into()))
        }
    }

    fn config(dir: &std::path::Path) -> StudioConfig {
        StudioConfig { download_dir: dir.to_path_buf(), ..Default::default() }
    }

    fn card(category: Category) -> Card {
        let id = crate::catalog::first_template(category).id;
        render(&CardFields::empty(category), id, None, &RenderContext::new("২৯ নভেম্বর ২০২৫"))
    }

    #[test]
    fn filename_pattern() {
        assert_eq!(capture_filename(Category::Prayer, 1764400000000), "bk-prayer-1764400000000.png");
    }

    #[test]
    fn exports_native_size_at_scale_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let raster = Arc::new(Recording::default());
        let service = CaptureService::new(raster.clone(), &config(dir.path())).unwrap();

        let mut stage = Stage::new();
        let live = stage.mount_preview(card(Category::Quote), 0.5);
        let before = stage.node_count();

        let out = match service.capture(&mut stage, live, 42).unwrap() {
            CaptureOutcome::Saved(out) => out,
            CaptureOutcome::Skipped => panic!("unexpected skip"),
        };
        assert_eq!((out.width, out.height), (1200, 1500));
        assert_eq!(out.file_name, "bk-quote-42.png");
        assert_eq!(std::fs::read(&out.path).unwrap(), vec![1, 2, 3]);
        assert_eq!(stage.node_count(), before);

        let seen = raster.seen.lock().unwrap();
        assert_eq!(seen[0].1, CanvasSize::new(600, 750));
        assert_eq!(seen[0].2, 2.0);
        assert!(seen[0].0.contains("width=\"600\""));
    }

    #[test]
    fn failure_removes_clone_and_reports_capture_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = CaptureService::new(Arc::new(Failing), &config(dir.path())).unwrap();
        let mut stage = Stage::new();
        let live = stage.mount(card(Category::News));

        let err = service.capture(&mut stage, live, 1).unwrap_err();
        assert!(matches!(err, Error::Capture(_)));
        assert_eq!(stage.node_count(), 1);
        assert!(!service.gate().is_busy());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn busy_gate_skips_second_capture() {
        let dir = tempfile::tempdir().unwrap();
        let service = CaptureService::new(Arc::new(Recording::default()), &config(dir.path())).unwrap();
        let mut stage = Stage::new();
        let live = stage.mount(card(Category::Morning));

        let held = service.gate().try_acquire().unwrap();
        assert_eq!(service.capture(&mut stage, live, 1).unwrap(), CaptureOutcome::Skipped);
        drop(held);
        assert!(matches!(service.capture(&mut stage, live, 2).unwrap(), CaptureOutcome::Saved(_)));
    }

    #[test]
    fn unloadable_image_fails_capture() {
        let dir = tempfile::tempdir().unwrap();
        let service = CaptureService::new(Arc::new(Recording::default()), &config(dir.path())).unwrap();
        let mut fields = CardFields::empty(Category::News);
        fields.images_mut().push("https://example.com/photo.jpg".into());
        let card = render(&fields, "bk-news-classic-light", None, &RenderContext::new(""));

        let mut stage = Stage::new();
        let live = stage.mount(card);
        assert!(matches!(service.capture(&mut stage, live, 1), Err(Error::Capture(_))));
        assert_eq!(stage.node_count(), 1);
    }
}
