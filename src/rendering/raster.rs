/// Rasterization of serialized cards into PNG screenshots
use std::sync::Arc;

use usvg::fontdb;

use crate::catalog::CanvasSize;
use crate::rendering::Screenshot;
use crate::{Error, Result};

/// Turns an SVG document into pixels.
pub trait Rasterizer: Send + Sync {
    /// Render `svg` (authored at `size`) at `scale` times its nominal size.
    fn rasterize(&self, svg: &str, size: CanvasSize, scale: f32) -> Result<Screenshot>;
}

/// resvg-backed rasterizer with an opaque white background.
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl ResvgRasterizer {
    /// Create a rasterizer. Loading system fonts takes a while, so share one
    /// instance per process.
    pub fn new(load_system_fonts: bool) -> Self {
        let mut db = fontdb::Database::new();
        if load_system_fonts {
            db.load_system_fonts();
            log::debug!("loaded {} font faces", db.len());
        }
        Self { fontdb: Arc::new(db) }
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str, size: CanvasSize, scale: f32) -> Result<Screenshot> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts).map_err(|e| Error::Render(e.to_string()))?;

        let out = size.scaled(scale);
        let mut pixmap = tiny_skia::Pixmap::new(out.width, out.height)
            .ok_or_else(|| Error::Render(format!("invalid pixmap size {}x{}", out.width, out.height)))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        let png_data = pixmap.encode_png().map_err(|e| Error::Render(e.to_string()))?;
        Ok(Screenshot { width: out.width, height: out.height, png_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_at_scale() {
        let r = ResvgRasterizer::new(false);
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="#da291c"/></svg>"##;
        let shot = r.rasterize(svg, CanvasSize::new(10, 20), 2.0).unwrap();
        assert_eq!((shot.width, shot.height), (20, 40));
        let pixmap = tiny_skia::Pixmap::decode_png(&shot.png_data).unwrap();
        let px = pixmap.pixel(5, 5).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (0xda, 0x29, 0x1c));
        assert_eq!(shot.digest().len(), 64);
    }

    #[test]
    fn transparent_areas_are_white() {
        let r = ResvgRasterizer::new(false);
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
        let shot = r.rasterize(svg, CanvasSize::new(4, 4), 1.0).unwrap();
        let pixmap = tiny_skia::Pixmap::decode_png(&shot.png_data).unwrap();
        let px = pixmap.pixel(1, 1).unwrap();
        assert_eq!((px.red(), px.alpha()), (255, 255));
    }

    #[test]
    fn malformed_svg_is_a_render_error() {
        let r = ResvgRasterizer::new(false);
        let err = r.rasterize("<svg", CanvasSize::new(4, 4), 1.0).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
