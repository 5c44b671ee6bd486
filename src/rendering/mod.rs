//! Rendering pipeline: visual tree, text layout, SVG serialization, rasterization

pub mod layout;
pub mod paint;
pub mod raster;
pub mod svg;

use sha2::{Digest, Sha256};

use crate::catalog::{CanvasSize, Category};
use paint::{Color, Node};

/// A composed card: a fixed-size box plus its drawing primitives in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub template_id: String,
    pub category: Category,
    pub size: CanvasSize,
    pub background: Color,
    pub nodes: Vec<Node>,
}

impl Card {
    /// Every visible text string, in paint order.
    pub fn text(&self) -> Vec<String> {
        let mut out = Vec::new();
        for n in &self.nodes {
            n.collect_text(&mut out);
        }
        out
    }

    /// Whether any text node contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text().iter().any(|t| t.contains(needle))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::count).sum()
    }

    /// Mutable access to every image reference in the card.
    pub fn for_each_image_mut(&mut self, mut f: impl FnMut(&mut String)) {
        for n in &mut self.nodes {
            n.for_each_image_mut(&mut f);
        }
    }
}

/// A rasterized card
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Hex sha256 of the encoded PNG.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}
