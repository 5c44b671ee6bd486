//! Visual tree of a card
//!
//! Templates build a flat list of [`Node`]s in paint order (later nodes draw
//! on top). Coordinates are CSS pixels relative to the card's top-left corner.

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const BLACK: Color = Color::hex(0x000000);
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque colour from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Color {
        Color {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    /// Same colour with the alpha channel set from `0.0..=1.0`.
    pub fn alpha(self, opacity: f32) -> Color {
        Color { a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }

    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// `#rrggbb` without alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `d` on every side.
    pub fn inset(&self, d: f32) -> Rect {
        Rect::new(
            self.x + d,
            self.y + d,
            (self.width - 2.0 * d).max(0.0),
            (self.height - 2.0 * d).max(0.0),
        )
    }
}

/// Direction of a linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDir {
    /// `from` at the top, `to` at the bottom
    Down,
    /// `from` at the left, `to` at the right
    Right,
    /// `from` at the top-left, `to` at the bottom-right
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical placement of wrapped lines inside a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// How an image fills its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    #[default]
    Cover,
    Contain,
}

/// Multi-line text box. Wrapping and line clamping happen at serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub content: String,
    pub rect: Rect,
    pub size: f32,
    /// Line height as a multiple of `size`
    pub line_height: f32,
    pub weight: u16,
    pub color: Color,
    pub family: String,
    pub align: Align,
    pub valign: VAlign,
    pub italic: bool,
    pub letter_spacing: f32,
    /// Lines beyond this budget are dropped and the last kept line gets an ellipsis
    pub max_lines: Option<usize>,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, rect: Rect, size: f32) -> TextBlock {
        TextBlock {
            content: content.into(),
            rect,
            size,
            line_height: 1.3,
            weight: 400,
            color: Color::BLACK,
            family: "sans-serif".to_string(),
            align: Align::Start,
            valign: VAlign::Top,
            italic: false,
            letter_spacing: 0.0,
            max_lines: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(700)
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    pub fn line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn max_lines(mut self, n: usize) -> Self {
        self.max_lines = Some(n);
        self
    }
}

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect {
        rect: Rect,
        fill: Color,
        stroke: Option<Stroke>,
        radius: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    /// Filled SVG path data
    Path { d: String, fill: Color },
    Text(TextBlock),
    /// Single-line run of differently coloured spans sharing one baseline
    Spans {
        x: f32,
        baseline: f32,
        size: f32,
        weight: u16,
        family: String,
        align: Align,
        spans: Vec<(String, Color)>,
    },
    Image {
        href: String,
        rect: Rect,
        fit: Fit,
        radius: f32,
        circle: bool,
        opacity: f32,
    },
    LinearGradient {
        rect: Rect,
        from: Color,
        to: Color,
        dir: GradientDir,
        radius: f32,
    },
    Group {
        dx: f32,
        dy: f32,
        scale: f32,
        opacity: f32,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn rect(rect: Rect, fill: Color) -> Node {
        Node::Rect { rect, fill, stroke: None, radius: 0.0 }
    }

    pub fn rounded(rect: Rect, fill: Color, radius: f32) -> Node {
        Node::Rect { rect, fill, stroke: None, radius }
    }

    /// Unfilled rectangle outline.
    pub fn frame(rect: Rect, color: Color, width: f32, radius: f32) -> Node {
        Node::Rect {
            rect,
            fill: Color::TRANSPARENT,
            stroke: Some(Stroke { color, width }),
            radius,
        }
    }

    pub fn circle(cx: f32, cy: f32, r: f32, fill: Color) -> Node {
        Node::Circle { cx, cy, r, fill, stroke: None }
    }

    pub fn ring(cx: f32, cy: f32, r: f32, color: Color, width: f32) -> Node {
        Node::Circle {
            cx,
            cy,
            r,
            fill: Color::TRANSPARENT,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn line(from: (f32, f32), to: (f32, f32), color: Color, width: f32) -> Node {
        Node::Line { from, to, stroke: Stroke { color, width } }
    }

    pub fn text(block: TextBlock) -> Node {
        Node::Text(block)
    }

    pub fn image(href: &str, rect: Rect, fit: Fit) -> Node {
        Node::Image {
            href: href.to_string(),
            rect,
            fit,
            radius: 0.0,
            circle: false,
            opacity: 1.0,
        }
    }

    pub fn gradient(rect: Rect, from: Color, to: Color, dir: GradientDir) -> Node {
        Node::LinearGradient { rect, from, to, dir, radius: 0.0 }
    }

    pub fn group(dx: f32, dy: f32, scale: f32, children: Vec<Node>) -> Node {
        Node::Group { dx, dy, scale, opacity: 1.0, children }
    }

    /// Set the corner radius of rects, images and gradients. No-op elsewhere.
    pub fn with_radius(mut self, r: f32) -> Node {
        match &mut self {
            Node::Rect { radius, .. }
            | Node::Image { radius, .. }
            | Node::LinearGradient { radius, .. } => *radius = r,
            _ => {}
        }
        self
    }

    /// Add an outline to rects and circles. No-op elsewhere.
    pub fn with_stroke(mut self, color: Color, width: f32) -> Node {
        match &mut self {
            Node::Rect { stroke, .. } | Node::Circle { stroke, .. } => {
                *stroke = Some(Stroke { color, width })
            }
            _ => {}
        }
        self
    }

    /// Set image or group opacity. No-op elsewhere.
    pub fn with_opacity(mut self, o: f32) -> Node {
        match &mut self {
            Node::Image { opacity, .. } | Node::Group { opacity, .. } => *opacity = o,
            _ => {}
        }
        self
    }

    /// Clip an image to the circle inscribed in its box.
    pub fn clip_circle(mut self) -> Node {
        if let Node::Image { circle, .. } = &mut self {
            *circle = true;
        }
        self
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        match self {
            Node::Group { children, .. } => 1 + children.iter().map(Node::count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Visit every image href in this subtree.
    pub fn for_each_image_mut(&mut self, f: &mut dyn FnMut(&mut String)) {
        match self {
            Node::Image { href, .. } => f(href),
            Node::Group { children, .. } => {
                for c in children {
                    c.for_each_image_mut(f);
                }
            }
            _ => {}
        }
    }

    /// Push every text string of this subtree onto `out`.
    pub fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Node::Text(t) => out.push(t.content.clone()),
            Node::Spans { spans, .. } => out.push(spans.iter().map(|(s, _)| s.as_str()).collect()),
            Node::Group { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_and_alpha() {
        let red = Color::hex(0xda291c);
        assert_eq!(red.to_hex(), "#da291c");
        assert_eq!(red.alpha(0.5).a, 128);
        assert_eq!(red.alpha(2.0).a, 255);
    }

    #[test]
    fn group_counts_and_text() {
        let g = Node::group(
            10.0,
            10.0,
            0.75,
            vec![
                Node::rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE),
                Node::Spans {
                    x: 0.0,
                    baseline: 10.0,
                    size: 20.0,
                    weight: 700,
                    family: "sans-serif".into(),
                    align: Align::Start,
                    spans: vec![("বাঁশের".into(), Color::BLACK), ("কেল্লা".into(), Color::WHITE)],
                },
            ],
        );
        assert_eq!(g.count(), 3);
        let mut text = Vec::new();
        g.collect_text(&mut text);
        assert_eq!(text, vec!["বাঁশেরকেল্লা".to_string()]);
    }

    #[test]
    fn image_visitor_reaches_nested_images() {
        let mut g = Node::group(
            0.0,
            0.0,
            1.0,
            vec![Node::image("a.png", Rect::new(0.0, 0.0, 1.0, 1.0), Fit::Cover)],
        );
        g.for_each_image_mut(&mut |h| *h = "data:image/png;base64,AA==".into());
        match &g {
            Node::Group { children, .. } => match &children[0] {
                Node::Image { href, .. } => assert!(href.starts_with("data:")),
                other => panic!("unexpected {:?}", other),
            },
            other => panic!("unexpected {:?}", other),
        }
    }
}
