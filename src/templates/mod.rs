//! Layout renderer
//!
//! [`render`] turns a field set plus a template id into a [`Card`]. It is
//! pure and cheap, so the editor calls it on every keystroke. Each template
//! module composes its cards from the shared parts in this module.

pub mod hadith;
pub mod morning;
pub mod news;
pub mod prayer;
pub mod quote;

use std::fmt;

use crate::catalog::{self, CanvasSize, Category};
use crate::fields::{CardFields, HadithFields, MorningFields, PrayerFields, StoryFields};
use crate::rendering::layout::text_width;
use crate::rendering::paint::{Align, Color, Fit, Node, Rect, TextBlock, VAlign};
use crate::rendering::Card;

pub type StoryLayout = fn(&StoryFields, &Scene<'_>) -> Vec<Node>;
pub type MorningLayout = fn(&MorningFields, &Scene<'_>) -> Vec<Node>;
pub type PrayerLayout = fn(&PrayerFields, &Scene<'_>) -> Vec<Node>;
pub type HadithLayout = fn(&HadithFields, &Scene<'_>) -> Vec<Node>;

/// Layout function of a catalog entry, typed by the field set it reads.
#[derive(Clone, Copy)]
pub enum Layout {
    Story(StoryLayout),
    Morning(MorningLayout),
    Prayer(PrayerLayout),
    Hadith(HadithLayout),
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Story(_) => "Layout::Story",
            Layout::Morning(_) => "Layout::Morning",
            Layout::Prayer(_) => "Layout::Prayer",
            Layout::Hadith(_) => "Layout::Hadith",
        })
    }
}

/// Values a template needs besides its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Date shown on news and quote date pills, e.g. `২৯ নভেম্বর ২০২৫`
    pub today: String,
}

impl RenderContext {
    pub fn new(today: impl Into<String>) -> Self {
        Self { today: today.into() }
    }

    /// Context for the local current date.
    pub fn now() -> Self {
        Self::new(crate::datefmt::long_date(crate::datefmt::today()))
    }
}

/// What a layout function draws into.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub size: CanvasSize,
    pub logo: Option<&'a str>,
    pub today: &'a str,
}

impl Scene<'_> {
    pub fn w(&self) -> f32 {
        self.size.width as f32
    }

    pub fn h(&self) -> f32 {
        self.size.height as f32
    }

    pub fn full(&self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

pub const NOT_FOUND: &str = "Template Not Found";

/// Compose `template_id` with `fields`.
///
/// An unknown id, or one that belongs to another category than `fields`,
/// yields a "Template Not Found" card at the category's canvas size.
pub fn render(fields: &CardFields, template_id: &str, logo: Option<&str>, ctx: &RenderContext) -> Card {
    let category = fields.category();
    let scene = Scene {
        size: category.canvas_size(),
        logo: logo.filter(|l| !l.trim().is_empty()),
        today: &ctx.today,
    };

    let nodes = catalog::lookup(template_id)
        .filter(|t| t.category == category)
        .and_then(|t| match (t.layout, fields) {
            (Layout::Story(f), CardFields::News(s) | CardFields::Quote(s)) => Some(f(s, &scene)),
            (Layout::Morning(f), CardFields::Morning(m)) => Some(f(m, &scene)),
            (Layout::Prayer(f), CardFields::Prayer(p)) => Some(f(p, &scene)),
            (Layout::Hadith(f), CardFields::Hadith(h)) => Some(f(h, &scene)),
            _ => None,
        });

    match nodes {
        Some(nodes) => Card {
            template_id: template_id.to_string(),
            category,
            size: scene.size,
            background: Color::WHITE,
            nodes,
        },
        None => {
            log::warn!("no {} template named '{}'", category, template_id);
            not_found(category, template_id)
        }
    }
}

fn not_found(category: Category, template_id: &str) -> Card {
    let size = category.canvas_size();
    let full = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
    Card {
        template_id: template_id.to_string(),
        category,
        size,
        background: GRAY_50,
        nodes: vec![
            Node::rect(full, GRAY_50),
            Node::text(
                TextBlock::new(NOT_FOUND, full, 18.0)
                    .color(GRAY_400)
                    .family(BODY_FONT)
                    .center()
                    .valign(VAlign::Middle),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Palette and fonts

pub const BK_RED: Color = Color::hex(0xda291c);
pub const BK_GREEN: Color = Color::hex(0x008542);

pub const GRAY_50: Color = Color::hex(0xf9fafb);
pub const GRAY_100: Color = Color::hex(0xf3f4f6);
pub const GRAY_200: Color = Color::hex(0xe5e7eb);
pub const GRAY_300: Color = Color::hex(0xd1d5db);
pub const GRAY_400: Color = Color::hex(0x9ca3af);
pub const GRAY_500: Color = Color::hex(0x6b7280);
pub const GRAY_600: Color = Color::hex(0x4b5563);
pub const GRAY_700: Color = Color::hex(0x374151);
pub const GRAY_800: Color = Color::hex(0x1f2937);
pub const GRAY_900: Color = Color::hex(0x111827);
pub const ORANGE_400: Color = Color::hex(0xfb923c);
pub const ORANGE_500: Color = Color::hex(0xf97316);

pub const BODY_FONT: &str = "'Hind Siliguri', 'Noto Sans Bengali', sans-serif";
pub const OSWALD: &str = "'Oswald', 'Hind Siliguri', sans-serif";
pub const SERIF: &str = "'Merriweather', 'Noto Serif Bengali', serif";
pub const ARABIC: &str = "'Amiri', 'Noto Naskh Arabic', serif";

// ---------------------------------------------------------------------------
// Brand header

/// Colour scheme of the brand header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandVariant {
    Light,
    Dark,
    Colored,
    MonoRed,
    MonoWhite,
    RedWhite,
    Gold,
    Teal,
    Black,
    White,
}

impl BrandVariant {
    /// `(text, accent, border)`
    fn colors(self) -> (Color, Color, Color) {
        match self {
            BrandVariant::Light | BrandVariant::Colored | BrandVariant::Teal => (BK_GREEN, BK_RED, BK_GREEN),
            BrandVariant::Dark => (Color::WHITE, BK_RED, Color::WHITE),
            BrandVariant::MonoRed => (BK_RED, BK_RED, BK_RED),
            BrandVariant::MonoWhite | BrandVariant::RedWhite | BrandVariant::White => {
                (Color::WHITE, Color::WHITE, Color::WHITE)
            }
            BrandVariant::Gold => (BK_GREEN, Color::WHITE, BK_GREEN),
            BrandVariant::Black => (Color::BLACK, BK_RED, Color::BLACK),
        }
    }
}

/// Unscaled size of the brand header
pub const BRAND_W: f32 = 160.0;
pub const BRAND_H: f32 = 40.0;

/// Logo mark plus wordmark with its top-left corner at `(x, y)`.
pub fn brand(scene: &Scene<'_>, x: f32, y: f32, scale: f32, variant: BrandVariant) -> Node {
    let (text, accent, border) = variant.colors();
    let mut children = Vec::with_capacity(6);
    match scene.logo {
        Some(logo) => children.push(Node::image(logo, Rect::new(0.0, 0.0, 40.0, 40.0), Fit::Contain)),
        None => {
            children.push(Node::frame(Rect::new(1.25, 1.25, 37.5, 37.5), border, 2.5, 8.0));
            // corner blob, clipped to the mark
            children.push(Node::Path {
                d: "M24.69 0 A12 12 0 0 0 40 15.31 L40 0 Z".to_string(),
                fill: BK_RED.alpha(0.2),
            });
            children.push(Node::text(
                TextBlock::new("bk", Rect::new(0.0, 0.0, 40.0, 38.0), 24.0)
                    .bold()
                    .family(OSWALD)
                    .color(text)
                    .center()
                    .valign(VAlign::Middle)
                    .line_height(1.0),
            ));
        }
    }
    children.push(Node::Spans {
        x: 48.0,
        baseline: 21.0,
        size: 20.0,
        weight: 700,
        family: BODY_FONT.to_string(),
        align: Align::Start,
        spans: vec![("বাঁশের".to_string(), text), ("কেল্লা".to_string(), accent)],
    });
    children.push(Node::text(
        TextBlock::new("NEWS MEDIA", Rect::new(48.0, 25.0, 112.0, 12.0), 9.0)
            .bold()
            .family(OSWALD)
            .spacing(1.8)
            .line_height(1.2)
            .color(text.alpha(0.8)),
    ));
    Node::group(x, y, scale, children)
}

/// Brand header whose bottom-right corner sits at `(right, bottom)`.
pub fn brand_br(scene: &Scene<'_>, right: f32, bottom: f32, scale: f32, variant: BrandVariant) -> Node {
    brand(scene, right - BRAND_W * scale, bottom - BRAND_H * scale, scale, variant)
}

/// Brand header centred horizontally on `cx`.
pub fn brand_centered(scene: &Scene<'_>, cx: f32, y: f32, scale: f32, variant: BrandVariant) -> Node {
    brand(scene, cx - BRAND_W * scale / 2.0, y, scale, variant)
}

// ---------------------------------------------------------------------------
// Pills

/// Rounded label with auto width.
#[derive(Debug, Clone, Copy)]
pub struct Pill {
    pub bg: Color,
    pub fg: Color,
    pub size: f32,
    pub weight: u16,
    pub pad_x: f32,
    pub pad_y: f32,
    /// `None` rounds fully
    pub radius: Option<f32>,
    pub border: Option<(Color, f32)>,
    pub dot: Option<Color>,
    pub spacing: f32,
}

impl Pill {
    pub fn new(bg: Color, fg: Color, size: f32) -> Pill {
        Pill {
            bg,
            fg,
            size,
            weight: 700,
            pad_x: 16.0,
            pad_y: 6.0,
            radius: None,
            border: None,
            dot: None,
            spacing: 0.0,
        }
    }

    pub fn pad(mut self, x: f32, y: f32) -> Pill {
        self.pad_x = x;
        self.pad_y = y;
        self
    }

    pub fn radius(mut self, r: f32) -> Pill {
        self.radius = Some(r);
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Pill {
        self.border = Some((color, width));
        self
    }

    pub fn dot(mut self, color: Color) -> Pill {
        self.dot = Some(color);
        self
    }

    pub fn spacing(mut self, s: f32) -> Pill {
        self.spacing = s;
        self
    }

    fn dot_room(&self) -> f32 {
        if self.dot.is_some() { 14.0 } else { 0.0 }
    }

    pub fn width(&self, text: &str) -> f32 {
        text_width(text, self.size, self.spacing) + 2.0 * self.pad_x + self.dot_room()
    }

    pub fn height(&self) -> f32 {
        self.size * 1.4 + 2.0 * self.pad_y
    }

    /// Draw with the anchor point `x` interpreted per `align` and the top at `y`.
    pub fn at(&self, x: f32, y: f32, align: Align, text: &str) -> Vec<Node> {
        let w = self.width(text);
        let h = self.height();
        let left = match align {
            Align::Start => x,
            Align::Center => x - w / 2.0,
            Align::End => x - w,
        };
        let rect = Rect::new(left, y, w, h);
        let mut out = vec![Node::rounded(rect, self.bg, self.radius.unwrap_or(h / 2.0))];
        if let Some((c, width)) = self.border {
            out.push(Node::frame(rect, c, width, self.radius.unwrap_or(h / 2.0)));
        }
        let mut text_rect = rect;
        if let Some(dot) = self.dot {
            out.push(Node::circle(left + self.pad_x + 3.0, y + h / 2.0, 3.0, dot));
            text_rect.x += self.dot_room();
            text_rect.width -= self.dot_room();
        }
        out.push(Node::text(
            TextBlock::new(text, text_rect, self.size)
                .weight(self.weight)
                .family(BODY_FONT)
                .color(self.fg)
                .spacing(self.spacing)
                .center()
                .valign(VAlign::Middle)
                .line_height(1.4)
                .max_lines(1),
        ));
        out
    }
}

// ---------------------------------------------------------------------------
// Images and text

/// Photo filling `rect`, or a flat placeholder block with a label.
pub fn photo(href: Option<&str>, rect: Rect, bg: Color, fg: Color, label: &str) -> Vec<Node> {
    match href {
        Some(h) => vec![Node::rect(rect, bg), Node::image(h, rect, Fit::Cover)],
        None if label.is_empty() => vec![Node::rect(rect, bg)],
        None => vec![
            Node::rect(rect, bg),
            Node::text(
                TextBlock::new(label, rect, 18.0)
                    .family(BODY_FONT)
                    .color(fg)
                    .center()
                    .valign(VAlign::Middle)
                    .max_lines(1),
            ),
        ],
    }
}

/// `text`, or `placeholder` when the field is blank.
pub fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() { placeholder } else { text }
}

/// Bold headline clamped to four lines.
pub fn headline(text: &str, placeholder: &str, rect: Rect, size: f32, line_height: f32, color: Color, family: &str) -> Node {
    Node::text(
        TextBlock::new(or_placeholder(text, placeholder), rect, size)
            .bold()
            .family(family)
            .color(color)
            .line_height(line_height)
            .max_lines(4),
    )
}

/// Plain body text in the default Bengali face.
pub fn label(text: &str, rect: Rect, size: f32) -> TextBlock {
    TextBlock::new(text, rect, size).family(BODY_FONT).color(GRAY_900).line_height(1.35)
}

/// Filled double quotation mark, `size` pixels square, top-left at `(x, y)`.
pub fn quote_mark(x: f32, y: f32, size: f32, color: Color) -> Node {
    const LEFT: &str = "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1z";
    const RIGHT: &str = "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z";
    Node::group(
        x,
        y,
        size / 24.0,
        vec![
            Node::Path { d: LEFT.to_string(), fill: color },
            Node::Path { d: RIGHT.to_string(), fill: color },
        ],
    )
}

pub const SPEAKER_PLACEHOLDER: &str = "বক্তার নাম";
pub const DESIGNATION_PLACEHOLDER: &str = "পদবী";

/// Split a quote body into speaker and designation at the first comma.
pub fn speaker(body: &str) -> (String, String) {
    let body = body.trim();
    if body.is_empty() {
        return (SPEAKER_PLACEHOLDER.to_string(), DESIGNATION_PLACEHOLDER.to_string());
    }
    match body.split_once(',') {
        Some((name, rest)) => (name.trim().to_string(), rest.trim().to_string()),
        None => (body.to_string(), DESIGNATION_PLACEHOLDER.to_string()),
    }
}

/// The three daily date strings joined by `sep`, skipping blanks.
pub fn join_dates(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TEMPLATES;

    fn ctx() -> RenderContext {
        RenderContext::new("২৯ নভেম্বর ২০২৫")
    }

    #[test]
    fn every_template_renders_placeholders() {
        for t in TEMPLATES {
            let fields = CardFields::empty(t.category);
            let card = render(&fields, t.id, None, &ctx());
            assert_eq!(card.template_id, t.id);
            assert_eq!(card.size, t.category.canvas_size());
            assert!(!card.contains_text(NOT_FOUND), "{} fell back", t.id);
            assert!(card.node_count() > 3, "{} drew almost nothing", t.id);
            assert!(card.contains_text("বাঁশেরকেল্লা"), "{} has no brand header", t.id);
        }
    }

    #[test]
    fn unknown_and_foreign_ids_fall_back() {
        let news = CardFields::empty(Category::News);
        let card = render(&news, "bk-news-does-not-exist", None, &ctx());
        assert_eq!(card.text(), vec![NOT_FOUND.to_string()]);
        assert_eq!(card.size, CanvasSize::new(600, 600));

        let quote = CardFields::empty(Category::Quote);
        let card = render(&quote, "bk-news-classic-light", None, &ctx());
        assert!(card.contains_text(NOT_FOUND));
        assert_eq!(card.size, CanvasSize::new(600, 750));
    }

    #[test]
    fn custom_logo_replaces_mark() {
        let news = CardFields::empty(Category::News);
        let logo = "data:image/png;base64,iVBORw0KGgo=";
        let mut card = render(&news, "bk-news-classic-light", Some(logo), &ctx());
        assert!(!card.contains_text("bk"));
        let mut hrefs = Vec::new();
        card.for_each_image_mut(|h| hrefs.push(h.clone()));
        assert_eq!(hrefs, vec![logo.to_string()]);

        // a blank logo setting draws the mark
        let card = render(&news, "bk-news-classic-light", Some(" "), &ctx());
        assert!(card.text().iter().any(|t| t == "bk"));
    }

    #[test]
    fn speaker_split_on_first_comma() {
        assert_eq!(speaker(""), ("বক্তার নাম".into(), "পদবী".into()));
        assert_eq!(speaker("আবু বকর"), ("আবু বকর".into(), "পদবী".into()));
        assert_eq!(speaker("নাম, পদ, দল"), ("নাম".into(), "পদ, দল".into()));
    }

    #[test]
    fn pill_width_tracks_text() {
        let p = Pill::new(BK_RED, Color::WHITE, 12.0);
        assert!(p.width("২৯ নভেম্বর ২০২৫") > p.width("২৯"));
        assert!(p.dot(BK_GREEN).width("a") > p.width("a"));
        let nodes = p.at(300.0, 10.0, Align::Center, "x");
        match &nodes[0] {
            Node::Rect { rect, .. } => assert!((rect.x + rect.width / 2.0 - 300.0).abs() < 0.01),
            other => panic!("unexpected {:?}", other),
        }
    }
}
