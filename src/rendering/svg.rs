/// SVG serialization of a card
///
/// Produces a standalone SVG document at the card's nominal size. Text boxes
/// are wrapped and clamped here, so the document carries resolved line boxes.
use std::fmt::Write;

use super::layout::{clamp_lines, lines_that_fit, wrap_text};
use super::paint::{Align, Color, Fit, GradientDir, Node, Rect, Stroke, TextBlock, VAlign};
use super::Card;

/// Escape text for use in element content and attribute values. Characters
/// XML 1.0 does not allow (most C0 controls, U+FFFE, U+FFFF) are dropped.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `card` to an SVG document.
pub fn to_svg(card: &Card) -> String {
    let mut w = SvgWriter::default();
    w.rect(
        &Rect::new(0.0, 0.0, card.size.width as f32, card.size.height as f32),
        card.background,
        None,
        0.0,
    );
    for node in &card.nodes {
        w.node(node);
    }
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}"><defs>{defs}</defs>{body}</svg>"#
        ),
        w = card.size.width,
        h = card.size.height,
        defs = w.defs,
        body = w.body,
    )
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_id: usize,
}

fn paint_attr(name: &str, c: Color) -> String {
    if c.a == 0 {
        format!(r#"{}="none""#, name)
    } else if c.a == 255 {
        format!(r#"{}="{}""#, name, c.to_hex())
    } else {
        format!(r#"{}="{}" {}-opacity="{}""#, name, c.to_hex(), name, c.opacity())
    }
}

fn stroke_attr(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(s) if s.width > 0.0 && s.color.a > 0 => {
            format!(r#" {} stroke-width="{}""#, paint_attr("stroke", s.color), s.width)
        }
        _ => String::new(),
    }
}

impl SvgWriter {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Rect { rect, fill, stroke, radius } => self.rect(rect, *fill, *stroke, *radius),
            Node::Circle { cx, cy, r, fill, stroke } => {
                let _ = write!(
                    self.body,
                    r#"<circle cx="{}" cy="{}" r="{}" {}{}/>"#,
                    cx,
                    cy,
                    r,
                    paint_attr("fill", *fill),
                    stroke_attr(*stroke)
                );
            }
            Node::Line { from, to, stroke } => {
                let _ = write!(
                    self.body,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-linecap="round"/>"#,
                    from.0,
                    from.1,
                    to.0,
                    to.1,
                    stroke_attr(Some(*stroke))
                );
            }
            Node::Path { d, fill } => {
                let _ = write!(self.body, r#"<path d="{}" {}/>"#, escape(d), paint_attr("fill", *fill));
            }
            Node::Text(t) => self.text(t),
            Node::Spans { x, baseline, size, weight, family, align, spans } => {
                let _ = write!(
                    self.body,
                    r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{}">"#,
                    x,
                    baseline,
                    escape(family),
                    size,
                    weight,
                    anchor(*align)
                );
                for (s, c) in spans {
                    let _ = write!(self.body, "<tspan {}>{}</tspan>", paint_attr("fill", *c), escape(s));
                }
                self.body.push_str("</text>");
            }
            Node::Image { href, rect, fit, radius, circle, opacity } => {
                let clip = if *circle {
                    let id = self.id("clip");
                    let _ = write!(
                        self.defs,
                        r#"<clipPath id="{}"><circle cx="{}" cy="{}" r="{}"/></clipPath>"#,
                        id,
                        rect.x + rect.width / 2.0,
                        rect.y + rect.height / 2.0,
                        rect.width.min(rect.height) / 2.0
                    );
                    format!(r#" clip-path="url(#{})""#, id)
                } else if *radius > 0.0 {
                    let id = self.id("clip");
                    let _ = write!(
                        self.defs,
                        r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}" rx="{}"/></clipPath>"#,
                        id, rect.x, rect.y, rect.width, rect.height, radius
                    );
                    format!(r#" clip-path="url(#{})""#, id)
                } else {
                    String::new()
                };
                let aspect = match fit {
                    Fit::Cover => "xMidYMid slice",
                    Fit::Contain => "xMidYMid meet",
                };
                let _ = write!(
                    self.body,
                    r#"<image xlink:href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="{}" opacity="{}"{}/>"#,
                    escape(href),
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    aspect,
                    opacity,
                    clip
                );
            }
            Node::LinearGradient { rect, from, to, dir, radius } => {
                let id = self.id("grad");
                let (x2, y2) = match dir {
                    GradientDir::Down => (0, 1),
                    GradientDir::Right => (1, 0),
                    GradientDir::Diagonal => (1, 1),
                };
                let _ = write!(
                    self.defs,
                    concat!(
                        r#"<linearGradient id="{}" x1="0" y1="0" x2="{}" y2="{}">"#,
                        r#"<stop offset="0" stop-color="{}" stop-opacity="{}"/>"#,
                        r#"<stop offset="1" stop-color="{}" stop-opacity="{}"/></linearGradient>"#
                    ),
                    id,
                    x2,
                    y2,
                    from.to_hex(),
                    from.opacity(),
                    to.to_hex(),
                    to.opacity()
                );
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="url(#{})"/>"#,
                    rect.x, rect.y, rect.width, rect.height, radius, id
                );
            }
            Node::Group { dx, dy, scale, opacity, children } => {
                let _ = write!(
                    self.body,
                    r#"<g transform="translate({} {}) scale({})" opacity="{}">"#,
                    dx, dy, scale, opacity
                );
                for c in children {
                    self.node(c);
                }
                self.body.push_str("</g>");
            }
        }
    }

    fn rect(&mut self, rect: &Rect, fill: Color, stroke: Option<Stroke>, radius: f32) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" {}{}/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            radius,
            paint_attr("fill", fill),
            stroke_attr(stroke)
        );
    }

    fn text(&mut self, t: &TextBlock) {
        let lh = t.size * t.line_height;
        let fit = lines_that_fit(t.rect.height, lh);
        let budget = t.max_lines.map_or(fit, |m| m.min(fit));
        let lines = clamp_lines(wrap_text(&t.content, t.rect.width, t.size, t.letter_spacing), budget);
        if lines.is_empty() {
            return;
        }
        let block = lines.len() as f32 * lh;
        let top = match t.valign {
            VAlign::Top => t.rect.y,
            VAlign::Middle => t.rect.y + (t.rect.height - block) / 2.0,
            VAlign::Bottom => t.rect.bottom() - block,
        };
        let x = match t.align {
            Align::Start => t.rect.x,
            Align::Center => t.rect.x + t.rect.width / 2.0,
            Align::End => t.rect.right(),
        };
        let _ = write!(
            self.body,
            r#"<text font-family="{}" font-size="{}" font-weight="{}" {} text-anchor="{}""#,
            escape(&t.family),
            t.size,
            t.weight,
            paint_attr("fill", t.color),
            anchor(t.align)
        );
        if t.italic {
            self.body.push_str(r#" font-style="italic""#);
        }
        if t.letter_spacing != 0.0 {
            let _ = write!(self.body, r#" letter-spacing="{}""#, t.letter_spacing);
        }
        self.body.push('>');
        for (i, line) in lines.iter().enumerate() {
            // baseline sits a little below the middle of the line box
            let baseline = top + i as f32 * lh + lh / 2.0 + t.size * 0.35;
            let _ = write!(self.body, r#"<tspan x="{}" y="{}">{}</tspan>"#, x, baseline, escape(line));
        }
        self.body.push_str("</text>");
    }
}

fn anchor(align: Align) -> &'static str {
    match align {
        Align::Start => "start",
        Align::Center => "middle",
        Align::End => "end",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CanvasSize, Category};

    fn card(nodes: Vec<Node>) -> Card {
        Card {
            template_id: "test".into(),
            category: Category::News,
            size: CanvasSize::new(100, 100),
            background: Color::WHITE,
            nodes,
        }
    }

    #[test]
    fn escapes_text() {
        let c = card(vec![Node::text(TextBlock::new(
            "a < b & \"c\"",
            Rect::new(0.0, 0.0, 100.0, 40.0),
            10.0,
        ))]);
        let svg = to_svg(&c);
        assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="100" height="100""#));
    }

    #[test]
    fn drops_characters_xml_rejects() {
        assert_eq!(escape("a\u{1}b\u{8}\u{1f}c\u{fffe}\u{ffff}"), "abc");
        assert_eq!(escape("tab\tline\n"), "tab\tline\n");
        assert_eq!(escape("শিরোনাম\u{b}"), "শিরোনাম");
    }

    #[test]
    fn clamps_to_max_lines() {
        let words = vec!["word"; 60].join(" ");
        let c = card(vec![Node::text(
            TextBlock::new(words, Rect::new(0.0, 0.0, 100.0, 1000.0), 10.0).max_lines(3),
        )]);
        let svg = to_svg(&c);
        assert_eq!(svg.matches("<tspan").count(), 3);
        assert!(svg.contains('…'));
    }

    #[test]
    fn clamps_to_box_height() {
        let words = vec!["word"; 60].join(" ");
        // 20px line boxes, 45px tall box
        let c = card(vec![Node::text(TextBlock::new(words, Rect::new(0.0, 0.0, 100.0, 45.0), 10.0).line_height(2.0))]);
        assert_eq!(to_svg(&c).matches("<tspan").count(), 2);
    }

    #[test]
    fn images_get_clip_paths() {
        let c = card(vec![
            Node::image("data:image/png;base64,AA==", Rect::new(0.0, 0.0, 50.0, 50.0), Fit::Cover).clip_circle(),
            Node::gradient(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, Color::TRANSPARENT, GradientDir::Down),
        ]);
        let svg = to_svg(&c);
        assert!(svg.contains("<clipPath id=\"clip1\"><circle"));
        assert!(svg.contains("url(#grad2)"));
        assert!(svg.contains("xMidYMid slice"));
    }
}
