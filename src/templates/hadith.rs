//! Scripture cards (600×600)
//!
//! A verse or hadith: optional Arabic text, a Bengali translation and its
//! source reference. The Arabic line is left out entirely when blank.

use super::{
    brand, brand_br, brand_centered, join_dates, label, or_placeholder, photo, quote_mark, BrandVariant, Pill, ARABIC,
    BK_GREEN, BK_RED, GRAY_100, GRAY_200, GRAY_300, GRAY_400, GRAY_500, GRAY_600, GRAY_800, GRAY_900, SERIF, Scene,
};
use crate::fields::{HadithFields, ScriptureKind, DEFAULT_SOURCE, DEFAULT_TRANSLATION};
use crate::rendering::paint::{Align, Color, Fit, GradientDir, Node, Rect, TextBlock, VAlign};

fn translation(f: &HadithFields) -> &str {
    or_placeholder(&f.translation, DEFAULT_TRANSLATION)
}

fn source(f: &HadithFields) -> &str {
    or_placeholder(&f.source, DEFAULT_SOURCE)
}

fn quoted(f: &HadithFields) -> String {
    format!("\u{201c}{}\u{201d}", translation(f))
}

fn arabic(f: &HadithFields, rect: Rect, size: f32, color: Color, align: Align) -> Option<Node> {
    let text = f.arabic.trim();
    if text.is_empty() {
        return None;
    }
    Some(Node::text(
        TextBlock::new(text, rect, size)
            .family(ARABIC)
            .color(color)
            .align(align)
            .valign(VAlign::Middle)
            .line_height(1.6)
            .max_lines(2),
    ))
}

fn body(text: &str, rect: Rect, size: f32, color: Color) -> TextBlock {
    label(text, rect, size).color(color).line_height(1.5).max_lines(5)
}

fn all_dates(f: &HadithFields, sep: &str) -> String {
    join_dates(&[&f.dates.day_name, &f.dates.gregorian, &f.dates.hijri, &f.dates.bengali], sep)
}

fn kind_label(kind: ScriptureKind, ayah: &'static str, hadith: &'static str) -> &'static str {
    match kind {
        ScriptureKind::Ayah => ayah,
        ScriptureKind::Hadith => hadith,
    }
}

/// Four-pointed sparkle centred on `(cx, cy)`.
fn star(cx: f32, cy: f32, r: f32, color: Color) -> Node {
    let k = r * 0.3;
    Node::Path {
        d: format!(
            "M{cx} {t} L{a} {b} L{rr} {cy} L{a} {c} L{cx} {bt} L{d} {c} L{l} {cy} L{d} {b} Z",
            t = cy - r,
            bt = cy + r,
            l = cx - r,
            rr = cx + r,
            a = cx + k,
            d = cx - k,
            b = cy - k,
            c = cy + k,
        ),
        fill: color,
    }
}

pub fn classic(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let gold = Color::hex(0xbfa05f);
    let green = Color::hex(0x1a4d2e);
    let mut n = vec![
        Node::rect(scene.full(), Color::hex(0xfdfbf7)),
        Node::frame(Rect::new(12.0, 12.0, 576.0, 576.0), gold, 2.0, 0.0),
        Node::frame(Rect::new(20.0, 20.0, 560.0, 560.0), gold.alpha(0.5), 1.0, 0.0),
    ];
    for (x, y, dx, dy) in [(12.0, 12.0, 1.0, 1.0), (588.0, 12.0, -1.0, 1.0), (12.0, 588.0, 1.0, -1.0), (588.0, 588.0, -1.0, -1.0)] {
        n.push(Node::line((x, y), (x + 40.0 * dx, y), green, 4.0));
        n.push(Node::line((x, y), (x, y + 40.0 * dy), green, 4.0));
    }

    let badge = Pill::new(green, Color::WHITE, 13.0).pad(28.0, 6.0);
    n.extend(badge.at(300.0, 44.0, Align::Center, f.kind.badge()));
    let half = badge.width(f.kind.badge()) / 2.0;
    n.push(star(300.0 - half + 14.0, 44.0 + badge.height() / 2.0, 5.0, gold));
    n.push(star(300.0 + half - 14.0, 44.0 + badge.height() / 2.0, 5.0, gold));

    let mut y = 92.0;
    if let Some(h) = f.images.first() {
        n.push(Node::image(h, Rect::new(236.0, y, 128.0, 128.0), Fit::Cover).clip_circle());
        n.push(Node::ring(300.0, y + 64.0, 64.0, gold, 3.0));
        y += 140.0;
    }
    if let Some(a) = arabic(f, Rect::new(48.0, y, 504.0, 56.0), 30.0, green, Align::Center) {
        n.push(a);
        y += 64.0;
    }
    n.push(Node::text(
        body(&quoted(f), Rect::new(48.0, y, 504.0, 430.0 - y), 26.0, GRAY_800)
            .bold()
            .center()
            .valign(VAlign::Middle),
    ));
    n.push(Node::text(label(&format!("— {}", source(f)), Rect::new(48.0, 436.0, 504.0, 26.0), 16.0).italic().bold().color(green).center()));
    n.push(Node::rounded(Rect::new(270.0, 466.0, 60.0, 2.0), gold, 1.0));

    n.push(Node::line((40.0, 490.0), (560.0, 490.0), gold.alpha(0.4), 1.0));
    n.push(Node::text(label(&all_dates(f, " | "), Rect::new(40.0, 500.0, 520.0, 22.0), 12.0).bold().color(GRAY_600).center().max_lines(1)));
    n.push(brand_centered(scene, 300.0, 530.0, 0.75, BrandVariant::Colored));
    n
}

pub fn modern(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::gradient(scene.full(), Color::hex(0x004d40), Color::hex(0x00695c), GradientDir::Diagonal)];
    n.push(Node::circle(600.0, 0.0, 200.0, Color::WHITE.alpha(0.05)));

    n.push(Node::text(label(&f.kind.english().to_uppercase(), Rect::new(40.0, 40.0, 300.0, 18.0), 12.0).bold().spacing(3.0).color(Color::hex(0x4db6ac))));
    n.push(Node::text(label(&f.dates.gregorian, Rect::new(300.0, 40.0, 260.0, 18.0), 12.0).color(Color::WHITE.alpha(0.7)).align(Align::End)));

    let mut y = 96.0;
    if let Some(a) = arabic(f, Rect::new(40.0, y, 520.0, 60.0), 30.0, Color::hex(0xe0f2f1), Align::End) {
        n.push(a);
        y += 76.0;
    }
    n.push(Node::rect(Rect::new(40.0, y, 4.0, 440.0 - y), Color::hex(0x26a69a)));
    n.push(Node::text(body(translation(f), Rect::new(64.0, y, 496.0, 440.0 - y), 28.0, Color::WHITE).bold().valign(VAlign::Middle)));
    n.push(Node::text(label(source(f), Rect::new(64.0, 452.0, 496.0, 24.0), 16.0).bold().color(Color::hex(0x80cbc4))));

    n.push(Node::rect(Rect::new(0.0, 520.0, 600.0, 80.0), Color::BLACK.alpha(0.2)));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.hijri, &f.dates.bengali], " | "), Rect::new(40.0, 520.0, 330.0, 80.0), 13.0)
            .color(Color::WHITE.alpha(0.8))
            .valign(VAlign::Middle)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 560.0, 575.0, 0.75, BrandVariant::White));
    n
}

pub fn boxed(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = match f.images.first() {
        Some(h) => vec![Node::rect(scene.full(), GRAY_900), Node::image(h, scene.full(), Fit::Cover)],
        None => vec![Node::gradient(scene.full(), GRAY_300, GRAY_500, GradientDir::Diagonal)],
    };
    n.push(Node::rect(scene.full(), Color::BLACK.alpha(0.3)));

    let card = Rect::new(48.0, 72.0, 504.0, 400.0);
    n.push(Node::rounded(card, Color::WHITE, 16.0));
    n.push(Node::circle(300.0, 72.0, 28.0, BK_GREEN).with_stroke(Color::WHITE, 4.0));
    n.push(quote_mark(288.0, 60.0, 24.0, Color::WHITE));

    n.push(Node::text(label(kind_label(f.kind, "AL-QURAN", "AL-HADITH"), Rect::new(48.0, 110.0, 504.0, 18.0), 12.0).bold().spacing(3.0).color(BK_GREEN).center()));
    let mut y = 136.0;
    if let Some(a) = arabic(f, Rect::new(72.0, y, 456.0, 56.0), 28.0, GRAY_800, Align::Center) {
        n.push(a);
        y += 64.0;
    }
    n.push(Node::text(body(translation(f), Rect::new(72.0, y, 456.0, 420.0 - y), 24.0, GRAY_800).bold().center().valign(VAlign::Middle)));
    n.extend(Pill::new(GRAY_100, GRAY_600, 13.0).at(300.0, 428.0, Align::Center, source(f)));

    n.push(Node::gradient(Rect::new(0.0, 480.0, 600.0, 120.0), Color::BLACK.alpha(0.0), Color::BLACK.alpha(0.8), GradientDir::Down));
    n.push(Node::text(label(&all_dates(f, " • "), Rect::new(32.0, 548.0, 340.0, 24.0), 12.0).color(Color::WHITE.alpha(0.9)).valign(VAlign::Middle).max_lines(1)));
    n.push(brand_br(scene, 568.0, 576.0, 0.75, BrandVariant::White));
    n
}

pub fn image(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = photo(f.images.first().map(String::as_str), scene.full(), Color::BLACK, GRAY_500, "Add Background Image");
    n.push(Node::gradient(scene.full(), Color::BLACK.alpha(0.3), Color::BLACK.alpha(0.9), GradientDir::Down));
    n.push(Node::gradient(Rect::new(0.0, 0.0, 600.0, 120.0), Color::BLACK.alpha(0.6), Color::BLACK.alpha(0.0), GradientDir::Down));

    n.extend(Pill::new(BK_GREEN, Color::WHITE, 13.0).radius(6.0).at(32.0, 32.0, Align::Start, kind_label(f.kind, "আয়াত", "হাদীস")));
    n.push(brand(scene, 568.0 - 160.0 * 0.8, 28.0, 0.8, BrandVariant::White));

    let mut y = 180.0;
    if let Some(a) = arabic(f, Rect::new(32.0, 120.0, 536.0, 56.0), 30.0, Color::WHITE.alpha(0.9), Align::End) {
        n.push(a);
        y = 190.0;
    }
    n.push(Node::rect(Rect::new(32.0, y, 4.0, 470.0 - y), BK_GREEN));
    n.push(Node::text(body(&quoted(f), Rect::new(52.0, y, 516.0, 470.0 - y), 32.0, Color::WHITE).bold().valign(VAlign::Middle)));
    n.push(Node::text(label(source(f), Rect::new(52.0, 480.0, 516.0, 24.0), 16.0).bold().color(GRAY_300)));

    n.push(Node::line((32.0, 526.0), (568.0, 526.0), Color::WHITE.alpha(0.2), 1.0));
    n.push(Node::text(label(&all_dates(f, " • "), Rect::new(32.0, 536.0, 536.0, 36.0), 12.0).color(GRAY_200).valign(VAlign::Middle).max_lines(1)));
    n
}

pub fn golden(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let amber = Color::hex(0xf59e0b);
    let bronze = Color::hex(0xb45309);
    let mut n = vec![
        Node::rect(scene.full(), Color::hex(0x0c0a09)),
        Node::rect(Rect::new(24.0, 24.0, 552.0, 552.0), Color::hex(0x1c1917)).with_stroke(bronze, 1.0),
    ];
    for (x, y, dx, dy) in [(24.0, 24.0, 1.0, 1.0), (576.0, 24.0, -1.0, 1.0), (24.0, 576.0, 1.0, -1.0), (576.0, 576.0, -1.0, -1.0)] {
        n.push(Node::line((x, y), (x + 32.0 * dx, y), amber, 3.0));
        n.push(Node::line((x, y), (x, y + 32.0 * dy), amber, 3.0));
    }

    n.push(Node::text(
        label(kind_label(f.kind, "HOLY QURAN", "HOLY HADITH"), Rect::new(24.0, 56.0, 552.0, 18.0), 12.0)
            .bold()
            .spacing(4.0)
            .color(amber)
            .center(),
    ));
    let mut y = 92.0;
    if let Some(a) = arabic(f, Rect::new(56.0, y, 488.0, 60.0), 32.0, Color::hex(0xfbbf24), Align::Center) {
        n.push(a);
        y += 72.0;
    }
    n.push(Node::text(body(translation(f), Rect::new(56.0, y, 488.0, 410.0 - y), 26.0, GRAY_200).family(SERIF).center().valign(VAlign::Middle)));

    let src = source(f);
    let half = crate::rendering::layout::text_width(src, 15.0, 0.0) / 2.0 + 12.0;
    n.push(Node::line((300.0 - half - 48.0, 436.0), (300.0 - half, 436.0), bronze, 1.0));
    n.push(Node::line((300.0 + half, 436.0), (300.0 + half + 48.0, 436.0), bronze, 1.0));
    n.push(Node::text(label(src, Rect::new(56.0, 424.0, 488.0, 24.0), 15.0).bold().color(Color::hex(0xd97706)).center().valign(VAlign::Middle)));

    n.push(Node::line((56.0, 480.0), (544.0, 480.0), Color::hex(0x78350f), 1.0));
    n.push(Node::text(label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", "), Rect::new(56.0, 494.0, 300.0, 20.0), 12.0).bold().color(bronze).max_lines(1)));
    n.push(Node::text(label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(56.0, 516.0, 300.0, 20.0), 11.0).color(Color::hex(0x92400e)).max_lines(1)));
    n.push(brand_br(scene, 544.0, 540.0, 0.7, BrandVariant::White));
    n
}

pub fn midnight(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::gradient(scene.full(), Color::hex(0x172554), Color::hex(0x1e1b4b), GradientDir::Down)];
    // crescent
    n.push(Node::circle(520.0, 80.0, 40.0, Color::WHITE.alpha(0.2)));
    n.push(Node::circle(536.0, 70.0, 36.0, Color::hex(0x172554)));
    n.push(Node::frame(Rect::new(16.0, 16.0, 568.0, 568.0), Color::WHITE.alpha(0.1), 1.0, 12.0));
    n.push(Node::frame(Rect::new(24.0, 24.0, 552.0, 552.0), Color::WHITE.alpha(0.1), 1.0, 8.0));

    let mut y = 80.0;
    if let Some(a) = arabic(f, Rect::new(48.0, y, 504.0, 72.0), 36.0, Color::hex(0xfef3c7), Align::Center) {
        n.push(a);
        y += 88.0;
    }
    n.push(Node::text(body(&quoted(f), Rect::new(56.0, y, 488.0, 400.0 - y), 24.0, Color::WHITE).center().valign(VAlign::Middle)));
    n.push(Node::rounded(Rect::new(276.0, 412.0, 48.0, 3.0), Color::hex(0x4338ca), 1.5));
    n.push(Node::text(label(source(f), Rect::new(48.0, 424.0, 504.0, 24.0), 15.0).bold().color(Color::hex(0xa5b4fc)).center()));

    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.hijri, &f.dates.bengali], " ● "), Rect::new(48.0, 480.0, 504.0, 22.0), 12.0)
            .color(Color::WHITE.alpha(0.7))
            .center()
            .max_lines(1),
    ));
    n.push(brand_centered(scene, 300.0, 516.0, 0.8, BrandVariant::White));
    n
}

pub fn split(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::rect(scene.full(), Color::WHITE)];
    let top = Rect::new(0.0, 0.0, 600.0, 270.0);
    n.extend(photo(f.images.first().map(String::as_str), top, GRAY_200, GRAY_400, ""));
    n.push(Node::gradient(Rect::new(0.0, 170.0, 600.0, 100.0), Color::WHITE.alpha(0.0), Color::WHITE, GradientDir::Down));
    n.extend(Pill::new(BK_GREEN, Color::WHITE, 11.0).spacing(2.0).at(32.0, 32.0, Align::Start, &f.kind.english().to_uppercase()));

    let mut y = 250.0;
    if let Some(a) = arabic(f, Rect::new(32.0, 220.0, 536.0, 48.0), 24.0, GRAY_400, Align::End) {
        n.push(a);
        y = 272.0;
    }
    n.push(Node::text(body(translation(f), Rect::new(32.0, y, 536.0, 430.0 - y), 26.0, GRAY_900).bold().valign(VAlign::Middle)));

    n.push(Node::circle(52.0, 462.0, 20.0, BK_GREEN));
    n.push(Node::rect(Rect::new(44.0, 454.0, 16.0, 16.0), Color::WHITE).with_radius(2.0));
    n.push(Node::text(label("REFERENCE", Rect::new(82.0, 442.0, 300.0, 16.0), 10.0).bold().spacing(2.0).color(GRAY_400)));
    n.push(Node::text(label(source(f), Rect::new(82.0, 460.0, 486.0, 22.0), 15.0).bold().color(GRAY_800).max_lines(1)));

    n.push(Node::line((32.0, 506.0), (568.0, 506.0), GRAY_100, 1.0));
    n.push(Node::text(label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", "), Rect::new(32.0, 520.0, 320.0, 22.0), 13.0).bold().color(GRAY_800).max_lines(1)));
    n.push(Node::text(label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(32.0, 544.0, 320.0, 20.0), 12.0).color(GRAY_500).max_lines(1)));
    n.push(brand_br(scene, 568.0, 568.0, 0.75, BrandVariant::Colored));
    n
}

pub fn floral(f: &HadithFields, scene: &Scene<'_>) -> Vec<Node> {
    let leaf = Color::hex(0xd6d3d1);
    let mut n = vec![
        Node::rect(scene.full(), Color::hex(0xfafaf9)),
        Node::frame(Rect::new(8.0, 8.0, 584.0, 584.0), Color::WHITE, 16.0, 0.0),
        Node::frame(Rect::new(32.0, 32.0, 536.0, 536.0), Color::hex(0xe7e5e4), 1.0, 0.0),
    ];
    // leaves in two corners
    for (cx, cy) in [(48.0, 48.0), (552.0, 552.0)] {
        n.push(Node::circle(cx, cy, 28.0, leaf.alpha(0.5)));
        n.push(Node::circle(cx, cy, 14.0, leaf));
    }
    n.push(star(300.0, 72.0, 10.0, BK_RED.alpha(0.6)));

    let mut y = 104.0;
    if let Some(a) = arabic(f, Rect::new(64.0, y, 472.0, 56.0), 28.0, Color::hex(0x57534e), Align::Center) {
        n.push(a);
        y += 68.0;
    }
    n.push(Node::text(body(translation(f), Rect::new(64.0, y, 472.0, 410.0 - y), 24.0, Color::hex(0x44403c)).center().valign(VAlign::Middle)));
    n.push(Node::line((270.0, 424.0), (330.0, 424.0), leaf, 1.0));
    n.push(Node::text(label(source(f), Rect::new(64.0, 434.0, 472.0, 22.0), 14.0).italic().color(Color::hex(0x78716c)).center()));

    n.push(Node::text(label(&all_dates(f, " • "), Rect::new(64.0, 480.0, 472.0, 20.0), 12.0).color(Color::hex(0xa8a29e)).center().max_lines(1)));
    n.push(brand_br(scene, 536.0, 548.0, 0.75, BrandVariant::Colored).with_opacity(0.6));
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{templates_for, Category};
    use crate::fields::{CardFields, DailyDates};
    use crate::templates::{render, RenderContext};

    #[test]
    fn blank_fields_show_defaults() {
        let fields = CardFields::empty(Category::Hadith);
        for t in templates_for(Category::Hadith) {
            let card = render(&fields, t.id, None, &RenderContext::new(""));
            assert!(card.contains_text(DEFAULT_TRANSLATION), "{}", t.id);
            assert!(card.contains_text(DEFAULT_SOURCE), "{}", t.id);
        }
    }

    #[test]
    fn arabic_is_only_drawn_when_present() {
        let mut f = HadithFields {
            kind: ScriptureKind::Ayah,
            dates: DailyDates { hijri: "৭ জমাদিউস সানি ১৪৪৭".into(), ..DailyDates::default() },
            ..HadithFields::default()
        };
        let scene = Scene { size: Category::Hadith.canvas_size(), logo: None, today: "" };
        let count_arabic = |nodes: &[Node]| {
            nodes
                .iter()
                .filter(|n| matches!(n, Node::Text(t) if t.family.contains("Amiri")))
                .count()
        };
        assert_eq!(count_arabic(&classic(&f, &scene)), 0);
        f.arabic = "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ".into();
        for layout in [classic, modern, boxed, image, golden, midnight, split, floral] {
            assert_eq!(count_arabic(&layout(&f, &scene)), 1);
        }
    }

    #[test]
    fn kind_switches_badges() {
        let scene = Scene { size: Category::Hadith.canvas_size(), logo: None, today: "" };
        let ayah = HadithFields { kind: ScriptureKind::Ayah, ..HadithFields::default() };
        let text = |nodes: Vec<Node>| {
            let mut out = Vec::new();
            for n in &nodes {
                n.collect_text(&mut out);
            }
            out
        };
        assert!(text(classic(&ayah, &scene)).contains(&"পবিত্র কুরআন".to_string()));
        assert!(text(boxed(&ayah, &scene)).contains(&"AL-QURAN".to_string()));
        assert!(text(image(&HadithFields::default(), &scene)).contains(&"হাদীস".to_string()));
    }
}
