//! Quote cards (600×750)
//!
//! The headline holds the quote itself and may run to eight lines. The body
//! names the speaker: the part before the first comma is the name, the rest
//! the designation.

use super::{
    brand, brand_br, brand_centered, label, or_placeholder, quote_mark, speaker, BrandVariant, Pill,
    BK_GREEN, BK_RED, GRAY_100, GRAY_200, GRAY_300, GRAY_400, GRAY_50, GRAY_500, GRAY_600, GRAY_800, GRAY_900, OSWALD,
    SERIF, Scene,
};
use crate::catalog::font_family;
use crate::fields::StoryFields;
use crate::rendering::paint::{Align, Color, Fit, GradientDir, Node, Rect, TextBlock, VAlign};

fn grid(rect: Rect, step: f32, color: Color) -> Vec<Node> {
    let mut out = Vec::new();
    let mut x = rect.x + step;
    while x < rect.right() {
        out.push(Node::line((x, rect.y), (x, rect.bottom()), color, 1.0));
        x += step;
    }
    let mut y = rect.y + step;
    while y < rect.bottom() {
        out.push(Node::line((rect.x, y), (rect.right(), y), color, 1.0));
        y += step;
    }
    out
}

fn quote_text(f: &StoryFields, placeholder: &str, rect: Rect, size: f32, lh: f32, color: Color) -> TextBlock {
    TextBlock::new(or_placeholder(&f.headline, placeholder), rect, size)
        .bold()
        .family(font_family(f.font.as_deref()))
        .color(color)
        .line_height(lh)
        .max_lines(8)
}

pub fn grid_classic(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::rect(scene.full(), Color::hex(0xfcfcfc))];
    n.extend(grid(scene.full(), 40.0, GRAY_200.alpha(0.6)));
    n.push(Node::rect(Rect::new(0.0, 0.0, 600.0, 16.0), BK_GREEN));
    n.extend(
        Pill::new(GRAY_100, GRAY_500, 12.0)
            .pad(12.0, 4.0)
            .radius(4.0)
            .spacing(1.0)
            .at(300.0, 64.0, Align::Center, scene.today),
    );

    match f.first_image() {
        Some(h) if f.transparent_image => {
            n.push(Node::image(h, Rect::new(180.0, 230.0, 450.0, 520.0), Fit::Contain));
        }
        Some(h) => {
            let frame = Rect::new(270.0, 322.0, 320.0, 380.0);
            n.push(Node::rounded(frame, Color::WHITE, 16.0).with_stroke(GRAY_100, 1.0));
            n.push(Node::image(h, frame.inset(10.0), Fit::Cover).with_radius(12.0));
        }
        None => n.push(quote_mark(440.0, 590.0, 120.0, GRAY_300.alpha(0.5))),
    }

    let (name, designation) = speaker(&f.body);
    let panel = Rect::new(32.0, 566.0, 320.0, 144.0);
    n.push(Node::rounded(panel, BK_GREEN, 16.0).with_stroke(Color::WHITE, 2.0));
    n.push(Node::text(label(&name, Rect::new(56.0, 584.0, 272.0, 34.0), 24.0).bold().color(Color::WHITE).max_lines(1)));
    n.push(Node::text(label(&designation, Rect::new(56.0, 620.0, 272.0, 22.0), 14.0).color(Color::WHITE.alpha(0.9)).max_lines(1)));
    n.push(Node::line((56.0, 654.0), (328.0, 654.0), Color::WHITE.alpha(0.2), 1.0));
    n.push(Node::text(
        label("NEWS UPDATE", Rect::new(56.0, 664.0, 130.0, 30.0), 10.0)
            .bold()
            .spacing(1.0)
            .color(Color::WHITE.alpha(0.7))
            .valign(VAlign::Middle),
    ));
    n.push(brand_br(scene, 336.0, 696.0, 0.75, BrandVariant::White).with_opacity(0.9));

    n.push(Node::text(
        quote_text(
            f,
            "গ্রিড ক্লাসিক ডিজাইনে আপনার উক্তিটি খুব সুন্দরভাবে ফুটে উঠবে...",
            Rect::new(40.0, 104.0, 520.0, 322.0),
            38.0,
            1.4,
            GRAY_900,
        )
        .center(),
    ));
    n
}

pub fn red_split(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![
        Node::rect(Rect::new(0.0, 0.0, 360.0, 750.0), Color::hex(0x590e09)),
        Node::rect(Rect::new(360.0, 0.0, 240.0, 750.0), GRAY_100),
    ];
    n.extend(grid(Rect::new(360.0, 0.0, 240.0, 750.0), 40.0, GRAY_200.alpha(0.5)));
    n.push(Node::line((360.0, 0.0), (360.0, 750.0), GRAY_200, 1.0));

    n.push(quote_mark(32.0, 140.0, 48.0, Color::WHITE));
    n.push(Node::text(quote_text(
        f,
        "রেড স্প্লিট ডিজাইনে বাম পাশে বোল্ড টেক্সট এবং ডান পাশে বক্তার ছবি থাকে...",
        Rect::new(32.0, 212.0, 296.0, 380.0),
        32.0,
        1.45,
        Color::WHITE,
    )));
    n.push(Node::line((32.0, 616.0), (220.0, 616.0), Color::WHITE.alpha(0.2), 1.0));
    n.push(Node::circle(35.0, 640.0, 3.0, BK_GREEN));
    n.push(Node::text(label(scene.today, Rect::new(46.0, 630.0, 280.0, 20.0), 12.0).bold().color(Color::WHITE.alpha(0.6)).valign(VAlign::Middle)));

    n.push(brand_centered(scene, 480.0, 64.0, 0.7, BrandVariant::Colored));
    match f.first_image() {
        Some(h) => {
            n.push(Node::circle(480.0, 230.0, 100.0, Color::WHITE));
            n.push(Node::image(h, Rect::new(380.0, 130.0, 200.0, 200.0), Fit::Cover).clip_circle());
        }
        None => {
            n.push(Node::circle(480.0, 230.0, 100.0, GRAY_200));
            n.push(quote_mark(456.0, 206.0, 48.0, GRAY_400));
        }
    }
    n.push(Node::ring(480.0, 230.0, 98.0, BK_RED, 4.0));

    let (name, designation) = speaker(&f.body);
    n.push(Node::text(label(&name, Rect::new(368.0, 346.0, 224.0, 56.0), 20.0).bold().color(GRAY_900).center().max_lines(2)));
    n.push(Node::rounded(Rect::new(460.0, 410.0, 40.0, 4.0), BK_GREEN, 2.0));
    n.push(Node::text(label(&designation, Rect::new(368.0, 424.0, 224.0, 80.0), 12.0).color(GRAY_600).center().max_lines(4)));
    n.push(Node::text(
        label("FB/BASHERKELLA", Rect::new(360.0, 700.0, 240.0, 20.0), 10.0)
            .bold()
            .spacing(2.0)
            .color(GRAY_500.alpha(0.7))
            .center(),
    ));
    n
}

pub fn sidebar_green(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![
        Node::rect(scene.full(), Color::hex(0xfcfcfc)),
        Node::rect(Rect::new(0.0, 0.0, 150.0, 750.0), BK_GREEN),
    ];
    n.push(brand_br(scene, 568.0, 24.0 + 40.0 * 0.8, 0.8, BrandVariant::Colored));

    let yellow = Color::hex(0xfff9c4);
    n.push(Node::rect(Rect::new(150.0, 702.0, 450.0, 48.0), yellow));
    n.push(Node::text(label(scene.today, Rect::new(150.0, 702.0, 418.0, 48.0), 12.0).bold().color(GRAY_800).align(Align::End).valign(VAlign::Middle)));

    match f.first_image() {
        Some(h) => n.push(Node::image(h, Rect::new(16.0, 350.0, 350.0, 400.0), Fit::Contain)),
        None => n.push(quote_mark(40.0, 580.0, 120.0, Color::WHITE.alpha(0.3))),
    }

    let tag = Pill::new(yellow, Color::BLACK, 14.0).pad(10.0, 4.0).radius(0.0);
    n.extend(tag.at(172.0, 108.0, Align::Start, "আলোচিত উক্তি"));
    n.push(Node::rect(Rect::new(168.0, 108.0, 4.0, tag.height()), BK_RED));

    n.push(Node::text(quote_text(
        f,
        "গ্রিন সাইডবার ডিজাইনে ছবিটি বাম পাশের বারে ওভারল্যাপ করে...",
        Rect::new(168.0, 150.0, 400.0, 290.0),
        34.0,
        1.4,
        GRAY_900,
    )));
    n.push(Node::rounded(Rect::new(168.0, 452.0, 64.0, 4.0), GRAY_200, 2.0));

    let (name, designation) = speaker(&f.body);
    n.push(Node::line((168.0, 478.0), (184.0, 478.0), BK_RED, 1.0));
    n.push(Node::text(label(&name, Rect::new(192.0, 466.0, 376.0, 24.0), 14.0).bold().color(GRAY_500).valign(VAlign::Middle).max_lines(1)));
    n.push(Node::text(label(&designation, Rect::new(192.0, 490.0, 376.0, 20.0), 12.0).color(GRAY_400).max_lines(1)));
    n
}

pub fn glass(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x050a07);
    let mut n = vec![Node::rect(scene.full(), bg)];
    match f.first_image() {
        Some(h) => n.push(Node::image(h, scene.full(), Fit::Cover)),
        None => n.push(Node::rect(scene.full(), Color::hex(0x1a1a1a))),
    }
    n.push(Node::gradient(Rect::new(0.0, 0.0, 600.0, 96.0), Color::BLACK.alpha(0.7), Color::BLACK.alpha(0.0), GradientDir::Down));
    n.push(Node::gradient(Rect::new(0.0, 187.0, 600.0, 280.0), bg.alpha(0.0), bg.alpha(0.9), GradientDir::Down));
    n.push(Node::gradient(Rect::new(0.0, 467.0, 600.0, 283.0), bg.alpha(0.9), bg, GradientDir::Down));

    n.push(brand(scene, 32.0, 32.0, 0.75, BrandVariant::Dark));
    n.extend(
        Pill::new(Color::BLACK.alpha(0.4), BK_GREEN, 10.0)
            .pad(12.0, 4.0)
            .radius(4.0)
            .spacing(2.0)
            .border(BK_GREEN, 1.0)
            .at(568.0, 34.0, Align::End, "QUOTE OF THE DAY"),
    );

    n.push(Node::circle(52.0, 300.0, 20.0, BK_RED));
    n.push(quote_mark(43.0, 291.0, 18.0, Color::WHITE));
    n.push(Node::gradient(Rect::new(32.0, 336.0, 536.0, 226.0), Color::BLACK.alpha(0.4), Color::BLACK.alpha(0.0), GradientDir::Right).with_radius(12.0));
    n.push(Node::rect(Rect::new(32.0, 336.0, 4.0, 226.0), BK_GREEN));
    n.push(Node::text(
        quote_text(
            f,
            "ডার্ক গ্লাস থিমে আপনার উক্তিটি অত্যন্ত প্রফেশনাল এবং গাম্ভীর্যপূর্ণ দেখাবে...",
            Rect::new(56.0, 342.0, 500.0, 214.0),
            34.0,
            1.4,
            Color::WHITE,
        )
        .valign(VAlign::Bottom),
    ));

    let (name, designation) = speaker(&f.body);
    n.push(Node::text(label(&name, Rect::new(32.0, 578.0, 536.0, 34.0), 24.0).bold().color(Color::WHITE).max_lines(1)));
    n.push(Node::text(label(&designation, Rect::new(32.0, 614.0, 536.0, 22.0), 14.0).spacing(1.0).color(BK_GREEN).max_lines(1)));
    n.push(Node::line((32.0, 656.0), (568.0, 656.0), Color::WHITE.alpha(0.1), 1.0));
    n.push(Node::text(label(scene.today, Rect::new(32.0, 668.0, 400.0, 20.0), 12.0).bold().color(GRAY_400).valign(VAlign::Middle)));
    n
}

pub fn dark_vibe(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x09090b);
    let mut n = vec![
        Node::rect(scene.full(), bg),
        Node::circle(180.0, 150.0, 300.0, BK_GREEN.alpha(0.15)),
        Node::circle(590.0, 745.0, 250.0, BK_RED.alpha(0.1)),
    ];
    let top = Rect::new(0.0, 0.0, 600.0, 450.0);
    match f.first_image() {
        Some(h) => {
            n.push(Node::image(h, top, Fit::Cover));
            n.push(Node::gradient(top, bg.alpha(0.3), bg, GradientDir::Down));
            n.push(Node::gradient(Rect::new(0.0, 322.0, 600.0, 128.0), bg.alpha(0.0), bg, GradientDir::Down));
        }
        None => {
            n.push(Node::rect(top, Color::WHITE.alpha(0.05)));
            n.push(quote_mark(268.0, 193.0, 64.0, GRAY_600));
        }
    }

    n.push(Node::text(label("DATE", Rect::new(32.0, 32.0, 200.0, 14.0), 10.0).bold().spacing(3.0).color(BK_GREEN)));
    n.push(Node::text(label(scene.today, Rect::new(32.0, 48.0, 300.0, 20.0), 14.0).bold().family(OSWALD).color(GRAY_200)));
    n.push(brand_br(scene, 568.0, 32.0 + 40.0 * 0.75, 0.75, BrandVariant::Dark));

    n.push(Node::circle(52.0, 272.0, 20.0, BK_RED.alpha(0.9)));
    n.push(quote_mark(43.0, 263.0, 18.0, Color::WHITE));
    n.push(Node::text(
        quote_text(
            f,
            "ডার্ক ভাইব ডিজাইনে এখন টেক্সট কেটে যাবে না এবং সম্পূর্ণ স্পষ্টভাবে দেখা যাবে...",
            Rect::new(32.0, 300.0, 536.0, 336.0),
            30.0,
            1.6,
            Color::WHITE,
        )
        .max_lines(7)
        .valign(VAlign::Bottom),
    ));
    n.push(Node::gradient(Rect::new(32.0, 644.0, 536.0, 1.0), BK_GREEN.alpha(0.5), BK_GREEN.alpha(0.0), GradientDir::Right));

    let (name, designation) = speaker(&f.body);
    n.push(Node::text(label(&name, Rect::new(32.0, 656.0, 536.0, 34.0), 24.0).bold().color(Color::WHITE).max_lines(1)));
    n.push(Node::text(label(&designation, Rect::new(32.0, 692.0, 536.0, 22.0), 14.0).bold().spacing(2.0).color(BK_GREEN.alpha(0.9)).max_lines(1)));
    n
}

pub fn elegant_frame(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![
        Node::rect(scene.full(), Color::WHITE),
        Node::rect(Rect::new(0.0, 0.0, 600.0, 12.0), BK_GREEN),
        Node::rect(Rect::new(0.0, 742.0, 600.0, 8.0), BK_RED),
    ];
    n.push(brand_centered(scene, 300.0, 40.0, 0.9, BrandVariant::Colored));

    n.push(Node::circle(308.0, 258.0, 130.0, BK_GREEN.alpha(0.1)));
    n.push(Node::circle(300.0, 250.0, 130.0, Color::WHITE).with_stroke(GRAY_100, 1.0));
    match f.first_image() {
        Some(h) => n.push(Node::image(h, Rect::new(178.0, 128.0, 244.0, 244.0), Fit::Cover).clip_circle()),
        None => {
            n.push(Node::circle(300.0, 250.0, 122.0, GRAY_50));
            n.push(quote_mark(270.0, 220.0, 60.0, GRAY_300));
        }
    }
    n.extend(Pill::new(BK_GREEN, Color::WHITE, 12.0).pad(24.0, 6.0).at(300.0, 364.0, Align::Center, scene.today));

    n.push(quote_mark(32.0, 410.0, 32.0, BK_RED.alpha(0.2)));
    n.push(quote_mark(536.0, 566.0, 32.0, BK_RED.alpha(0.2)));
    n.push(Node::text(
        TextBlock::new(
            or_placeholder(&f.headline, "এলিগেন্ট ফ্রেম ডিজাইনে এখন ছবিটি আরও বড় এবং স্পষ্ট দেখাবে..."),
            Rect::new(48.0, 420.0, 504.0, 180.0),
            28.0,
        )
        .weight(600)
        .family(SERIF)
        .color(GRAY_800)
        .line_height(1.6)
        .center()
        .valign(VAlign::Middle)
        .max_lines(8),
    ));

    let (name, designation) = speaker(&f.body);
    n.push(Node::line((32.0, 616.0), (568.0, 616.0), GRAY_100, 1.0));
    n.push(Node::text(label(&name, Rect::new(32.0, 630.0, 536.0, 34.0), 24.0).bold().color(BK_GREEN).center().max_lines(1)));
    n.push(Node::text(label(&designation, Rect::new(32.0, 668.0, 536.0, 40.0), 14.0).color(GRAY_500).center().max_lines(2)));
    n
}
