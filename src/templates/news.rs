//! News cards (600×600)
//!
//! Most designs split the canvas into a photo band on top and a headline area
//! below it, with the date in a pill and the brand header as footer.

use super::{
    brand, brand_br, brand_centered, headline, label, photo, BrandVariant, Pill, BK_GREEN, BK_RED, BODY_FONT, GRAY_100,
    GRAY_200, GRAY_300, GRAY_400, GRAY_50, GRAY_500, GRAY_600, GRAY_700, GRAY_800, GRAY_900, Scene,
};
use crate::catalog::font_family;
use crate::fields::StoryFields;
use crate::rendering::layout::text_width;
use crate::rendering::paint::{Align, Color, GradientDir, Node, Rect, TextBlock, VAlign};

const NO_IMAGE: &str = "No Image";

fn canvas(scene: &Scene<'_>, bg: Color) -> Vec<Node> {
    vec![Node::rect(scene.full(), bg)]
}

fn fade(rect: Rect, to: Color) -> Node {
    Node::gradient(rect, to.alpha(0.0), to, GradientDir::Down)
}

/// Centered headline block in `rect`.
fn centered(f: &StoryFields, placeholder: &str, rect: Rect, size: f32, lh: f32, color: Color) -> Node {
    match headline(&f.headline, placeholder, rect, size, lh, color, font_family(f.font.as_deref())) {
        Node::Text(t) => Node::Text(t.center().valign(VAlign::Middle)),
        other => other,
    }
}

fn top_left(f: &StoryFields, placeholder: &str, rect: Rect, size: f32, lh: f32, color: Color) -> Node {
    headline(&f.headline, placeholder, rect, size, lh, color, font_family(f.font.as_deref()))
}

pub fn classic_light(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::WHITE);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 330.0), GRAY_100, GRAY_400, NO_IMAGE));

    // date tag hugging the top-right corner, only its bottom-left corner rounded
    let tag = Pill::new(BK_RED, Color::WHITE, 12.0).pad(24.0, 8.0);
    let (w, h) = (tag.width(scene.today), tag.height());
    n.push(Node::rounded(Rect::new(600.0 - w, -16.0, w + 16.0, h + 16.0), BK_RED, 16.0));
    n.push(Node::text(
        label(scene.today, Rect::new(600.0 - w, 0.0, w, h), 12.0)
            .bold()
            .color(Color::WHITE)
            .center()
            .valign(VAlign::Middle),
    ));

    let pink = Color::hex(0xff8ba7);
    n.push(Node::circle(280.0, 366.0, 6.0, pink));
    n.push(Node::circle(300.0, 366.0, 6.0, BK_GREEN));
    n.push(Node::circle(320.0, 366.0, 6.0, pink));

    n.push(centered(
        f,
        "রবি প্রাইম ডিজাইনে আপনার হেডলাইনটি চমৎকার দেখাবে, এমনকি তিন লাইনে হলেও...",
        Rect::new(32.0, 384.0, 536.0, 156.0),
        38.0,
        1.35,
        GRAY_900,
    ));
    n.push(brand_centered(scene, 300.0, 548.0, 0.9, BrandVariant::Colored));
    n
}

pub fn studio_dark(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x0b1215);
    let mut n = canvas(scene, bg);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 300.0), Color::hex(0x1a202c), GRAY_600, NO_IMAGE));
    n.push(fade(Rect::new(0.0, 204.0, 600.0, 96.0), bg));
    n.extend(
        Pill::new(bg, Color::WHITE, 12.0)
            .pad(24.0, 6.0)
            .border(BK_GREEN, 1.0)
            .at(300.0, 286.0, Align::Center, scene.today),
    );
    n.push(centered(
        f,
        "এমারল্ড স্লেট থিমে সংবাদের আভিজাত্য ফুটে উঠবে এবং পর্যাপ্ত জায়গা থাকবে...",
        Rect::new(32.0, 332.0, 536.0, 182.0),
        32.0,
        1.4,
        Color::WHITE,
    ));
    n.push(brand_centered(scene, 300.0, 546.0, 0.9, BrandVariant::White).with_opacity(0.9));
    n
}

pub fn corporate_dark(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = GRAY_900;
    let mut n = canvas(scene, bg);
    n.push(Node::circle(552.0, 552.0, 144.0, BK_RED.alpha(0.85)));
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 300.0), GRAY_800, GRAY_500, NO_IMAGE));
    if f.first_image().is_some() {
        n.push(fade(Rect::new(0.0, 236.0, 600.0, 64.0), bg));
    }
    n.extend(
        Pill::new(GRAY_800, GRAY_300, 12.0)
            .pad(20.0, 8.0)
            .radius(8.0)
            .border(GRAY_700, 1.0)
            .dot(BK_RED)
            .at(300.0, 282.0, Align::Center, scene.today),
    );
    n.push(centered(
        f,
        "কর্পোরেট ডার্ক থিমে একটি প্রফেশনাল এবং গাম্ভীর্যপূর্ণ লুক পাওয়া যায়...",
        Rect::new(32.0, 334.0, 536.0, 182.0),
        34.0,
        1.4,
        Color::WHITE,
    ));
    n.push(brand_centered(scene, 300.0, 540.0, 0.9, BrandVariant::White));
    n
}

pub fn premium_minimal(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, GRAY_50);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 330.0), GRAY_200, GRAY_400, NO_IMAGE));
    n.push(Node::rect(Rect::new(0.0, 330.0, 600.0, 270.0), Color::WHITE));

    // tag overlapping the photo edge
    let tag_w = text_width("NEWS UPDATE", 11.0, 2.0) + 40.0;
    n.push(Node::rounded(Rect::new(-12.0, 318.0, tag_w + 12.0, 34.0), Color::WHITE, 12.0).with_stroke(GRAY_100, 1.0));
    n.push(Node::rounded(Rect::new(6.0, 327.0, 6.0, 16.0), BK_RED, 3.0));
    n.push(Node::text(
        label("NEWS UPDATE", Rect::new(20.0, 318.0, tag_w - 20.0, 34.0), 11.0)
            .bold()
            .spacing(2.0)
            .color(BK_GREEN)
            .valign(VAlign::Middle),
    ));

    n.push(Node::ring(42.0, 378.0, 6.0, GRAY_400, 1.5));
    n.push(Node::line((42.0, 378.0), (42.0, 374.0), GRAY_400, 1.5));
    n.push(Node::line((42.0, 378.0), (45.0, 380.0), GRAY_400, 1.5));
    n.push(Node::text(label(scene.today, Rect::new(54.0, 368.0, 300.0, 20.0), 12.0).bold().color(GRAY_400).valign(VAlign::Middle)));

    n.push(Node::rounded(Rect::new(32.0, 406.0, 6.0, 118.0), GRAY_900, 3.0));
    n.push(top_left(
        f,
        "প্রিমিয়াম মিনিমাল ডিজাইনে একটি ক্লিন এবং ম্যাগাজিন স্টাইলের লুক পাওয়া যায়...",
        Rect::new(54.0, 398.0, 514.0, 142.0),
        36.0,
        1.3,
        Color::hex(0x0f172a),
    ));

    n.push(Node::line((32.0, 544.0), (568.0, 544.0), GRAY_100, 1.0));
    n.push(brand(scene, 32.0, 556.0, 0.75, BrandVariant::Colored));
    for (i, a) in [1.0, 0.6, 0.3].into_iter().enumerate() {
        n.push(Node::circle(548.0 + 12.0 * i as f32, 580.0, 3.0, BK_GREEN.alpha(a)));
    }
    n
}

pub fn elegant_light(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::hex(0xf8fafc));
    n.push(brand(scene, 24.0, 24.0, 0.75, BrandVariant::Colored));
    n.extend(Pill::new(BK_GREEN, Color::WHITE, 12.0).at(576.0, 26.0, Align::End, scene.today));

    let card = Rect::new(24.0, 80.0, 552.0, 496.0);
    n.push(Node::rounded(card, Color::WHITE, 24.0).with_stroke(GRAY_100, 1.0));
    let img = Rect::new(24.0, 80.0, 552.0, 273.0);
    match f.first_image() {
        Some(h) => n.push(Node::image(h, img, Default::default()).with_radius(24.0)),
        None => {
            n.push(Node::rounded(img, GRAY_100, 24.0));
            n.push(Node::text(label("No Image", img, 18.0).color(GRAY_300).center().valign(VAlign::Middle)));
        }
    }

    // diamond divider on the photo's bottom edge
    n.push(Node::Path { d: "M300 319 L334 353 L300 387 L266 353 Z".into(), fill: Color::WHITE });
    n.push(Node::Path { d: "M300 327 L326 353 L300 379 L274 353 Z".into(), fill: BK_GREEN });
    n.push(Node::circle(300.0, 353.0, 3.0, Color::WHITE));

    n.push(centered(
        f,
        "এলিগেন্ট লাইট ডিজাইনে ছবিটি একটি ফ্রেমের মধ্যে থাকে এবং টেক্সট সাদা ক্যানভাসে...",
        Rect::new(56.0, 392.0, 488.0, 136.0),
        32.0,
        1.4,
        Color::hex(0x1e293b),
    ));

    n.extend(
        Pill::new(GRAY_50, GRAY_400, 10.0)
            .pad(12.0, 4.0)
            .border(GRAY_100, 1.0)
            .at(48.0, 540.0, Align::Start, "বিস্তারিত কমেন্টে"),
    );
    n.extend(Pill::new(GRAY_900, Color::WHITE, 10.0).pad(12.0, 4.0).at(552.0, 540.0, Align::End, "basherkella.com"));
    n
}

pub fn focus_red(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, BK_RED);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 348.0), GRAY_900, GRAY_500, NO_IMAGE));
    n.push(fade(Rect::new(0.0, 252.0, 600.0, 96.0), BK_RED));
    n.push(centered(
        f,
        "ফোকাস রেড ডিজাইনে সংবাদের শিরোনামটি লাল ব্যাকগ্রাউন্ডে সাদা রঙে ফুটে উঠবে...",
        Rect::new(40.0, 356.0, 520.0, 172.0),
        36.0,
        1.35,
        Color::WHITE,
    ));
    n.push(Node::rect(Rect::new(0.0, 536.0, 600.0, 64.0), Color::BLACK.alpha(0.1)));
    n.push(Node::line((0.0, 536.0), (600.0, 536.0), Color::WHITE.alpha(0.1), 1.0));
    n.push(brand(scene, 32.0, 550.0, 0.9, BrandVariant::White));
    n.push(Node::text(
        label(scene.today, Rect::new(300.0, 536.0, 268.0, 64.0), 12.0)
            .bold()
            .color(Color::WHITE.alpha(0.8))
            .align(Align::End)
            .valign(VAlign::Middle),
    ));
    n.push(Node::rect(Rect::new(0.0, 596.0, 600.0, 4.0), Color::WHITE.alpha(0.2)));
    n
}

pub fn red_headline(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::WHITE);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 300.0), GRAY_100, GRAY_300, NO_IMAGE));
    n.extend(
        Pill::new(BK_GREEN, Color::WHITE, 10.0)
            .pad(16.0, 6.0)
            .radius(4.0)
            .spacing(2.0)
            .at(0.0, 24.0, Align::Start, "NEWS UPDATE"),
    );

    n.push(Node::circle(35.0, 336.0, 3.0, GRAY_300));
    n.push(Node::text(label(scene.today, Rect::new(46.0, 326.0, 300.0, 20.0), 12.0).bold().color(GRAY_400).valign(VAlign::Middle)));

    n.push(Node::rect(Rect::new(32.0, 360.0, 6.0, 144.0), BK_RED));
    n.push(top_left(
        f,
        "রেড হেডলাইন ডিজাইনে বাম পাশে একটি লাল বর্ডার থাকে যা সংবাদের গুরুত্ব বাড়িয়ে দেয়...",
        Rect::new(58.0, 358.0, 510.0, 150.0),
        36.0,
        1.3,
        GRAY_900,
    ));

    n.push(Node::line((32.0, 524.0), (568.0, 524.0), GRAY_100, 1.0));
    n.push(brand(scene, 32.0, 544.0, 0.9, BrandVariant::Colored));
    n.push(Node::rounded(Rect::new(504.0, 570.0, 64.0, 6.0), BK_RED.alpha(0.8), 3.0));
    n
}

pub fn vibrant_overlay(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x002411);
    let mut n = canvas(scene, bg);
    match f.first_image() {
        Some(h) => n.push(Node::image(h, scene.full(), Default::default()).with_opacity(0.6)),
        None => n.push(Node::text(
            TextBlock::new(NO_IMAGE, scene.full(), 36.0)
                .bold()
                .family(BODY_FONT)
                .color(Color::WHITE.alpha(0.05))
                .center()
                .valign(VAlign::Middle),
        )),
    }
    n.push(Node::rect(scene.full(), bg.alpha(0.8)));
    n.push(Node::gradient(Rect::new(0.0, 0.0, 600.0, 300.0), Color::BLACK.alpha(0.4), Color::BLACK.alpha(0.0), GradientDir::Down));
    n.push(fade(Rect::new(0.0, 300.0, 600.0, 300.0), Color::hex(0x00381c)));

    n.extend(
        Pill::new(GRAY_800.alpha(0.8), Color::WHITE, 12.0)
            .border(Color::WHITE.alpha(0.1), 1.0)
            .at(576.0, 24.0, Align::End, scene.today),
    );
    n.push(Node::rounded(Rect::new(276.0, 190.0, 48.0, 4.0), BK_RED, 2.0));
    n.push(centered(
        f,
        "ভাইব্রেন্ট ওভারলে ডিজাইনে ছবিটি সম্পূর্ণ দেখা যাবে এবং ব্র্যান্ড কালার ফুটে উঠবে...",
        Rect::new(32.0, 214.0, 536.0, 220.0),
        36.0,
        1.35,
        Color::WHITE,
    ));
    n.push(Node::line((0.0, 500.0), (600.0, 500.0), Color::WHITE.alpha(0.1), 1.0));
    n.push(brand_centered(scene, 300.0, 526.0, 0.9, BrandVariant::White));
    n
}

pub fn modern_card(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::WHITE);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 330.0), GRAY_100, GRAY_300, NO_IMAGE));
    n.extend(
        Pill::new(Color::WHITE, GRAY_800, 12.0)
            .dot(BK_RED)
            .at(576.0, 24.0, Align::End, scene.today),
    );
    // sheet sliding over the photo
    n.push(Node::gradient(Rect::new(0.0, 284.0, 600.0, 14.0), Color::BLACK.alpha(0.0), Color::BLACK.alpha(0.08), GradientDir::Down));
    n.push(Node::rounded(Rect::new(0.0, 298.0, 600.0, 340.0), Color::WHITE, 24.0));
    n.push(Node::rounded(Rect::new(276.0, 330.0, 48.0, 4.0), BK_GREEN, 2.0));
    n.push(centered(
        f,
        "মডার্ন কার্ড ডিজাইনে খবরের শিরোনাম এবং ছবি একটি সুন্দর কাঠামোর মধ্যে থাকে...",
        Rect::new(32.0, 354.0, 536.0, 168.0),
        34.0,
        1.35,
        GRAY_900,
    ));
    n.push(brand_centered(scene, 300.0, 536.0, 0.9, BrandVariant::Colored));
    n
}

pub fn midnight_impact(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::hex(0x0f1623));
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 300.0), Color::hex(0x1a202c), GRAY_600, NO_IMAGE));
    n.push(Node::rect(Rect::new(268.0, 332.0, 32.0, 4.0), BK_RED));
    n.push(Node::rect(Rect::new(300.0, 332.0, 32.0, 4.0), BK_GREEN));
    n.push(centered(
        f,
        "মিডনাইট ইমপ্যাক্ট থিমে আপনার সংবাদটি অত্যন্ত শার্প এবং মডার্ন দেখাবে...",
        Rect::new(32.0, 360.0, 536.0, 164.0),
        34.0,
        1.4,
        Color::WHITE,
    ));
    n.push(Node::line((32.0, 540.0), (568.0, 540.0), GRAY_800, 1.0));
    n.push(Node::text(label(scene.today, Rect::new(32.0, 552.0, 260.0, 32.0), 12.0).bold().spacing(1.0).color(GRAY_400).valign(VAlign::Bottom)));
    n.push(brand_br(scene, 568.0, 586.0, 0.75, BrandVariant::White).with_opacity(0.8));
    n
}

pub fn elegant_border(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::WHITE);
    n.extend(photo(f.first_image(), Rect::new(13.0, 13.0, 574.0, 317.0), GRAY_100, GRAY_300, NO_IMAGE));
    n.push(Node::frame(Rect::new(12.0, 12.0, 576.0, 576.0), BK_GREEN, 2.5, 0.0));

    let tw = text_width(scene.today, 11.0, 2.0);
    let (l, r) = (300.0 - tw / 2.0 - 16.0, 300.0 + tw / 2.0 + 16.0);
    n.push(Node::line((l - 48.0, 360.0), (l, 360.0), BK_GREEN, 1.5));
    n.push(Node::line((r, 360.0), (r + 48.0, 360.0), BK_GREEN, 1.5));
    n.push(Node::text(
        label(scene.today, Rect::new(l, 348.0, r - l, 24.0), 11.0)
            .bold()
            .spacing(2.0)
            .color(BK_GREEN)
            .center()
            .valign(VAlign::Middle),
    ));

    n.push(centered(
        f,
        "এলিগেন্ট বর্ডার ডিজাইনে সংবাদটি একটি ম্যাগাজিন লুক পাবে এবং বড় হেডলাইনও ধরবে...",
        Rect::new(36.0, 384.0, 528.0, 140.0),
        34.0,
        1.35,
        GRAY_900,
    ));
    n.push(brand_centered(scene, 300.0, 534.0, 0.9, BrandVariant::Colored));
    n
}

pub fn royal_green(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x101418);
    let mut n = canvas(scene, bg);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 330.0), Color::hex(0x1a202c), GRAY_600, NO_IMAGE));
    n.push(fade(Rect::new(0.0, 250.0, 600.0, 80.0), bg));
    n.push(Node::rounded(Rect::new(264.0, 335.0, 72.0, 14.0), BK_GREEN.alpha(0.25), 7.0));
    n.push(Node::rounded(Rect::new(276.0, 340.0, 48.0, 4.0), BK_GREEN, 2.0));
    n.push(centered(
        f,
        "রয়্যাল গ্রিন থিমে সংবাদটি অত্যন্ত রাজকীয় এবং ব্র্যান্ড কালারে আকর্ষণীয় দেখাবে...",
        Rect::new(32.0, 356.0, 536.0, 170.0),
        40.0,
        1.4,
        Color::WHITE,
    ));
    n.push(Node::text(
        label(scene.today, Rect::new(0.0, 528.0, 600.0, 18.0), 12.0)
            .bold()
            .spacing(1.0)
            .color(BK_GREEN.alpha(0.8))
            .center(),
    ));
    n.push(brand_centered(scene, 300.0, 552.0, 0.9, BrandVariant::White).with_opacity(0.9));
    n
}

pub fn dark_studio(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x0f1713);
    let mut n = canvas(scene, bg);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 300.0), Color::hex(0x1a202c), GRAY_600, NO_IMAGE));
    n.extend(
        Pill::new(BK_RED, Color::WHITE, 12.0)
            .pad(24.0, 8.0)
            .border(bg, 2.0)
            .at(300.0, 284.0, Align::Center, scene.today),
    );
    n.push(centered(
        f,
        "ডার্ক স্টুডিও থিমে আপনার সংবাদ সুন্দরভাবে ফুটে উঠবে এবং তিন লাইনেও পারফেক্ট দেখাবে...",
        Rect::new(32.0, 338.0, 536.0, 172.0),
        40.0,
        1.4,
        Color::WHITE,
    ));
    n.push(brand_centered(scene, 300.0, 548.0, 0.9, BrandVariant::White));
    n
}

pub fn classic_center(f: &StoryFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = canvas(scene, Color::WHITE);
    n.extend(photo(f.first_image(), Rect::new(0.0, 0.0, 600.0, 330.0), GRAY_100, GRAY_300, NO_IMAGE));
    n.extend(
        Pill::new(Color::WHITE, GRAY_600, 10.0)
            .dot(BK_RED)
            .at(580.0, 20.0, Align::End, scene.today),
    );
    n.push(Node::rounded(Rect::new(276.0, 370.0, 48.0, 4.0), BK_GREEN, 2.0));
    n.push(centered(
        f,
        "সেন্টার অ্যালাইনমেন্টে সুন্দর একটি হেডলাইন যা এখন তিন লাইন পর্যন্ত খুব সুন্দরভাবে ধরবে...",
        Rect::new(32.0, 388.0, 536.0, 150.0),
        38.0,
        1.3,
        GRAY_900,
    ));
    n.push(brand_centered(scene, 300.0, 548.0, 0.9, BrandVariant::Colored));
    n
}
