//! Morning greeting cards (600×600)

use super::{
    brand_br, join_dates, label, or_placeholder, BrandVariant, Pill, BK_GREEN, BK_RED, GRAY_200, GRAY_300, GRAY_400,
    GRAY_500, GRAY_600, GRAY_800, GRAY_900, OSWALD, Scene,
};
use crate::fields::{MorningFields, DEFAULT_CAPTIONS};
use crate::rendering::paint::{Align, Color, Fit, GradientDir, Node, Rect, VAlign};

const GREETING: &str = "সুবাহুল খায়ের";

fn caption(f: &MorningFields) -> &str {
    or_placeholder(&f.caption, DEFAULT_CAPTIONS[0])
}

fn credit(f: &MorningFields) -> &str {
    match f.image_credit.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => "ছবি: সংগৃহীত",
    }
}

fn day_and_date(f: &MorningFields) -> String {
    join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", ")
}

fn backdrop(f: &MorningFields, scene: &Scene<'_>, bg: Color, opacity: f32) -> Vec<Node> {
    let mut n = vec![Node::rect(scene.full(), bg)];
    if let Some(h) = f.images.first() {
        n.push(Node::image(h, scene.full(), Fit::Cover).with_opacity(opacity));
    }
    n
}

pub fn classic(f: &MorningFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = backdrop(f, scene, Color::BLACK, 1.0);
    n.push(Node::gradient(scene.full(), Color::BLACK.alpha(0.1), Color::BLACK.alpha(0.9), GradientDir::Down));

    n.extend(
        Pill::new(Color::WHITE.alpha(0.15), Color::WHITE, 11.0)
            .spacing(2.0)
            .border(Color::WHITE.alpha(0.3), 1.0)
            .at(32.0, 32.0, Align::Start, "MORNING VIBES"),
    );

    n.push(Node::text(label(GREETING, Rect::new(32.0, 250.0, 536.0, 72.0), 56.0).bold().color(Color::WHITE).line_height(1.2)));
    n.push(Node::rounded(Rect::new(32.0, 330.0, 80.0, 5.0), BK_GREEN, 2.5));
    n.push(Node::text(
        label(caption(f), Rect::new(32.0, 348.0, 520.0, 80.0), 19.0)
            .color(Color::WHITE.alpha(0.9))
            .line_height(1.5)
            .max_lines(3),
    ));

    let date_box = Rect::new(32.0, 460.0, 300.0, 76.0);
    n.push(Node::rounded(date_box, Color::WHITE.alpha(0.1), 12.0).with_stroke(Color::WHITE.alpha(0.2), 1.0));
    n.push(Node::rect(Rect::new(32.0, 460.0, 4.0, 76.0), BK_RED));
    n.push(Node::text(label(&day_and_date(f), Rect::new(48.0, 470.0, 276.0, 26.0), 16.0).bold().color(Color::hex(0xfcd34d)).max_lines(1)));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(48.0, 500.0, 276.0, 24.0), 13.0)
            .color(GRAY_200)
            .max_lines(1),
    ));

    n.push(Node::text(label(credit(f), Rect::new(32.0, 556.0, 260.0, 20.0), 10.0).color(Color::WHITE.alpha(0.5)).valign(VAlign::Middle)));
    n.push(brand_br(scene, 568.0, 568.0, 0.9, BrandVariant::White));
    n
}

pub fn modern(f: &MorningFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::rect(scene.full(), Color::WHITE)];
    let top = Rect::new(0.0, 0.0, 600.0, 360.0);
    match f.images.first() {
        Some(h) => n.push(Node::image(h, top, Fit::Cover)),
        None => n.push(Node::rect(top, GRAY_200)),
    }
    n.push(Node::gradient(Rect::new(0.0, 240.0, 600.0, 120.0), Color::WHITE.alpha(0.0), Color::WHITE, GradientDir::Down));

    n.extend(Pill::new(BK_GREEN, Color::WHITE, 12.0).pad(20.0, 6.0).at(300.0, 330.0, Align::Center, &day_and_date(f)));
    n.push(Node::text(label(GREETING, Rect::new(32.0, 372.0, 536.0, 56.0), 42.0).bold().color(GRAY_800).center().line_height(1.2)));
    n.push(Node::text(
        label(caption(f), Rect::new(48.0, 432.0, 504.0, 72.0), 17.0)
            .color(GRAY_600)
            .center()
            .line_height(1.5)
            .max_lines(3),
    ));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " ● "), Rect::new(32.0, 508.0, 536.0, 22.0), 13.0)
            .bold()
            .color(GRAY_500)
            .center(),
    ));

    n.push(Node::line((32.0, 540.0), (568.0, 540.0), GRAY_200, 1.0));
    n.push(Node::text(label(credit(f), Rect::new(32.0, 550.0, 240.0, 30.0), 10.0).color(GRAY_400).valign(VAlign::Middle)));
    n.push(brand_br(scene, 568.0, 580.0, 0.75, BrandVariant::Colored));
    n
}

pub fn corporate(f: &MorningFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![
        Node::rect(scene.full(), Color::hex(0xfffdf5)),
        Node::frame(Rect::new(6.0, 6.0, 588.0, 588.0), Color::WHITE, 12.0, 0.0),
    ];

    let photo = Rect::new(32.0, 32.0, 536.0, 268.0);
    match f.images.first() {
        Some(h) => n.push(Node::image(h, photo, Fit::Cover).with_radius(16.0)),
        None => n.push(Node::rounded(photo, GRAY_200, 16.0)),
    }
    n.extend(
        Pill::new(Color::BLACK.alpha(0.5), Color::WHITE, 10.0)
            .pad(10.0, 4.0)
            .radius(4.0)
            .at(556.0, 270.0, Align::End, credit(f)),
    );

    n.push(Node::text(label(GREETING, Rect::new(32.0, 316.0, 536.0, 52.0), 40.0).bold().color(BK_GREEN).line_height(1.2)));
    n.push(Node::text(
        label(caption(f), Rect::new(32.0, 372.0, 536.0, 84.0), 18.0)
            .color(GRAY_600)
            .line_height(1.5)
            .max_lines(3),
    ));

    let info = Rect::new(32.0, 472.0, 536.0, 96.0);
    n.push(Node::rounded(info, Color::WHITE, 12.0).with_stroke(GRAY_200, 1.0));
    n.push(Node::rect(Rect::new(32.0, 484.0, 4.0, 72.0), BK_RED));
    n.push(Node::text(label(&day_and_date(f), Rect::new(52.0, 488.0, 300.0, 26.0), 16.0).bold().color(GRAY_800).max_lines(1)));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(52.0, 520.0, 300.0, 24.0), 13.0)
            .color(GRAY_500)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 552.0, 550.0, 0.75, BrandVariant::Colored));
    n
}

pub fn minimal(f: &MorningFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = backdrop(f, scene, Color::BLACK, 0.7);
    n.push(Node::rect(Rect::new(0.0, 0.0, 240.0, 600.0), Color::WHITE));

    n.push(Node::circle(56.0, 64.0, 24.0, BK_GREEN));
    n.push(Node::circle(56.0, 64.0, 10.0, Color::WHITE));
    n.push(Node::text(label(GREETING, Rect::new(32.0, 104.0, 192.0, 116.0), 44.0).bold().color(GRAY_900).line_height(1.2).max_lines(2)));
    n.push(Node::rounded(Rect::new(32.0, 228.0, 48.0, 4.0), BK_RED, 2.0));
    n.push(Node::text(
        label(caption(f), Rect::new(32.0, 244.0, 184.0, 150.0), 16.0)
            .color(GRAY_600)
            .line_height(1.5)
            .max_lines(6),
    ));

    n.push(Node::text(label("DATE", Rect::new(32.0, 410.0, 184.0, 14.0), 10.0).bold().spacing(2.0).color(GRAY_400)));
    n.push(Node::text(label(&day_and_date(f), Rect::new(32.0, 426.0, 184.0, 24.0), 14.0).bold().color(GRAY_800).max_lines(1)));
    n.push(Node::text(label("HIJRI & BANGLA", Rect::new(32.0, 458.0, 184.0, 14.0), 10.0).bold().spacing(2.0).color(GRAY_400)));
    n.push(Node::text(label(&f.dates.hijri, Rect::new(32.0, 474.0, 184.0, 20.0), 13.0).color(GRAY_600).max_lines(1)));
    n.push(Node::text(label(&f.dates.bengali, Rect::new(32.0, 494.0, 184.0, 20.0), 13.0).color(GRAY_600).max_lines(1)));

    n.push(brand_br(scene, 32.0 + 160.0 * 0.75, 568.0, 0.75, BrandVariant::Colored));
    n.push(Node::text(
        label(credit(f), Rect::new(260.0, 560.0, 316.0, 24.0), 10.0)
            .color(Color::WHITE.alpha(0.6))
            .align(Align::End)
            .valign(VAlign::Middle),
    ));
    n
}

pub fn gradient(f: &MorningFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = backdrop(f, scene, GRAY_900, 1.0);
    n.push(Node::rect(scene.full(), Color::BLACK.alpha(0.3)));
    n.extend(
        Pill::new(Color::BLACK.alpha(0.4), Color::WHITE.alpha(0.8), 10.0)
            .pad(10.0, 4.0)
            .at(568.0, 32.0, Align::End, credit(f)),
    );

    let card = Rect::new(24.0, 330.0, 552.0, 246.0);
    n.push(Node::rounded(card, Color::hex(0x1a1a1a).alpha(0.9), 20.0));
    n.push(Node::rect(Rect::new(44.0, 330.0, 512.0, 4.0), BK_GREEN));

    n.push(Node::circle(72.0, 378.0, 20.0, BK_RED));
    n.push(Node::circle(72.0, 378.0, 8.0, Color::WHITE));
    n.push(Node::text(label(GREETING, Rect::new(104.0, 356.0, 440.0, 46.0), 36.0).bold().color(Color::WHITE).valign(VAlign::Middle).line_height(1.2)));
    n.push(Node::text(
        label(caption(f), Rect::new(48.0, 416.0, 504.0, 84.0), 18.0)
            .color(GRAY_300)
            .line_height(1.5)
            .max_lines(3),
    ));

    n.push(Node::line((48.0, 510.0), (552.0, 510.0), Color::WHITE.alpha(0.1), 1.0));
    n.push(Node::text(label(&day_and_date(f), Rect::new(48.0, 520.0, 300.0, 22.0), 14.0).bold().family(OSWALD).color(Color::WHITE).max_lines(1)));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(48.0, 544.0, 300.0, 20.0), 12.0)
            .color(GRAY_400)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 552.0, 564.0, 0.75, BrandVariant::White));
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{templates_for, Category};
    use crate::fields::{CardFields, DailyDates};
    use crate::templates::{render, RenderContext};

    fn fields() -> MorningFields {
        MorningFields {
            caption: "শুভ সকাল বন্ধুরা".into(),
            dates: DailyDates {
                day_name: "শনিবার".into(),
                gregorian: "২৯ নভেম্বর ২০২৫".into(),
                bengali: "১৪ অগ্রহায়ণ ১৪৩২".into(),
                hijri: "৭ জমাদিউস সানি ১৪৪৭".into(),
            },
            image_credit: None,
            images: vec!["sunrise.jpg".into()],
        }
    }

    #[test]
    fn every_design_shows_greeting_caption_and_dates() {
        let f = CardFields::Morning(fields());
        for t in templates_for(Category::Morning) {
            let card = render(&f, t.id, None, &RenderContext::new(""));
            assert!(card.contains_text(GREETING), "{}", t.id);
            assert!(card.contains_text("শুভ সকাল বন্ধুরা"), "{}", t.id);
            assert!(card.contains_text("শনিবার"), "{}", t.id);
            assert!(card.contains_text("৭ জমাদিউস সানি ১৪৪৭"), "{}", t.id);
            assert!(card.contains_text("ছবি: সংগৃহীত"), "{}", t.id);
        }
    }

    #[test]
    fn blank_caption_uses_first_default() {
        let f = MorningFields::default();
        assert_eq!(caption(&f), DEFAULT_CAPTIONS[0]);
        let f = MorningFields { image_credit: Some("ছবি: রাফি".into()), ..fields() };
        assert_eq!(credit(&f), "ছবি: রাফি");
    }
}
