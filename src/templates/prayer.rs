//! Prayer timetable cards (600×600)
//!
//! Six rows in fixed order: fajr, sunrise, dhuhr, asr, maghrib and isha.
//! Sunrise is not a prayer and is tinted orange on every design.

use super::{
    brand, brand_br, join_dates, label, or_placeholder, photo, BrandVariant, BK_GREEN, BK_RED, GRAY_100, GRAY_200,
    GRAY_400, GRAY_50, GRAY_500, GRAY_800, ORANGE_400, ORANGE_500, OSWALD, SERIF, Scene,
};
use crate::fields::{PrayerFields, DEFAULT_LOCATION};
use crate::rendering::paint::{Align, Color, GradientDir, Node, Rect, VAlign};

const SUNRISE: usize = 1;

fn location(f: &PrayerFields) -> &str {
    or_placeholder(&f.location, DEFAULT_LOCATION)
}

/// Tile tint and label colour per row.
const TILE_COLORS: [(Color, Color); 6] = [
    (Color::hex(0xeef2ff), Color::hex(0x4f46e5)),
    (Color::hex(0xfff7ed), Color::hex(0xf97316)),
    (Color::hex(0xfefce8), Color::hex(0xca8a04)),
    (Color::hex(0xfffbeb), Color::hex(0xd97706)),
    (Color::hex(0xfef2f2), Color::hex(0xef4444)),
    (Color::hex(0xf8fafc), Color::hex(0x475569)),
];

/// Cell rects of a two-column grid, row-major.
fn grid_cells(area: Rect, gap: f32) -> [Rect; 6] {
    let w = (area.width - gap) / 2.0;
    let h = (area.height - 2.0 * gap) / 3.0;
    std::array::from_fn(|i| {
        let (col, row) = ((i % 2) as f32, (i / 2) as f32);
        Rect::new(area.x + col * (w + gap), area.y + row * (h + gap), w, h)
    })
}

/// Name over time, centred in `cell`.
fn tile(cell: Rect, name: &str, time: &str, name_color: Color, time_color: Color) -> Vec<Node> {
    let mid = cell.y + cell.height / 2.0;
    vec![
        Node::text(label(name, Rect::new(cell.x, mid - 28.0, cell.width, 22.0), 15.0).bold().color(name_color).center()),
        Node::text(
            label(time, Rect::new(cell.x, mid - 4.0, cell.width, 36.0), 30.0)
                .bold()
                .family(OSWALD)
                .color(time_color)
                .center()
                .line_height(1.1),
        ),
    ]
}

pub fn classic(f: &PrayerFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![
        Node::rect(scene.full(), Color::WHITE),
        Node::rect(Rect::new(0.0, 0.0, 600.0, 110.0), BK_GREEN),
    ];
    n.push(Node::text(label("আজকের নামাজের সময়সূচি", Rect::new(32.0, 26.0, 440.0, 34.0), 24.0).bold().color(Color::WHITE)));
    n.push(Node::text(label(location(f), Rect::new(32.0, 64.0, 440.0, 22.0), 14.0).color(Color::WHITE.alpha(0.85)).max_lines(1)));
    n.push(Node::circle(536.0, 55.0, 28.0, Color::WHITE));
    n.push(Node::ring(536.0, 55.0, 16.0, BK_GREEN, 3.0));
    n.push(Node::line((536.0, 55.0), (536.0, 45.0), BK_GREEN, 3.0));
    n.push(Node::line((536.0, 55.0), (544.0, 59.0), BK_GREEN, 3.0));

    let rows = f.times.rows();
    for (i, cell) in grid_cells(Rect::new(32.0, 130.0, 536.0, 330.0), 12.0).into_iter().enumerate() {
        let (bg, accent) = TILE_COLORS[i];
        n.push(Node::rounded(cell, bg, 12.0));
        n.push(Node::rect(Rect::new(cell.x, cell.y + 12.0, 4.0, cell.height - 24.0), accent));
        n.extend(tile(cell, rows[i].0, &rows[i].1, accent, GRAY_800));
    }

    n.push(Node::rect(Rect::new(0.0, 480.0, 600.0, 114.0), GRAY_50));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], " | "), Rect::new(32.0, 500.0, 320.0, 24.0), 16.0)
            .bold()
            .color(GRAY_800)
            .max_lines(1),
    ));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(32.0, 528.0, 320.0, 22.0), 13.0)
            .color(GRAY_500)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 568.0, 558.0, 0.9, BrandVariant::Colored));
    n.push(Node::rect(Rect::new(0.0, 594.0, 600.0, 6.0), BK_RED));
    n
}

pub fn modern(f: &PrayerFields, scene: &Scene<'_>) -> Vec<Node> {
    let bg = Color::hex(0x0f172a);
    let mut n = vec![
        Node::rect(scene.full(), bg),
        Node::circle(560.0, 40.0, 180.0, BK_GREEN.alpha(0.15)),
        Node::circle(20.0, 580.0, 160.0, BK_RED.alpha(0.1)),
    ];
    n.push(Node::text(label("PRAYER SCHEDULE", Rect::new(40.0, 36.0, 300.0, 16.0), 11.0).bold().spacing(3.0).color(BK_GREEN)));
    n.push(Node::text(label("সালাতের সময়", Rect::new(40.0, 54.0, 400.0, 42.0), 30.0).bold().color(Color::WHITE)));
    n.push(Node::text(label(location(f), Rect::new(40.0, 98.0, 400.0, 20.0), 13.0).color(GRAY_400).max_lines(1)));

    let rows = f.times.rows();
    for (i, (name, time)) in rows.iter().enumerate() {
        let y = 136.0 + i as f32 * 60.0;
        let row = Rect::new(40.0, y, 520.0, 50.0);
        let active = i == 2;
        let fill = if active { BK_GREEN.alpha(0.2) } else { Color::WHITE.alpha(0.05) };
        let mut r = Node::rounded(row, fill, 12.0);
        if active {
            r = r.with_stroke(BK_GREEN.alpha(0.5), 1.0);
        }
        n.push(r);
        let name_color = if i == SUNRISE { ORANGE_400 } else { GRAY_200 };
        n.push(Node::text(label(name, Rect::new(64.0, y, 240.0, 50.0), 17.0).bold().color(name_color).valign(VAlign::Middle)));
        n.push(Node::text(
            label(time, Rect::new(300.0, y, 236.0, 50.0), 22.0)
                .bold()
                .family(OSWALD)
                .color(Color::WHITE)
                .align(Align::End)
                .valign(VAlign::Middle),
        ));
    }

    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", "), Rect::new(40.0, 508.0, 320.0, 22.0), 14.0)
            .bold()
            .color(Color::WHITE)
            .max_lines(1),
    ));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(40.0, 532.0, 320.0, 20.0), 12.0)
            .color(GRAY_400)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 560.0, 556.0, 0.75, BrandVariant::White));
    n
}

pub fn clean(f: &PrayerFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = vec![Node::rect(scene.full(), Color::WHITE)];
    n.push(Node::text(label("নামাজের সময়সূচি", Rect::new(0.0, 32.0, 600.0, 42.0), 30.0).bold().color(GRAY_800).center()));
    n.push(Node::rounded(Rect::new(276.0, 80.0, 48.0, 4.0), BK_RED, 2.0));
    n.push(Node::text(label(location(f), Rect::new(40.0, 92.0, 520.0, 22.0), 14.0).color(GRAY_500).center().max_lines(1)));

    let rows = f.times.rows();
    for (i, cell) in grid_cells(Rect::new(40.0, 132.0, 520.0, 330.0), 14.0).into_iter().enumerate() {
        n.push(Node::rounded(cell, Color::WHITE, 12.0).with_stroke(GRAY_100, 1.0));
        let name_color = if i == SUNRISE { ORANGE_500 } else { GRAY_400 };
        n.extend(tile(cell, rows[i].0, &rows[i].1, name_color, GRAY_800));
    }

    n.push(Node::rect(Rect::new(0.0, 490.0, 600.0, 110.0), GRAY_50));
    n.push(Node::line((0.0, 490.0), (600.0, 490.0), GRAY_100, 1.0));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", "), Rect::new(40.0, 512.0, 320.0, 24.0), 15.0)
            .bold()
            .color(GRAY_800)
            .max_lines(1),
    ));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(40.0, 540.0, 320.0, 22.0), 12.0)
            .color(GRAY_500)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 560.0, 566.0, 0.75, BrandVariant::Colored));
    n
}

pub fn image(f: &PrayerFields, scene: &Scene<'_>) -> Vec<Node> {
    let mut n = photo(f.images.first().map(String::as_str), scene.full(), Color::BLACK, GRAY_500, "Add Mosque Image");
    n.push(Node::gradient(scene.full(), Color::BLACK.alpha(0.4), Color::BLACK.alpha(0.9), GradientDir::Down));

    n.push(Node::text(label("নামাজের সময়", Rect::new(32.0, 32.0, 320.0, 42.0), 30.0).bold().color(Color::WHITE)));
    n.push(Node::circle(38.0, 92.0, 5.0, BK_RED));
    n.push(Node::text(label(location(f), Rect::new(50.0, 80.0, 300.0, 24.0), 14.0).color(GRAY_200).valign(VAlign::Middle).max_lines(1)));
    n.push(Node::text(label(&f.dates.day_name, Rect::new(300.0, 36.0, 268.0, 24.0), 16.0).bold().color(BK_GREEN).align(Align::End)));
    n.push(Node::text(label(&f.dates.gregorian, Rect::new(300.0, 62.0, 268.0, 22.0), 14.0).color(Color::WHITE).align(Align::End)));

    let rows = f.times.rows();
    for (i, cell) in grid_cells(Rect::new(32.0, 130.0, 536.0, 340.0), 12.0).into_iter().enumerate() {
        n.push(Node::rounded(cell, Color::WHITE.alpha(0.1), 14.0).with_stroke(Color::WHITE.alpha(0.2), 1.0));
        let name_color = if i == SUNRISE { ORANGE_400 } else { GRAY_200 };
        n.extend(tile(cell, rows[i].0, &rows[i].1, name_color, Color::WHITE));
    }

    n.push(Node::line((32.0, 500.0), (568.0, 500.0), Color::WHITE.alpha(0.2), 1.0));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " | "), Rect::new(32.0, 520.0, 320.0, 40.0), 13.0)
            .color(GRAY_200)
            .valign(VAlign::Middle)
            .max_lines(1),
    ));
    n.push(brand_br(scene, 568.0, 564.0, 0.9, BrandVariant::White));
    n
}

pub fn elegant(f: &PrayerFields, scene: &Scene<'_>) -> Vec<Node> {
    let gold = Color::hex(0xd4b996);
    let brown = Color::hex(0x5d4037);
    let cream = Color::hex(0xfcf8f3);
    let mut n = vec![Node::rect(scene.full(), Color::hex(0xfffbf2))];

    let card = Rect::new(20.0, 20.0, 560.0, 560.0);
    n.push(Node::rounded(card, Color::WHITE, 32.0).with_stroke(gold, 2.0));
    n.push(Node::rect(Rect::new(52.0, 20.0, 496.0, 6.0), gold));
    n.push(Node::rounded(Rect::new(268.0, 20.0, 64.0, 28.0), gold, 8.0));
    n.push(Node::Path {
        d: "M300 26 L303 33 L310 33 L304.5 37.5 L306.5 44 L300 40 L293.5 44 L295.5 37.5 L290 33 L297 33 Z".to_string(),
        fill: Color::WHITE,
    });

    n.push(Node::text(label("সালাতের সময়সূচি", Rect::new(20.0, 60.0, 560.0, 42.0), 30.0).bold().family(SERIF).color(brown).center()));
    n.push(Node::text(label(location(f), Rect::new(60.0, 104.0, 480.0, 22.0), 14.0).color(Color::hex(0x8d6e63)).center().max_lines(1)));

    let rows = f.times.rows();
    for (i, (name, time)) in rows.iter().enumerate() {
        let y = 140.0 + i as f32 * 54.0;
        let sunrise = i == SUNRISE;
        let (fill, name_color, time_color) = if sunrise {
            (Color::hex(0xfff7ed), Color::hex(0x9a3412), Color::hex(0xea580c))
        } else {
            (cream, brown, brown)
        };
        n.push(Node::rounded(Rect::new(52.0, y, 496.0, 46.0), fill, 10.0));
        n.push(Node::text(label(name, Rect::new(72.0, y, 140.0, 46.0), 17.0).bold().color(name_color).valign(VAlign::Middle)));
        n.push(Node::line((200.0, y + 23.0), (420.0, y + 23.0), gold.alpha(0.6), 1.0));
        n.push(Node::text(
            label(time, Rect::new(400.0, y, 128.0, 46.0), 22.0)
                .bold()
                .family(OSWALD)
                .color(time_color)
                .align(Align::End)
                .valign(VAlign::Middle),
        ));
    }

    n.push(Node::rounded(Rect::new(52.0, 476.0, 496.0, 84.0), cream, 16.0));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.day_name, &f.dates.gregorian], ", "), Rect::new(72.0, 490.0, 300.0, 24.0), 14.0)
            .bold()
            .color(brown)
            .max_lines(1),
    ));
    n.push(Node::text(
        label(&join_dates(&[&f.dates.hijri, &f.dates.bengali], " • "), Rect::new(72.0, 516.0, 300.0, 22.0), 12.0)
            .color(Color::hex(0x8d6e63))
            .max_lines(1),
    ));
    n.push(brand(scene, 528.0 - 160.0 * 0.75, 488.0, 0.75, BrandVariant::Colored));
    n
}
