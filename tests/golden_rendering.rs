use std::fs;
use std::path::PathBuf;

use bkcards::catalog::{self, Category};
use bkcards::fields::CardFields;
use bkcards::rendering::raster::{Rasterizer, ResvgRasterizer};
use bkcards::rendering::svg::to_svg;
use bkcards::templates::{render, RenderContext};
use chrono::NaiveDate;
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Compare `digest` against the stored golden. A missing golden is recorded
/// from this run; `UPDATE_GOLDENS` rewrites existing ones.
fn check_golden(name: &str, digest: &str) {
    assert_eq!(digest.len(), 64, "{} digest is not sha256 hex", name);
    let expected_path = golden_path(name);
    let update = std::env::var("UPDATE_GOLDENS").is_ok();
    if update || !expected_path.exists() {
        fs::create_dir_all("tests/goldens/expected").expect("create goldens dir");
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("{} golden: {:?}", if update { "Updated" } else { "Recorded" }, expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "{} changed", name);
}

fn seeded_card(category: Category, template_id: &str) -> bkcards::Card {
    let day = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
    let fields = CardFields::seeded(category, day);
    render(&fields, template_id, None, &RenderContext::new("২৯ নভেম্বর ২০২৫"))
}

#[test]
fn svg_documents_match_goldens() {
    for c in Category::ALL {
        let t = catalog::first_template(c);
        // morning captions are picked at random
        if c == Category::Morning {
            continue;
        }
        let doc = to_svg(&seeded_card(c, t.id));
        check_golden(&format!("{}.svg.sha256", t.id), &hex::encode(Sha256::digest(doc.as_bytes())));
    }
}

#[test]
fn svg_is_stable_across_renders() {
    for t in catalog::TEMPLATES.iter().filter(|t| t.category != Category::Morning) {
        let a = to_svg(&seeded_card(t.category, t.id));
        let b = to_svg(&seeded_card(t.category, t.id));
        assert_eq!(a, b, "{}", t.id);
    }
}

#[test]
fn raster_of_news_card_matches_golden() {
    let card = seeded_card(Category::News, "bk-news-classic-light");
    let shot = ResvgRasterizer::new(false)
        .rasterize(&to_svg(&card), card.size, 2.0)
        .expect("rasterize");
    assert_eq!((shot.width, shot.height), (1200, 1200));
    check_golden("bk-news-classic-light.png.sha256", &shot.digest());
}

#[test]
fn recorded_golden_is_compared_on_the_next_run() {
    let name = "golden-roundtrip-check.sha256";
    let path = golden_path(name);
    let _ = fs::remove_file(&path);
    let digest = hex::encode(Sha256::digest(b"bkcards"));

    check_golden(name, &digest);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), digest);
    check_golden(name, &digest);

    let other = hex::encode(Sha256::digest(b"changed"));
    let mismatch = std::panic::catch_unwind(|| check_golden(name, &other));
    fs::remove_file(&path).unwrap();
    if std::env::var("UPDATE_GOLDENS").is_err() {
        assert!(mismatch.is_err(), "a changed digest must fail against the recorded golden");
    }
}
