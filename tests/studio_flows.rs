use std::sync::Arc;

use bkcards::gallery::MAX_UPLOAD_BYTES;
use bkcards::rendering::raster::ResvgRasterizer;
use bkcards::storage::{FileStore, KvStore};
use bkcards::{catalog, Category, Editor, Error, StudioConfig};

fn config(dir: &std::path::Path) -> StudioConfig {
    StudioConfig {
        download_dir: dir.join("downloads"),
        store_path: Some(dir.join("store.json")),
        stock_base_url: "http://127.0.0.1:9".into(),
        load_system_fonts: false,
        ..Default::default()
    }
}

/// Width and height from a PNG's IHDR chunk.
fn png_size(data: &[u8]) -> (u32, u32) {
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    let w = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let h = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    (w, h)
}

#[test]
fn placeholder_quote_exports_portrait_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::open(config(dir.path())).unwrap();
    editor.switch_category(Category::Quote);

    let out = editor.capture().unwrap().expect("capture ran");
    let data = std::fs::read(&out.path).unwrap();
    assert_eq!(png_size(&data), (1200, 1500));
    assert!(out.path.starts_with(dir.path().join("downloads")));
    assert!(out.file_name.starts_with("bk-quote-") && out.file_name.ends_with(".png"));
}

#[test]
fn every_template_exports_at_twice_its_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KvStore> = Arc::new(bkcards::storage::MemoryStore::new());
    let mut editor = Editor::with_parts(config(dir.path()), store, Arc::new(ResvgRasterizer::new(false))).unwrap();

    for c in Category::ALL {
        editor.switch_category(c);
        for t in catalog::templates_for(c) {
            editor.select_template(t.id).unwrap();
            let out = editor.capture().unwrap().expect("capture ran");
            let size = c.canvas_size();
            assert_eq!((out.width, out.height), (size.width * 2, size.height * 2), "{}", t.id);
        }
    }
}

#[test]
fn oversized_upload_is_rejected_and_gallery_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut editor = Editor::open(config(dir.path())).unwrap();
        let big = vec![0u8; 600 * 1024];
        let err = editor.gallery_mut().add(&big, "big.jpg", Some("image/jpeg"), 1).unwrap_err();
        assert!(matches!(err, Error::SizeExceeded { limit, .. } if limit == MAX_UPLOAD_BYTES));
        assert!(editor.gallery().is_empty());

        editor.gallery_mut().add(&[1, 2, 3], "small.png", Some("image/png"), 2).unwrap();
        editor.settings_mut().set_default_template(Category::News, "bk-news-royal-green").unwrap();
    }

    let mut editor = Editor::open(config(dir.path())).unwrap();
    assert_eq!(editor.gallery().len(), 1);
    assert_eq!(editor.gallery().list()[0].name, "small.png");
    editor.switch_category(Category::News);
    assert_eq!(editor.template().id, "bk-news-royal-green");
}

#[test]
fn corrupt_store_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("store.json"), "{ not json").unwrap();
    let store = FileStore::open(dir.path().join("store.json"), None).unwrap();
    assert_eq!(store.get("bk_theme"), None);

    let editor = Editor::open(config(dir.path())).unwrap();
    assert!(editor.gallery().is_empty());
}

#[test]
fn prayer_defaults_survive_category_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::open(config(dir.path())).unwrap();
    editor.switch_category(Category::Prayer);
    assert_eq!(editor.template().id, "bk-prayer-classic");
    let card = editor.preview();
    for name in ["ফজর", "সূর্যোদয়", "জোহর", "আছর", "মাগরিব", "এশা"] {
        assert!(card.contains_text(name), "missing {}", name);
    }
    assert!(card.contains_text("ঢাকা"));
}

#[test]
fn control_characters_in_pasted_text_still_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::open(config(dir.path())).unwrap();
    if let Some(story) = editor.fields_mut().story_mut() {
        story.headline = "শিরোনাম\u{1} pasted from PDF\u{c}".to_string();
        story.body = "নাম\u{1f}, পদ".to_string();
    }
    let out = editor.capture().unwrap().expect("capture ran");
    assert_eq!((out.width, out.height), (1200, 1200));

    editor.switch_category(Category::Quote);
    editor.fields_mut().story_mut().unwrap().headline = "উক্তি\u{fffe}\u{7}".to_string();
    assert!(editor.capture().unwrap().is_some());
}
