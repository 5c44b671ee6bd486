//! Template catalog
//!
//! Every card design the studio knows about is listed once in [`TEMPLATES`].
//! A descriptor carries the template id, the category it belongs to, the
//! Bengali label shown in the picker and the layout function that composes the
//! card. Lookups by id go through a table that is built once on first use.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::templates::{hadith, morning, news, prayer, quote, Layout};
use crate::Error;

/// Content category. Each category has its own field set and template list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Quote,
    Morning,
    Prayer,
    Hadith,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::News,
        Category::Quote,
        Category::Morning,
        Category::Prayer,
        Category::Hadith,
    ];

    /// Lowercase name used in storage keys and export file names.
    pub fn slug(self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Quote => "quote",
            Category::Morning => "morning",
            Category::Prayer => "prayer",
            Category::Hadith => "hadith",
        }
    }

    /// Nominal canvas size before export scaling.
    pub fn canvas_size(self) -> CanvasSize {
        match self {
            Category::Quote => CanvasSize::new(600, 750),
            _ => CanvasSize::new(600, 600),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::NotFound(format!("category '{}'", s)))
    }
}

/// Canvas dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size after applying a device scale factor.
    pub fn scaled(self, factor: f32) -> CanvasSize {
        CanvasSize {
            width: (self.width as f32 * factor).round() as u32,
            height: (self.height as f32 * factor).round() as u32,
        }
    }
}

/// One entry of the catalog.
#[derive(Debug)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub layout: Layout,
}

const fn entry(
    id: &'static str,
    category: Category,
    label: &'static str,
    layout: Layout,
) -> TemplateDescriptor {
    TemplateDescriptor { id, category, label, layout }
}

/// All templates, grouped by category in picker order.
pub static TEMPLATES: &[TemplateDescriptor] = &[
    entry("bk-news-classic-light", Category::News, "রবি প্রাইম", Layout::Story(news::classic_light)),
    entry("bk-news-studio-dark", Category::News, "এমারল্ড স্লেট", Layout::Story(news::studio_dark)),
    entry("bk-news-corporate-dark", Category::News, "কর্পোরেট ডার্ক", Layout::Story(news::corporate_dark)),
    entry("bk-news-premium-minimal", Category::News, "প্রিমিয়াম মিনিমাল", Layout::Story(news::premium_minimal)),
    entry("bk-news-elegant-light", Category::News, "এলিগেন্ট লাইট", Layout::Story(news::elegant_light)),
    entry("bk-news-focus-red", Category::News, "ফোকাস রেড", Layout::Story(news::focus_red)),
    entry("bk-news-red-headline", Category::News, "রেড হেডলাইন", Layout::Story(news::red_headline)),
    entry("bk-news-vibrant-overlay", Category::News, "ভাইব্রেন্ট ওভারলে", Layout::Story(news::vibrant_overlay)),
    entry("bk-news-modern-card", Category::News, "মডার্ন কার্ড", Layout::Story(news::modern_card)),
    entry("bk-news-midnight-impact", Category::News, "মিডনাইট ইমপ্যাক্ট", Layout::Story(news::midnight_impact)),
    entry("bk-news-elegant-border", Category::News, "এলিগেন্ট বর্ডার", Layout::Story(news::elegant_border)),
    entry("bk-news-royal-green", Category::News, "রয়্যাল গ্রিন", Layout::Story(news::royal_green)),
    entry("bk-news-dark-studio", Category::News, "ডার্ক স্টুডিও", Layout::Story(news::dark_studio)),
    entry("bk-news-classic-center", Category::News, "ক্লাসিক সেন্টার", Layout::Story(news::classic_center)),
    entry("bk-quote-grid-classic", Category::Quote, "গ্রিড ক্লাসিক", Layout::Story(quote::grid_classic)),
    entry("bk-quote-red-split", Category::Quote, "রেড স্প্লিট", Layout::Story(quote::red_split)),
    entry("bk-quote-sidebar-green", Category::Quote, "গ্রিন সাইডবার", Layout::Story(quote::sidebar_green)),
    entry("bk-quote-glass", Category::Quote, "ডার্ক গ্লাস", Layout::Story(quote::glass)),
    entry("bk-quote-dark-vibe", Category::Quote, "ডার্ক ভাইব", Layout::Story(quote::dark_vibe)),
    entry("bk-quote-elegant-frame", Category::Quote, "এলিগেন্ট ফ্রেম", Layout::Story(quote::elegant_frame)),
    entry("bk-morning-classic", Category::Morning, "ম্যাগাজিন", Layout::Morning(morning::classic)),
    entry("bk-morning-modern", Category::Morning, "গ্লাস ফ্রস্ট", Layout::Morning(morning::modern)),
    entry("bk-morning-corporate", Category::Morning, "কর্পোরেট", Layout::Morning(morning::corporate)),
    entry("bk-morning-minimal", Category::Morning, "মিনিমাল", Layout::Morning(morning::minimal)),
    entry("bk-morning-gradient", Category::Morning, "বোল্ড", Layout::Morning(morning::gradient)),
    entry("bk-prayer-classic", Category::Prayer, "ক্লাসিক", Layout::Prayer(prayer::classic)),
    entry("bk-prayer-modern", Category::Prayer, "মডার্ন ডার্ক", Layout::Prayer(prayer::modern)),
    entry("bk-prayer-clean", Category::Prayer, "ক্লিন লিস্ট", Layout::Prayer(prayer::clean)),
    entry("bk-prayer-image", Category::Prayer, "ইমেজ ওভারলে", Layout::Prayer(prayer::image)),
    entry("bk-prayer-elegant", Category::Prayer, "এলিগেন্ট", Layout::Prayer(prayer::elegant)),
    entry("bk-hadith-classic", Category::Hadith, "ক্লাসিক", Layout::Hadith(hadith::classic)),
    entry("bk-hadith-modern", Category::Hadith, "মডার্ন", Layout::Hadith(hadith::modern)),
    entry("bk-hadith-box", Category::Hadith, "বক্স স্টাইল", Layout::Hadith(hadith::boxed)),
    entry("bk-hadith-image", Category::Hadith, "ইমেজ ওভারলে", Layout::Hadith(hadith::image)),
    entry("bk-hadith-golden", Category::Hadith, "গোল্ডেন ডার্ক", Layout::Hadith(hadith::golden)),
    entry("bk-hadith-midnight", Category::Hadith, "মিডনাইট ব্লু", Layout::Hadith(hadith::midnight)),
    entry("bk-hadith-split", Category::Hadith, "মডার্ন স্প্লিট", Layout::Hadith(hadith::split)),
    entry("bk-hadith-floral", Category::Hadith, "ফ্লোরাল মিনিমাল", Layout::Hadith(hadith::floral)),
];

fn index() -> &'static HashMap<&'static str, &'static TemplateDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static TemplateDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| TEMPLATES.iter().map(|t| (t.id, t)).collect())
}

/// Find a template by its exact id.
pub fn lookup(id: &str) -> Option<&'static TemplateDescriptor> {
    index().get(id).copied()
}

/// Templates of one category in catalog order.
pub fn templates_for(category: Category) -> impl Iterator<Item = &'static TemplateDescriptor> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// The category's default template (the first one listed).
pub fn first_template(category: Category) -> &'static TemplateDescriptor {
    // every category has at least one entry, see `every_category_has_templates`
    templates_for(category)
        .next()
        .unwrap_or(&TEMPLATES[0])
}

/// A selectable typeface for headline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub id: &'static str,
    pub name: &'static str,
    pub family: &'static str,
}

pub const DEFAULT_FONT: &str = "hind";

pub static FONT_OPTIONS: &[FontOption] = &[
    FontOption { id: "hind", name: "Hind Siliguri", family: "'Hind Siliguri', 'Noto Sans Bengali', sans-serif" },
    FontOption { id: "anek", name: "Anek Bangla", family: "'Anek Bangla', 'Noto Sans Bengali', sans-serif" },
    FontOption { id: "tiro", name: "Tiro Bangla", family: "'Tiro Bangla', 'Noto Serif Bengali', serif" },
    FontOption { id: "noto-serif", name: "Noto Serif Bengali", family: "'Noto Serif Bengali', serif" },
    FontOption { id: "noto-sans", name: "Noto Sans Bengali", family: "'Noto Sans Bengali', sans-serif" },
    FontOption { id: "baloo", name: "Baloo Da 2", family: "'Baloo Da 2', 'Noto Sans Bengali', cursive" },
    FontOption { id: "mina", name: "Mina", family: "'Mina', 'Noto Sans Bengali', sans-serif" },
    FontOption { id: "galada", name: "Galada", family: "'Galada', 'Noto Sans Bengali', cursive" },
    FontOption { id: "kalam", name: "Kalam", family: "'Kalam', 'Noto Sans Bengali', cursive" },
    FontOption { id: "merriweather", name: "Merriweather", family: "'Merriweather', 'Noto Serif Bengali', serif" },
    FontOption { id: "oswald", name: "Oswald", family: "'Oswald', 'Noto Sans Bengali', sans-serif" },
];

/// Find a font by id.
pub fn font(id: &str) -> Option<&'static FontOption> {
    FONT_OPTIONS.iter().find(|f| f.id == id)
}

/// Font family for an optional font id, falling back to the default font.
pub fn font_family(id: Option<&str>) -> &'static str {
    id.and_then(font)
        .or_else(|| font(DEFAULT_FONT))
        .map(|f| f.family)
        .unwrap_or("sans-serif")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
        assert_eq!(TEMPLATES.len(), 38);
    }

    #[test]
    fn every_category_has_templates() {
        for c in Category::ALL {
            assert!(templates_for(c).count() > 0, "{} has no templates", c);
            let prefix = format!("bk-{}-", c.slug());
            assert!(templates_for(c).all(|t| t.id.starts_with(&prefix)));
        }
    }

    #[test]
    fn layout_kind_matches_category() {
        for t in TEMPLATES {
            let ok = matches!(
                (t.category, &t.layout),
                (Category::News | Category::Quote, Layout::Story(_))
                    | (Category::Morning, Layout::Morning(_))
                    | (Category::Prayer, Layout::Prayer(_))
                    | (Category::Hadith, Layout::Hadith(_))
            );
            assert!(ok, "{} has a layout for another category", t.id);
        }
    }

    #[test]
    fn defaults_and_lookup() {
        assert_eq!(first_template(Category::Quote).id, "bk-quote-grid-classic");
        assert_eq!(first_template(Category::Prayer).id, "bk-prayer-classic");
        assert_eq!(lookup("bk-hadith-floral").map(|t| t.category), Some(Category::Hadith));
        assert!(lookup("bk-news-classic-light ").is_none());
        assert!(lookup("nope").is_none());
    }

    #[test]
    fn canvas_sizes() {
        assert_eq!(Category::Quote.canvas_size(), CanvasSize::new(600, 750));
        assert_eq!(Category::News.canvas_size().scaled(2.0), CanvasSize::new(1200, 1200));
        assert_eq!("Prayer".parse::<Category>().ok(), Some(Category::Prayer));
        assert!("weather".parse::<Category>().is_err());
    }

    #[test]
    fn font_fallback() {
        assert_eq!(FONT_OPTIONS.len(), 11);
        assert!(font_family(Some("unknown")).contains("Hind Siliguri"));
        assert!(font_family(Some("oswald")).contains("Oswald"));
    }
}
