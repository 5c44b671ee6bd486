//! Process-wide preferences
//!
//! Loaded once from the key/value store when the studio starts and written
//! back on every change. Values that no longer make sense (a template of
//! another category, an unknown font) are ignored on load.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Category, FontOption, TemplateDescriptor, DEFAULT_FONT};
use crate::storage::KvStore;
use crate::{Error, Result};

pub const THEME_KEY: &str = "bk_theme";
pub const LOGO_KEY: &str = "bk_custom_logo";
pub const FONT_KEY: &str = "bk_default_font";

/// Storage key of a category's default template.
pub fn template_key(category: Category) -> String {
    format!("bk_default_template_{}", category.slug())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::NotFound(format!("theme '{}'", other))),
        }
    }
}

pub struct Settings<S> {
    store: S,
    theme: Theme,
    custom_logo: Option<String>,
    default_templates: HashMap<Category, &'static TemplateDescriptor>,
    default_font: Option<&'static FontOption>,
}

impl<S: KvStore> Settings<S> {
    pub fn load(store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let custom_logo = store.get(LOGO_KEY).filter(|v| !v.trim().is_empty());

        let mut default_templates = HashMap::new();
        for c in Category::ALL {
            let Some(id) = store.get(&template_key(c)) else { continue };
            match catalog::lookup(&id) {
                Some(t) if t.category == c => {
                    default_templates.insert(c, t);
                }
                _ => log::warn!("ignoring stored default template '{}' for {}", id, c),
            }
        }

        let default_font = store.get(FONT_KEY).and_then(|id| {
            let f = catalog::font(&id);
            if f.is_none() {
                log::warn!("ignoring unknown stored font '{}'", id);
            }
            f
        });

        Self { store, theme, custom_logo, default_templates, default_font }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Logo image drawn in place of the `bk` mark on every card.
    pub fn custom_logo(&self) -> Option<&str> {
        self.custom_logo.as_deref()
    }

    /// Set (or with `None`, reset) the custom logo.
    pub fn set_custom_logo(&mut self, logo: Option<String>) -> Result<()> {
        match logo.filter(|l| !l.trim().is_empty()) {
            Some(l) => {
                self.store.set(LOGO_KEY, &l)?;
                self.custom_logo = Some(l);
            }
            None => {
                self.store.remove(LOGO_KEY)?;
                self.custom_logo = None;
            }
        }
        Ok(())
    }

    /// Saved default template, or the category's first listed one.
    pub fn default_template(&self, category: Category) -> &'static TemplateDescriptor {
        self.default_templates
            .get(&category)
            .copied()
            .unwrap_or_else(|| catalog::first_template(category))
    }

    pub fn set_default_template(&mut self, category: Category, id: &str) -> Result<()> {
        let t = catalog::lookup(id).ok_or_else(|| Error::NotFound(format!("template '{}'", id)))?;
        if t.category != category {
            return Err(Error::CategoryMismatch { template: id.to_string(), category: category.to_string() });
        }
        self.store.set(&template_key(category), t.id)?;
        self.default_templates.insert(category, t);
        Ok(())
    }

    /// Saved default font, or Hind Siliguri.
    pub fn default_font(&self) -> &'static FontOption {
        self.default_font
            .or_else(|| catalog::font(DEFAULT_FONT))
            .unwrap_or(&catalog::FONT_OPTIONS[0])
    }

    pub fn set_default_font(&mut self, id: &str) -> Result<()> {
        let f = catalog::font(id).ok_or_else(|| Error::NotFound(format!("font '{}'", id)))?;
        self.store.set(FONT_KEY, f.id)?;
        self.default_font = Some(f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn defaults_when_store_is_empty() {
        let s = Settings::load(MemoryStore::new());
        assert_eq!(s.theme(), Theme::Dark);
        assert_eq!(s.custom_logo(), None);
        assert_eq!(s.default_template(Category::Quote).id, "bk-quote-grid-classic");
        assert_eq!(s.default_font().id, "hind");
    }

    #[test]
    fn invalid_stored_values_are_ignored() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(&template_key(Category::News), "bk-quote-glass").unwrap();
        store.set(&template_key(Category::Prayer), "bk-prayer-elegant").unwrap();
        store.set(FONT_KEY, "comic-sans").unwrap();
        let s = Settings::load(store);
        assert_eq!(s.theme(), Theme::Dark);
        assert_eq!(s.default_template(Category::News).id, "bk-news-classic-light");
        assert_eq!(s.default_template(Category::Prayer).id, "bk-prayer-elegant");
        assert_eq!(s.default_font().id, "hind");
    }

    #[test]
    fn setters_persist() {
        let store = Arc::new(MemoryStore::new());
        let mut s = Settings::load(store.clone());
        assert_eq!(s.toggle_theme().unwrap(), Theme::Light);
        s.set_custom_logo(Some("data:image/png;base64,AA==".into())).unwrap();
        s.set_default_template(Category::Hadith, "bk-hadith-golden").unwrap();
        s.set_default_font("galada").unwrap();

        let s2 = Settings::load(store.clone());
        assert_eq!(s2.theme(), Theme::Light);
        assert_eq!(s2.custom_logo(), Some("data:image/png;base64,AA=="));
        assert_eq!(s2.default_template(Category::Hadith).id, "bk-hadith-golden");
        assert_eq!(s2.default_font().id, "galada");

        s.set_custom_logo(None).unwrap();
        assert_eq!(store.get(LOGO_KEY), None);
    }

    #[test]
    fn wrong_category_template_is_rejected() {
        let mut s = Settings::load(MemoryStore::new());
        assert!(matches!(
            s.set_default_template(Category::News, "bk-morning-classic"),
            Err(Error::CategoryMismatch { .. })
        ));
        assert!(matches!(s.set_default_template(Category::News, "nope"), Err(Error::NotFound(_))));
        assert!(matches!(s.set_default_font("nope"), Err(Error::NotFound(_))));
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let mut s = Settings::load(MemoryStore::with_quota(20));
        s.set_theme(Theme::Light).unwrap();
        let huge = format!("data:image/png;base64,{}", "A".repeat(100));
        assert!(matches!(s.set_custom_logo(Some(huge)), Err(Error::QuotaExceeded(_))));
        assert_eq!(s.custom_logo(), None);
        assert_eq!(s.theme(), Theme::Light);
    }
}
