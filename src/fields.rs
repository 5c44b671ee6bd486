//! Per-category card fields
//!
//! Field sets are plain records edited by the user. They live only in memory
//! and are reset whenever the editor switches category.

use chrono::{Datelike, NaiveDate};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::datefmt;

/// A reference to an image: a `data:` URI, an `http(s)://` URL or a local path.
pub type ImageRef = String;

/// Predefined morning captions offered by the shuffle button.
pub const DEFAULT_CAPTIONS: [&str; 10] = [
    "প্রতিটি নতুন সকাল আল্লাহর পক্ষ থেকে একটি নতুন সুযোগ। আলহামদুলিল্লাহ।",
    "ধৈর্য ধরুন, আল্লাহ উত্তম পরিকল্পনাকারী। দিনটি শুভ হোক।",
    "দিনটি শুরু হোক বিসমিল্লাহ বলে। আল্লাহ আমাদের সবাইকে হেফাজতে রাখুন।",
    "সততা ও নিষ্ঠার সাথে দিনটি অতিবাহিত করুন। সফলতা আসবেই, ইনশাআল্লাহ।",
    "আলহামদুলিল্লাহ, আরেকটি নতুন দিনের জন্য। আজকের দিনটি আপনার জন্য কল্যাণকর হোক।",
    "মানুষের সাথে হাসিমুখে কথা বলাও একটি সদকা। শুভ সকাল।",
    "বিপদ যত বড়ই হোক, আল্লাহর রহমত তার চেয়েও বড়। ভরসা রাখুন।",
    "আজকের দিনটি এমনভাবে কাটান যেন এটিই আপনার জীবনের শ্রেষ্ঠ দিন।",
    "ক্ষমা ও ভালোবাসার মাধ্যমে দিনটি শুরু করুন। মনে প্রশান্তি আসবে।",
    "রিজিকের মালিক আল্লাহ, তাই দুশ্চিন্তা না করে চেষ্টা চালিয়ে যান।",
];

pub const DEFAULT_LOCATION: &str = "ঢাকা ও পার্শ্ববর্তী এলাকা";
pub const DEFAULT_TRANSLATION: &str =
    "তোমাদের মধ্যে সর্বোত্তম ঐ ব্যক্তি যে কুরআন শিখে এবং অপরকে শিক্ষা দেয়।";
pub const DEFAULT_SOURCE: &str = "সহীহ বুখারী: ৫০২৭";

/// Pick one of the predefined morning captions at random.
pub fn random_caption() -> &'static str {
    DEFAULT_CAPTIONS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DEFAULT_CAPTIONS[0])
}

/// Fields of news and quote cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryFields {
    pub headline: String,
    pub body: String,
    pub images: Vec<ImageRef>,
    /// Font id from [`crate::catalog::FONT_OPTIONS`]
    pub font: Option<String>,
    /// Draw the speaker cut-out without a backing box (quote cards)
    pub transparent_image: bool,
    /// Long-form analysis returned by normalization; not drawn on the card
    pub caption: String,
}

impl StoryFields {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Date strings shown on daily cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyDates {
    pub day_name: String,
    pub gregorian: String,
    pub bengali: String,
    pub hijri: String,
}

impl DailyDates {
    /// Today's day name and Gregorian date plus the sample calendar dates.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            day_name: datefmt::day_name(today.weekday()).to_string(),
            gregorian: datefmt::long_date(today),
            bengali: "১৪ অগ্রহায়ণ ১৪৩২".to_string(),
            hijri: "৭ জমাদিউস সানি ১৪৪৭".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorningFields {
    pub caption: String,
    pub dates: DailyDates,
    pub image_credit: Option<String>,
    pub images: Vec<ImageRef>,
}

/// Prayer start times, as free-form display strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl PrayerTimes {
    /// Sample Dhaka timetable.
    pub fn dhaka() -> Self {
        Self {
            fajr: "৫:১০".into(),
            sunrise: "৬:২৫".into(),
            dhuhr: "১২:০৫".into(),
            asr: "৩:৪৫".into(),
            maghrib: "৫:৩৫".into(),
            isha: "৬:৫০".into(),
        }
    }

    /// `(name, time)` rows in display order. Empty times show the sample time.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        let sample = Self::dhaka();
        let pick = |v: &str, d: String| if v.trim().is_empty() { d } else { v.to_string() };
        [
            ("ফজর", pick(&self.fajr, sample.fajr)),
            ("সূর্যোদয়", pick(&self.sunrise, sample.sunrise)),
            ("জোহর", pick(&self.dhuhr, sample.dhuhr)),
            ("আছর", pick(&self.asr, sample.asr)),
            ("মাগরিব", pick(&self.maghrib, sample.maghrib)),
            ("এশা", pick(&self.isha, sample.isha)),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrayerFields {
    pub location: String,
    pub times: PrayerTimes,
    pub dates: DailyDates,
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptureKind {
    Ayah,
    #[default]
    Hadith,
}

impl ScriptureKind {
    pub fn badge(self) -> &'static str {
        match self {
            ScriptureKind::Ayah => "পবিত্র কুরআন",
            ScriptureKind::Hadith => "পবিত্র হাদীস",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ScriptureKind::Ayah => "Daily Verse",
            ScriptureKind::Hadith => "Daily Hadith",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HadithFields {
    pub kind: ScriptureKind,
    pub arabic: String,
    pub translation: String,
    pub source: String,
    pub dates: DailyDates,
    pub images: Vec<ImageRef>,
}

/// The field set of whichever category is being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CardFields {
    News(StoryFields),
    Quote(StoryFields),
    Morning(MorningFields),
    Prayer(PrayerFields),
    Hadith(HadithFields),
}

impl CardFields {
    pub fn category(&self) -> Category {
        match self {
            CardFields::News(_) => Category::News,
            CardFields::Quote(_) => Category::Quote,
            CardFields::Morning(_) => Category::Morning,
            CardFields::Prayer(_) => Category::Prayer,
            CardFields::Hadith(_) => Category::Hadith,
        }
    }

    /// Empty fields. Every template draws placeholders for them.
    pub fn empty(category: Category) -> Self {
        match category {
            Category::News => CardFields::News(StoryFields::default()),
            Category::Quote => CardFields::Quote(StoryFields {
                transparent_image: true,
                ..StoryFields::default()
            }),
            Category::Morning => CardFields::Morning(MorningFields::default()),
            Category::Prayer => CardFields::Prayer(PrayerFields::default()),
            Category::Hadith => CardFields::Hadith(HadithFields::default()),
        }
    }

    /// The defaults an editor starts with when the category is opened.
    pub fn seeded(category: Category, today: NaiveDate) -> Self {
        let dates = DailyDates::seeded(today);
        match category {
            Category::News | Category::Quote => Self::empty(category),
            Category::Morning => CardFields::Morning(MorningFields {
                caption: random_caption().to_string(),
                dates,
                ..MorningFields::default()
            }),
            Category::Prayer => CardFields::Prayer(PrayerFields {
                location: DEFAULT_LOCATION.to_string(),
                times: PrayerTimes::dhaka(),
                dates,
                images: Vec::new(),
            }),
            Category::Hadith => CardFields::Hadith(HadithFields {
                kind: ScriptureKind::Hadith,
                arabic: String::new(),
                translation: DEFAULT_TRANSLATION.to_string(),
                source: DEFAULT_SOURCE.to_string(),
                dates,
                images: Vec::new(),
            }),
        }
    }

    pub fn images(&self) -> &[ImageRef] {
        match self {
            CardFields::News(f) | CardFields::Quote(f) => &f.images,
            CardFields::Morning(f) => &f.images,
            CardFields::Prayer(f) => &f.images,
            CardFields::Hadith(f) => &f.images,
        }
    }

    pub fn images_mut(&mut self) -> &mut Vec<ImageRef> {
        match self {
            CardFields::News(f) | CardFields::Quote(f) => &mut f.images,
            CardFields::Morning(f) => &mut f.images,
            CardFields::Prayer(f) => &mut f.images,
            CardFields::Hadith(f) => &mut f.images,
        }
    }

    /// Story fields for news and quote cards.
    pub fn story_mut(&mut self) -> Option<&mut StoryFields> {
        match self {
            CardFields::News(f) | CardFields::Quote(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 29).unwrap()
    }

    #[test]
    fn empty_matches_category() {
        for c in Category::ALL {
            assert_eq!(CardFields::empty(c).category(), c);
            assert!(CardFields::empty(c).images().is_empty());
        }
        match CardFields::empty(Category::Quote) {
            CardFields::Quote(f) => assert!(f.transparent_image),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn seeded_daily_cards() {
        match CardFields::seeded(Category::Morning, day()) {
            CardFields::Morning(f) => {
                assert!(DEFAULT_CAPTIONS.contains(&f.caption.as_str()));
                assert_eq!(f.dates.day_name, "শনিবার");
                assert_eq!(f.dates.gregorian, "২৯ নভেম্বর ২০২৫");
            }
            other => panic!("unexpected {:?}", other),
        }
        match CardFields::seeded(Category::Prayer, day()) {
            CardFields::Prayer(f) => {
                assert_eq!(f.location, DEFAULT_LOCATION);
                assert_eq!(f.times.fajr, "৫:১০");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn blank_prayer_times_fall_back_to_sample() {
        let t = PrayerTimes { isha: "৭:০০".into(), ..PrayerTimes::default() };
        let rows = t.rows();
        assert_eq!(rows[0], ("ফজর", "৫:১০".to_string()));
        assert_eq!(rows[5], ("এশা", "৭:০০".to_string()));
    }

    #[test]
    fn fields_round_trip_through_json() {
        let f = CardFields::seeded(Category::Hadith, day());
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"category\":\"hadith\""));
        let back: CardFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
