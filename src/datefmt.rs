//! Bengali date strings for date pills and daily cards.

use chrono::{Datelike, NaiveDate, Weekday};

const DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const MONTHS: [&str; 12] = [
    "জানুয়ারী",
    "ফেব্রুয়ারী",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

/// Replace ASCII digits with Bengali digits, leaving everything else as is.
pub fn bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Weekday name, e.g. `শনিবার`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "রবিবার",
        Weekday::Mon => "সোমবার",
        Weekday::Tue => "মঙ্গলবার",
        Weekday::Wed => "বুধবার",
        Weekday::Thu => "বৃহস্পতিবার",
        Weekday::Fri => "শুক্রবার",
        Weekday::Sat => "শনিবার",
    }
}

/// Long Gregorian date, e.g. `২৯ নভেম্বর ২০২৫`.
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        bengali_digits(&date.day().to_string()),
        MONTHS[date.month0() as usize],
        bengali_digits(&date.year().to_string())
    )
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_date() {
        let d = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
        assert_eq!(long_date(d), "২৯ নভেম্বর ২০২৫");
        assert_eq!(day_name(d.weekday()), "শনিবার");
    }

    #[test]
    fn converts_only_digits() {
        assert_eq!(bengali_digits("5:10 am"), "৫:১০ am");
    }
}
