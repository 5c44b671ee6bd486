/// Text layout for card text boxes
///
/// There is no shaping engine at this stage, so wrapping uses an estimated
/// glyph advance. Bengali vowel signs that sit above or below the base letter
/// and the virama take no horizontal room.

/// Average advance of one visible character, as a fraction of the font size.
pub const ADVANCE_EM: f32 = 0.55;

pub const ELLIPSIS: char = '…';

fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{0981}' | '\u{09BC}' | '\u{09C1}'..='\u{09C4}' | '\u{09CD}' | '\u{09E2}' | '\u{09E3}'
            | '\u{200C}' | '\u{200D}' | '\u{064B}'..='\u{065F}' | '\u{0670}'
    )
}

/// Estimated rendered width of `text` in pixels.
pub fn text_width(text: &str, font_size: f32, letter_spacing: f32) -> f32 {
    let visible = text.chars().filter(|c| !is_zero_width(*c)).count() as f32;
    visible * (font_size * ADVANCE_EM + letter_spacing)
}

/// Greedy word wrap. Explicit newlines start a new line; a word wider than
/// the box gets a line of its own rather than being split.
pub fn wrap_text(text: &str, box_width: f32, font_size: f32, letter_spacing: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for para in text.lines() {
        let mut cur = String::new();
        for word in para.split_whitespace() {
            if cur.is_empty() {
                cur.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", cur, word);
            if text_width(&candidate, font_size, letter_spacing) > box_width {
                lines.push(std::mem::take(&mut cur));
                cur.push_str(word);
            } else {
                cur = candidate;
            }
        }
        if !cur.is_empty() {
            lines.push(cur);
        }
    }
    lines
}

/// Keep at most `max_lines`; when lines are dropped the last kept line ends
/// with an ellipsis.
pub fn clamp_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let trimmed = last.trim_end_matches(|c: char| c.is_whitespace() || c == '.' || c == ',');
        *last = format!("{}{}", trimmed, ELLIPSIS);
    }
    lines
}

/// How many lines of `line_px` fit into `height`. Always at least one.
pub fn lines_that_fit(height: f32, line_px: f32) -> usize {
    if line_px <= 0.0 {
        return 1;
    }
    ((height + 0.5) / line_px).floor().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_width() {
        // 10 px per character at size 20 with no spacing
        let lines = wrap_text("aaaa bbbb cccc", 100.0, 20.0, 0.0);
        assert!(lines.len() >= 2);
        assert_eq!(lines.join(" "), "aaaa bbbb cccc");
    }

    #[test]
    fn long_word_is_not_split() {
        let lines = wrap_text("abcdefghijklmnopqrstuvwxyz", 50.0, 20.0, 0.0);
        assert_eq!(lines, vec!["abcdefghijklmnopqrstuvwxyz".to_string()]);
    }

    #[test]
    fn keeps_explicit_breaks() {
        let lines = wrap_text("one\ntwo", 1000.0, 10.0, 0.0);
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn clamps_with_ellipsis() {
        let lines: Vec<String> = (0..6).map(|i| format!("line {}.", i)).collect();
        let out = clamp_lines(lines.clone(), 4);
        assert_eq!(out.len(), 4);
        assert_eq!(out[3], "line 3…");
        assert_eq!(clamp_lines(lines, 6).len(), 6);
    }

    #[test]
    fn bengali_signs_take_no_room() {
        // virama and candrabindu are zero width
        assert_eq!(text_width("ল্ল", 20.0, 0.0), text_width("লল", 20.0, 0.0));
        assert!(text_width("বাঁশের", 20.0, 0.0) < text_width("বাঁশের", 20.0, 1.0));
    }

    #[test]
    fn fit_is_at_least_one_line() {
        assert_eq!(lines_that_fit(10.0, 40.0), 1);
        assert_eq!(lines_that_fit(160.0, 40.0), 4);
    }
}
