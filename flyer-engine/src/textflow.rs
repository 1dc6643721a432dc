//! Character-budget text layout.
//!
//! Line breaks are decided by counting characters against a budget
//! derived from the available width and an average glyph width per
//! font weight, not by measuring glyphs. The width factors are fixed
//! so that line breaks stay stable across releases.

use flyer_pdf::BuiltinFont;

/// Ellipsis appended by [`shorten`].
pub const ELLIPSIS: &str = "…";

/// Markers that turn a free-text line into a bullet.
pub const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Average glyph width as a fraction of the font size.
pub fn width_factor(font: BuiltinFont) -> f64 {
    match font {
        BuiltinFont::HelveticaBold => 0.5,
        BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => 0.45,
        BuiltinFont::ZapfDingbats => 0.8,
    }
}

/// Character budget of a line `width` points wide. Never below 1.
pub fn max_chars_for(width: f64, font_size: f64, font: BuiltinFont) -> usize {
    let budget = width / (font_size * width_factor(font));
    if budget.is_finite() && budget >= 1.0 {
        budget as usize
    } else {
        1
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Greedy word wrap. Whitespace runs collapse to one space and words
/// are never split: a word longer than `max_chars` gets a line of its
/// own. Blank input produces no lines.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in words(text) {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Wrap and keep at most `max_lines` lines; the rest is dropped.
pub fn wrap_capped(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, max_chars);
    lines.truncate(max_lines);
    lines
}

/// Collapse whitespace and cut the text to `max_chars`, ending in an
/// ellipsis when anything was removed. Only whole words are kept; if
/// not even the first word fits, the result is the ellipsis alone.
pub fn shorten(text: &str, max_chars: usize) -> String {
    let collapsed = words(text).collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let budget = max_chars.saturating_sub(ELLIPSIS.chars().count());
    let mut kept = String::new();
    let mut kept_len = 0;
    for word in words(text) {
        let word_len = word.chars().count();
        let needed = if kept_len == 0 { word_len } else { kept_len + 1 + word_len };
        if needed > budget {
            break;
        }
        if kept_len > 0 {
            kept.push(' ');
        }
        kept.push_str(word);
        kept_len = needed;
    }
    kept.push_str(ELLIPSIS);
    kept
}

/// One source line of free text after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLine {
    /// An empty source line; rendered as half a line of spacing.
    Blank,
    Plain(String),
    /// Bullet with its marker removed.
    Bullet(String),
}

/// Classify a trimmed free-text line. A bullet starts with one of the
/// [`BULLET_MARKERS`] followed by a space; every leading marker and
/// space is stripped.
pub fn classify_line(raw: &str) -> TextLine {
    let line = raw.trim();
    if line.is_empty() {
        return TextLine::Blank;
    }
    let mut chars = line.chars();
    let is_bullet = matches!(
        (chars.next(), chars.next()),
        (Some(marker), Some(' ')) if BULLET_MARKERS.contains(&marker)
    );
    if is_bullet {
        let body = line
            .trim_start_matches(|c: char| c == ' ' || BULLET_MARKERS.contains(&c))
            .trim();
        TextLine::Bullet(body.to_string())
    } else {
        TextLine::Plain(line.to_string())
    }
}

/// Split free text into at most `max_lines` classified source lines.
/// Leading and trailing blank lines of the whole text are ignored.
pub fn source_lines(text: &str, max_lines: usize) -> Vec<TextLine> {
    text.trim()
        .lines()
        .take(max_lines)
        .map(classify_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Hello world", 40), vec!["Hello world"]);
    }

    #[test]
    fn greedy_breaks_between_words() {
        assert_eq!(wrap("aaa bbb ccc ddd", 7), vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn long_word_is_kept_whole() {
        assert_eq!(wrap("a verylongword b", 5), vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(wrap("  one \n\t two  ", 20), vec!["one two"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn umlauts_count_as_one_char() {
        assert_eq!(wrap("Grüße für Jürgen", 10), vec!["Grüße für", "Jürgen"]);
    }

    #[test]
    fn cap_truncates_lines() {
        let lines = wrap_capped("one two three four five six", 3, 3);
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn budget_uses_weight_factor() {
        // 100 / (10 * 0.5) = 20, 100 / (10 * 0.45) = 22.2
        assert_eq!(max_chars_for(100.0, 10.0, BuiltinFont::HelveticaBold), 20);
        assert_eq!(max_chars_for(100.0, 10.0, BuiltinFont::Helvetica), 22);
        assert_eq!(max_chars_for(1.0, 10.0, BuiltinFont::Helvetica), 1);
    }

    #[test]
    fn shorten_keeps_whole_words() {
        assert_eq!(shorten("Unser Programm 2025", 20), "Unser Programm 2025");
        assert_eq!(shorten("Unser Programm 2025", 16), "Unser Programm…");
        assert_eq!(shorten("Unser Programm 2025", 10), "Unser…");
    }

    #[test]
    fn shorten_without_fitting_word_is_ellipsis() {
        assert_eq!(shorten("https://example.org/very/long", 8), "…");
    }

    #[test]
    fn classify_bullets() {
        assert_eq!(classify_line("- Buy milk"), TextLine::Bullet("Buy milk".into()));
        assert_eq!(classify_line("  * Bread"), TextLine::Bullet("Bread".into()));
        assert_eq!(classify_line("• Eggs"), TextLine::Bullet("Eggs".into()));
        assert_eq!(classify_line("- - nested"), TextLine::Bullet("nested".into()));
        assert_eq!(classify_line("Buy milk"), TextLine::Plain("Buy milk".into()));
        assert_eq!(classify_line("-no space"), TextLine::Plain("-no space".into()));
        assert_eq!(classify_line("   "), TextLine::Blank);
    }

    #[test]
    fn source_lines_caps_count() {
        let text = (0..15).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let lines = source_lines(&text, 10);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], TextLine::Plain("line 9".into()));
    }
}
